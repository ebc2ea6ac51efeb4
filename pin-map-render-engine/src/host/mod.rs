//! The surface embedding hosts talk to while a viewer runs.

/// Command handle and its engine-side queue.
pub mod control;
