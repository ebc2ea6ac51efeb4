//! Pointer interaction with the populated scene.

/// Click-to-select ray casting against marker discs.
pub mod picking;
