//! App assembly and lifecycle.

/// Plugin wiring, scene setup and window configuration.
pub mod app_setup;
/// Loading and running states.
pub mod app_state;
