//! Fixed engine configuration shared across systems.

/// Pin categories and their visual styling table.
pub mod category;
/// Camera, scene and animation tuning values.
pub mod render_settings;
