//! Data the engine consumes: the host descriptor and the JSON
//! documents behind labels and icons.

/// Host-facing map description and its validation.
pub mod descriptor;
/// Outline font documents for label text.
pub mod glyph_font;
/// Vector icon documents for iconic pins and the compass.
pub mod icon_set;
/// Handle container tracking everything a scene loads.
pub mod map_assets;
/// Filled outline shape shared by fonts and icons.
pub mod outline;
