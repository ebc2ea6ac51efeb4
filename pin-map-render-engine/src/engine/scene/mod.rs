//! World content: the textured ground quad, pin markers with their
//! decorations, and the marker pulse animation.

/// Opacity pulse for animated markers.
pub mod animation;
/// Map quad and scene lighting.
pub mod ground;
/// Marker discs, labels, icons and their components.
pub mod markers;
