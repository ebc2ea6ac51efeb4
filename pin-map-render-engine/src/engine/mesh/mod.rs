//! Runtime mesh construction for everything the map draws flat on the
//! ground plane.

/// Disc, label and icon mesh factories.
pub mod flat_shapes;
