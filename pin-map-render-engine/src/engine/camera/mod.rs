//! Top-down map camera: fixed tilt, ground-anchored panning and
//! cursor-centred zoom.

/// Camera rig resource and its interaction systems.
pub mod map_camera;
