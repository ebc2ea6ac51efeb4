//! Rendering engine internals behind the public viewer surface.

/// Descriptor and document data the engine consumes.
pub mod assets;
/// Top-down camera rig and its interaction.
pub mod camera;
/// App assembly and lifecycle states.
pub mod core;
/// Startup loading pipeline.
pub mod loading;
/// Flat mesh construction.
pub mod mesh;
/// Ground, markers and animation.
pub mod scene;
