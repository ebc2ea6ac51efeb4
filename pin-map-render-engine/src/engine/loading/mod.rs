//! Startup pipeline that loads the decoration documents and populates
//! the scene in one pass once every required load settles.

/// Load kickoff and per-asset readiness polling.
pub mod asset_tracker;
/// One-shot pin placement once loads settle.
pub mod pin_spawner;
/// Settled and created flags the pipeline advances on.
pub mod progress;
