use bevy::prelude::*;

/// Tracks which startup loads have reached a terminal state and
/// whether the scene has been populated.
///
/// A settled load either succeeded or failed; failures additionally
/// set their failed flag so placement can degrade instead of waiting.
#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub ground_image_settled: bool,
    pub ground_image_failed: bool,
    pub glyph_font_settled: bool,
    pub glyph_font_failed: bool,
    pub icon_set_settled: bool,
    pub icon_set_failed: bool,
    pub pins_created: bool,
}

impl LoadingProgress {
    /// Everything pin placement depends on has settled. The ground
    /// image is not part of this: its quad holds a streaming handle.
    pub fn decoration_assets_settled(&self) -> bool {
        self.glyph_font_settled && self.icon_set_settled
    }
}
