use bevy::prelude::*;

use crate::engine::assets::glyph_font::GlyphFont;
use crate::engine::assets::icon_set::IconSet;

/// Central handle container for everything a descriptor requires.
///
/// Handles the descriptor does not need stay `None` and their loads
/// count as settled from the start.
#[derive(Resource, Default)]
pub struct MapAssets {
    pub ground_image: Option<Handle<Image>>,
    pub glyph_font: Option<Handle<GlyphFont>>,
    pub icon_set: Option<Handle<IconSet>>,
}
