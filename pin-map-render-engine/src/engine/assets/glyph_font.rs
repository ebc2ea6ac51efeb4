use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::engine::assets::outline::Outline;

/// Filled outline geometry for one glyph plus its advance width,
/// both in font units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Glyph {
    pub advance: f32,
    pub outlines: Vec<Outline>,
}

/// JSON outline font used to build label meshes.
///
/// Loaded through the JSON asset loader from `*.typeface.json` files.
/// Glyphs the document does not carry are skipped at mesh build time.
#[derive(Asset, TypePath, Debug, Clone, Serialize, Deserialize)]
pub struct GlyphFont {
    pub units_per_em: f32,
    pub glyphs: HashMap<char, Glyph>,
}

impl GlyphFont {
    pub fn glyph(&self, character: char) -> Option<&Glyph> {
        self.glyphs.get(&character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_typeface_json() {
        let document = r#"{
            "units_per_em": 1000.0,
            "glyphs": {
                "A": {
                    "advance": 700.0,
                    "outlines": [
                        { "outer": [[0.0, 0.0], [600.0, 0.0], [300.0, 700.0]] }
                    ]
                }
            }
        }"#;
        let font: GlyphFont = serde_json::from_str(document).expect("valid typeface document");
        assert_eq!(font.units_per_em, 1000.0);
        let glyph = font.glyph('A').expect("glyph A present");
        assert_eq!(glyph.advance, 700.0);
        assert!(glyph.outlines[0].holes.is_empty());
        assert!(font.glyph('B').is_none());
    }
}
