use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::engine::assets::outline::Outline;

/// One named vector icon: a group of flat shapes plus the nominal box
/// the shapes are authored in, used for centering and scaling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Icon {
    pub nominal_size: [f32; 2],
    pub outlines: Vec<Outline>,
}

/// JSON vector icon collection, loaded from `*.icons.json` files.
#[derive(Asset, TypePath, Debug, Clone, Serialize, Deserialize)]
pub struct IconSet {
    pub icons: HashMap<String, Icon>,
}

impl IconSet {
    pub fn icon(&self, name: &str) -> Option<&Icon> {
        self.icons.get(name)
    }
}
