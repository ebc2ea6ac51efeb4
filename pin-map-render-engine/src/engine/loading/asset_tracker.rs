use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::constants::render_settings::{GLYPH_FONT_PATH, ICON_SET_PATH};
use crate::engine::assets::descriptor::MapDescriptor;
use crate::engine::assets::map_assets::MapAssets;
use crate::engine::loading::progress::LoadingProgress;

/// Kick off the decoration document loads the descriptor needs.
///
/// Documents no placement uses are marked settled immediately so they
/// never gate the scene. The ground image load starts in scene setup,
/// where its handle goes straight onto the quad.
pub fn start_loading(
    descriptor: Res<MapDescriptor>,
    mut map_assets: ResMut<MapAssets>,
    mut progress: ResMut<LoadingProgress>,
    asset_server: Res<AssetServer>,
) {
    if descriptor.wants_labels() {
        map_assets.glyph_font = Some(asset_server.load(GLYPH_FONT_PATH));
        info!("Loading glyph font from {GLYPH_FONT_PATH}");
    } else {
        progress.glyph_font_settled = true;
    }

    if descriptor.wants_icons() {
        map_assets.icon_set = Some(asset_server.load(ICON_SET_PATH));
        info!("Loading icon set from {ICON_SET_PATH}");
    } else {
        progress.icon_set_settled = true;
    }
}

/// Poll every pending load until it settles, logging the outcome.
pub fn track_asset_readiness(
    mut progress: ResMut<LoadingProgress>,
    descriptor: Res<MapDescriptor>,
    map_assets: Res<MapAssets>,
    asset_server: Res<AssetServer>,
) {
    if !progress.ground_image_settled {
        if let Some(handle) = &map_assets.ground_image {
            if let Some(ok) = load_settled(&asset_server, handle) {
                progress.ground_image_settled = true;
                progress.ground_image_failed = !ok;
                if ok {
                    info!("✓ Ground image ready");
                } else {
                    warn!(
                        "Ground image {} failed to load, the map quad stays untextured",
                        descriptor.image_path
                    );
                }
            }
        }
    }

    if !progress.glyph_font_settled {
        if let Some(handle) = &map_assets.glyph_font {
            if let Some(ok) = load_settled(&asset_server, handle) {
                progress.glyph_font_settled = true;
                progress.glyph_font_failed = !ok;
                if ok {
                    info!("✓ Glyph font ready");
                } else {
                    error!("Glyph font {GLYPH_FONT_PATH} failed to load, labels will be dropped");
                }
            }
        }
    }

    if !progress.icon_set_settled {
        if let Some(handle) = &map_assets.icon_set {
            if let Some(ok) = load_settled(&asset_server, handle) {
                progress.icon_set_settled = true;
                progress.icon_set_failed = !ok;
                if ok {
                    info!("✓ Icon set ready");
                } else {
                    error!(
                        "Icon set {ICON_SET_PATH} failed to load, icon decorations will be dropped"
                    );
                }
            }
        }
    }
}

/// `Some(true)` once loaded, `Some(false)` once failed, `None` while
/// still in flight.
fn load_settled<A: Asset>(asset_server: &AssetServer, handle: &Handle<A>) -> Option<bool> {
    match asset_server.get_load_state(handle) {
        Some(LoadState::Loaded) => Some(true),
        Some(LoadState::Failed(_)) => Some(false),
        _ => None,
    }
}
