use bevy::prelude::*;
use std::collections::HashMap;

use crate::engine::assets::descriptor::MapDescriptor;
use crate::engine::assets::glyph_font::GlyphFont;
use crate::engine::assets::icon_set::IconSet;
use crate::engine::assets::map_assets::MapAssets;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::markers::spawn_pin;

/// Populate the scene once every decoration document has settled.
///
/// Runs exactly once: placement is gated on the settled flags and
/// latched by `pins_created`. Failed documents resolve to `None` here,
/// which the spawn path degrades around pin by pin.
pub fn create_pins_when_ready(
    mut progress: ResMut<LoadingProgress>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    descriptor: Res<MapDescriptor>,
    map_assets: Res<MapAssets>,
    fonts: Res<Assets<GlyphFont>>,
    icon_sets: Res<Assets<IconSet>>,
) {
    if progress.pins_created || !progress.decoration_assets_settled() {
        return;
    }

    let font = map_assets
        .glyph_font
        .as_ref()
        .and_then(|handle| fonts.get(handle));
    let icons = map_assets
        .icon_set
        .as_ref()
        .and_then(|handle| icon_sets.get(handle));

    let mut shared_materials = HashMap::new();
    let mut placed = 0_usize;

    for pin in &descriptor.pins {
        spawn_pin(
            &mut commands,
            &mut meshes,
            &mut materials,
            &mut shared_materials,
            pin,
            descriptor.resolved_size(pin),
            font,
            icons,
            None,
        );
        placed += 1;
    }

    if let Some(compass) = &descriptor.compass {
        spawn_pin(
            &mut commands,
            &mut meshes,
            &mut materials,
            &mut shared_materials,
            &compass.pin,
            descriptor.resolved_size(&compass.pin),
            font,
            icons,
            Some(compass.initial_rotation),
        );
        placed += 1;
    }

    progress.pins_created = true;
    info!("✓ Placed {placed} pins");
}
