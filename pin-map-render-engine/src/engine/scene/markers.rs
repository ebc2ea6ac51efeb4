use bevy::prelude::*;
use std::collections::HashMap;

use crate::constants::category::{CategoryStyle, PinCategory, style_for};
use crate::constants::render_settings::{
    COMPASS_ICON, DECORATION_LIFT, LABEL_COLOR, MARKER_LIFT, PULSE_PERIOD_SECS,
};
use crate::engine::assets::descriptor::PinSpec;
use crate::engine::assets::glyph_font::GlyphFont;
use crate::engine::assets::icon_set::IconSet;
use crate::engine::mesh::flat_shapes::{flat_disc_mesh, icon_meshes, icon_scale, label_mesh};
use crate::engine::scene::animation::PulseAnimation;

/// Identifier picking reports. Matches the descriptor pin uuid.
#[derive(Component, Debug, Clone)]
pub struct PinId(pub String);

/// Pick footprint of a marker disc, world units.
#[derive(Component, Debug, Clone, Copy)]
pub struct MarkerDisc {
    pub radius: f32,
}

/// Tags the one icon group that follows rotate-compass commands.
#[derive(Component)]
pub struct CompassIcon;

/// Label mesh node under a marker.
#[derive(Component)]
pub struct LabelDecoration;

/// Icon group node under a marker.
#[derive(Component)]
pub struct IconDecoration;

/// Place one pin: the marker disc plus its decoration.
///
/// Static markers share one material per category; animated markers get
/// their own so the pulse never bleeds across pins. `compass_rotation`
/// is `Some` only for the descriptor's compass placement.
pub fn spawn_pin(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    shared_materials: &mut HashMap<PinCategory, Handle<StandardMaterial>>,
    pin: &PinSpec,
    size: f32,
    font: Option<&GlyphFont>,
    icons: Option<&IconSet>,
    compass_rotation: Option<f32>,
) -> Entity {
    let style = style_for(pin.category);
    let material = if pin.animated {
        materials.add(flat_material(style.fill, style.opacity))
    } else {
        shared_materials
            .entry(pin.category)
            .or_insert_with(|| materials.add(flat_material(style.fill, style.opacity)))
            .clone()
    };

    let mut marker = commands.spawn((
        Mesh3d(meshes.add(flat_disc_mesh(size))),
        MeshMaterial3d(material),
        Transform::from_xyz(pin.x, MARKER_LIFT, pin.z),
        Visibility::Visible,
        PinId(pin.uuid.clone()),
        MarkerDisc { radius: size },
    ));
    if pin.animated {
        marker.insert(PulseAnimation {
            period: PULSE_PERIOD_SECS,
            peak_alpha: style.opacity,
        });
    }

    marker.with_children(|parent| {
        if pin.is_icon() {
            spawn_icon_decoration(
                parent,
                meshes,
                materials,
                pin,
                size,
                style,
                icons,
                compass_rotation,
            );
        } else {
            spawn_label_decoration(parent, meshes, materials, pin, size, font);
        }
    });

    marker.id()
}

fn spawn_label_decoration(
    parent: &mut ChildSpawnerCommands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    pin: &PinSpec,
    size: f32,
    font: Option<&GlyphFont>,
) {
    let Some(font) = font else {
        warn!("No glyph font available, dropping label for pin {}", pin.uuid);
        return;
    };
    let Some(mesh) = label_mesh(&pin.label, font, size) else {
        warn!("Label for pin {} produced no geometry", pin.uuid);
        return;
    };

    parent.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(flat_material(LABEL_COLOR, 1.0))),
        Transform::from_xyz(0.0, DECORATION_LIFT, 0.0),
        LabelDecoration,
    ));
}

fn spawn_icon_decoration(
    parent: &mut ChildSpawnerCommands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    pin: &PinSpec,
    size: f32,
    style: &CategoryStyle,
    icons: Option<&IconSet>,
    compass_rotation: Option<f32>,
) {
    let Some(set) = icons else {
        warn!("No icon set available, dropping icon for pin {}", pin.uuid);
        return;
    };
    let Some(icon) = set.icon(COMPASS_ICON) else {
        warn!(
            "Icon set has no {COMPASS_ICON:?} entry, dropping icon for pin {}",
            pin.uuid
        );
        return;
    };

    let scale = icon_scale(icon, size);
    let material = materials.add(flat_material(style.fill, style.opacity));
    let rotation = Quat::from_rotation_y(compass_rotation.unwrap_or(0.0));

    let mut group = parent.spawn((
        Transform::from_xyz(0.0, DECORATION_LIFT, 0.0).with_rotation(rotation),
        Visibility::Visible,
        IconDecoration,
    ));
    if compass_rotation.is_some() {
        group.insert(CompassIcon);
    }
    group.with_children(|shapes| {
        for mesh in icon_meshes(icon, scale) {
            shapes.spawn((
                Mesh3d(meshes.add(mesh)),
                MeshMaterial3d(material.clone()),
                Transform::IDENTITY,
            ));
        }
    });
}

/// Unlit double-sided material for flat map geometry.
fn flat_material(fill: Srgba, opacity: f32) -> StandardMaterial {
    StandardMaterial {
        base_color: fill.with_alpha(opacity).into(),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        cull_mode: None,
        ..default()
    }
}
