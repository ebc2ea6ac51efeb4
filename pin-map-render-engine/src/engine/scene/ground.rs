use bevy::prelude::*;

use crate::constants::render_settings::{
    AMBIENT_BRIGHTNESS, AMBIENT_LIGHT_COLOR, DIRECTIONAL_LIGHT_LUX, FILL_LIGHT_COLOR,
    KEY_LIGHT_COLOR,
};

/// Marks the textured map quad.
#[derive(Component)]
pub struct GroundPlane;

/// Spawn the map quad with the ground texture handle.
///
/// The material is unlit so the image renders exactly as authored; the
/// texture streams in whenever its load completes.
pub fn spawn_ground(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    image: Handle<Image>,
    width: f32,
    height: f32,
) {
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(image),
        unlit: true,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(width, height))),
        MeshMaterial3d(material),
        Transform::IDENTITY,
        Visibility::Visible,
        GroundPlane,
    ));
}

/// Key and fill directional pair plus ambient, kept for any future
/// lit geometry. The map itself renders unlit.
pub fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            color: KEY_LIGHT_COLOR.into(),
            illuminance: DIRECTIONAL_LIGHT_LUX,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(1.0, 1.0, 1.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            color: FILL_LIGHT_COLOR.into(),
            illuminance: DIRECTIONAL_LIGHT_LUX,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(-1.0, -1.0, -1.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: AMBIENT_LIGHT_COLOR.into(),
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });
}
