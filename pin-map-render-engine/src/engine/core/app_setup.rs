use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::constants::render_settings::{
    BACKGROUND_COLOR, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR,
};
use crate::engine::assets::descriptor::MapDescriptor;
use crate::engine::assets::glyph_font::GlyphFont;
use crate::engine::assets::icon_set::IconSet;
use crate::engine::assets::map_assets::MapAssets;
use crate::engine::camera::map_camera::{MapCamera, camera_controller, on_viewport_resize};
use crate::engine::core::app_state::{MapState, transition_to_running};
use crate::engine::loading::asset_tracker::{start_loading, track_asset_readiness};
use crate::engine::loading::pin_spawner::create_pins_when_ready;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::animation::pulse_markers;
use crate::engine::scene::ground::{spawn_ground, spawn_lighting};
use crate::host::control::{MapCommandQueue, apply_map_commands};
use crate::tools::picking::report_pin_on_click;

/// Assemble the full viewer app for one descriptor.
pub fn create_app(descriptor: MapDescriptor, command_queue: MapCommandQueue) -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(JsonAssetPlugin::<GlyphFont>::new(&["typeface.json"]))
        .add_plugins(JsonAssetPlugin::<IconSet>::new(&["icons.json"]))
        .init_state::<MapState>()
        .insert_resource(ClearColor(BACKGROUND_COLOR.into()))
        .insert_resource(descriptor)
        .insert_resource(command_queue)
        .init_resource::<MapAssets>()
        .init_resource::<LoadingProgress>()
        .add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                track_asset_readiness,
                create_pins_when_ready,
                transition_to_running,
            )
                .chain()
                .run_if(in_state(MapState::Loading)),
        )
        .add_systems(
            Update,
            (camera_controller, on_viewport_resize, apply_map_commands),
        )
        .add_systems(
            Update,
            (report_pin_on_click, pulse_markers).run_if(in_state(MapState::Running)),
        );

    app
}

/// Camera rig, lighting and the map quad. The quad takes the ground
/// image handle immediately; the texture streams in when loaded.
fn setup(
    mut commands: Commands,
    descriptor: Res<MapDescriptor>,
    mut map_assets: ResMut<MapAssets>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    let map_camera = MapCamera::for_map(descriptor.height);
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_translation(map_camera.camera_position())
            .with_rotation(map_camera.orientation),
    ));
    commands.insert_resource(map_camera);

    spawn_lighting(&mut commands);

    let ground_image = asset_server.load(descriptor.image_path.as_str());
    info!("Loading ground image from {}", descriptor.image_path);
    map_assets.ground_image = Some(ground_image.clone());
    spawn_ground(
        &mut commands,
        &mut meshes,
        &mut materials,
        ground_image,
        descriptor.width,
        descriptor.height,
    );
}

fn create_default_plugins() -> bevy::app::PluginGroupBuilder {
    DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(create_window_config()),
            ..default()
        })
        .set(AssetPlugin {
            meta_check: AssetMetaCheck::Never,
            ..default()
        })
}

fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    let window = Window {
        canvas: Some("#map".into()),
        fit_canvas_to_parent: true,
        prevent_default_event_handling: false,
        present_mode: bevy::window::PresentMode::AutoVsync,
        ..default()
    };

    #[cfg(not(target_arch = "wasm32"))]
    let window = Window {
        present_mode: bevy::window::PresentMode::AutoVsync,
        ..default()
    };

    window
}
