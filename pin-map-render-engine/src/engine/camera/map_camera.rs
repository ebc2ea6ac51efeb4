use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::{CursorMoved, WindowResized};

use crate::constants::render_settings::{CAMERA_START_PULLBACK, MIN_ZOOM_DISTANCE, ZOOM_STEP};

/// Top-down camera rig above the map.
///
/// The orientation is fixed at startup and never rotated; interaction
/// only moves the ground target and the distance to it.
#[derive(Resource, Debug)]
pub struct MapCamera {
    /// Ground point the camera hangs above.
    pub target: Vec3,
    /// Distance from the target along the fixed view direction.
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Fixed tilt looking at the map from above.
    pub orientation: Quat,
    pub last_cursor_pos: Vec2,
    /// Ground point grabbed when a pan began.
    pub pan_anchor: Option<Vec3>,
}

impl MapCamera {
    /// Rig for a map of the given height: spawn pose above the centre,
    /// pulled slightly forward, dolly range scaled to the map.
    pub fn for_map(map_height: f32) -> Self {
        let start = Vec3::new(0.0, map_height, CAMERA_START_PULLBACK);
        let orientation = Transform::from_translation(start)
            .looking_at(Vec3::ZERO, Vec3::Y)
            .rotation;

        Self {
            target: Vec3::ZERO,
            distance: start.length(),
            min_distance: MIN_ZOOM_DISTANCE,
            max_distance: map_height.max(MIN_ZOOM_DISTANCE),
            orientation,
            last_cursor_pos: Vec2::ZERO,
            pan_anchor: None,
        }
    }

    /// World translation for the current target and distance.
    pub fn camera_position(&self) -> Vec3 {
        self.target + self.orientation * Vec3::Z * self.distance
    }
}

/// Zoom about a fixed ground point so that point keeps its place under
/// the cursor. Ratio below one zooms in.
pub fn zoom_about_point(target: Vec3, distance: f32, focus: Vec3, ratio: f32) -> (Vec3, f32) {
    (focus + (target - focus) * ratio, distance * ratio)
}

/// Clamped distance ratio for an accumulated scroll amount.
pub fn zoom_ratio(distance: f32, scroll: f32, min: f32, max: f32) -> f32 {
    let desired = distance * (1.0 - scroll * ZOOM_STEP);
    desired.clamp(min, max) / distance
}

/// Ray intersection with the ground plane at y = 0.
pub fn flat_plane_intersection(ray: &Ray3d) -> Option<Vec3> {
    let direction = ray.direction.as_vec3();
    if direction.y.abs() < 0.001 {
        return None;
    }
    let t = -ray.origin.y / direction.y;
    if t <= 0.0 {
        return None;
    }
    Some(ray.origin + direction * t)
}

/// Ground point currently under a viewport position.
pub fn mouse_to_ground_plane(
    cursor_pos: Vec2,
    camera: &Camera,
    camera_transform: &GlobalTransform,
) -> Option<Vec3> {
    let ray = camera.viewport_to_world(camera_transform, cursor_pos).ok()?;
    flat_plane_intersection(&ray)
}

/// Left-drag pans by keeping the grabbed ground point under the
/// cursor; the wheel dollies toward the cursor's ground point.
pub fn camera_controller(
    mut camera_query: Query<(&mut Transform, &GlobalTransform, &Camera), With<Camera3d>>,
    mut map_camera: ResMut<MapCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    mut cursor_moved: EventReader<CursorMoved>,
) {
    let Ok((mut camera_transform, global_transform, camera)) = camera_query.single_mut() else {
        return;
    };

    for cursor in cursor_moved.read() {
        map_camera.last_cursor_pos = cursor.position;
    }
    let mouse_delta: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();

    if mouse_button.pressed(MouseButton::Left) {
        let cursor = map_camera.last_cursor_pos;
        if map_camera.pan_anchor.is_none() {
            map_camera.pan_anchor = mouse_to_ground_plane(cursor, camera, global_transform);
        }
        if mouse_delta != Vec2::ZERO {
            if let (Some(anchor), Some(current)) = (
                map_camera.pan_anchor,
                mouse_to_ground_plane(cursor, camera, global_transform),
            ) {
                let shift = anchor - current;
                map_camera.target += Vec3::new(shift.x, 0.0, shift.z);
            }
        }
    } else {
        map_camera.pan_anchor = None;
    }

    let mut scroll_accum = 0.0;
    for scroll in scroll_events.read() {
        scroll_accum += match scroll.unit {
            MouseScrollUnit::Line => scroll.y * 1.0,
            MouseScrollUnit::Pixel => scroll.y * 0.05,
        };
    }
    if scroll_accum.abs() > f32::EPSILON {
        let ratio = zoom_ratio(
            map_camera.distance,
            scroll_accum,
            map_camera.min_distance,
            map_camera.max_distance,
        );
        // Without a ground point under the cursor, dolly straight in.
        let focus = mouse_to_ground_plane(map_camera.last_cursor_pos, camera, global_transform)
            .unwrap_or(map_camera.target);
        let (target, distance) =
            zoom_about_point(map_camera.target, map_camera.distance, focus, ratio);
        map_camera.target = target;
        map_camera.distance = distance;
    }

    camera_transform.translation = map_camera.camera_position();
    camera_transform.rotation = map_camera.orientation;
}

/// Track the window surface, skipping the zero-sized reports some
/// platforms emit while minimised.
pub fn on_viewport_resize(
    mut resize_events: EventReader<WindowResized>,
    mut projections: Query<&mut Projection, With<Camera3d>>,
) {
    for event in resize_events.read() {
        if event.width <= 0.0 || event.height <= 0.0 {
            continue;
        }
        for mut projection in &mut projections {
            if let Projection::Perspective(perspective) = projection.as_mut() {
                perspective.aspect_ratio = event.width / event.height;
            }
        }
    }
}
