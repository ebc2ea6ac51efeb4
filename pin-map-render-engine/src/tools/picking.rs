use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::engine::assets::descriptor::MapDescriptor;
use crate::engine::scene::markers::{MarkerDisc, PinId};

// Disc intersection in the marker's horizontal plane. Returns the ray
// parameter of the hit, or None when the ray misses.
pub fn ray_hits_disc(origin: Vec3, direction: Vec3, centre: Vec3, radius: f32) -> Option<f32> {
    if direction.y.abs() < 0.001 {
        return None;
    }
    let t = (centre.y - origin.y) / direction.y;
    if t <= 0.0 {
        return None;
    }
    let hit = origin + direction * t;
    let dx = hit.x - centre.x;
    let dz = hit.z - centre.z;
    (dx * dx + dz * dz <= radius * radius).then_some(t)
}

// Nearest marker along the ray. Only marker discs participate;
// decorations carry no identifier and are never pickable.
pub fn nearest_pin_hit<'a>(
    origin: Vec3,
    direction: Vec3,
    candidates: impl Iterator<Item = (&'a PinId, Vec3, f32)>,
) -> Option<(&'a PinId, f32)> {
    let mut best: Option<(&PinId, f32)> = None;
    for (id, centre, radius) in candidates {
        if let Some(t) = ray_hits_disc(origin, direction, centre, radius) {
            if best.is_none() || t < best.unwrap().1 {
                best = Some((id, t));
            }
        }
    }
    best
}

/// Resolve a left click to the nearest marker under the cursor and
/// report its identifier. A miss reports nothing; it is not an error.
pub fn report_pin_on_click(
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    markers: Query<(&PinId, &GlobalTransform, &MarkerDisc)>,
    descriptor: Res<MapDescriptor>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };
    let Ok((camera_transform, camera)) = cameras.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor_pos) else {
        return;
    };

    let hit = nearest_pin_hit(
        ray.origin,
        ray.direction.as_vec3(),
        markers
            .iter()
            .map(|(id, transform, disc)| (id, transform.translation(), disc.radius)),
    );

    if let Some((id, _)) = hit {
        debug!("Picked pin {}", id.0);
        descriptor.selection_sink.report(&id.0);
    }
}
