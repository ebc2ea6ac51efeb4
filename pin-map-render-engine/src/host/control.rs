use bevy::prelude::*;
use bevy::window::RequestRedraw;
use std::sync::{Arc, Mutex};

use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::markers::CompassIcon;

/// Commands a host can issue to a running viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapCommand {
    /// Set the compass icon to an absolute in-plane angle, radians.
    RotateCompass { angle_radians: f32 },
    /// Stop the frame loop and tear the viewer down.
    Shutdown,
}

/// Queue shared between the handle and the engine, drained once per
/// frame on the engine side.
#[derive(Resource, Default, Clone)]
pub struct MapCommandQueue(pub Arc<Mutex<Vec<MapCommand>>>);

/// Host-side remote for a viewer. Cheap to clone; commands issued
/// after shutdown are silently dropped with the queue.
#[derive(Debug, Clone)]
pub struct ControlHandle {
    queue: Arc<Mutex<Vec<MapCommand>>>,
}

impl ControlHandle {
    /// Handle plus the engine-side queue resource it feeds.
    pub(crate) fn new() -> (Self, MapCommandQueue) {
        let queue = Arc::new(Mutex::new(Vec::new()));
        (Self { queue: queue.clone() }, MapCommandQueue(queue))
    }

    /// Point the compass at an absolute angle in radians. Repeating an
    /// angle leaves the compass where it is; every call still redraws.
    pub fn rotate_compass(&self, angle_radians: f32) {
        self.push(MapCommand::RotateCompass { angle_radians });
    }

    /// Request viewer teardown.
    pub fn shutdown(&self) {
        self.push(MapCommand::Shutdown);
    }

    fn push(&self, command: MapCommand) {
        if let Ok(mut pending) = self.queue.lock() {
            pending.push(command);
        }
    }
}

/// Drain and apply queued host commands.
///
/// Rotations target the compass entity, which exists only once the
/// scene is populated; until then they stay queued. Shutdown is
/// honoured at any time. Each applied rotation schedules exactly one
/// redraw so hosts driving an on-demand loop see their update.
pub fn apply_map_commands(
    queue: Res<MapCommandQueue>,
    progress: Res<LoadingProgress>,
    mut compasses: Query<&mut Transform, With<CompassIcon>>,
    mut redraws: EventWriter<RequestRedraw>,
    mut exits: EventWriter<AppExit>,
) {
    let Ok(mut pending) = queue.0.lock() else {
        return;
    };

    if !progress.pins_created {
        if pending.iter().any(|command| *command == MapCommand::Shutdown) {
            pending.clear();
            exits.write(AppExit::Success);
        }
        return;
    }

    for command in std::mem::take(&mut *pending) {
        match command {
            MapCommand::RotateCompass { angle_radians } => {
                for mut transform in &mut compasses {
                    transform.rotation = Quat::from_rotation_y(angle_radians);
                }
                redraws.write(RequestRedraw);
            }
            MapCommand::Shutdown => {
                exits.write(AppExit::Success);
            }
        }
    }
}
