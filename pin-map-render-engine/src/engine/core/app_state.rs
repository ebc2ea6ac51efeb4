use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

/// Engine lifecycle. Interaction systems only run once the scene is
/// populated.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum MapState {
    #[default]
    Loading,
    Running,
}

/// Leave the loading state once placement has happened.
pub fn transition_to_running(
    progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<MapState>>,
) {
    if progress.pins_created {
        info!("Scene ready, entering running state");
        next_state.set(MapState::Running);
    }
}
