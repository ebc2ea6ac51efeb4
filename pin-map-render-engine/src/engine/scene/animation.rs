use bevy::color::Alpha;
use bevy::prelude::*;

/// Marker material opacity pulse.
#[derive(Component, Debug, Clone, Copy)]
pub struct PulseAnimation {
    /// Seconds per full cycle.
    pub period: f32,
    /// Alpha at the top of the pulse.
    pub peak_alpha: f32,
}

/// Triangle wave over one pulse cycle: 1 at phase zero, 0 at the half
/// period, back to 1 at the full period.
pub fn pulse_factor(elapsed: f32, period: f32) -> f32 {
    let phase = (elapsed / period).fract();
    (1.0 - 2.0 * phase).abs()
}

/// Drive the opacity of every animated marker from elapsed time.
///
/// Animated markers own their material, so writing the alpha here
/// never affects the shared category materials.
pub fn pulse_markers(
    time: Res<Time>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    pulses: Query<(&PulseAnimation, &MeshMaterial3d<StandardMaterial>)>,
) {
    let elapsed = time.elapsed_secs();
    for (pulse, material_handle) in &pulses {
        if let Some(material) = materials.get_mut(&material_handle.0) {
            let alpha = pulse.peak_alpha * pulse_factor(elapsed, pulse.period);
            material.base_color.set_alpha(alpha);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bevy::ecs::system::RunSystemOnce;
    use std::time::Duration;

    #[test]
    fn pulse_factor_traces_a_triangle_wave() {
        assert_relative_eq!(pulse_factor(0.0, 2.0), 1.0);
        assert_relative_eq!(pulse_factor(0.5, 2.0), 0.5);
        assert_relative_eq!(pulse_factor(1.0, 2.0), 0.0);
        assert_relative_eq!(pulse_factor(1.5, 2.0), 0.5);
        assert_relative_eq!(pulse_factor(2.0, 2.0), 1.0);
        assert_relative_eq!(pulse_factor(5.0, 2.0), 0.0);
    }

    #[test]
    fn pulse_writes_material_alpha_from_elapsed_time() {
        let mut world = World::new();
        let mut time: Time = Time::default();
        time.advance_by(Duration::from_millis(500));
        world.insert_resource(time);

        let mut materials = Assets::<StandardMaterial>::default();
        let handle = materials.add(StandardMaterial::default());
        world.insert_resource(materials);

        world.spawn((
            PulseAnimation {
                period: 2.0,
                peak_alpha: 0.8,
            },
            MeshMaterial3d(handle.clone()),
        ));

        world
            .run_system_once(pulse_markers)
            .expect("pulse system runs");

        let materials = world.resource::<Assets<StandardMaterial>>();
        let alpha = materials
            .get(&handle)
            .expect("material still present")
            .base_color
            .alpha();
        assert_relative_eq!(alpha, 0.8 * 0.5, epsilon = 1e-5);
    }
}
