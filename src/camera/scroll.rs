use bevy::input::mouse::MouseScrollUnit;
use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;

use crate::camera::CameraConfig;
use crate::camera::SceneCamera;
use crate::mode::ViewMode;
use crate::schedule::UpdateSet;
use crate::settings::AppSettings;

pub struct ScrollPlugin;

impl Plugin for ScrollPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ScrollOffset>()
            .init_resource::<ScrollOffset>()
            .add_systems(Update, accumulate_scroll.in_set(UpdateSet::UserInput))
            .add_systems(
                Update,
                apply_scroll_drift
                    .run_if(in_state(ViewMode::Scripted))
                    .in_set(UpdateSet::CameraMovement),
            );
    }
}

/// Accumulated scroll in pixel units, positive when scrolled down.
/// Deliberately unclamped: there is no page bottom out here, so the camera
/// can be driven arbitrarily far.
#[derive(Resource, Reflect, Debug, Default, Clone, Copy, PartialEq)]
#[reflect(Resource)]
pub struct ScrollOffset(pub f32);

fn accumulate_scroll(
    mut wheel_events: EventReader<MouseWheel>,
    settings: Res<AppSettings>,
    mut offset: ResMut<ScrollOffset>,
) {
    for event in wheel_events.read() {
        let pixels = match event.unit {
            MouseScrollUnit::Line => event.y * settings.input.line_scroll_pixels,
            MouseScrollUnit::Pixel => event.y,
        };
        // Wheel-down reports negative y but moves the page content up,
        // i.e. the offset grows.
        offset.0 -= pixels;
    }
}

/// Scripted-mode camera translation for a given scroll offset.
pub fn scripted_translation(config: &CameraConfig, offset: f32) -> Vec3 {
    config.base_position + config.drift_per_unit * offset
}

/// Drives the camera along its scroll rails. The rotation is pinned to
/// identity (facing straight down -Z) rather than look-at-origin, so the
/// planet does not re-center itself while the camera drifts past it.
fn apply_scroll_drift(
    config: Res<CameraConfig>,
    offset: Res<ScrollOffset>,
    mut camera: Query<&mut Transform, With<SceneCamera>>,
) {
    let Ok(mut transform) = camera.single_mut() else {
        return;
    };
    transform.translation = scripted_translation(&config, offset.0);
    transform.rotation = Quat::IDENTITY;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_offset_sits_at_base() {
        let config = CameraConfig::default();
        assert_eq!(scripted_translation(&config, 0.0), config.base_position);
    }

    #[test]
    fn translation_is_monotonic_along_each_drift_axis() {
        let config = CameraConfig::default();
        let offsets = [-500.0, -1.0, 0.0, 3.5, 120.0, 4000.0];
        for pair in offsets.windows(2) {
            let (s1, s2) = (pair[0], pair[1]);
            let p1 = scripted_translation(&config, s1);
            let p2 = scripted_translation(&config, s2);
            for axis in 0..3 {
                let drift = config.drift_per_unit[axis];
                let delta = p2[axis] - p1[axis];
                if drift > 0.0 {
                    assert!(delta > 0.0, "axis {axis} should grow from {s1} to {s2}");
                } else if drift < 0.0 {
                    assert!(delta < 0.0, "axis {axis} should shrink from {s1} to {s2}");
                } else {
                    assert_eq!(delta, 0.0);
                }
            }
        }
    }

    #[test]
    fn drift_is_linear_in_the_offset() {
        let config = CameraConfig::default();
        let p = scripted_translation(&config, 100.0);
        assert_eq!(p, config.base_position + config.drift_per_unit * 100.0);
        // scrolling down pulls the camera back and eases it left
        assert!(p.z > config.base_position.z);
        assert!(p.x < config.base_position.x);
    }
}
