use bevy::prelude::*;
use bevy_inspector_egui::inspector_options::std_options::NumberDisplay;
use bevy_inspector_egui::prelude::*;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;

use crate::game_input::GameAction;
use crate::game_input::toggle_active;

pub struct CameraConfigPlugin;

impl Plugin for CameraConfigPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CameraConfig>()
            .init_resource::<CameraConfig>()
            .add_plugins(
                ResourceInspectorPlugin::<CameraConfig>::default()
                    .run_if(toggle_active(false, GameAction::CameraInspector)),
            );
    }
}

#[derive(Resource, Reflect, InspectorOptions, Debug, PartialEq, Clone, Copy)]
#[reflect(Resource, InspectorOptions)]
pub struct CameraConfig {
    /// Scripted-mode translation at zero scroll.
    pub base_position:  Vec3,
    /// World-space drift per unit of scroll offset. Scrolling down pulls
    /// the camera back along +Z while easing it left and slightly down.
    pub drift_per_unit: Vec3,
    /// Orbit-mode distance from the origin, pulled back far enough that the
    /// whole planet fits in view.
    #[inspector(min = 1.0, max = 500.0, display = NumberDisplay::Slider)]
    pub orbit_radius:   f32,
    /// Vertical field of view in radians.
    #[inspector(min = 0.1, max = 3.0, display = NumberDisplay::Slider)]
    pub fov:            f32,
    pub near:           f32,
    pub far:            f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            base_position:  Vec3::new(0.0, 0.0, 16.5),
            drift_per_unit: Vec3::new(-0.075, -0.002, 0.1),
            orbit_radius:   40.0,
            fov:            75_f32.to_radians(),
            near:           0.1,
            far:            1000.0,
        }
    }
}
