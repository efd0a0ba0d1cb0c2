use bevy::prelude::*;
use bevy_inspector_egui::inspector_options::std_options::NumberDisplay;
use bevy_inspector_egui::prelude::*;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;

use crate::game_input::GameAction;
use crate::game_input::toggle_active;

pub struct SceneConfigPlugin;

impl Plugin for SceneConfigPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SceneConfig>()
            .init_resource::<SceneConfig>()
            .add_plugins(
                ResourceInspectorPlugin::<SceneConfig>::default()
                    .run_if(toggle_active(false, GameAction::SceneInspector)),
            );
    }
}

/// Scene population and animation rates. All rates are radians per second.
#[derive(Resource, Reflect, InspectorOptions, Debug, PartialEq, Clone)]
#[reflect(Resource, InspectorOptions)]
pub struct SceneConfig {
    #[inspector(min = 0, max = 5000)]
    pub star_count:        usize,
    /// Edge length of the cube the stars are scattered through.
    pub star_spread:       f32,
    pub star_radius:       f32,
    pub planet_radius:     f32,
    #[inspector(min = 0.0, max = 10.0, display = NumberDisplay::Slider)]
    pub planet_spin:       f32,
    pub shuttle_radius:    f32,
    pub orbit_radius:      f32,
    #[inspector(min = 0.0, max = 10.0, display = NumberDisplay::Slider)]
    pub orbit_speed:       f32,
    /// Orbit plane tilt in radians.
    pub orbit_inclination: f32,
    pub shuttle_spin:      f32,
    pub backdrop_radius:   f32,
    pub backdrop_drift:    f32,
    pub light_position:    Vec3,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            star_count:        700,
            star_spread:       400.0,
            star_radius:       0.25,
            planet_radius:     15.0,
            planet_spin:       0.6,
            shuttle_radius:    2.0,
            orbit_radius:      25.0,
            orbit_speed:       1.2,
            orbit_inclination: std::f32::consts::FRAC_PI_4,
            shuttle_spin:      1.2,
            backdrop_radius:   300.0,
            backdrop_drift:    0.0042,
            light_position:    Vec3::new(7.0, 15.0, 20.0),
        }
    }
}
