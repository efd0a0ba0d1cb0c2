//! stardrift - a scroll-driven space scene built with Bevy
//!
//! A small flythrough featuring:
//! - A camera whose translation is an affine function of accumulated scroll
//! - A Shift+D debug mode that swaps in a pan-orbit camera and reveals helpers
//! - A procedural gas giant, a 700-star field and a nebula backdrop

mod camera;
mod game_input;
mod helpers;
mod mode;
mod scene;
mod schedule;
mod settings;

use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_inspector_egui::bevy_egui::EguiPlugin;

use crate::camera::CameraPlugin;
use crate::game_input::InputPlugin;
use crate::helpers::HelpersPlugin;
use crate::mode::ModePlugin;
use crate::scene::ScenePlugin;
use crate::schedule::SchedulePlugin;
use crate::settings::AppSettings;

fn main() {
    let settings = AppSettings::load();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "stardrift".to_string(),
                resolution: WindowResolution::new(settings.window.width, settings.window.height),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        })
        .insert_resource(settings)
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins((
            CameraPlugin,
            HelpersPlugin,
            InputPlugin,
            ModePlugin,
            ScenePlugin,
            SchedulePlugin,
        ))
        .run();
}
