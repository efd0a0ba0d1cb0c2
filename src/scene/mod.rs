mod backdrop;
mod config;
mod lights;
mod planet;
mod shuttle;
mod stars;
mod texture;

use bevy::prelude::*;

use backdrop::BackdropPlugin;
pub use config::SceneConfig;
use config::SceneConfigPlugin;
use lights::LightsPlugin;
use planet::PlanetPlugin;
use shuttle::ShuttlePlugin;
use stars::StarsPlugin;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(SceneConfigPlugin)
            .add_plugins(BackdropPlugin)
            .add_plugins(LightsPlugin)
            .add_plugins(PlanetPlugin)
            .add_plugins(ShuttlePlugin)
            .add_plugins(StarsPlugin);
    }
}
