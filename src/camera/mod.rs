mod config;
mod rig;
mod scroll;

use bevy::prelude::*;

pub use config::CameraConfig;
use config::CameraConfigPlugin;
use rig::RigPlugin;
pub use rig::SceneCamera;
pub use scroll::ScrollOffset;
use scroll::ScrollPlugin;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(CameraConfigPlugin)
            .add_plugins(RigPlugin)
            .add_plugins(ScrollPlugin);
    }
}
