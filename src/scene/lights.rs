use bevy::prelude::*;

use crate::scene::SceneConfig;

pub struct LightsPlugin;

impl Plugin for LightsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 60.0,
            ..default()
        })
        .add_systems(Startup, spawn_key_light);
    }
}

/// Key light above and behind the camera's start pose. Shadows stay off;
/// nothing in the scene ever occludes anything else interestingly.
fn spawn_key_light(config: Res<SceneConfig>, mut commands: Commands) {
    commands.spawn((
        PointLight {
            intensity: 30_000_000.0,
            range: 800.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(config.light_position),
    ));
}
