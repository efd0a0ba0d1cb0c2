use bevy::prelude::*;

use crate::scene::SceneConfig;
use crate::scene::texture::nebula_texture;
use crate::schedule::UpdateSet;

pub struct BackdropPlugin;

const NEBULA_TEXTURE_SEED: u32 = 42;

impl Plugin for BackdropPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_backdrop)
            .add_systems(Update, drift_backdrop.in_set(UpdateSet::EntityUpdates));
    }
}

#[derive(Component)]
struct Backdrop;

/// The sky is the inside of a big unlit sphere. Culling is disabled so the
/// inward faces draw; everything else sits well inside the radius.
fn spawn_backdrop(
    config: Res<SceneConfig>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
) {
    let sky = images.add(nebula_texture(NEBULA_TEXTURE_SEED, 1024, 512));
    commands.spawn((
        Backdrop,
        Mesh3d(meshes.add(Sphere::new(config.backdrop_radius).mesh().uv(60, 40))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(sky),
            unlit: true,
            cull_mode: None,
            ..default()
        })),
        Transform::default(),
    ));
}

/// Barely-perceptible drift on all three axes, just enough that the sky
/// never reads as a still photograph.
fn drift_backdrop(
    time: Res<Time>,
    config: Res<SceneConfig>,
    mut backdrops: Query<&mut Transform, With<Backdrop>>,
) {
    let step = config.backdrop_drift * time.delta_secs();
    for mut transform in &mut backdrops {
        transform.rotate_x(step);
        transform.rotate_y(step);
        transform.rotate_z(step);
    }
}
