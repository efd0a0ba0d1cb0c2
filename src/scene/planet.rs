use bevy::prelude::*;

use crate::scene::SceneConfig;
use crate::scene::texture::planet_texture;
use crate::schedule::UpdateSet;

pub struct PlanetPlugin;

const PLANET_TEXTURE_SEED: u32 = 8;

impl Plugin for PlanetPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_planet)
            .add_systems(Update, spin_planet.in_set(UpdateSet::EntityUpdates));
    }
}

#[derive(Component)]
struct Planet;

fn spawn_planet(
    config: Res<SceneConfig>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
) {
    let albedo = images.add(planet_texture(PLANET_TEXTURE_SEED, 512, 256));
    commands.spawn((
        Planet,
        Mesh3d(meshes.add(Sphere::new(config.planet_radius).mesh().uv(64, 32))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(albedo),
            perceptual_roughness: 0.9,
            metallic: 0.0,
            ..default()
        })),
        Transform::default(),
    ));
}

fn spin_planet(
    time: Res<Time>,
    config: Res<SceneConfig>,
    mut planet: Query<&mut Transform, With<Planet>>,
) {
    for mut transform in &mut planet {
        transform.rotate_y(config.planet_spin * time.delta_secs());
    }
}
