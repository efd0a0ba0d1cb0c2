use bevy::prelude::*;
use rand::Rng;
use rand::prelude::ThreadRng;

use crate::scene::SceneConfig;

pub struct StarsPlugin;

impl Plugin for StarsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_stars);
    }
}

#[derive(Component)]
struct Star;

/// Spawn stars with all components at once to avoid archetype changes after
/// spawn. One shared unit-sphere mesh, scaled per star.
fn spawn_stars(
    config: Res<SceneConfig>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    debug!("spawning {} stars", config.star_count);
    let mesh = meshes.add(Sphere::new(1.0));
    let mut rng = rand::rng();

    for _ in 0..config.star_count {
        let material = materials.add(StandardMaterial {
            emissive: star_emissive(&mut rng),
            ..default()
        });
        commands.spawn((
            Star,
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material),
            Transform {
                translation: star_position(config.star_spread, &mut rng),
                scale: Vec3::splat(config.star_radius),
                ..default()
            },
        ));
    }
}

/// Uniform position inside a cube of the configured edge length. A cube
/// rather than a shell: the camera lives near the middle, and from there
/// the corners are invisible.
fn star_position(spread: f32, rng: &mut ThreadRng) -> Vec3 {
    let half = spread / 2.0;
    Vec3::new(
        rng.random_range(-half..half),
        rng.random_range(-half..half),
        rng.random_range(-half..half),
    )
}

/// White with a little brightness scatter so bloom picks out a few stars.
fn star_emissive(rng: &mut impl Rng) -> LinearRgba {
    let brightness = rng.random_range(1.5..4.0);
    LinearRgba::rgb(brightness, brightness, brightness)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_positions_stay_inside_the_spread_cube() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let position = star_position(400.0, &mut rng);
            assert!(position.abs().max_element() <= 200.0);
        }
    }

    #[test]
    fn star_emissive_is_a_bloomable_grey() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let emissive = star_emissive(&mut rng);
            assert_eq!(emissive.red, emissive.green);
            assert!(emissive.red >= 1.5 && emissive.red < 4.0);
        }
    }
}
