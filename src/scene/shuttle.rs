use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::Indices;
use bevy::render::render_resource::PrimitiveTopology;

use crate::scene::SceneConfig;
use crate::schedule::UpdateSet;

pub struct ShuttlePlugin;

impl Plugin for ShuttlePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_shuttle)
            .add_systems(Update, fly_shuttle.in_set(UpdateSet::EntityUpdates));
    }
}

/// Orbit phase, advanced every frame.
#[derive(Component)]
struct Shuttle {
    angle: f32,
}

fn spawn_shuttle(
    config: Res<SceneConfig>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Shuttle { angle: 0.0 },
        Mesh3d(meshes.add(octahedron_mesh(config.shuttle_radius))),
        MeshMaterial3d(materials.add(StandardMaterial {
            // orangered
            base_color: Color::srgb(1.0, 0.27, 0.0),
            ..default()
        })),
        Transform::from_translation(orbit_position(
            config.orbit_radius,
            0.0,
            config.orbit_inclination,
        )),
    ));
}

/// Position on an inclined circular orbit. The planar circle
/// `(r sin th, r cos th, 0)` is tilted by `inclination`, and the components
/// are permuted so the pass crosses the camera's view diagonally.
pub fn orbit_position(radius: f32, angle: f32, inclination: f32) -> Vec3 {
    let x = radius * angle.sin();
    let y = radius * angle.cos();
    let z = 0.0;
    let tilted_y = y * inclination.cos() - z * inclination.sin();
    let tilted_z = y * inclination.sin() + z * inclination.cos();
    Vec3::new(tilted_y, tilted_z, x)
}

fn fly_shuttle(
    time: Res<Time>,
    config: Res<SceneConfig>,
    mut shuttles: Query<(&mut Shuttle, &mut Transform)>,
) {
    for (mut shuttle, mut transform) in &mut shuttles {
        shuttle.angle += config.orbit_speed * time.delta_secs();
        transform.translation =
            orbit_position(config.orbit_radius, shuttle.angle, config.orbit_inclination);
        transform.rotate_local_z(config.shuttle_spin * time.delta_secs());
    }
}

/// Flat-shaded octahedron: 6 corners, 8 triangular faces, vertices
/// duplicated per face so every face keeps its own normal.
pub fn octahedron_mesh(radius: f32) -> Mesh {
    const CORNERS: [Vec3; 6] = [
        Vec3::X,
        Vec3::NEG_X,
        Vec3::Y,
        Vec3::NEG_Y,
        Vec3::Z,
        Vec3::NEG_Z,
    ];
    // Counter-clockwise seen from outside.
    const FACES: [[usize; 3]; 8] = [
        [2, 4, 0],
        [2, 0, 5],
        [2, 5, 1],
        [2, 1, 4],
        [3, 0, 4],
        [3, 5, 0],
        [3, 1, 5],
        [3, 4, 1],
    ];

    let mut positions = Vec::with_capacity(24);
    let mut normals = Vec::with_capacity(24);
    let mut uvs = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(24);

    for face in FACES {
        let [a, b, c] = face.map(|i| CORNERS[i] * radius);
        let normal = (b - a).cross(c - a).normalize();
        for corner in [a, b, c] {
            indices.push(positions.len() as u32);
            positions.push(corner.to_array());
            normals.push(normal.to_array());
            uvs.push([0.5, 0.5]);
        }
    }

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
    .with_inserted_indices(Indices::U32(indices))
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;
    use std::f32::consts::FRAC_PI_4;
    use std::f32::consts::TAU;

    use bevy::render::mesh::VertexAttributeValues;

    use super::*;

    #[test]
    fn orbit_positions_lie_on_the_orbit_sphere() {
        for i in 0..32 {
            let angle = TAU * i as f32 / 32.0;
            let position = orbit_position(25.0, angle, FRAC_PI_4);
            assert!(
                (position.length() - 25.0).abs() < 1e-4,
                "angle {angle}: {position:?}"
            );
        }
    }

    #[test]
    fn zero_inclination_degenerates_to_the_permuted_plane_circle() {
        let start = orbit_position(25.0, 0.0, 0.0);
        assert!((start - Vec3::new(25.0, 0.0, 0.0)).length() < 1e-6);

        // a quarter turn later the shuttle sits fully along +z
        let quarter = orbit_position(25.0, FRAC_PI_2, 0.0);
        assert!((quarter - Vec3::new(0.0, 0.0, 25.0)).length() < 1e-4);
    }

    #[test]
    fn inclination_tilts_the_orbit_out_of_the_y_zero_plane() {
        let top = orbit_position(25.0, 0.0, FRAC_PI_4);
        assert!(top.y > 0.0);
        let bottom = orbit_position(25.0, std::f32::consts::PI, FRAC_PI_4);
        assert!(bottom.y < 0.0);
    }

    #[test]
    fn octahedron_mesh_has_eight_flat_faces() {
        let mesh = octahedron_mesh(2.0);
        let positions = mesh.attribute(Mesh::ATTRIBUTE_POSITION).unwrap();
        assert_eq!(positions.len(), 24);
        let VertexAttributeValues::Float32x3(positions) = positions else {
            panic!("positions should be Float32x3");
        };
        for position in positions {
            let distance = Vec3::from_array(*position).length();
            assert!((distance - 2.0).abs() < 1e-5);
        }
        assert_eq!(mesh.indices().map(Indices::len), Some(24));
    }
}
