//! Debug helper meshes: a ground grid and a marker for the key light.
//! Spawned hidden; orbit mode reveals them, leaving it flips them back.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::PrimitiveTopology;

use crate::mode::ViewMode;
use crate::scene::SceneConfig;

pub struct HelpersPlugin;

const GRID_EXTENT: f32 = 300.0;
const GRID_DIVISIONS: u32 = 50;
const LIGHT_MARKER_RADIUS: f32 = 1.0;

impl Plugin for HelpersPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_helpers)
            .add_systems(OnEnter(ViewMode::Orbit), show_helpers)
            .add_systems(OnExit(ViewMode::Orbit), hide_helpers);
    }
}

/// Marker for meshes that only exist to orient a debugging session.
#[derive(Component)]
pub struct DebugHelper;

fn spawn_helpers(
    config: Res<SceneConfig>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        DebugHelper,
        Mesh3d(meshes.add(grid_mesh(GRID_EXTENT, GRID_DIVISIONS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.35, 0.35, 0.35),
            unlit: true,
            ..default()
        })),
        Transform::default(),
        Visibility::Hidden,
    ));

    // small unlit ball marking where the key light sits
    commands.spawn((
        DebugHelper,
        Mesh3d(meshes.add(Sphere::new(LIGHT_MARKER_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.9, 0.4),
            unlit: true,
            ..default()
        })),
        Transform::from_translation(config.light_position),
        Visibility::Hidden,
    ));
}

fn show_helpers(mut helpers: Query<&mut Visibility, With<DebugHelper>>) {
    for mut visibility in &mut helpers {
        *visibility = ViewMode::Orbit.helper_visibility();
    }
}

fn hide_helpers(mut helpers: Query<&mut Visibility, With<DebugHelper>>) {
    for mut visibility in &mut helpers {
        *visibility = ViewMode::Scripted.helper_visibility();
    }
}

/// An XZ-plane line grid centred on the origin, as a plain line-list mesh:
/// `divisions + 1` lines in each direction.
pub fn grid_mesh(extent: f32, divisions: u32) -> Mesh {
    let half = extent / 2.0;
    let step = extent / divisions as f32;
    let vertex_count = ((divisions + 1) * 4) as usize;
    let mut positions = Vec::with_capacity(vertex_count);

    for i in 0..=divisions {
        let offset = -half + i as f32 * step;
        // one line parallel to X, one parallel to Z
        positions.push([-half, 0.0, offset]);
        positions.push([half, 0.0, offset]);
        positions.push([offset, 0.0, -half]);
        positions.push([offset, 0.0, half]);
    }

    let normals = vec![[0.0, 1.0, 0.0]; positions.len()];

    Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
}

#[cfg(test)]
mod tests {
    use bevy::state::app::StatesPlugin;

    use super::*;

    #[test]
    fn grid_mesh_has_a_line_pair_per_division_step() {
        let mesh = grid_mesh(300.0, 50);
        let positions = mesh.attribute(Mesh::ATTRIBUTE_POSITION).unwrap();
        assert_eq!(positions.len(), 51 * 4);
    }

    #[test]
    fn helpers_are_visible_exactly_in_orbit_mode() {
        let mut app = App::new();
        app.add_plugins(StatesPlugin)
            .init_state::<ViewMode>()
            .add_systems(OnEnter(ViewMode::Orbit), show_helpers)
            .add_systems(OnExit(ViewMode::Orbit), hide_helpers);
        let helper = app
            .world_mut()
            .spawn((DebugHelper, Visibility::Hidden))
            .id();
        app.update();

        for (mode, expected) in [
            (ViewMode::Orbit, Visibility::Visible),
            (ViewMode::Scripted, Visibility::Hidden),
            (ViewMode::Orbit, Visibility::Visible),
        ] {
            app.world_mut()
                .resource_mut::<NextState<ViewMode>>()
                .set(mode);
            app.update();
            assert_eq!(
                app.world().entity(helper).get::<Visibility>().copied(),
                Some(expected)
            );
            assert_eq!(mode.helper_visibility(), expected);
        }
    }
}
