use bevy::core_pipeline::bloom::Bloom;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;
use bevy_panorbit_camera::PanOrbitCameraPlugin;

use crate::camera::CameraConfig;
use crate::camera::ScrollOffset;
use crate::camera::scroll::scripted_translation;
use crate::mode::ViewMode;

pub struct RigPlugin;

impl Plugin for RigPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PanOrbitCameraPlugin)
            .add_systems(Startup, spawn_camera)
            .add_systems(OnEnter(ViewMode::Orbit), enter_orbit_mode)
            .add_systems(OnExit(ViewMode::Orbit), leave_orbit_mode);
    }
}

/// Marker for the one scene camera.
#[derive(Component)]
pub struct SceneCamera;

// Hdr so the emissive stars feed bloom; TonyMcMapface keeps the planet's
// blues from clipping.
fn spawn_camera(config: Res<CameraConfig>, mut commands: Commands) {
    commands.spawn((
        SceneCamera,
        Camera3d::default(),
        Camera {
            hdr: true,
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: config.fov,
            near: config.near,
            far: config.far,
            ..default()
        }),
        Transform::from_translation(config.base_position),
        Tonemapping::TonyMcMapface,
        Bloom::NATURAL,
    ));
}

/// Orbit mode hands the camera to `bevy_panorbit_camera`: attach the
/// controller aimed at the origin from the configured debug distance.
fn enter_orbit_mode(
    config: Res<CameraConfig>,
    mut commands: Commands,
    camera: Query<Entity, With<SceneCamera>>,
) {
    let Ok(entity) = camera.single() else {
        return;
    };
    debug!("attaching orbit controller at radius {}", config.orbit_radius);
    commands.entity(entity).insert(PanOrbitCamera {
        focus: Vec3::ZERO,
        radius: Some(config.orbit_radius),
        yaw: Some(0.0),
        pitch: Some(0.0),
        ..default()
    });
}

/// Back on the rails: drop the controller and restore the scripted pose for
/// the scroll offset we left behind, so a double toggle is a no-op.
fn leave_orbit_mode(
    config: Res<CameraConfig>,
    offset: Res<ScrollOffset>,
    mut commands: Commands,
    mut camera: Query<(Entity, &mut Transform), With<SceneCamera>>,
) {
    let Ok((entity, mut transform)) = camera.single_mut() else {
        return;
    };
    debug!("back to scripted pose at scroll offset {}", offset.0);
    commands.entity(entity).remove::<PanOrbitCamera>();
    transform.translation = scripted_translation(&config, offset.0);
    transform.rotation = Quat::IDENTITY;
}

#[cfg(test)]
mod tests {
    use bevy::state::app::StatesPlugin;

    use super::*;

    fn test_app() -> (App, Entity) {
        let mut app = App::new();
        app.add_plugins(StatesPlugin)
            .init_state::<ViewMode>()
            .init_resource::<CameraConfig>()
            .init_resource::<ScrollOffset>()
            .add_systems(OnEnter(ViewMode::Orbit), enter_orbit_mode)
            .add_systems(OnExit(ViewMode::Orbit), leave_orbit_mode);
        let base = CameraConfig::default().base_position;
        let entity = app
            .world_mut()
            .spawn((SceneCamera, Transform::from_translation(base)))
            .id();
        app.update();
        (app, entity)
    }

    fn set_mode(app: &mut App, mode: ViewMode) {
        app.world_mut()
            .resource_mut::<NextState<ViewMode>>()
            .set(mode);
        app.update();
    }

    #[test]
    fn orbit_mode_attaches_and_detaches_the_controller() {
        let (mut app, camera) = test_app();
        assert!(!app.world().entity(camera).contains::<PanOrbitCamera>());

        set_mode(&mut app, ViewMode::Orbit);
        assert!(app.world().entity(camera).contains::<PanOrbitCamera>());

        set_mode(&mut app, ViewMode::Scripted);
        assert!(!app.world().entity(camera).contains::<PanOrbitCamera>());
    }

    #[test]
    fn double_toggle_restores_the_scripted_pose() {
        let (mut app, camera) = test_app();
        app.world_mut().resource_mut::<ScrollOffset>().0 = 250.0;

        let config = *app.world().resource::<CameraConfig>();
        let expected = scripted_translation(&config, 250.0);
        app.world_mut()
            .entity_mut(camera)
            .get_mut::<Transform>()
            .unwrap()
            .translation = expected;

        set_mode(&mut app, ViewMode::Orbit);
        set_mode(&mut app, ViewMode::Scripted);

        let transform = app.world().entity(camera).get::<Transform>().unwrap();
        assert_eq!(transform.translation, expected);
        assert_eq!(transform.rotation, Quat::IDENTITY);
    }
}
