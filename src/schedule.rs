use bevy::prelude::*;

/// System sets for the `Update` schedule, chained so scroll and key input
/// land before mode changes, and mode changes land before the camera moves.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum UpdateSet {
    UserInput,
    ModeChanges,
    CameraMovement,
    EntityUpdates,
}

pub struct SchedulePlugin;

impl Plugin for SchedulePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                UpdateSet::UserInput,
                UpdateSet::ModeChanges,
                UpdateSet::CameraMovement,
                UpdateSet::EntityUpdates,
            )
                .chain(),
        );
    }
}
