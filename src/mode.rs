use bevy::dev_tools::states::log_transitions;
use bevy::prelude::*;

use crate::game_input::GameAction;
use crate::game_input::just_pressed;
use crate::schedule::UpdateSet;

pub struct ModePlugin;

impl Plugin for ModePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<ViewMode>()
            .add_systems(
                Update,
                toggle_view_mode
                    .run_if(just_pressed(GameAction::ToggleDebug))
                    .in_set(UpdateSet::ModeChanges),
            )
            .add_systems(Update, log_transitions::<ViewMode>);
    }
}

/// The two interaction modes. `Scripted` rides the scroll rails; `Orbit` is
/// the debug mode where the pan-orbit controller owns the camera and the
/// helper meshes are visible. One trigger, two states, nothing in between.
#[derive(States, Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Reflect)]
pub enum ViewMode {
    #[default]
    Scripted,
    Orbit,
}

impl ViewMode {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Scripted => Self::Orbit,
            Self::Orbit => Self::Scripted,
        }
    }

    /// Helper meshes are visible exactly when the camera is not scripted.
    pub const fn helper_visibility(self) -> Visibility {
        match self {
            Self::Scripted => Visibility::Hidden,
            Self::Orbit => Visibility::Visible,
        }
    }
}

fn toggle_view_mode(state: Res<State<ViewMode>>, mut next_mode: ResMut<NextState<ViewMode>>) {
    next_mode.set(state.get().toggled());
}

#[cfg(test)]
mod tests {
    use bevy::state::app::StatesPlugin;

    use super::*;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(StatesPlugin).init_state::<ViewMode>();
        app.update();
        app
    }

    fn current_mode(app: &App) -> ViewMode {
        *app.world().resource::<State<ViewMode>>().get()
    }

    fn set_mode(app: &mut App, mode: ViewMode) {
        app.world_mut()
            .resource_mut::<NextState<ViewMode>>()
            .set(mode);
        app.update();
    }

    #[test]
    fn starts_in_scripted_mode() {
        let app = test_app();
        assert_eq!(current_mode(&app), ViewMode::Scripted);
    }

    #[test]
    fn toggling_twice_round_trips() {
        for start in [ViewMode::Scripted, ViewMode::Orbit] {
            assert_eq!(start.toggled().toggled(), start);
        }
    }

    #[test]
    fn helper_visibility_negates_scripted() {
        assert_eq!(ViewMode::Scripted.helper_visibility(), Visibility::Hidden);
        assert_eq!(ViewMode::Orbit.helper_visibility(), Visibility::Visible);
    }

    #[test]
    fn state_transitions_apply_on_update() {
        let mut app = test_app();
        set_mode(&mut app, ViewMode::Orbit);
        assert_eq!(current_mode(&app), ViewMode::Orbit);
        set_mode(&mut app, ViewMode::Scripted);
        assert_eq!(current_mode(&app), ViewMode::Scripted);
    }
}
