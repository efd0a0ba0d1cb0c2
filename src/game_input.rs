use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(InputManagerPlugin::<GameAction>::default())
            .init_resource::<ActionState<GameAction>>()
            .insert_resource(GameAction::input_map());
    }
}

/// Keyboard chords for the mode and inspector toggles. Everything hangs off
/// shift so plain typing can never flip a mode by accident.
#[derive(Actionlike, Clone, Copy, Debug, Eq, Hash, PartialEq, Reflect)]
pub enum GameAction {
    /// Shift+D - swap between the scripted scroll camera and orbit mode
    ToggleDebug,
    /// Shift+C - camera config inspector
    CameraInspector,
    /// Shift+X - scene config inspector
    SceneInspector,
}

impl GameAction {
    fn input_map() -> InputMap<Self> {
        let mut map = InputMap::default();
        for (action, key) in [
            (Self::ToggleDebug, KeyCode::KeyD),
            (Self::CameraInspector, KeyCode::KeyC),
            (Self::SceneInspector, KeyCode::KeyX),
        ] {
            map = map
                .with(action, ButtonlikeChord::new([KeyCode::ShiftLeft, key]))
                .with(action, ButtonlikeChord::new([KeyCode::ShiftRight, key]));
        }
        map
    }
}

/// Run condition: the action was pressed this frame.
pub fn just_pressed(action: GameAction) -> impl Fn(Res<ActionState<GameAction>>) -> bool + Clone {
    move |action_state: Res<ActionState<GameAction>>| action_state.just_pressed(&action)
}

/// Run condition that flips between on and off each time the action is
/// pressed, starting from `default`. Gates the egui inspectors.
pub fn toggle_active(
    default: bool,
    action: GameAction,
) -> impl FnMut(Res<ActionState<GameAction>>, Local<Option<bool>>) -> bool + Clone {
    move |action_state: Res<ActionState<GameAction>>, mut active: Local<Option<bool>>| {
        let state = active.get_or_insert(default);
        if action_state.just_pressed(&action) {
            *state = !*state;
        }
        *state
    }
}
