//! Core plugin that sets up game states, events, and fundamental systems.

use bevy::prelude::*;

use super::ambient::*;
use super::events::*;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame) and the interaction mode
/// - Global events (TapEvent, InteractionEvent, ...)
/// - Dialogue closing and ambient animation
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()
            .init_resource::<InteractionMode>()

            // Register global events
            .add_event::<TapEvent>()
            .add_event::<InteractionEvent>()
            .add_event::<DismissDialogueEvent>()
            .add_event::<DialogueClosedEvent>()
            .add_event::<NarrativeCheckpoint>()

            .add_systems(
                Update,
                close_dialogue.run_if(in_state(GameState::InGame)),
            )

            // Ambient loops run regardless of state
            .add_systems(Update, (animate_bobs, cycle_frames));
    }
}

/// Close the open dialogue when asked to, freeing input again.
fn close_dialogue(
    mut dismissals: EventReader<DismissDialogueEvent>,
    mut mode: ResMut<InteractionMode>,
    mut closed: EventWriter<DialogueClosedEvent>,
) {
    for _ in dismissals.read() {
        let Some(kind) = mode.dialogue() else {
            continue;
        };
        info!("Closing {:?} dialogue", kind);
        *mode = InteractionMode::Free;
        closed.send(DialogueClosedEvent { kind });
    }
}
