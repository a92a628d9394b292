//! Game state definitions that control the overall flow of the game.
//!
//! `GameState` gates which systems run at all. `InteractionMode` decides,
//! within a running world, which taps are honoured.

use bevy::prelude::*;

use super::events::DialogueKind;

/// Main game states - controls overall game flow.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Loading world data files
    #[default]
    Loading,
    /// The world is built and running
    InGame,
}

/// Which taps are currently ignored.
///
/// Every input gate of the world screen lives here, so "can the player
/// move right now" is a single match instead of a set of flags.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Taps move the player or trigger landmarks.
    #[default]
    Free,
    /// Scripted sequence running; all taps are swallowed.
    Locked,
    /// A modal panel is open; taps are swallowed until it is dismissed.
    InDialogue(DialogueKind),
}

impl InteractionMode {
    /// Whether a tap should reach the target resolver.
    pub fn accepts_taps(&self) -> bool {
        matches!(self, InteractionMode::Free)
    }

    /// The open dialogue, if any.
    pub fn dialogue(&self) -> Option<DialogueKind> {
        match self {
            InteractionMode::InDialogue(kind) => Some(*kind),
            _ => None,
        }
    }
}
