//! Global events used for cross-system communication.
//!
//! Taps come in from the input layer, interactions and checkpoints go out
//! to the presentation layer. Nothing here carries more payload than the
//! receiving system needs to decide what happened.

use bevy::prelude::*;

/// Something in the world the player can tap to interact with.
///
/// Declaration order is the hit-test priority: when hit regions overlap,
/// the earlier variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Deserialize)]
pub enum LandmarkKind {
    Factory,
    Farmer,
    Antagonist,
    Market,
}

impl LandmarkKind {
    /// The modal panel this landmark opens.
    pub fn dialogue(self) -> DialogueKind {
        match self {
            LandmarkKind::Factory => DialogueKind::Factory,
            LandmarkKind::Farmer => DialogueKind::Farmer,
            LandmarkKind::Antagonist => DialogueKind::Antagonist,
            LandmarkKind::Market => DialogueKind::Shop,
        }
    }
}

/// Which modal panel is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogueKind {
    Farmer,
    Factory,
    Antagonist,
    Shop,
}

/// Sent for every discrete tap on the screen.
#[derive(Event, Debug, Clone, Copy)]
pub struct TapEvent {
    /// Screen coordinate, origin top-left, y down.
    pub screen: Vec2,
}

/// Sent when a landmark interaction fires (player tapped it while close).
#[derive(Event, Debug, Clone, Copy)]
pub struct InteractionEvent {
    pub landmark: LandmarkKind,
}

/// Request to close whatever dialogue is open.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct DismissDialogueEvent;

/// Sent after a dialogue has actually been closed.
#[derive(Event, Debug, Clone, Copy)]
pub struct DialogueClosedEvent {
    pub kind: DialogueKind,
}

/// Fixed story beats other systems (audio) hook into.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrativeCheckpoint {
    /// The world has been built and the chapter begins.
    ChapterStarted,
    /// The factory started producing eggs.
    ProductionStarted,
}
