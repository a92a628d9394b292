//! Audio module - music and one-shot cues tied to story beats.

mod plugin;

pub use plugin::{AudioCues, GameAudioPlugin};
