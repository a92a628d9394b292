//! Audio plugin - plays cues for narrative checkpoints.

use bevy::prelude::*;
use bevy_kira_audio::{Audio, AudioControl, AudioPlugin as KiraAudioPlugin};

use crate::core::{GameState, NarrativeCheckpoint};

/// Asset paths for each cue.
#[derive(Resource, Debug, Clone)]
pub struct AudioCues {
    /// Looped while the chapter runs
    pub chapter_music: String,
    /// Played once when production starts
    pub production_started: String,
}

impl Default for AudioCues {
    fn default() -> Self {
        Self {
            chapter_music: "audio/chapter_theme.wav".to_string(),
            production_started: "audio/production_start.wav".to_string(),
        }
    }
}

impl AudioCues {
    /// Asset path and whether it loops.
    pub fn cue_for(&self, checkpoint: NarrativeCheckpoint) -> (&str, bool) {
        match checkpoint {
            NarrativeCheckpoint::ChapterStarted => (self.chapter_music.as_str(), true),
            NarrativeCheckpoint::ProductionStarted => (self.production_started.as_str(), false),
        }
    }
}

/// Audio plugin - wraps the kira backend.
pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(KiraAudioPlugin)
            .init_resource::<AudioCues>()
            .add_systems(Update, play_checkpoint_cues.run_if(in_state(GameState::InGame)))
            .add_systems(OnExit(GameState::InGame), stop_audio);
    }
}

fn play_checkpoint_cues(
    mut checkpoints: EventReader<NarrativeCheckpoint>,
    cues: Res<AudioCues>,
    asset_server: Res<AssetServer>,
    audio: Res<Audio>,
) {
    for checkpoint in checkpoints.read() {
        let (path, looped) = cues.cue_for(*checkpoint);
        debug!("Playing {} for {:?}", path, checkpoint);
        let mut command = audio.play(asset_server.load(path.to_string()));
        if looped {
            command.looped();
        }
    }
}

fn stop_audio(audio: Res<Audio>) {
    audio.stop();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_chapter_music_loops() {
        let cues = AudioCues::default();
        assert!(cues.cue_for(NarrativeCheckpoint::ChapterStarted).1);
        assert!(!cues.cue_for(NarrativeCheckpoint::ProductionStarted).1);
    }

    #[test]
    fn test_default_cues_ship_with_assets() {
        let assets = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        let cues = AudioCues::default();
        for checkpoint in [NarrativeCheckpoint::ChapterStarted, NarrativeCheckpoint::ProductionStarted] {
            let (path, _) = cues.cue_for(checkpoint);
            assert!(assets.join(path).is_file(), "missing {path}");
        }
    }
}
