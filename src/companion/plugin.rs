//! Companion plugin - timer-driven following.

use bevy::prelude::*;

use super::components::{CompanionConfig, FollowTimer};
use super::follow;
use crate::core::GameState;
use crate::player::PlayerSet;

/// Companion plugin - trails the player on its own tick.
pub struct CompanionPlugin;

impl Plugin for CompanionPlugin {
    fn build(&self, app: &mut App) {
        let config = CompanionConfig::default();
        app.insert_resource(FollowTimer::new(config.follow_interval))
            .insert_resource(config)
            .add_systems(
                Update,
                (follow::follow_player, follow::sync_companion_bob)
                    .chain()
                    .after(PlayerSet::Movement)
                    .run_if(in_state(GameState::InGame)),
            );
    }
}
