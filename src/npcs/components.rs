//! NPC components and greeting tuning.

use bevy::prelude::*;

use crate::core::LandmarkKind;

/// A character standing in the world. The kind doubles as its landmark kind.
#[derive(Component, Debug, Clone, Copy)]
pub struct Npc {
    pub kind: LandmarkKind,
}

/// Tuning for the farmer's welcome on entering the world.
#[derive(Resource, Debug, Clone)]
pub struct GreetingConfig {
    /// Seconds before the farmer starts walking over
    pub delay: f32,
    /// Where the farmer stops, in tiles from the player
    pub stand_offset: Vec2,
    /// Seconds of talking before the dialogue opens
    pub talk_duration: f32,
    /// Talking bob: amplitude, half period
    pub talk_bob: (f32, f32),
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            delay: 1.0,
            stand_offset: Vec2::new(2.5, 0.0),
            talk_duration: 1.2,
            talk_bob: (2.0, 0.15),
        }
    }
}

/// Progress of the greeting. Input stays locked until it opens the dialogue.
#[derive(Resource, Debug)]
pub enum FarmerGreeting {
    Waiting(Timer),
    Walking,
    Talking(Timer),
    Done,
}

impl FarmerGreeting {
    pub fn new(config: &GreetingConfig) -> Self {
        Self::Waiting(Timer::from_seconds(config.delay, TimerMode::Once))
    }
}
