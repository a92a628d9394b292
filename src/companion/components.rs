//! Companion components and tuning.

use bevy::prelude::*;

/// Marker for the chick that trails the player.
#[derive(Component)]
pub struct Companion;

/// Animation state of the companion.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompanionState {
    /// Closing in on its spot behind the player.
    Walking,
    /// Close enough; pecking in place.
    #[default]
    Idling,
}

/// Tuning for the pursuit controller.
#[derive(Resource, Debug, Clone)]
pub struct CompanionConfig {
    /// Seconds between pursuit ticks
    pub follow_interval: f32,
    /// How far behind the player the companion wants to be, in pixels
    pub trail_distance: f32,
    /// (distance above which, gain) pairs, checked in order
    pub gain_bands: Vec<(f32, f32)>,
    /// Gain when no band matches
    pub base_gain: f32,
    /// Below this distance the companion idles
    pub arrive_threshold: f32,
    /// Spawn position relative to the player
    pub spawn_offset: Vec2,
    /// Bob while walking: amplitude, half period
    pub walk_bob: (f32, f32),
    /// Bob while idling: amplitude, half period
    pub idle_bob: (f32, f32),
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            follow_interval: 0.016,
            trail_distance: 60.0,
            gain_bands: vec![(200.0, 0.3), (100.0, 0.2)],
            base_gain: 0.1,
            arrive_threshold: 3.0,
            spawn_offset: Vec2::new(-20.0, 10.0),
            walk_bob: (2.0, 0.15),
            idle_bob: (1.0, 0.8),
        }
    }
}

impl CompanionConfig {
    /// Gain for the remaining distance.
    pub fn gain(&self, distance: f32) -> f32 {
        self.gain_bands
            .iter()
            .find(|(above, _)| distance > *above)
            .map_or(self.base_gain, |(_, gain)| *gain)
    }

    pub fn bob_for(&self, state: CompanionState) -> (f32, f32) {
        match state {
            CompanionState::Walking => self.walk_bob,
            CompanionState::Idling => self.idle_bob,
        }
    }
}

/// Repeating timer driving the pursuit ticks.
#[derive(Resource)]
pub struct FollowTimer(pub Timer);

impl FollowTimer {
    pub fn new(interval: f32) -> Self {
        Self(Timer::from_seconds(interval, TimerMode::Repeating))
    }
}
