//! Player-related components.

use bevy::prelude::*;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Whether a movement command is in flight. Drives the walking bob.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Deref)]
pub struct Walking(pub bool);

/// Configuration for tap-to-move walking.
#[derive(Resource, Debug, Clone)]
pub struct MovementConfig {
    /// Walking speed in world units per second
    pub move_speed: f32,
    /// Milliseconds per movement step (one display frame)
    pub frame_ms: f32,
    /// Lower bound on steps for scripted NPC walks
    pub npc_min_steps: u32,
    /// Bob while walking: amplitude in pixels, half period in seconds
    pub walk_bob: (f32, f32),
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            move_speed: 400.0,
            frame_ms: 16.0,
            npc_min_steps: 40,
            walk_bob: (3.0, 0.15),
        }
    }
}
