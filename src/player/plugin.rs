//! Player plugin - tap input, stepping, and camera follow.

use bevy::prelude::*;

use super::camera::{self, CameraOffset, Viewport};
use super::components::MovementConfig;
use super::input;
use super::movement;
use crate::core::GameState;

/// Ordering of the per-frame player pipeline.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerSet {
    /// Taps become interactions or movement commands
    Input,
    /// Movers advance one step
    Movement,
    /// Camera recenters on the new player position
    Camera,
}

/// Player plugin - handles tap-to-move, stepping, and the camera.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementConfig>()
            .init_resource::<Viewport>()
            .init_resource::<CameraOffset>()
            .configure_sets(
                Update,
                (PlayerSet::Input, PlayerSet::Movement, PlayerSet::Camera)
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            )
            .add_systems(
                Update,
                (input::emit_taps, input::handle_taps)
                    .chain()
                    .in_set(PlayerSet::Input),
            )
            .add_systems(
                Update,
                (
                    movement::advance_movers,
                    (movement::sync_walk_bob, movement::mark_visited_tiles),
                )
                    .chain()
                    .in_set(PlayerSet::Movement),
            )
            .add_systems(
                Update,
                (camera::update_viewport, camera::update_camera_offset)
                    .chain()
                    .in_set(PlayerSet::Camera),
            );
    }
}
