//! Rendering plugin - flat colored sprites for a top-down world.

use bevy::prelude::*;
use bevy::transform::TransformSystem;

use super::sprites;
use super::visual_config::load_visual_config;
use crate::core::GameState;
use crate::world::setup_world;

/// Rendering plugin - draws the world and follows the player with the camera.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (load_visual_config, sprites::spawn_camera))
            .add_systems(
                OnEnter(GameState::InGame),
                sprites::spawn_tile_sprites.after(setup_world),
            )
            .add_systems(
                PostUpdate,
                (
                    sprites::attach_sprites,
                    (
                        sprites::sync_transforms,
                        sprites::tint_building_frames,
                        sprites::place_camera,
                    ),
                )
                    .chain()
                    .before(TransformSystem::TransformPropagate)
                    .run_if(in_state(GameState::InGame)),
            );
    }
}
