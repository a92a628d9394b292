//! Player module - player entity, tap input, stepping, and camera.

mod camera;
mod components;
mod input;
mod movement;
mod plugin;

pub use camera::{CameraOffset, Viewport};
pub use components::*;
pub use input::{resolve_tap, screen_to_world, TapOutcome};
pub use movement::{spawn_player, Leg, Mover};
pub use plugin::{PlayerPlugin, PlayerSet};
