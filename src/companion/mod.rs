//! Companion module - the chick that follows the player around.

mod components;
mod follow;
mod plugin;

pub use components::*;
pub use follow::{pursue, spawn_companion, trail_point, Pursuit};
pub use plugin::CompanionPlugin;
