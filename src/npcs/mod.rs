//! NPCs module - characters placed in the world and their scripts.

mod components;
mod greeting;
mod plugin;
mod spawning;

pub use components::*;
pub use plugin::NpcPlugin;
pub use spawning::spawn_npc;
