//! CluckHero - a top-down farm game in Bevy.
//!
//! A chick walks a tile world by tapping: taps become routed walks around
//! buildings, or interactions when close enough to a landmark.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, interaction mode, global events, ambient animation
//! - **World**: Layout data, tile field, buildings and obstacles
//! - **Navigation**: Segment geometry and the obstacle router (no ECS)
//! - **Player**: Tap input, fixed-step movement, camera
//! - **Companion**: The chick that trails the player
//! - **Npcs**: Farmer and antagonist, the farmer's greeting
//! - **Economy**: Egg production
//! - **Rendering**: Sprites and camera placement
//! - **Audio**: Music and cues
//! - **UI**: Dialogue panels, HUD

pub mod audio;
pub mod companion;
pub mod core;
pub mod economy;
pub mod navigation;
pub mod npcs;
pub mod player;
pub mod rendering;
pub mod ui;
pub mod world;

#[cfg(test)]
mod testing;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct CluckHeroPlugin;

impl Plugin for CluckHeroPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // World layout and spawning
            .add_plugins(world::WorldPlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Characters
            .add_plugins(companion::CompanionPlugin)
            .add_plugins(npcs::NpcPlugin)

            // Eggs
            .add_plugins(economy::EconomyPlugin)

            // Presentation
            .add_plugins(rendering::RenderingPlugin)
            .add_plugins(audio::GameAudioPlugin)
            .add_plugins(ui::UiPlugin);
    }
}
