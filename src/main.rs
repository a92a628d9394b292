//! CluckHero - Entry Point
//!
//! Controls:
//! - Click / tap: Walk there, or talk to whatever is under the pointer
//! - Enter / Space: Close the open dialogue

use bevy::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "CluckHero".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Our game plugin
        .add_plugins(cluck_hero::CluckHeroPlugin)

        .run();
}
