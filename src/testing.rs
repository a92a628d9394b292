//! Headless app helpers shared by plugin tests.

use bevy::input::InputPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

use crate::core::{CorePlugin, GameState, TapEvent, WorldPosition};
use crate::player::{CameraOffset, Player};
use crate::world::{WorldConfig, WorldPlugin};

/// App with the core and world plugins, no window and no renderer.
///
/// The default `WorldConfig` is inserted up front so nothing is read from
/// disk, and every frame advances the clock by exactly 16 ms.
pub fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, InputPlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(16)))
        .insert_resource(WorldConfig::default())
        .add_plugins((CorePlugin, WorldPlugin));
    app
}

/// Run frames until the world is built and the camera has settled.
pub fn enter_world(app: &mut App) {
    for _ in 0..4 {
        app.update();
    }
    assert_eq!(
        *app.world().resource::<State<GameState>>().get(),
        GameState::InGame
    );
}

pub fn player_position(app: &mut App) -> Vec2 {
    let mut query = app.world_mut().query_filtered::<&WorldPosition, With<Player>>();
    query.single(app.world()).0
}

pub fn set_player_position(app: &mut App, position: Vec2) {
    let mut query = app.world_mut().query_filtered::<&mut WorldPosition, With<Player>>();
    query.single_mut(app.world_mut()).0 = position;
}

/// Tap the screen where `world` is currently displayed.
pub fn tap_world(app: &mut App, world: Vec2) {
    let offset = *app.world().resource::<CameraOffset>();
    app.world_mut().send_event(TapEvent {
        screen: world + offset.0,
    });
}

pub fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}
