//! World plugin - config loading, tile field, and entity spawning.

use bevy::prelude::*;

use crate::companion::spawn_companion;
use crate::core::{FrameCycle, GameState, NarrativeCheckpoint, WorldPosition};
use crate::npcs::spawn_npc;
use crate::player::spawn_player;

use super::data::{load_world_config, WorldConfig};
use super::landmarks::{Building, Landmark, Obstacle, WorldEntity};
use super::tiles::TileField;

/// World plugin - handles world loading and setup.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_world_config)
            .add_systems(Update, finish_loading.run_if(in_state(GameState::Loading)))
            .add_systems(OnEnter(GameState::InGame), setup_world)
            .add_systems(OnExit(GameState::InGame), cleanup_world);
    }
}

/// Enter the world as soon as its layout is available.
fn finish_loading(config: Option<Res<WorldConfig>>, mut next_state: ResMut<NextState<GameState>>) {
    if config.is_some() {
        next_state.set(GameState::InGame);
    }
}

/// Generate the tile field and spawn everything that lives in the world.
pub fn setup_world(
    mut commands: Commands,
    config: Res<WorldConfig>,
    mut checkpoints: EventWriter<NarrativeCheckpoint>,
) {
    let tiles = TileField::generate(&config, &mut rand::thread_rng());
    info!(
        "Generated {}x{} tile field ({} px per tile)",
        tiles.size(),
        tiles.size(),
        tiles.tile_size()
    );
    commands.insert_resource(tiles);

    let spawn = config.spawn_point();
    for def in &config.buildings {
        let footprint = def.footprint(spawn, config.tile_size);
        let mut building = commands.spawn((
            Building,
            WorldEntity,
            Landmark::from_building(def, config.tile_size),
            WorldPosition(footprint.center()),
            FrameCycle::new(def.frames, 1.0),
        ));
        if def.obstacle {
            building.insert(Obstacle(footprint));
        }
        debug!("Placed {:?} at {:?}", def.kind, footprint);
    }

    for def in &config.npcs {
        let position = spawn + Vec2::new(def.offset.0, def.offset.1) * config.tile_size;
        spawn_npc(&mut commands, def, position, config.tile_size);
    }

    spawn_player(&mut commands, spawn);
    spawn_companion(&mut commands, spawn);

    info!("World ready, player at {:?}", spawn);
    checkpoints.send(NarrativeCheckpoint::ChapterStarted);
}

/// Despawn world entities when leaving InGame.
fn cleanup_world(mut commands: Commands, query: Query<Entity, With<WorldEntity>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
    commands.remove_resource::<TileField>();
}
