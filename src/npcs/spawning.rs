//! NPC spawning from world layout entries.

use bevy::prelude::*;

use super::components::Npc;
use crate::core::{Bob, Facing, WorldPosition};
use crate::player::{Mover, MovementConfig, Walking};
use crate::world::{Landmark, NpcDef, WorldEntity};

/// Spawn one NPC at `position` (world pixels).
pub fn spawn_npc(commands: &mut Commands, def: &NpcDef, position: Vec2, tile_size: f32) -> Entity {
    let movement = MovementConfig::default();
    let entity = commands
        .spawn((
            Npc { kind: def.kind },
            WorldEntity,
            Landmark::from_npc(def, tile_size),
            WorldPosition(position),
            Facing::Down,
            Mover::new(movement.npc_min_steps),
            Walking(false),
            Bob::new(movement.walk_bob.0, movement.walk_bob.1),
        ))
        .id();
    debug!("Spawned {:?} at {:?}", def.kind, position);
    entity
}
