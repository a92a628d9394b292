//! Landmark and obstacle components placed in the world.

use bevy::prelude::*;

use super::data::{BuildingDef, NpcDef};
use crate::core::LandmarkKind;

/// Marker for everything spawned with the world, despawned with it.
#[derive(Component)]
pub struct WorldEntity;

/// Marker for static buildings.
#[derive(Component)]
pub struct Building;

/// Axis-aligned rectangle walking has to route around.
#[derive(Component, Debug, Clone, Copy, Deref)]
pub struct Obstacle(pub Rect);

/// Tap target with an interaction gated on proximity.
///
/// The landmark's center is its entity's `WorldPosition`, so NPC regions
/// follow the NPC as it walks.
#[derive(Component, Debug, Clone, Copy)]
pub struct Landmark {
    pub kind: LandmarkKind,
    /// Half the size of the tap region, in pixels.
    pub hit_half_size: Vec2,
    /// Player must be strictly closer than this to interact, in pixels.
    pub interact_radius: f32,
    /// Distance from the center a too-far tap walks to, in pixels.
    pub approach_distance: f32,
}

impl Landmark {
    pub fn from_building(def: &BuildingDef, tile_size: f32) -> Self {
        Self {
            kind: def.kind,
            hit_half_size: Vec2::splat(def.size * tile_size / 2.0),
            interact_radius: def.interact_radius * tile_size,
            approach_distance: def.approach_distance * tile_size,
        }
    }

    pub fn from_npc(def: &NpcDef, tile_size: f32) -> Self {
        Self {
            kind: def.kind,
            hit_half_size: Vec2::splat(def.hit_size / 2.0),
            interact_radius: def.interact_radius * tile_size,
            approach_distance: def.approach_distance * tile_size,
        }
    }

    pub fn hit_region(&self, center: Vec2) -> Rect {
        Rect::from_center_half_size(center, self.hit_half_size)
    }

    pub fn within_reach(&self, center: Vec2, player: Vec2) -> bool {
        player.distance(center) < self.interact_radius
    }

    /// Point on the ray from the center through the player, at the
    /// approach distance.
    pub fn approach_point(&self, center: Vec2, player: Vec2) -> Vec2 {
        let away = (player - center).try_normalize().unwrap_or(Vec2::Y);
        center + away * self.approach_distance
    }
}
