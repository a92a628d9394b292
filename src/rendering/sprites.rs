//! Sprites for tiles and world entities, projected from world positions.
//!
//! World space is y-down with the origin at the top-left tile corner; Bevy's
//! 2D space is y-up. Every sprite is placed at (x, -y).

use bevy::prelude::*;

use super::visual_config::VisualConfig;
use crate::companion::Companion;
use crate::core::{Bob, FrameCycle, WorldPosition};
use crate::player::{CameraOffset, Player, Viewport};
use crate::world::{Building, Landmark, TileField, WorldEntity};

/// Marker for the world camera.
#[derive(Component)]
pub struct WorldCamera;

/// Marker for tile sprites.
#[derive(Component)]
pub struct TileSprite;

/// Draw order of each kind of sprite.
pub mod layer {
    pub const TILES: f32 = 0.0;
    pub const BUILDINGS: f32 = 1.0;
    pub const NPCS: f32 = 2.0;
    pub const COMPANION: f32 = 2.5;
    pub const PLAYER: f32 = 3.0;
}

/// Depth a projected sprite is drawn at.
#[derive(Component, Debug, Clone, Copy)]
pub struct Layer(pub f32);

/// Bevy translation for a world position, with a vertical bob offset.
pub fn project(position: Vec2, bob: f32, z: f32) -> Vec3 {
    Vec3::new(position.x, -(position.y + bob), z)
}

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, WorldCamera));
}

/// One sprite per cell, spawned once the field exists.
pub fn spawn_tile_sprites(mut commands: Commands, tiles: Res<TileField>, visuals: Res<VisualConfig>) {
    let size = tiles.tile_size();
    for (cell, category) in tiles.iter() {
        let center = (cell.as_vec2() + Vec2::splat(0.5)) * size;
        commands.spawn((
            Sprite::from_color(visuals.tile_color(category), Vec2::splat(size)),
            Transform::from_translation(project(center, 0.0, layer::TILES)),
            TileSprite,
            WorldEntity,
        ));
    }
    debug!("Spawned {} tile sprites", tiles.size() * tiles.size());
}

/// Give newly spawned world entities something to draw.
pub fn attach_sprites(
    mut commands: Commands,
    visuals: Res<VisualConfig>,
    added: Query<
        (Entity, Option<&Landmark>, Has<Player>, Has<Companion>, Has<Building>),
        (Added<WorldPosition>, Without<Sprite>),
    >,
) {
    for (entity, landmark, is_player, is_companion, is_building) in added.iter() {
        let (color, size, z) = if is_player {
            (visuals.player_color(), Vec2::splat(visuals.character_size), layer::PLAYER)
        } else if is_companion {
            (visuals.companion_color(), Vec2::splat(visuals.companion_size), layer::COMPANION)
        } else if let Some(landmark) = landmark {
            let z = if is_building { layer::BUILDINGS } else { layer::NPCS };
            let size = if is_building {
                landmark.hit_half_size * 2.0
            } else {
                Vec2::splat(visuals.character_size)
            };
            (visuals.landmark_color(landmark.kind), size, z)
        } else {
            continue;
        };
        commands
            .entity(entity)
            .insert((Sprite::from_color(color, size), Transform::default(), Layer(z)));
    }
}

/// Copy world positions (plus bob) into transforms.
pub fn sync_transforms(mut query: Query<(&WorldPosition, Option<&Bob>, &Layer, &mut Transform)>) {
    for (position, bob, layer, mut transform) in query.iter_mut() {
        let offset = bob.map_or(0.0, Bob::offset);
        transform.translation = project(position.0, offset, layer.0);
    }
}

/// Darken buildings on their alternate frame.
pub fn tint_building_frames(
    visuals: Res<VisualConfig>,
    mut query: Query<(&FrameCycle, &Landmark, &mut Sprite), Changed<FrameCycle>>,
) {
    for (frames, landmark, mut sprite) in query.iter_mut() {
        let base = visuals.landmark_color(landmark.kind).to_srgba();
        let tint = if frames.current % 2 == 1 {
            visuals.alt_frame_tint
        } else {
            1.0
        };
        sprite.color = Color::srgb(base.red * tint, base.green * tint, base.blue * tint);
    }
}

/// Put the camera on the point the offset centers.
pub fn place_camera(
    viewport: Res<Viewport>,
    offset: Res<CameraOffset>,
    mut camera: Query<&mut Transform, With<WorldCamera>>,
) {
    let Ok(mut transform) = camera.get_single_mut() else {
        return;
    };
    let focus = offset.focus(&viewport);
    transform.translation = project(focus, 0.0, transform.translation.z);
}
