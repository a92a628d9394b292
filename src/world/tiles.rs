//! Static tile field generated once per session.

use bevy::prelude::*;
use rand::Rng;

use super::data::{CorridorDef, WorldConfig};

/// Category label carried by each cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileCategory {
    /// The spawn cell the market is anchored to.
    Landmark,
    /// Grey zone around the restricted point.
    Restricted,
    Path,
    LightPath,
    Grass,
    DarkGrass,
}

impl TileCategory {
    pub fn is_path(self) -> bool {
        matches!(self, TileCategory::Path | TileCategory::LightPath)
    }
}

/// N x N grid of tile categories plus visited bookkeeping.
#[derive(Resource, Debug, Clone)]
pub struct TileField {
    size: u32,
    tile_size: f32,
    categories: Vec<TileCategory>,
    visited: Vec<bool>,
}

impl TileField {
    /// Build the field for `config`. `rng` only decides dark grass.
    pub fn generate(config: &WorldConfig, rng: &mut impl Rng) -> Self {
        let size = config.world_size;
        let mut categories = Vec::with_capacity((size * size) as usize);

        for y in 0..size as i32 {
            for x in 0..size as i32 {
                categories.push(categorize(config, IVec2::new(x, y), rng));
            }
        }

        Self {
            size,
            tile_size: config.tile_size,
            visited: vec![false; categories.len()],
            categories,
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    #[inline]
    fn idx(&self, cell: IVec2) -> Option<usize> {
        let n = self.size as i32;
        if cell.x < 0 || cell.y < 0 || cell.x >= n || cell.y >= n {
            return None;
        }
        Some((cell.y * n + cell.x) as usize)
    }

    pub fn get(&self, cell: IVec2) -> Option<TileCategory> {
        self.idx(cell).map(|i| self.categories[i])
    }

    /// Cell containing a world-pixel position.
    pub fn cell_at(&self, pos: Vec2) -> IVec2 {
        (pos / self.tile_size).floor().as_ivec2()
    }

    /// Record that something stood on the cell under `pos`.
    /// Returns true the first time a cell is visited.
    pub fn mark_visited(&mut self, pos: Vec2) -> bool {
        let Some(i) = self.idx(self.cell_at(pos)) else {
            return false;
        };
        !std::mem::replace(&mut self.visited[i], true)
    }

    pub fn is_visited(&self, cell: IVec2) -> bool {
        self.idx(cell).is_some_and(|i| self.visited[i])
    }

    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|v| **v).count()
    }

    /// Every cell with its category, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (IVec2, TileCategory)> + '_ {
        let n = self.size as i32;
        self.categories
            .iter()
            .enumerate()
            .map(move |(i, category)| (IVec2::new(i as i32 % n, i as i32 / n), *category))
    }

    pub fn count(&self, category: TileCategory) -> usize {
        self.categories.iter().filter(|c| **c == category).count()
    }
}

fn categorize(config: &WorldConfig, cell: IVec2, rng: &mut impl Rng) -> TileCategory {
    let tile = config.tile_size;
    let spawn = config.spawn_cell();

    if cell == spawn {
        return TileCategory::Landmark;
    }

    let origin = cell.as_vec2() * tile;
    let restricted = Vec2::new(config.restricted.center.0, config.restricted.center.1);
    if origin.distance(restricted) <= config.restricted.radius * tile {
        return TileCategory::Restricted;
    }

    let on_corridor = config
        .corridors
        .iter()
        .any(|corridor| corridor_contains(corridor, cell, tile));
    let on_plaza = cell.as_vec2().distance(spawn.as_vec2()) <= config.plaza_radius;
    if on_corridor || on_plaza {
        return if (cell.x + cell.y) % 2 == 0 {
            TileCategory::LightPath
        } else {
            TileCategory::Path
        };
    }

    if rng.gen_bool(config.dark_grass_chance) {
        TileCategory::DarkGrass
    } else {
        TileCategory::Grass
    }
}

fn corridor_contains(corridor: &CorridorDef, cell: IVec2, tile: f32) -> bool {
    match *corridor {
        CorridorDef::Elbow { from, to, width } => {
            let half = width / 2.0;
            let (x, y) = (cell.x as f32, cell.y as f32);
            let horizontal = (y - from.1 as f32).abs() <= half
                && cell.x >= from.0.min(to.0)
                && cell.x <= from.0.max(to.0);
            let vertical = (x - to.0 as f32).abs() <= half
                && cell.y >= from.1.min(to.1)
                && cell.y <= from.1.max(to.1);
            horizontal || vertical
        }
        CorridorDef::Straight { from, to, width } => {
            let half = width * tile / 2.0;
            let origin = cell.as_vec2() * tile;
            origin.x >= from.0.min(to.0) - half
                && origin.x <= from.0.max(to.0) + half
                && origin.y >= from.1.min(to.1) - half
                && origin.y <= from.1.max(to.1) + half
        }
    }
}
