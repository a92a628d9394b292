//! World layout data and RON loading.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

use super::error::DataLoadError;
use crate::core::LandmarkKind;
use crate::navigation::inset_bounds;

/// Where the world layout is read from.
pub const WORLD_CONFIG_PATH: &str = "assets/data/world.ron";

fn default_dark_grass_chance() -> f64 {
    0.3
}

fn default_obstacle() -> bool {
    true
}

fn default_frames() -> usize {
    1
}

/// Disc of restricted (grey) ground around a world-pixel point.
#[derive(Debug, Clone, Deserialize)]
pub struct RestrictedZoneDef {
    /// Center in world pixels.
    pub center: (f32, f32),
    /// Radius in tiles.
    pub radius: f32,
}

/// A path corridor drawn into the tile field.
#[derive(Debug, Clone, Deserialize)]
pub enum CorridorDef {
    /// L-shaped corridor between two cells: a horizontal leg along the row
    /// of `from`, then a vertical leg along the column of `to`.
    Elbow {
        from: (i32, i32),
        to: (i32, i32),
        /// Width in cells.
        width: f32,
    },
    /// Straight band between two world-pixel points, inflated by half its
    /// width on every side.
    Straight {
        from: (f32, f32),
        to: (f32, f32),
        /// Width in cells.
        width: f32,
    },
}

/// A building placed relative to the spawn point.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildingDef {
    pub kind: LandmarkKind,
    /// Top-left corner, in tiles from the spawn point.
    pub offset: (f32, f32),
    /// Edge length in tiles.
    pub size: f32,
    /// Whether walking routes around the footprint.
    #[serde(default = "default_obstacle")]
    pub obstacle: bool,
    /// Interaction reach from the footprint center, in tiles.
    pub interact_radius: f32,
    /// How far from the center a too-far tap sends the player, in tiles.
    pub approach_distance: f32,
    /// Animation frames the sprite flips through.
    #[serde(default = "default_frames")]
    pub frames: usize,
}

impl BuildingDef {
    /// Footprint in world pixels.
    pub fn footprint(&self, spawn: Vec2, tile_size: f32) -> Rect {
        let min = spawn + Vec2::new(self.offset.0, self.offset.1) * tile_size;
        Rect::from_corners(min, min + Vec2::splat(self.size * tile_size))
    }
}

/// A character placed relative to the spawn point.
#[derive(Debug, Clone, Deserialize)]
pub struct NpcDef {
    pub kind: LandmarkKind,
    /// Starting position, in tiles from the spawn point.
    pub offset: (f32, f32),
    /// Edge length of the square tap region, in pixels.
    pub hit_size: f32,
    /// Interaction reach, in tiles.
    pub interact_radius: f32,
    /// How far from the NPC a too-far tap sends the player, in tiles.
    pub approach_distance: f32,
}

/// Complete layout of the playable world.
#[derive(Resource, Debug, Clone, Deserialize)]
pub struct WorldConfig {
    /// Cells per side.
    pub world_size: u32,
    /// Cell edge length in pixels.
    pub tile_size: f32,
    #[serde(default = "default_dark_grass_chance")]
    pub dark_grass_chance: f64,
    /// Radius in cells of the path plaza around spawn.
    #[serde(default)]
    pub plaza_radius: f32,
    pub restricted: RestrictedZoneDef,
    #[serde(default)]
    pub corridors: Vec<CorridorDef>,
    #[serde(default)]
    pub buildings: Vec<BuildingDef>,
    #[serde(default)]
    pub npcs: Vec<NpcDef>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            world_size: 50,
            tile_size: 32.0,
            dark_grass_chance: default_dark_grass_chance(),
            plaza_radius: 5.0,
            restricted: RestrictedZoneDef {
                center: (295.0, 887.0),
                radius: 5.0,
            },
            corridors: vec![
                CorridorDef::Elbow {
                    from: (25, 25),
                    to: (9, 27),
                    width: 3.0,
                },
                CorridorDef::Straight {
                    from: (495.0, 870.0),
                    to: (664.0, 850.0),
                    width: 3.0,
                },
            ],
            buildings: vec![
                BuildingDef {
                    kind: LandmarkKind::Market,
                    offset: (3.0, -4.0),
                    size: 3.0,
                    obstacle: true,
                    interact_radius: 2.5,
                    approach_distance: 2.2,
                    frames: 1,
                },
                BuildingDef {
                    kind: LandmarkKind::Factory,
                    offset: (-16.0, -5.0),
                    size: 4.0,
                    obstacle: false,
                    interact_radius: 3.5,
                    approach_distance: 3.0,
                    frames: 2,
                },
            ],
            npcs: vec![
                NpcDef {
                    kind: LandmarkKind::Farmer,
                    offset: (4.0, 2.0),
                    hit_size: 60.0,
                    interact_radius: 2.5,
                    approach_distance: 1.5,
                },
                NpcDef {
                    kind: LandmarkKind::Antagonist,
                    offset: (-16.0, 3.0),
                    hit_size: 60.0,
                    interact_radius: 2.5,
                    approach_distance: 1.5,
                },
            ],
        }
    }
}

impl WorldConfig {
    /// Parse and validate a RON document. `path` is only used in errors.
    pub fn from_ron_str(contents: &str, path: &str) -> Result<Self, DataLoadError> {
        let config: Self = ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a RON file.
    pub fn load_from(path: &str) -> Result<Self, DataLoadError> {
        let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        Self::from_ron_str(&contents, path)
    }

    /// Reject layouts the navigation core cannot work with.
    pub fn validate(&self) -> Result<(), DataLoadError> {
        if self.world_size < 2 {
            return Err(DataLoadError::InvalidConfig(format!(
                "world_size must be at least 2, got {}",
                self.world_size
            )));
        }
        if self.tile_size <= 0.0 {
            return Err(DataLoadError::InvalidConfig(format!(
                "tile_size must be positive, got {}",
                self.tile_size
            )));
        }
        if !(0.0..=1.0).contains(&self.dark_grass_chance) {
            return Err(DataLoadError::InvalidConfig(format!(
                "dark_grass_chance must be within [0, 1], got {}",
                self.dark_grass_chance
            )));
        }

        let spawn = self.spawn_point();
        for building in &self.buildings {
            if building.size <= 0.0 {
                return Err(DataLoadError::InvalidConfig(format!(
                    "{:?} has non-positive size {}",
                    building.kind, building.size
                )));
            }
            if building.obstacle && building.footprint(spawn, self.tile_size).contains(spawn) {
                return Err(DataLoadError::InvalidConfig(format!(
                    "{:?} footprint covers the spawn point",
                    building.kind
                )));
            }
        }
        for npc in &self.npcs {
            if npc.hit_size <= 0.0 {
                return Err(DataLoadError::InvalidConfig(format!(
                    "{:?} has non-positive hit_size {}",
                    npc.kind, npc.hit_size
                )));
            }
        }
        Ok(())
    }

    /// Cell the player spawns on (the grid center).
    pub fn spawn_cell(&self) -> IVec2 {
        IVec2::splat((self.world_size / 2) as i32)
    }

    /// Spawn point in world pixels: the spawn cell's origin corner.
    pub fn spawn_point(&self) -> Vec2 {
        self.spawn_cell().as_vec2() * self.tile_size
    }

    /// Side length of the world in pixels.
    pub fn extent(&self) -> f32 {
        self.world_size as f32 * self.tile_size
    }

    /// Area the player may stand in.
    pub fn walkable_bounds(&self) -> Rect {
        inset_bounds(self.world_size, self.tile_size)
    }
}

/// Load the world layout unless one was inserted up front.
pub fn load_world_config(mut commands: Commands, existing: Option<Res<WorldConfig>>) {
    if existing.is_some() {
        return;
    }

    let config = match WorldConfig::load_from(WORLD_CONFIG_PATH) {
        Ok(config) => {
            info!("Loaded world config from {}", WORLD_CONFIG_PATH);
            config
        }
        Err(DataLoadError::ReadError { path, details }) => {
            warn!("Could not read {}: {}. Using defaults.", path, details);
            WorldConfig::default()
        }
        Err(e) => {
            error!("{}. Using defaults.", e);
            WorldConfig::default()
        }
    };
    commands.insert_resource(config);
}
