//! Visual configuration loaded from external RON file.
//!
//! Allows tweaking colors and sprite sizes without recompilation.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

use crate::core::LandmarkKind;
use crate::world::TileCategory;

pub const VISUAL_CONFIG_PATH: &str = "assets/data/rendering/visual_config.ron";

/// Visual configuration loaded from assets/data/rendering/visual_config.ron.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VisualConfig {
    // Tiles
    pub landmark_tile: (f32, f32, f32),
    pub restricted_tile: (f32, f32, f32),
    pub path_tile: (f32, f32, f32),
    pub light_path_tile: (f32, f32, f32),
    pub grass_tile: (f32, f32, f32),
    pub dark_grass_tile: (f32, f32, f32),
    // Characters and buildings
    pub market: (f32, f32, f32),
    pub factory: (f32, f32, f32),
    pub farmer: (f32, f32, f32),
    pub antagonist: (f32, f32, f32),
    pub player: (f32, f32, f32),
    pub companion: (f32, f32, f32),
    /// Brightness multiplier for the alternate building frame
    pub alt_frame_tint: f32,
    // Sizes in pixels
    pub character_size: f32,
    pub companion_size: f32,
    // Background outside the world
    pub clear_color: (f32, f32, f32),
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            landmark_tile: (0.545, 0.271, 0.075),
            restricted_tile: (0.5, 0.5, 0.5),
            path_tile: (0.545, 0.271, 0.075),
            light_path_tile: (0.627, 0.322, 0.176),
            grass_tile: (0.239, 0.545, 0.216),
            dark_grass_tile: (0.176, 0.353, 0.153),
            market: (0.627, 0.322, 0.176),
            factory: (0.45, 0.45, 0.5),
            farmer: (0.133, 0.545, 0.133),
            antagonist: (0.5, 0.1, 0.12),
            player: (0.95, 0.95, 0.9),
            companion: (1.0, 0.843, 0.0),
            alt_frame_tint: 0.8,
            character_size: 80.0,
            companion_size: 24.0,
            clear_color: (0.102, 0.235, 0.349),
        }
    }
}

impl VisualConfig {
    /// Load visual config from RON file.
    pub fn load() -> Self {
        Self::load_from(VISUAL_CONFIG_PATH)
    }

    pub fn load_from(path: &str) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match ron::from_str(&contents) {
                Ok(config) => {
                    info!("Loaded visual config from {}", path);
                    config
                }
                Err(e) => {
                    error!("Failed to parse {}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Could not read {}: {}. Using defaults.", path, e);
                Self::default()
            }
        }
    }

    pub fn tile_color(&self, category: TileCategory) -> Color {
        rgb(match category {
            TileCategory::Landmark => self.landmark_tile,
            TileCategory::Restricted => self.restricted_tile,
            TileCategory::Path => self.path_tile,
            TileCategory::LightPath => self.light_path_tile,
            TileCategory::Grass => self.grass_tile,
            TileCategory::DarkGrass => self.dark_grass_tile,
        })
    }

    pub fn landmark_color(&self, kind: LandmarkKind) -> Color {
        rgb(match kind {
            LandmarkKind::Factory => self.factory,
            LandmarkKind::Farmer => self.farmer,
            LandmarkKind::Antagonist => self.antagonist,
            LandmarkKind::Market => self.market,
        })
    }

    pub fn player_color(&self) -> Color {
        rgb(self.player)
    }

    pub fn companion_color(&self) -> Color {
        rgb(self.companion)
    }

    pub fn clear_color(&self) -> Color {
        rgb(self.clear_color)
    }
}

fn rgb((r, g, b): (f32, f32, f32)) -> Color {
    Color::srgb(r, g, b)
}

/// System to load visual config at startup.
pub fn load_visual_config(mut commands: Commands) {
    let config = VisualConfig::load();
    commands.insert_resource(ClearColor(config.clear_color()));
    commands.insert_resource(config);
}
