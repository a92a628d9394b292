//! World module - layout data, tile field, landmarks.

mod data;
mod error;
mod landmarks;
mod plugin;
mod tiles;

pub use data::{load_world_config, BuildingDef, CorridorDef, NpcDef, RestrictedZoneDef, WorldConfig, WORLD_CONFIG_PATH};
pub use error::DataLoadError;
pub use landmarks::{Building, Landmark, Obstacle, WorldEntity};
pub use plugin::{setup_world, WorldPlugin};
pub use tiles::{TileCategory, TileField};
