//! Rendering module - sprites, camera, and palette.

mod plugin;
mod sprites;
pub mod visual_config;

pub use plugin::RenderingPlugin;
pub use sprites::{project, Layer, TileSprite, WorldCamera};
pub use visual_config::VisualConfig;
