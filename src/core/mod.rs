//! Core game module - states, events, and fundamental systems.
//!
//! This module provides the foundation that all other game systems build upon.

mod ambient;
mod events;
mod plugin;
mod position;
mod states;

pub use ambient::*;
pub use events::*;
pub use plugin::CorePlugin;
pub use position::*;
pub use states::*;
