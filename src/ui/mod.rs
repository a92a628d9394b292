//! UI module - dialogue panels and the in-game HUD.

mod dialogue;
mod hud;
mod plugin;

pub use dialogue::{content_for, BuyButton, DialogueContent, DialoguePanel, DismissButton, UpgradeLabel};
pub use plugin::UiPlugin;
