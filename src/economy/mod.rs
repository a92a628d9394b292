//! Economy module - eggs, their production, and the market.

mod plugin;
mod production;
mod shop;

pub use plugin::EconomyPlugin;
pub use production::{EggLedger, ProductionConfig};
pub use shop::{OwnedUpgrades, PurchaseError, PurchaseEvent, ShopConfig, Upgrade};
