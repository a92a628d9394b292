//! Economy plugin - the egg counter and market purchases.

use bevy::prelude::*;

use super::production::{self, EggLedger, ProductionConfig, ProductionTimer};
use super::shop::{self, OwnedUpgrades, PurchaseEvent, ShopConfig};
use crate::core::GameState;
use crate::player::MovementConfig;

/// Economy plugin - passive production of eggs and upgrades bought with them.
pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        let config = ProductionConfig::default();
        app.insert_resource(EggLedger::new(&config))
            .insert_resource(ProductionTimer(Timer::from_seconds(
                config.interval,
                TimerMode::Repeating,
            )))
            .insert_resource(config)
            .init_resource::<ShopConfig>()
            .init_resource::<OwnedUpgrades>()
            .init_resource::<MovementConfig>()
            .add_event::<PurchaseEvent>()
            .add_systems(
                Update,
                (
                    production::start_production,
                    production::produce_eggs,
                    shop::process_purchases,
                )
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            );
    }
}
