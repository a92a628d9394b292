//! Market upgrades, each bought once with eggs.

use std::collections::HashSet;

use bevy::prelude::*;
use thiserror::Error;

use super::production::EggLedger;
use crate::player::MovementConfig;

/// Something the market sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Upgrade {
    SpeedBoost,
    BetterEggs,
    ChickenFeed,
}

impl Upgrade {
    /// Market display order.
    pub const ALL: [Upgrade; 3] = [Upgrade::SpeedBoost, Upgrade::BetterEggs, Upgrade::ChickenFeed];

    pub fn label(self) -> &'static str {
        match self {
            Upgrade::SpeedBoost => "Speed Boost",
            Upgrade::BetterEggs => "Better Eggs",
            Upgrade::ChickenFeed => "Chicken Feed",
        }
    }

    /// Price in eggs.
    pub fn price(self) -> u64 {
        match self {
            Upgrade::SpeedBoost => 50,
            Upgrade::BetterEggs => 100,
            Upgrade::ChickenFeed => 25,
        }
    }
}

/// Request to buy an upgrade, sent by the market panel.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseEvent {
    pub upgrade: Upgrade,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("{0:?} is already owned")]
    AlreadyOwned(Upgrade),

    #[error("{upgrade:?} costs {price} eggs, only {eggs} available")]
    NotEnoughEggs { upgrade: Upgrade, price: u64, eggs: u64 },
}

/// What each upgrade does once bought.
#[derive(Resource, Debug, Clone)]
pub struct ShopConfig {
    /// Factor applied to the walking speed
    pub speed_multiplier: f32,
    /// Added to eggs per payout
    pub feed_rate: u64,
    /// Flat bonus per payout
    pub better_eggs_bonus: u64,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            speed_multiplier: 1.2,
            feed_rate: 1,
            better_eggs_bonus: 2,
        }
    }
}

/// Upgrades bought so far.
#[derive(Resource, Debug, Default)]
pub struct OwnedUpgrades(HashSet<Upgrade>);

impl OwnedUpgrades {
    pub fn owns(&self, upgrade: Upgrade) -> bool {
        self.0.contains(&upgrade)
    }

    pub fn check(&self, upgrade: Upgrade, eggs: u64) -> Result<(), PurchaseError> {
        if self.owns(upgrade) {
            return Err(PurchaseError::AlreadyOwned(upgrade));
        }
        let price = upgrade.price();
        if eggs < price {
            return Err(PurchaseError::NotEnoughEggs { upgrade, price, eggs });
        }
        Ok(())
    }

    pub fn can_buy(&self, upgrade: Upgrade, eggs: u64) -> bool {
        self.check(upgrade, eggs).is_ok()
    }

    /// Pay for `upgrade` out of the ledger and record it as owned.
    pub fn buy(&mut self, upgrade: Upgrade, ledger: &mut EggLedger) -> Result<(), PurchaseError> {
        self.check(upgrade, ledger.eggs)?;
        ledger.eggs -= upgrade.price();
        self.0.insert(upgrade);
        Ok(())
    }
}

/// Settle purchase requests and apply what they unlock.
pub fn process_purchases(
    mut purchases: EventReader<PurchaseEvent>,
    config: Res<ShopConfig>,
    mut owned: ResMut<OwnedUpgrades>,
    mut ledger: ResMut<EggLedger>,
    mut movement: ResMut<MovementConfig>,
) {
    for event in purchases.read() {
        if let Err(error) = owned.buy(event.upgrade, &mut ledger) {
            debug!("Purchase refused: {error}");
            continue;
        }
        match event.upgrade {
            Upgrade::SpeedBoost => movement.move_speed *= config.speed_multiplier,
            Upgrade::ChickenFeed => ledger.rate += config.feed_rate,
            Upgrade::BetterEggs => ledger.bonus += config.better_eggs_bonus,
        }
        info!("Bought {}, {} eggs left", event.upgrade.label(), ledger.eggs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::ProductionConfig;

    fn ledger_with(eggs: u64) -> EggLedger {
        let mut ledger = EggLedger::new(&ProductionConfig::default());
        ledger.eggs = eggs;
        ledger
    }

    #[test]
    fn test_buying_deducts_price() {
        let mut owned = OwnedUpgrades::default();
        let mut ledger = ledger_with(60);
        owned.buy(Upgrade::SpeedBoost, &mut ledger).unwrap();
        assert_eq!(ledger.eggs, 10);
        assert!(owned.owns(Upgrade::SpeedBoost));
    }

    #[test]
    fn test_second_purchase_is_refused() {
        let mut owned = OwnedUpgrades::default();
        let mut ledger = ledger_with(100);
        owned.buy(Upgrade::ChickenFeed, &mut ledger).unwrap();
        assert_eq!(
            owned.buy(Upgrade::ChickenFeed, &mut ledger),
            Err(PurchaseError::AlreadyOwned(Upgrade::ChickenFeed))
        );
        assert_eq!(ledger.eggs, 75);
    }

    #[test]
    fn test_short_of_eggs_is_refused() {
        let mut owned = OwnedUpgrades::default();
        let mut ledger = ledger_with(99);
        assert_eq!(
            owned.buy(Upgrade::BetterEggs, &mut ledger),
            Err(PurchaseError::NotEnoughEggs {
                upgrade: Upgrade::BetterEggs,
                price: 100,
                eggs: 99,
            })
        );
        assert_eq!(ledger.eggs, 99);
        assert!(!owned.owns(Upgrade::BetterEggs));
        assert!(owned.can_buy(Upgrade::ChickenFeed, 99));
    }
}
