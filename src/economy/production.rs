//! Passive egg production, switched on from the factory.

use bevy::prelude::*;

use crate::core::{DialogueClosedEvent, DialogueKind, NarrativeCheckpoint};

/// Tuning for egg production.
#[derive(Resource, Debug, Clone)]
pub struct ProductionConfig {
    /// Seconds between payouts
    pub interval: f32,
    /// Eggs per payout before upgrades
    pub base_rate: u64,
    /// Flat extra eggs per payout
    pub bonus: u64,
}

impl Default for ProductionConfig {
    fn default() -> Self {
        Self {
            interval: 1.0,
            base_rate: 1,
            bonus: 0,
        }
    }
}

/// Eggs collected so far and how fast they come in.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct EggLedger {
    pub eggs: u64,
    pub rate: u64,
    pub bonus: u64,
    pub active: bool,
}

impl EggLedger {
    pub fn new(config: &ProductionConfig) -> Self {
        Self {
            eggs: 0,
            rate: config.base_rate,
            bonus: config.bonus,
            active: false,
        }
    }

    pub fn per_payout(&self) -> u64 {
        self.rate + self.bonus
    }

    /// Credit `payouts` payouts. Does nothing while inactive.
    pub fn credit(&mut self, payouts: u32) {
        if self.active {
            self.eggs = self.eggs.saturating_add(self.per_payout() * u64::from(payouts));
        }
    }
}

#[derive(Resource)]
pub struct ProductionTimer(pub Timer);

/// Start production when the factory dialogue is closed.
pub fn start_production(
    mut closed: EventReader<DialogueClosedEvent>,
    mut ledger: ResMut<EggLedger>,
    mut timer: ResMut<ProductionTimer>,
    mut checkpoints: EventWriter<NarrativeCheckpoint>,
) {
    for event in closed.read() {
        if event.kind != DialogueKind::Factory || ledger.active {
            continue;
        }
        ledger.active = true;
        timer.0.reset();
        info!("Egg production started at {} per payout", ledger.per_payout());
        checkpoints.send(NarrativeCheckpoint::ProductionStarted);
    }
}

pub fn produce_eggs(time: Res<Time>, mut timer: ResMut<ProductionTimer>, mut ledger: ResMut<EggLedger>) {
    if !ledger.active {
        return;
    }
    timer.0.tick(time.delta());
    let payouts = timer.0.times_finished_this_tick();
    if payouts > 0 {
        ledger.credit(payouts);
    }
}
