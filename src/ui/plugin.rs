//! UI plugin - dialogue panels and HUD.

use bevy::prelude::*;

use super::dialogue;
use super::hud;
use crate::core::GameState;
use crate::player::PlayerSet;

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Setup HUD systems
        hud::setup_hud_systems(app);

        app.add_systems(
            Update,
            (
                dialogue::open_dialogue_panels,
                // A tap that lands on the dismiss button is swallowed first
                dialogue::dismiss_input.after(PlayerSet::Input),
                dialogue::shop_purchase_input.after(PlayerSet::Input),
                dialogue::refresh_shop_buttons,
                dialogue::close_dialogue_panels,
            )
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(OnExit(GameState::InGame), dialogue::cleanup_dialogue_panels);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DialogueKind, InteractionMode, LandmarkKind};
    use crate::economy::{EconomyPlugin, EggLedger, OwnedUpgrades, Upgrade};
    use crate::player::PlayerPlugin;
    use crate::testing::*;
    use crate::ui::{BuyButton, DialoguePanel, DismissButton, UpgradeLabel};

    fn ui_app() -> App {
        let mut app = headless_app();
        app.add_plugins((PlayerPlugin, EconomyPlugin, UiPlugin));
        enter_world(&mut app);
        app
    }

    fn open_panels(app: &mut App) -> Vec<DialogueKind> {
        let mut query = app.world_mut().query::<&DialoguePanel>();
        query.iter(app.world()).map(|panel| panel.kind).collect()
    }

    fn press_dismiss(app: &mut App) {
        let mut query = app
            .world_mut()
            .query_filtered::<&mut Interaction, With<DismissButton>>();
        for mut interaction in query.iter_mut(app.world_mut()) {
            *interaction = Interaction::Pressed;
        }
    }

    #[test]
    fn test_interaction_opens_one_panel() {
        let mut app = ui_app();
        let (_, center) = {
            let mut query = app.world_mut().query::<(&crate::world::Landmark, &crate::core::WorldPosition)>();
            query
                .iter(app.world())
                .find(|(landmark, _)| landmark.kind == LandmarkKind::Market)
                .map(|(landmark, position)| (*landmark, position.0))
                .expect("market spawned")
        };
        set_player_position(&mut app, center + Vec2::new(0.0, 70.0));
        app.update();

        tap_world(&mut app, center);
        run_frames(&mut app, 3);
        assert_eq!(open_panels(&mut app), vec![DialogueKind::Shop]);

        // A second tap while the panel is open is swallowed.
        tap_world(&mut app, center);
        run_frames(&mut app, 3);
        assert_eq!(open_panels(&mut app), vec![DialogueKind::Shop]);
    }

    #[test]
    fn test_dismiss_button_closes_panel() {
        let mut app = ui_app();
        app.insert_resource(InteractionMode::InDialogue(DialogueKind::Factory));
        app.world_mut().send_event(crate::core::InteractionEvent {
            landmark: LandmarkKind::Factory,
        });
        run_frames(&mut app, 2);
        assert_eq!(open_panels(&mut app), vec![DialogueKind::Factory]);

        press_dismiss(&mut app);
        run_frames(&mut app, 3);
        assert!(open_panels(&mut app).is_empty());
        assert_eq!(*app.world().resource::<InteractionMode>(), InteractionMode::Free);
    }

    fn open_shop(app: &mut App) {
        app.insert_resource(InteractionMode::InDialogue(DialogueKind::Shop));
        app.world_mut().send_event(crate::core::InteractionEvent {
            landmark: LandmarkKind::Market,
        });
        run_frames(app, 3);
    }

    fn press_buy(app: &mut App, upgrade: Upgrade) {
        let mut query = app.world_mut().query::<(&mut Interaction, &BuyButton)>();
        for (mut interaction, button) in query.iter_mut(app.world_mut()) {
            if button.0 == upgrade {
                *interaction = Interaction::Pressed;
            }
        }
    }

    fn button_color(app: &mut App, upgrade: Upgrade) -> Color {
        let mut query = app.world_mut().query::<(&BackgroundColor, &BuyButton)>();
        query
            .iter(app.world())
            .find(|(_, button)| button.0 == upgrade)
            .map(|(background, _)| background.0)
            .expect("buy button spawned")
    }

    #[test]
    fn test_shop_lists_every_upgrade() {
        let mut app = ui_app();
        open_shop(&mut app);
        let mut query = app.world_mut().query::<&BuyButton>();
        let listed: Vec<Upgrade> = query.iter(app.world()).map(|button| button.0).collect();
        assert_eq!(listed.len(), Upgrade::ALL.len());
        for upgrade in Upgrade::ALL {
            assert!(listed.contains(&upgrade));
        }
    }

    #[test]
    fn test_buy_button_spends_eggs_once() {
        let mut app = ui_app();
        app.world_mut().resource_mut::<EggLedger>().eggs = 30;
        open_shop(&mut app);
        assert_eq!(button_color(&mut app, Upgrade::ChickenFeed), dialogue::AFFORDABLE);
        assert_eq!(button_color(&mut app, Upgrade::SpeedBoost), dialogue::UNAVAILABLE);

        press_buy(&mut app, Upgrade::ChickenFeed);
        run_frames(&mut app, 3);
        assert_eq!(app.world().resource::<EggLedger>().eggs, 5);
        assert!(app.world().resource::<OwnedUpgrades>().owns(Upgrade::ChickenFeed));
        assert_eq!(button_color(&mut app, Upgrade::ChickenFeed), dialogue::UNAVAILABLE);

        let mut labels = app.world_mut().query::<(&UpgradeLabel, &Text)>();
        let feed = labels
            .iter(app.world())
            .find(|(label, _)| label.0 == Upgrade::ChickenFeed)
            .map(|(_, text)| text.0.clone())
            .expect("label spawned");
        assert_eq!(feed, "Chicken Feed (Purchased)");

        app.world_mut().resource_mut::<EggLedger>().eggs = 30;
        press_buy(&mut app, Upgrade::ChickenFeed);
        run_frames(&mut app, 3);
        assert_eq!(app.world().resource::<EggLedger>().eggs, 30);
    }

    #[test]
    fn test_buy_buttons_ignored_outside_shop() {
        let mut app = ui_app();
        app.world_mut().resource_mut::<EggLedger>().eggs = 60;
        open_shop(&mut app);
        app.insert_resource(InteractionMode::Free);
        press_buy(&mut app, Upgrade::SpeedBoost);
        run_frames(&mut app, 2);
        assert_eq!(app.world().resource::<EggLedger>().eggs, 60);
    }
}
