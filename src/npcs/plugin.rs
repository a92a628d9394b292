//! NPC plugin - the farmer's greeting.

use bevy::prelude::*;

use super::components::GreetingConfig;
use super::greeting;
use crate::core::GameState;
use crate::player::PlayerSet;

/// NPC plugin - runs scripted NPC behavior.
pub struct NpcPlugin;

impl Plugin for NpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GreetingConfig>()
            .add_systems(OnEnter(GameState::InGame), greeting::begin_greeting)
            .add_systems(OnExit(GameState::InGame), greeting::end_greeting)
            .add_systems(
                Update,
                greeting::run_greeting
                    .after(PlayerSet::Movement)
                    .run_if(in_state(GameState::InGame)),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        DialogueKind, DismissDialogueEvent, Facing, InteractionMode, LandmarkKind, WorldPosition,
    };
    use crate::npcs::{FarmerGreeting, Npc};
    use crate::player::PlayerPlugin;
    use crate::testing::*;

    fn greeting_app() -> App {
        let mut app = headless_app();
        app.add_plugins((PlayerPlugin, NpcPlugin));
        enter_world(&mut app);
        app
    }

    fn farmer(app: &mut App) -> (Vec2, Facing) {
        let mut query = app.world_mut().query::<(&Npc, &WorldPosition, &Facing)>();
        query
            .iter(app.world())
            .find(|(npc, ..)| npc.kind == LandmarkKind::Farmer)
            .map(|(_, position, facing)| (position.0, *facing))
            .expect("farmer spawned")
    }

    fn mode(app: &App) -> InteractionMode {
        *app.world().resource::<InteractionMode>()
    }

    fn run_until_greeted(app: &mut App) {
        for _ in 0..400 {
            if matches!(app.world().resource::<FarmerGreeting>(), FarmerGreeting::Done) {
                return;
            }
            app.update();
        }
        panic!("greeting never finished");
    }

    #[test]
    fn test_input_locked_on_entry() {
        let mut app = greeting_app();
        assert_eq!(mode(&app), InteractionMode::Locked);

        tap_world(&mut app, Vec2::new(800.0, 700.0));
        run_frames(&mut app, 20);
        assert_eq!(player_position(&mut app), Vec2::new(800.0, 800.0));
    }

    #[test]
    fn test_farmer_walks_up_and_opens_dialogue() {
        let mut app = greeting_app();
        run_until_greeted(&mut app);

        let (position, facing) = farmer(&mut app);
        assert_eq!(position, Vec2::new(880.0, 800.0));
        assert_eq!(facing, Facing::Left);
        assert_eq!(mode(&app), InteractionMode::InDialogue(DialogueKind::Farmer));
    }

    #[test]
    fn test_dismissing_greeting_frees_input() {
        let mut app = greeting_app();
        run_until_greeted(&mut app);

        app.world_mut().send_event(DismissDialogueEvent);
        app.update();
        assert_eq!(mode(&app), InteractionMode::Free);

        tap_world(&mut app, Vec2::new(800.0, 700.0));
        run_frames(&mut app, 20);
        assert_eq!(player_position(&mut app), Vec2::new(800.0, 700.0));
    }
}
