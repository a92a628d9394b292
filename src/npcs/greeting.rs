//! Scripted farmer welcome: the only sequence that runs with input locked.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::components::{FarmerGreeting, GreetingConfig, Npc};
use crate::core::{Bob, Facing, InteractionEvent, InteractionMode, LandmarkKind, WorldPosition};
use crate::navigation::Route;
use crate::player::{Mover, MovementConfig, Player};
use crate::world::WorldConfig;

/// Lock input and arm the greeting as the world comes up.
pub fn begin_greeting(
    mut commands: Commands,
    config: Res<GreetingConfig>,
    mut mode: ResMut<InteractionMode>,
) {
    *mode = InteractionMode::Locked;
    commands.insert_resource(FarmerGreeting::new(&config));
}

/// Clock and tuning the greeting script reads each frame.
#[derive(SystemParam)]
pub struct GreetingContext<'w> {
    time: Res<'w, Time>,
    config: Res<'w, GreetingConfig>,
    movement: Res<'w, MovementConfig>,
    world: Res<'w, WorldConfig>,
}

pub fn run_greeting(
    context: GreetingContext,
    greeting: Option<ResMut<FarmerGreeting>>,
    mut mode: ResMut<InteractionMode>,
    player: Query<&WorldPosition, (With<Player>, Without<Npc>)>,
    mut npcs: Query<(&Npc, &WorldPosition, &mut Facing, &mut Mover, &mut Bob), Without<Player>>,
    mut interactions: EventWriter<InteractionEvent>,
) {
    let Some(mut greeting) = greeting else {
        return;
    };
    let GreetingContext {
        time,
        config,
        movement,
        world,
    } = context;
    let farmer = npcs
        .iter_mut()
        .find(|(npc, ..)| npc.kind == LandmarkKind::Farmer);
    let Some((_, position, mut facing, mut mover, mut bob)) = farmer else {
        if !matches!(*greeting, FarmerGreeting::Done) {
            warn!("No farmer in the world, skipping the greeting");
            *greeting = FarmerGreeting::Done;
            *mode = InteractionMode::Free;
        }
        return;
    };

    match &mut *greeting {
        FarmerGreeting::Waiting(timer) => {
            if !timer.tick(time.delta()).finished() {
                return;
            }
            let Ok(player) = player.get_single() else {
                return;
            };
            let stand = player.0 + config.stand_offset * world.tile_size;
            debug!("Farmer walking from {:?} to {:?}", position.0, stand);
            mover.start(
                Route::Direct(stand),
                position.0,
                &mut facing,
                movement.move_speed,
                movement.frame_ms,
            );
            *greeting = FarmerGreeting::Walking;
        }
        FarmerGreeting::Walking => {
            if mover.is_moving() {
                return;
            }
            *facing = Facing::Left;
            bob.set_profile(config.talk_bob.0, config.talk_bob.1);
            bob.active = true;
            *greeting = FarmerGreeting::Talking(Timer::from_seconds(config.talk_duration, TimerMode::Once));
        }
        FarmerGreeting::Talking(timer) => {
            if !timer.tick(time.delta()).finished() {
                return;
            }
            bob.active = false;
            info!("Farmer greets the player");
            *mode = InteractionMode::InDialogue(LandmarkKind::Farmer.dialogue());
            interactions.send(InteractionEvent {
                landmark: LandmarkKind::Farmer,
            });
            *greeting = FarmerGreeting::Done;
        }
        FarmerGreeting::Done => {}
    }
}

/// Drop the greeting with the world it belongs to.
pub fn end_greeting(mut commands: Commands) {
    commands.remove_resource::<FarmerGreeting>();
}
