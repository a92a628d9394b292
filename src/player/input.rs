//! Tap handling: screen to world mapping and target resolution.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::camera::CameraOffset;
use super::components::{MovementConfig, Player};
use super::movement::Mover;
use crate::core::{Facing, InteractionEvent, InteractionMode, LandmarkKind, TapEvent, WorldPosition};
use crate::navigation::route;
use crate::world::{Landmark, Obstacle, WorldConfig};

/// What a tap asks for once resolved against the landmarks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TapOutcome {
    /// Fire the landmark's interaction; do not move.
    Interact(LandmarkKind),
    /// Walk toward a point (still subject to routing).
    Walk(Vec2),
}

/// Convert a screen coordinate into world pixels.
pub fn screen_to_world(screen: Vec2, offset: &CameraOffset) -> Vec2 {
    screen - offset.0
}

/// Decide what a tap at `world` means for a player standing at `player`.
///
/// Landmarks whose hit region contains the tap are considered in kind
/// priority order; the first one decides. Close enough interacts, too far
/// walks to the landmark's approach point.
pub fn resolve_tap<'a>(
    world: Vec2,
    player: Vec2,
    landmarks: impl IntoIterator<Item = (&'a Landmark, Vec2)>,
) -> TapOutcome {
    let hit = landmarks
        .into_iter()
        .filter(|(landmark, center)| landmark.hit_region(*center).contains(world))
        .min_by_key(|(landmark, _)| landmark.kind);

    match hit {
        Some((landmark, center)) if landmark.within_reach(center, player) => {
            TapOutcome::Interact(landmark.kind)
        }
        Some((landmark, center)) => TapOutcome::Walk(landmark.approach_point(center, player)),
        None => TapOutcome::Walk(world),
    }
}

/// Turn mouse clicks and new touches into tap events.
pub fn emit_taps(
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut taps: EventWriter<TapEvent>,
) {
    if mouse.just_pressed(MouseButton::Left) {
        if let Some(cursor) = windows.get_single().ok().and_then(|w| w.cursor_position()) {
            taps.send(TapEvent { screen: cursor });
        }
    }
    for touch in touches.iter_just_pressed() {
        taps.send(TapEvent {
            screen: touch.position(),
        });
    }
}

/// Read-only settings a tap is resolved against.
#[derive(SystemParam)]
pub struct TapContext<'w> {
    offset: Res<'w, CameraOffset>,
    movement: Res<'w, MovementConfig>,
    world: Res<'w, WorldConfig>,
}

/// Resolve taps into interactions or routed movement commands.
pub fn handle_taps(
    mut taps: EventReader<TapEvent>,
    mut mode: ResMut<InteractionMode>,
    context: TapContext,
    landmarks: Query<(&Landmark, &WorldPosition), Without<Player>>,
    obstacles: Query<&Obstacle>,
    mut player_query: Query<(&WorldPosition, &mut Facing, &mut Mover), With<Player>>,
    mut interactions: EventWriter<InteractionEvent>,
) {
    let Ok((position, mut facing, mut mover)) = player_query.get_single_mut() else {
        taps.clear();
        return;
    };
    let player = position.0;

    for tap in taps.read() {
        if !mode.accepts_taps() {
            debug!("Tap swallowed in {:?}", *mode);
            continue;
        }

        let world_point = screen_to_world(tap.screen, &context.offset);
        let outcome = resolve_tap(
            world_point,
            player,
            landmarks.iter().map(|(landmark, center)| (landmark, center.0)),
        );

        match outcome {
            TapOutcome::Interact(kind) => {
                info!("Interacting with {:?}", kind);
                mover.stop();
                *mode = InteractionMode::InDialogue(kind.dialogue());
                interactions.send(InteractionEvent { landmark: kind });
            }
            TapOutcome::Walk(target) => {
                let rects: Vec<Rect> = obstacles.iter().map(|obstacle| obstacle.0).collect();
                match route(
                    player,
                    target,
                    context.world.walkable_bounds(),
                    &rects,
                    context.world.tile_size,
                ) {
                    Some(planned) => {
                        debug!("Walking to {:?} via {:?}", planned.target(), planned);
                        mover.start(
                            planned,
                            player,
                            &mut facing,
                            context.movement.move_speed,
                            context.movement.frame_ms,
                        );
                    }
                    None => debug!("Ignoring tap at {:?}", world_point),
                }
            }
        }
    }
}
