//! Proportional pursuit of a point behind the player.
//!
//! No pathfinding: the companion walks straight through buildings.

use bevy::prelude::*;

use super::components::{Companion, CompanionConfig, CompanionState, FollowTimer};
use crate::core::{Bob, Facing, WorldPosition};
use crate::player::Player;
use crate::world::WorldEntity;

/// Result of one pursuit tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pursuit {
    pub position: Vec2,
    pub state: CompanionState,
}

/// Spot the companion aims for: `trail_distance` behind the player.
pub fn trail_point(player: Vec2, facing: Facing, trail_distance: f32) -> Vec2 {
    player - facing.forward() * trail_distance
}

/// One tick of the controller.
pub fn pursue(position: Vec2, target: Vec2, config: &CompanionConfig) -> Pursuit {
    let delta = target - position;
    let distance = delta.length();
    if distance > config.arrive_threshold {
        Pursuit {
            position: position + delta * config.gain(distance),
            state: CompanionState::Walking,
        }
    } else {
        Pursuit {
            position,
            state: CompanionState::Idling,
        }
    }
}

/// Run the pursuit ticks that elapsed this frame.
pub fn follow_player(
    time: Res<Time>,
    config: Res<CompanionConfig>,
    mut timer: ResMut<FollowTimer>,
    player: Query<(&WorldPosition, &Facing), (With<Player>, Without<Companion>)>,
    mut companions: Query<
        (&mut WorldPosition, &mut Facing, &mut CompanionState),
        (With<Companion>, Without<Player>),
    >,
) {
    timer.0.tick(time.delta());
    let ticks = timer.0.times_finished_this_tick();
    if ticks == 0 {
        return;
    }
    let Ok((player_position, player_facing)) = player.get_single() else {
        return;
    };
    let target = trail_point(player_position.0, *player_facing, config.trail_distance);

    for (mut position, mut facing, mut state) in companions.iter_mut() {
        for _ in 0..ticks {
            let step = pursue(position.0, target, &config);
            position.0 = step.position;
            if step.state == CompanionState::Walking {
                *facing = *player_facing;
            }
            state.set_if_neq(step.state);
        }
    }
}

/// Swap the bob loop when the companion starts or stops walking.
pub fn sync_companion_bob(
    config: Res<CompanionConfig>,
    mut query: Query<(&CompanionState, &mut Bob), Changed<CompanionState>>,
) {
    for (state, mut bob) in query.iter_mut() {
        let (amplitude, half_period) = config.bob_for(*state);
        bob.set_profile(amplitude, half_period);
        bob.active = true;
    }
}

/// Spawn the companion next to a freshly spawned player.
pub fn spawn_companion(commands: &mut Commands, player: Vec2) -> Entity {
    let config = CompanionConfig::default();
    let (amplitude, half_period) = config.idle_bob;
    let mut bob = Bob::new(amplitude, half_period);
    bob.active = true;
    commands
        .spawn((
            Companion,
            WorldEntity,
            WorldPosition(player + config.spawn_offset),
            Facing::Down,
            CompanionState::Idling,
            bob,
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_point_is_behind_facing() {
        let player = Vec2::new(800.0, 800.0);
        assert_eq!(trail_point(player, Facing::Up, 60.0), Vec2::new(800.0, 860.0));
        assert_eq!(trail_point(player, Facing::Down, 60.0), Vec2::new(800.0, 740.0));
        assert_eq!(trail_point(player, Facing::Left, 60.0), Vec2::new(860.0, 800.0));
        assert_eq!(trail_point(player, Facing::Right, 60.0), Vec2::new(740.0, 800.0));
    }

    #[test]
    fn test_gain_bands() {
        let config = CompanionConfig::default();
        assert_eq!(config.gain(250.0), 0.3);
        assert_eq!(config.gain(200.0), 0.2);
        assert_eq!(config.gain(150.0), 0.2);
        assert_eq!(config.gain(100.0), 0.1);
        assert_eq!(config.gain(4.0), 0.1);
    }

    #[test]
    fn test_pursue_moves_proportionally() {
        let config = CompanionConfig::default();
        let step = pursue(Vec2::ZERO, Vec2::new(300.0, 0.0), &config);
        assert_eq!(step.state, CompanionState::Walking);
        assert!((step.position.x - 90.0).abs() < 1e-4);

        let step = pursue(Vec2::ZERO, Vec2::new(50.0, 0.0), &config);
        assert!((step.position.x - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_pursue_idles_within_threshold() {
        let config = CompanionConfig::default();
        let step = pursue(Vec2::new(10.0, 10.0), Vec2::new(12.0, 11.0), &config);
        assert_eq!(step.state, CompanionState::Idling);
        assert_eq!(step.position, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_pursuit_converges() {
        let config = CompanionConfig::default();
        let target = Vec2::new(500.0, -120.0);
        let mut position = Vec2::ZERO;
        let mut ticks = 0;
        loop {
            let step = pursue(position, target, &config);
            position = step.position;
            if step.state == CompanionState::Idling {
                break;
            }
            ticks += 1;
            assert!(ticks < 500, "never arrived");
        }
        assert!(position.distance(target) <= config.arrive_threshold);
    }
}
