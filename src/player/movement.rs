//! Fixed-step walking along routed legs.
//!
//! A `Mover` is either idle or walking one leg, with at most one more leg
//! queued behind it (the target after a detour waypoint). Each frame moves
//! by a constant increment; the last step snaps onto the leg target.

use bevy::prelude::*;

use super::components::{MovementConfig, Player, Walking};
use crate::core::{Bob, Facing, WorldPosition};
use crate::navigation::Route;
use crate::world::{TileField, WorldConfig, WorldEntity};

/// One straight leg with its precomputed step plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub target: Vec2,
    pub increment: Vec2,
    pub steps: u32,
    pub step: u32,
    pub facing: Facing,
}

impl Leg {
    /// Plan a leg so that `steps` frames of `frame_ms` cover the distance at
    /// `speed` units per second.
    pub fn plan(from: Vec2, target: Vec2, speed: f32, frame_ms: f32, min_steps: u32) -> Self {
        let delta = target - from;
        let duration_ms = delta.length() / speed * 1000.0;
        let steps = ((duration_ms / frame_ms).ceil() as u32).max(min_steps).max(1);
        Self {
            target,
            increment: delta / steps as f32,
            steps,
            step: 0,
            facing: Facing::from_delta(delta),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum MoveState {
    #[default]
    Idle,
    Moving(Leg),
}

/// Walking state machine for anything that moves by command.
#[derive(Component, Debug, Clone, Default)]
pub struct Mover {
    state: MoveState,
    pending: Option<Vec2>,
    speed: f32,
    frame_ms: f32,
    min_steps: u32,
}

impl Mover {
    pub fn new(min_steps: u32) -> Self {
        Self {
            min_steps,
            ..default()
        }
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.state, MoveState::Moving(_))
    }

    /// The leg being walked, if any.
    pub fn current_leg(&self) -> Option<&Leg> {
        match &self.state {
            MoveState::Moving(leg) => Some(leg),
            MoveState::Idle => None,
        }
    }

    /// Where the current command ends.
    pub fn destination(&self) -> Option<Vec2> {
        self.pending.or(self.current_leg().map(|leg| leg.target))
    }

    /// Replace whatever is in flight with `route`, starting from `from`.
    pub fn start(&mut self, route: Route, from: Vec2, facing: &mut Facing, speed: f32, frame_ms: f32) {
        self.speed = speed;
        self.frame_ms = frame_ms;
        self.state = MoveState::Idle;
        self.pending = None;

        let mut legs = route.legs().into_iter();
        let Some(first) = legs.next() else {
            return;
        };
        self.pending = legs.next();
        self.begin_leg(from, first, facing);
    }

    /// Drop the command in flight.
    pub fn stop(&mut self) {
        self.state = MoveState::Idle;
        self.pending = None;
    }

    /// Advance one frame, keeping `position` inside `bounds`.
    pub fn step(&mut self, position: &mut Vec2, facing: &mut Facing, bounds: Rect) {
        let MoveState::Moving(leg) = &mut self.state else {
            return;
        };

        leg.step += 1;
        if leg.step < leg.steps {
            *position = (*position + leg.increment).clamp(bounds.min, bounds.max);
            return;
        }

        *position = leg.target;
        self.state = MoveState::Idle;
        if let Some(next) = self.pending.take() {
            self.begin_leg(*position, next, facing);
        }
    }

    fn begin_leg(&mut self, from: Vec2, target: Vec2, facing: &mut Facing) {
        let mut target = target;
        if target == from {
            match self.pending.take() {
                Some(next) => target = next,
                None => return,
            }
        }
        let leg = Leg::plan(from, target, self.speed, self.frame_ms, self.min_steps);
        *facing = leg.facing;
        self.state = MoveState::Moving(leg);
    }
}

/// Step every mover one frame. The only writer of mover positions.
pub fn advance_movers(
    world: Res<WorldConfig>,
    mut query: Query<(&mut Mover, &mut WorldPosition, &mut Facing, Option<&mut Walking>)>,
) {
    let bounds = world.walkable_bounds();
    for (mut mover, mut position, mut facing, walking) in query.iter_mut() {
        if mover.is_moving() {
            mover.step(&mut position.0, &mut facing, bounds);
        }
        if let Some(mut walking) = walking {
            let moving = mover.is_moving();
            if walking.0 != moving {
                walking.0 = moving;
            }
        }
    }
}

/// Keep the walking bob in step with the walking flag.
pub fn sync_walk_bob(config: Res<MovementConfig>, mut query: Query<(&Walking, &mut Bob), Changed<Walking>>) {
    for (walking, mut bob) in query.iter_mut() {
        bob.set_profile(config.walk_bob.0, config.walk_bob.1);
        bob.active = walking.0;
    }
}

/// Mark the tile under the player as visited.
pub fn mark_visited_tiles(
    tiles: Option<ResMut<TileField>>,
    player: Query<&WorldPosition, (With<Player>, Changed<WorldPosition>)>,
) {
    let Some(mut tiles) = tiles else {
        return;
    };
    for position in player.iter() {
        if tiles.mark_visited(position.0) {
            debug!("Visited tile {:?}", tiles.cell_at(position.0));
        }
    }
}

/// Spawn the player entity at `position`.
pub fn spawn_player(commands: &mut Commands, position: Vec2) -> Entity {
    let config = MovementConfig::default();
    commands
        .spawn((
            Player,
            WorldEntity,
            WorldPosition(position),
            Facing::Down,
            Mover::new(1),
            Walking(false),
            Bob::new(config.walk_bob.0, config.walk_bob.1),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::inset_bounds;

    fn bounds() -> Rect {
        inset_bounds(50, 32.0)
    }

    fn run_to_idle(mover: &mut Mover, position: &mut Vec2, facing: &mut Facing) -> Vec<Vec2> {
        let mut trail = Vec::new();
        for _ in 0..10_000 {
            if !mover.is_moving() {
                break;
            }
            mover.step(position, facing, bounds());
            trail.push(*position);
        }
        trail
    }

    #[test]
    fn test_leg_step_count_matches_speed() {
        let leg = Leg::plan(Vec2::new(800.0, 800.0), Vec2::new(800.0, 700.0), 400.0, 16.0, 1);
        // 100 px at 400 px/s = 250 ms = 15.625 frames.
        assert_eq!(leg.steps, 16);
        assert_eq!(leg.facing, Facing::Up);
        assert!((leg.increment.y + 6.25).abs() < 1e-5);
    }

    #[test]
    fn test_min_steps_applies_to_short_legs() {
        let leg = Leg::plan(Vec2::ZERO, Vec2::new(10.0, 0.0), 400.0, 16.0, 40);
        assert_eq!(leg.steps, 40);
    }

    #[test]
    fn test_walk_ends_exactly_on_target() {
        let mut mover = Mover::new(1);
        let mut position = Vec2::new(800.0, 800.0);
        let mut facing = Facing::Down;
        mover.start(Route::Direct(Vec2::new(800.0, 700.0)), position, &mut facing, 400.0, 16.0);
        assert_eq!(facing, Facing::Up);

        let trail = run_to_idle(&mut mover, &mut position, &mut facing);
        assert_eq!(trail.len(), 16);
        assert_eq!(position, Vec2::new(800.0, 700.0));
        assert!(!mover.is_moving());
    }

    #[test]
    fn test_detour_walks_both_legs() {
        let mut mover = Mover::new(1);
        let mut position = Vec2::new(800.0, 800.0);
        let mut facing = Facing::Down;
        let route = Route::Detour {
            waypoint: Vec2::new(864.0, 640.0),
            target: Vec2::new(1050.0, 650.0),
        };
        mover.start(route, position, &mut facing, 400.0, 16.0);
        assert_eq!(facing, Facing::Up);
        assert_eq!(mover.destination(), Some(Vec2::new(1050.0, 650.0)));

        let trail = run_to_idle(&mut mover, &mut position, &mut facing);
        assert!(trail.contains(&Vec2::new(864.0, 640.0)));
        assert_eq!(position, Vec2::new(1050.0, 650.0));
        assert_eq!(facing, Facing::Right);
    }

    #[test]
    fn test_new_command_preempts_old() {
        let mut mover = Mover::new(1);
        let mut position = Vec2::new(800.0, 800.0);
        let mut facing = Facing::Down;
        mover.start(Route::Direct(Vec2::new(800.0, 400.0)), position, &mut facing, 400.0, 16.0);
        for _ in 0..5 {
            mover.step(&mut position, &mut facing, bounds());
        }

        mover.start(Route::Direct(Vec2::new(1000.0, 800.0)), position, &mut facing, 400.0, 16.0);
        assert_eq!(facing, Facing::Right);
        run_to_idle(&mut mover, &mut position, &mut facing);
        assert_eq!(position, Vec2::new(1000.0, 800.0));
    }

    #[test]
    fn test_zero_length_leg_stays_idle() {
        let mut mover = Mover::new(1);
        let mut facing = Facing::Left;
        mover.start(Route::Direct(Vec2::new(5.0, 5.0)), Vec2::new(5.0, 5.0), &mut facing, 400.0, 16.0);
        assert!(!mover.is_moving());
        assert_eq!(facing, Facing::Left);
    }

    #[test]
    fn test_steps_are_clamped_to_bounds() {
        let mut mover = Mover::new(1);
        let mut position = Vec2::new(20.0, 800.0);
        let mut facing = Facing::Down;
        // A leg aimed past the border (targets are normally clamped first).
        mover.start(Route::Direct(Vec2::new(-200.0, 800.0)), position, &mut facing, 400.0, 16.0);
        mover.step(&mut position, &mut facing, bounds());
        assert_eq!(position.x, 16.0);
    }

    #[test]
    fn test_stop_abandons_pending_leg() {
        let mut mover = Mover::new(1);
        let mut facing = Facing::Down;
        let route = Route::Detour {
            waypoint: Vec2::new(10.0, 10.0),
            target: Vec2::new(20.0, 20.0),
        };
        mover.start(route, Vec2::ZERO, &mut facing, 400.0, 16.0);
        mover.stop();
        assert!(!mover.is_moving());
        assert_eq!(mover.destination(), None);
    }
}
