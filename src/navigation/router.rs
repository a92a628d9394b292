//! Straight-line routing with a single corner detour around obstacles.
//!
//! The router never reports errors. A target it cannot reach yields `None`
//! and the caller leaves the mover untouched.

use bevy::log::debug;
use bevy::math::{Rect, Vec2};

use super::geometry::segment_intersects_rect;

/// An accepted walk: one straight leg, or two legs via a corner waypoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Route {
    Direct(Vec2),
    Detour { waypoint: Vec2, target: Vec2 },
}

impl Route {
    /// Where the walk ends.
    pub fn target(&self) -> Vec2 {
        match *self {
            Route::Direct(target) => target,
            Route::Detour { target, .. } => target,
        }
    }

    /// Leg endpoints in walking order.
    pub fn legs(&self) -> Vec<Vec2> {
        match *self {
            Route::Direct(target) => vec![target],
            Route::Detour { waypoint, target } => vec![waypoint, target],
        }
    }
}

/// Plan a walk from `from` to `target`.
///
/// The target is clamped into `bounds` first. Targets inside an obstacle
/// are refused. When the straight segment is blocked, the four points one
/// `margin` beyond the corners of the first blocking obstacle are tried and
/// the one with the shortest total path whose both legs are clear wins.
pub fn route(from: Vec2, target: Vec2, bounds: Rect, obstacles: &[Rect], margin: f32) -> Option<Route> {
    let target = target.clamp(bounds.min, bounds.max);

    if obstacles.iter().any(|rect| rect.contains(target)) {
        debug!("Refusing walk to {:?}: target is inside an obstacle", target);
        return None;
    }

    let Some(blocker) = obstacles
        .iter()
        .find(|rect| segment_intersects_rect(from, target, rect))
    else {
        return Some(Route::Direct(target));
    };

    let clear = |a: Vec2, b: Vec2| !obstacles.iter().any(|rect| segment_intersects_rect(a, b, rect));

    let mut best: Option<(Vec2, f32)> = None;
    for waypoint in detour_candidates(blocker, margin) {
        if !bounds.contains(waypoint) || obstacles.iter().any(|rect| rect.contains(waypoint)) {
            continue;
        }
        if !clear(from, waypoint) || !clear(waypoint, target) {
            continue;
        }
        let score = from.distance(waypoint) + waypoint.distance(target);
        if best.map_or(true, |(_, best_score)| score < best_score) {
            best = Some((waypoint, score));
        }
    }

    match best {
        Some((waypoint, _)) => Some(Route::Detour { waypoint, target }),
        None => {
            debug!("Dropping walk to {:?}: no clear detour around {:?}", target, blocker);
            None
        }
    }
}

/// Points `margin` out from each corner: top-left, top-right, bottom-left,
/// bottom-right.
fn detour_candidates(rect: &Rect, margin: f32) -> [Vec2; 4] {
    let Rect { min, max } = *rect;
    [
        Vec2::new(min.x - margin, min.y - margin),
        Vec2::new(max.x + margin, min.y - margin),
        Vec2::new(min.x - margin, max.y + margin),
        Vec2::new(max.x + margin, max.y + margin),
    ]
}
