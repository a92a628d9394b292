//! Position and facing shared by every entity that lives in world space.

use bevy::prelude::*;

/// Position in world pixels, origin at the top-left corner of the tile
/// grid, y pointing down.
///
/// For anything carrying a `Mover` the stepper is the only writer.
/// Rendering reads it and projects it into a `Transform`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Deref, DerefMut)]
pub struct WorldPosition(pub Vec2);

/// One of four cardinal facings, used to pick a sprite.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    /// Facing for a displacement, decided by its dominant axis.
    ///
    /// Ties go to the vertical axis. Screen y grows downward, so a negative
    /// `dy` faces up.
    pub fn from_delta(delta: Vec2) -> Self {
        if delta.x.abs() > delta.y.abs() {
            if delta.x > 0.0 {
                Facing::Right
            } else {
                Facing::Left
            }
        } else if delta.y > 0.0 {
            Facing::Down
        } else {
            Facing::Up
        }
    }

    /// Unit vector pointing the way this facing looks.
    pub fn forward(self) -> Vec2 {
        match self {
            Facing::Up => Vec2::new(0.0, -1.0),
            Facing::Down => Vec2::new(0.0, 1.0),
            Facing::Left => Vec2::new(-1.0, 0.0),
            Facing::Right => Vec2::new(1.0, 0.0),
        }
    }
}
