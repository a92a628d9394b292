//! Camera that keeps the player centered on screen.
//!
//! There is no camera state of its own: the offset is recomputed from the
//! player position every frame and snaps without smoothing.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::components::Player;
use crate::core::WorldPosition;

/// Size of the visible screen area in pixels.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Viewport {
    pub size: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size: Vec2::new(1280.0, 720.0),
        }
    }
}

impl Viewport {
    pub fn half_size(&self) -> Vec2 {
        self.size / 2.0
    }
}

/// Screen position of the world origin: screen = world + offset.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Deref)]
pub struct CameraOffset(pub Vec2);

impl CameraOffset {
    /// Offset that puts `player` in the middle of `viewport`.
    pub fn centered_on(viewport: &Viewport, player: Vec2) -> Self {
        Self(viewport.half_size() - player)
    }

    /// World point shown at the middle of the screen.
    pub fn focus(&self, viewport: &Viewport) -> Vec2 {
        viewport.half_size() - self.0
    }
}

/// Follow the primary window size when there is one.
pub fn update_viewport(windows: Query<&Window, With<PrimaryWindow>>, mut viewport: ResMut<Viewport>) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let size = Vec2::new(window.width(), window.height());
    if viewport.size != size {
        viewport.size = size;
    }
}

/// Recenter on the player.
pub fn update_camera_offset(
    viewport: Res<Viewport>,
    player: Query<&WorldPosition, With<Player>>,
    mut offset: ResMut<CameraOffset>,
) {
    let Ok(position) = player.get_single() else {
        return;
    };
    let centered = CameraOffset::centered_on(&viewport, position.0);
    if *offset != centered {
        *offset = centered;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_centers_player() {
        let viewport = Viewport {
            size: Vec2::new(390.0, 844.0),
        };
        let player = Vec2::new(800.0, 800.0);
        let offset = CameraOffset::centered_on(&viewport, player);
        assert_eq!(offset.0 + player, viewport.half_size());
        assert_eq!(offset.focus(&viewport), player);
    }
}
