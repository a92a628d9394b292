//! Looping ambient animation: sprite bobbing and frame flipping.

use bevy::prelude::*;

/// Vertical bob applied on top of an entity's projected position.
#[derive(Component, Debug, Clone)]
pub struct Bob {
    /// Peak displacement in pixels (upward).
    pub amplitude: f32,
    /// Seconds to go from rest to peak.
    pub half_period: f32,
    /// Whether the loop is running. Inactive bobs rest at zero.
    pub active: bool,
    elapsed: f32,
    offset: f32,
}

impl Bob {
    pub fn new(amplitude: f32, half_period: f32) -> Self {
        Self {
            amplitude,
            half_period,
            active: false,
            elapsed: 0.0,
            offset: 0.0,
        }
    }

    /// Swap the loop shape, restarting it only if the shape changed.
    pub fn set_profile(&mut self, amplitude: f32, half_period: f32) {
        if self.amplitude != amplitude || self.half_period != half_period {
            self.amplitude = amplitude;
            self.half_period = half_period;
            self.elapsed = 0.0;
        }
    }

    /// Current offset in world pixels (negative is up on screen).
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn advance(&mut self, dt: f32) {
        if !self.active || self.half_period <= 0.0 {
            self.elapsed = 0.0;
            self.offset = 0.0;
            return;
        }
        self.elapsed = (self.elapsed + dt) % (self.half_period * 2.0);
        self.offset = triangle(self.elapsed / self.half_period) * -self.amplitude;
    }
}

// 0 -> 1 over [0, 1], back to 0 over [1, 2].
fn triangle(phase: f32) -> f32 {
    if phase <= 1.0 {
        phase
    } else {
        2.0 - phase
    }
}

/// Flips between a fixed number of sprite frames on a timer.
#[derive(Component, Debug, Clone)]
pub struct FrameCycle {
    pub timer: Timer,
    pub frames: usize,
    pub current: usize,
}

impl FrameCycle {
    pub fn new(frames: usize, interval_secs: f32) -> Self {
        Self {
            timer: Timer::from_seconds(interval_secs, TimerMode::Repeating),
            frames: frames.max(1),
            current: 0,
        }
    }
}

/// Advance every bob loop.
pub fn animate_bobs(time: Res<Time>, mut query: Query<&mut Bob>) {
    let dt = time.delta_secs();
    for mut bob in query.iter_mut() {
        bob.advance(dt);
    }
}

/// Advance every frame cycle.
pub fn cycle_frames(time: Res<Time>, mut query: Query<&mut FrameCycle>) {
    for mut cycle in query.iter_mut() {
        cycle.timer.tick(time.delta());
        let flips = cycle.timer.times_finished_this_tick() as usize;
        if flips > 0 {
            cycle.current = (cycle.current + flips) % cycle.frames;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_bob_rests_at_zero() {
        let mut bob = Bob::new(3.0, 0.15);
        bob.advance(0.1);
        assert_eq!(bob.offset(), 0.0);
    }

    #[test]
    fn test_bob_peaks_at_half_period() {
        let mut bob = Bob::new(3.0, 0.15);
        bob.active = true;
        bob.advance(0.15);
        assert!((bob.offset() + 3.0).abs() < 1e-4);
        bob.advance(0.075);
        assert!((bob.offset() + 1.5).abs() < 1e-4);
    }

    #[test]
    fn test_deactivating_resets_offset() {
        let mut bob = Bob::new(2.0, 0.2);
        bob.active = true;
        bob.advance(0.1);
        assert!(bob.offset() < 0.0);
        bob.active = false;
        bob.advance(0.016);
        assert_eq!(bob.offset(), 0.0);
    }

    #[test]
    fn test_same_profile_keeps_phase() {
        let mut bob = Bob::new(2.0, 0.15);
        bob.active = true;
        bob.advance(0.1);
        let before = bob.offset();
        bob.set_profile(2.0, 0.15);
        bob.advance(0.0);
        assert_eq!(bob.offset(), before);
    }
}
