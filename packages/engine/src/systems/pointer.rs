//! Pointer sampling.
//!
//! Velocity is the raw delta between the last two samples. It is not
//! smoothed: a quick flick right before release is exactly what should be
//! handed to a thrown body.

use crate::core::Vec2;

/// Resting position before the first input event, far outside any viewport.
pub const POINTER_SENTINEL: Vec2 = Vec2::new(-10_000.0, -10_000.0);

#[derive(Clone, Debug)]
pub struct PointerTracker {
    pos: Vec2,
    prev: Vec2,
    velocity: Vec2,
    sampled: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            pos: POINTER_SENTINEL,
            prev: POINTER_SENTINEL,
            velocity: Vec2::zero(),
            sampled: false,
        }
    }

    /// Record a new pointer sample. The latest sample before a frame wins.
    pub fn move_to(&mut self, x: f32, y: f32) {
        let next = Vec2::new(x, y);
        if !next.is_finite() {
            return;
        }
        if self.sampled {
            self.prev = self.pos;
            self.velocity = next - self.prev;
        } else {
            // No real previous sample; a delta from the sentinel is meaningless.
            self.prev = next;
            self.velocity = Vec2::zero();
            self.sampled = true;
        }
        self.pos = next;
    }

    /// Start a new gesture at (x, y). The previous sample may belong to an
    /// unrelated earlier gesture, so velocity restarts at zero.
    pub fn press_at(&mut self, x: f32, y: f32) {
        let at = Vec2::new(x, y);
        if !at.is_finite() {
            return;
        }
        self.pos = at;
        self.prev = at;
        self.velocity = Vec2::zero();
        self.sampled = true;
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn previous(&self) -> Vec2 {
        self.prev
    }

    pub fn has_sample(&self) -> bool {
        self.sampled
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_sentinel_at_rest() {
        let p = PointerTracker::new();
        assert_eq!(p.position(), POINTER_SENTINEL);
        assert_eq!(p.velocity(), Vec2::zero());
        assert!(!p.has_sample());
    }

    #[test]
    fn first_sample_has_no_velocity() {
        let mut p = PointerTracker::new();
        p.move_to(200.0, 100.0);
        assert_eq!(p.position(), Vec2::new(200.0, 100.0));
        assert_eq!(p.velocity(), Vec2::zero());
    }

    #[test]
    fn velocity_is_raw_delta() {
        let mut p = PointerTracker::new();
        p.move_to(200.0, 100.0);
        p.move_to(212.0, 95.0);
        assert_eq!(p.velocity(), Vec2::new(12.0, -5.0));
        assert_eq!(p.previous(), Vec2::new(200.0, 100.0));
        p.move_to(212.0, 95.0);
        assert_eq!(p.velocity(), Vec2::zero());
    }

    #[test]
    fn press_restarts_gesture_without_velocity() {
        let mut p = PointerTracker::new();
        p.press_at(100.0, 100.0);
        p.press_at(700.0, 500.0);
        assert_eq!(p.position(), Vec2::new(700.0, 500.0));
        assert_eq!(p.velocity(), Vec2::zero());

        p.move_to(703.0, 498.0);
        assert_eq!(p.velocity(), Vec2::new(3.0, -2.0));
    }

    #[test]
    fn non_finite_samples_are_dropped() {
        let mut p = PointerTracker::new();
        p.move_to(10.0, 10.0);
        p.move_to(f32::NAN, 3.0);
        assert_eq!(p.position(), Vec2::new(10.0, 10.0));
    }
}
