//! Timed, eased interpolation
//!
//! Drives the hook during casts (with a parabolic loft) and reel-ins.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Quadratic ease-in-out on [0, 1]
#[inline]
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Height of the parabolic loft at eased progress `p`
#[inline]
pub fn arc_offset(height: f32, p: f32) -> f32 {
    4.0 * height * p * (1.0 - p)
}

/// A time-boxed move from `from` to `to`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    pub from: Vec2,
    pub to: Vec2,
    pub duration: f32,
    pub elapsed: f32,
    /// Upward loft at mid-flight (0 = straight line)
    pub arc_height: f32,
}

impl Tween {
    pub fn new(from: Vec2, to: Vec2, duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            arc_height: 0.0,
        }
    }

    pub fn with_arc(mut self, arc_height: f32) -> Self {
        self.arc_height = arc_height;
        self
    }

    /// Linear time progress 0..1
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Current position; lands exactly on `to` once finished
    pub fn position(&self) -> Vec2 {
        if self.is_finished() {
            return self.to;
        }
        let p = ease_in_out_quad(self.progress());
        let mut pos = self.from.lerp(self.to, p);
        pos.y -= arc_offset(self.arc_height, p);
        pos
    }

    /// Advance by `dt`, returning the new position
    pub fn advance(&mut self, dt: f32) -> Vec2 {
        self.elapsed += dt.max(0.0);
        self.position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        assert!((ease_in_out_quad(0.5) - 0.5).abs() < 1e-6);
        assert!(ease_in_out_quad(0.25) < 0.25);
        assert!(ease_in_out_quad(0.75) > 0.75);
    }

    #[test]
    fn test_arc_peaks_at_half() {
        assert_eq!(arc_offset(100.0, 0.0), 0.0);
        assert_eq!(arc_offset(100.0, 1.0), 0.0);
        assert_eq!(arc_offset(100.0, 0.5), 100.0);
    }

    #[test]
    fn test_tween_lofts_above_straight_line() {
        let from = Vec2::new(0.0, 0.0);
        let to = Vec2::new(100.0, 100.0);
        let mut tween = Tween::new(from, to, 1.0).with_arc(50.0);
        let mid = tween.advance(0.5);
        assert!((mid.x - 50.0).abs() < 1e-4);
        assert!((mid.y - 0.0).abs() < 1e-4); // 50 straight-line minus 50 loft
        assert!(!tween.is_finished());

        let end = tween.advance(0.6);
        assert!(tween.is_finished());
        assert_eq!(end, to);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let tween = Tween::new(Vec2::ZERO, Vec2::ONE, 0.0);
        assert!(tween.is_finished());
        assert_eq!(tween.position(), Vec2::ONE);
    }
}
