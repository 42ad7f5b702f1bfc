//! Vertical camera

use serde::{Deserialize, Serialize};

use crate::consts::VIEWPORT_HEIGHT;

/// Visible world slice; only the vertical extent matters to the simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub top: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            top: 0.0,
            height: VIEWPORT_HEIGHT,
        }
    }
}

impl Viewport {
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Centre the viewport on `y`
    pub fn follow(&mut self, y: f32) {
        self.top = y - self.height / 2.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_centers() {
        let mut view = Viewport::default();
        view.follow(1000.0);
        assert_eq!(view.top, 700.0);
        assert_eq!(view.bottom(), 1300.0);
    }
}
