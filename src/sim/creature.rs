//! Creature entity

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::{PLAY_FIELD_MAX_X, PLAY_FIELD_MIN_X};

/// Vertical bob amplitude (pixels)
const BOB_AMPLITUDE: f32 = 2.0;

/// Swimming direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    Left,
    Right,
}

impl Heading {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Heading::Left => -1.0,
            Heading::Right => 1.0,
        }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }
}

/// Display data handed to the host when a creature is landed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchInfo {
    pub species_id: String,
    pub name: String,
    /// kg
    pub weight: f32,
    /// gold
    pub value: f32,
    pub size: f32,
}

/// A live creature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: u32,
    pub species_id: String,
    pub name: String,
    pub pos: Vec2,
    /// Depth the creature bobs around
    pub base_y: f32,
    /// Body length (also the box width)
    pub size: f32,
    pub height: f32,
    pub speed: f32,
    pub heading: Heading,
    pub weight: f32,
    pub value: f32,
    pub color: u32,
}

impl Creature {
    /// Advance one tick: swim, bob, bounce off the play-field edges
    pub fn update(&mut self, dt: f32, time_secs: f32) {
        self.pos.x += self.speed * self.heading.sign() * dt;

        let frequency = 0.5 + self.speed / 100.0;
        let phase = self.id as f32 * 0.618;
        self.pos.y = self.base_y + (time_secs * frequency + phase).sin() * BOB_AMPLITUDE;

        let past_edge = match self.heading {
            Heading::Right => self.pos.x > PLAY_FIELD_MAX_X,
            Heading::Left => self.pos.x < PLAY_FIELD_MIN_X,
        };
        if past_edge {
            self.heading = self.heading.reversed();
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::new(self.size, self.height))
    }

    pub fn catch_info(&self) -> CatchInfo {
        CatchInfo {
            species_id: self.species_id.clone(),
            name: self.name.clone(),
            weight: self.weight,
            value: self.value,
            size: self.size,
        }
    }
}

#[cfg(test)]
pub(crate) fn test_creature(id: u32, pos: Vec2) -> Creature {
    Creature {
        id,
        species_id: "atlantic_cod".into(),
        name: "Atlantic Cod".into(),
        pos,
        base_y: pos.y,
        size: 20.0,
        height: 20.0,
        speed: 30.0,
        heading: Heading::Right,
        weight: 2.5,
        value: 15.0,
        color: 0x8B7355,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swims_along_heading() {
        let mut fish = test_creature(1, Vec2::new(300.0, 500.0));
        fish.update(0.5, 0.0);
        assert!((fish.pos.x - 315.0).abs() < 1e-4);

        fish.heading = Heading::Left;
        fish.update(1.0, 0.0);
        assert!((fish.pos.x - 285.0).abs() < 1e-4);
    }

    #[test]
    fn test_bounces_off_right_edge() {
        let mut fish = test_creature(1, Vec2::new(PLAY_FIELD_MAX_X - 1.0, 500.0));
        fish.update(0.1, 0.0);
        assert_eq!(fish.heading, Heading::Left);
        let x = fish.pos.x;
        fish.update(0.1, 0.0);
        assert!(fish.pos.x < x);
    }

    #[test]
    fn test_bounces_off_left_edge() {
        let mut fish = test_creature(1, Vec2::new(PLAY_FIELD_MIN_X + 1.0, 500.0));
        fish.heading = Heading::Left;
        fish.update(0.1, 0.0);
        assert_eq!(fish.heading, Heading::Right);
    }

    #[test]
    fn test_bob_stays_near_base_depth() {
        let mut fish = test_creature(7, Vec2::new(300.0, 500.0));
        for i in 0..200 {
            fish.update(1.0 / 60.0, i as f32 / 60.0);
            assert!((fish.pos.y - 500.0).abs() <= BOB_AMPLITUDE + 1e-4);
        }
    }

    #[test]
    fn test_bounds_centered() {
        let fish = test_creature(1, Vec2::new(100.0, 200.0));
        let bounds = fish.bounds();
        assert_eq!(bounds.min, Vec2::new(90.0, 190.0));
        assert_eq!(bounds.max, Vec2::new(110.0, 210.0));
    }

    #[test]
    fn test_heading_helpers() {
        assert_eq!(Heading::Left.sign(), -1.0);
        assert_eq!(Heading::Right.reversed(), Heading::Left);
    }
}
