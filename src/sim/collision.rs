//! Collision detection
//!
//! Hook and creatures are both treated as axis-aligned boxes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box of `size` centred on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Overlap test; touching edges count as overlap
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

/// First candidate whose box overlaps `probe`, in iteration order
pub fn first_overlap<K>(
    probe: &Aabb,
    candidates: impl IntoIterator<Item = (K, Aabb)>,
) -> Option<K> {
    candidates
        .into_iter()
        .find(|(_, bounds)| probe.overlaps(bounds))
        .map(|(key, _)| key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_inside_creature_overlaps() {
        let hook = Aabb::new(Vec2::new(95.0, 195.0), Vec2::new(105.0, 205.0));
        let creature = Aabb::new(Vec2::new(90.0, 190.0), Vec2::new(110.0, 210.0));
        assert!(hook.overlaps(&creature));
        assert!(creature.overlaps(&hook));
    }

    #[test]
    fn test_separated_boxes_miss() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(11.0, 0.0), Vec2::new(20.0, 10.0));
        let c = Aabb::new(Vec2::new(0.0, 10.5), Vec2::new(10.0, 20.0));
        assert!(!a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_touching_edges_overlap() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_from_center() {
        let b = Aabb::from_center(Vec2::new(100.0, 200.0), Vec2::new(8.0, 8.0));
        assert_eq!(b.min, Vec2::new(96.0, 196.0));
        assert_eq!(b.max, Vec2::new(104.0, 204.0));
        assert_eq!(b.center(), Vec2::new(100.0, 200.0));
        assert_eq!(b.size(), Vec2::new(8.0, 8.0));
    }

    #[test]
    fn test_first_overlap_picks_earliest() {
        let probe = Aabb::from_center(Vec2::new(50.0, 50.0), Vec2::splat(10.0));
        let candidates = vec![
            (1u32, Aabb::from_center(Vec2::new(200.0, 50.0), Vec2::splat(10.0))),
            (2, Aabb::from_center(Vec2::new(52.0, 50.0), Vec2::splat(10.0))),
            (3, Aabb::from_center(Vec2::new(48.0, 50.0), Vec2::splat(10.0))),
        ];
        assert_eq!(first_overlap(&probe, candidates), Some(2));
        assert_eq!(first_overlap::<u32>(&probe, Vec::new()), None);
    }
}
