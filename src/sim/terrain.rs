//! Cavern wall generation
//!
//! Walls are a pure function of depth, side and area parameters. Segments sit
//! on a fixed grid of `SEGMENT_HEIGHT`, so the same depth always produces the
//! same point no matter how generation is chunked.

use serde::{Deserialize, Serialize};

use super::area::TerrainParameters;
use super::prng::{seeded_random, seeded_range};
use crate::consts::*;

/// Seed advance per pixel of depth
const SEED_DEPTH_SCALE: f64 = 0.1;
/// Jitter sample seed = side seed * this
const JITTER_SEED_SCALE: f64 = 1.5;
/// Jitter amplitude per unit of roughness
const JITTER_SCALE: f32 = 20.0;

/// Which cavern wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallSide {
    Left,
    Right,
}

impl WallSide {
    fn seed_offset(self) -> f64 {
        match self {
            WallSide::Left => 0.0,
            WallSide::Right => 1000.0,
        }
    }
}

/// One wall boundary point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallPoint {
    pub x: f32,
    pub depth: f32,
}

/// 0 at the surface, 1 from `EASE_DISTANCE` down
#[inline]
pub fn ease_factor(depth: f32) -> f32 {
    ((depth - WATER_LEVEL) / EASE_DISTANCE).clamp(0.0, 1.0)
}

/// Distance of a wall from its world edge at `depth`
///
/// Never exceeds `max_wall_width * ease_factor(depth)`.
pub fn wall_offset(params: &TerrainParameters, side: WallSide, depth: f32) -> f32 {
    let ease = ease_factor(depth);
    let min_width = params.min_wall_width * ease;
    let max_width = params.max_wall_width * ease;

    let seed = params.seed as f64 + depth as f64 * SEED_DEPTH_SCALE + side.seed_offset();
    let width = seeded_range(seed, min_width as f64, max_width as f64) as f32;
    let jitter = (seeded_random(seed * JITTER_SEED_SCALE) as f32 - 0.5)
        * params.roughness
        * JITTER_SCALE
        * ease;

    (width + jitter).clamp(0.0, max_width)
}

/// Wall point for one side at `depth`
pub fn wall_point(params: &TerrainParameters, side: WallSide, depth: f32) -> WallPoint {
    let offset = wall_offset(params, side, depth);
    let x = match side {
        WallSide::Left => offset,
        WallSide::Right => WORLD_WIDTH - offset,
    };
    WallPoint { x, depth }
}

/// Append-only wall point store with a generation frontier
#[derive(Debug, Clone)]
pub struct TerrainGenerator {
    params: TerrainParameters,
    left: Vec<WallPoint>,
    right: Vec<WallPoint>,
    /// Highest depth any request has covered
    generated_depth: f32,
    /// Grid index of the next segment to emit
    next_segment: i64,
}

impl TerrainGenerator {
    pub fn new(params: TerrainParameters) -> Self {
        Self {
            params,
            left: Vec::new(),
            right: Vec::new(),
            generated_depth: 0.0,
            next_segment: 0,
        }
    }

    /// Generate wall points for `[start, end)`, returning the number of segments added
    ///
    /// Depths already covered are skipped; `end <= start` and non-finite
    /// bounds are a no-op.
    pub fn generate(&mut self, start: f32, end: f32) -> usize {
        if !(end > start && start.is_finite() && end.is_finite()) {
            return 0;
        }

        let start = start.max(WATER_LEVEL);
        let mut index = ((start / SEGMENT_HEIGHT).ceil() as i64).max(self.next_segment);
        let mut added = 0;

        loop {
            let depth = index as f32 * SEGMENT_HEIGHT;
            if depth >= end {
                break;
            }
            self.left.push(wall_point(&self.params, WallSide::Left, depth));
            self.right.push(wall_point(&self.params, WallSide::Right, depth));
            index += 1;
            added += 1;
        }

        if added > 0 {
            self.next_segment = index;
        }
        self.generated_depth = self.generated_depth.max(end);
        added
    }

    /// Whether the camera is close enough to the frontier to extend
    pub fn needs_generation(&self, camera_bottom: f32) -> bool {
        camera_bottom + TERRAIN_LOOKAHEAD > self.generated_depth
    }

    pub fn generated_depth(&self) -> f32 {
        self.generated_depth
    }

    pub fn points(&self, side: WallSide) -> &[WallPoint] {
        match side {
            WallSide::Left => &self.left,
            WallSide::Right => &self.right,
        }
    }

    /// Points of one side whose depth lies in `[top, bottom]`
    pub fn visible(&self, side: WallSide, top: f32, bottom: f32) -> &[WallPoint] {
        let points = self.points(side);
        let from = points.partition_point(|p| p.depth < top);
        let to = points.partition_point(|p| p.depth <= bottom);
        &points[from..to.max(from)]
    }

    pub fn segment_count(&self) -> usize {
        self.left.len()
    }

    pub fn reset(&mut self) {
        self.left.clear();
        self.right.clear();
        self.generated_depth = 0.0;
        self.next_segment = 0;
    }
}
