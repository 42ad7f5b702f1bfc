//! Fathom - simulation core of a deep-sea fishing game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (terrain, creatures, hook physics, world driver)
//! - `settings`: Tunable physics and spawn settings
//! - `catch_log`: Per-session catch history
//! - `error`: Configuration errors

pub mod catch_log;
pub mod error;
pub mod settings;
pub mod sim;

pub use catch_log::{CatchLog, CatchRecord, SessionSummary};
pub use error::ConfigError;
pub use settings::{HookPhysics, PhysicsOverrides, SimSettings, SpawnSettings};

use glam::Vec2;

/// World configuration constants
pub mod consts {
    /// Fixed simulation timestep used by the headless runner (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Largest frame delta the world will integrate in one tick
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Water surface (y grows downward from here)
    pub const WATER_LEVEL: f32 = 0.0;
    /// Pixels per meter for depth reporting and spawn bands
    pub const PIXELS_PER_METER: f32 = 10.0;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const PLAY_FIELD_MIN_X: f32 = 100.0;
    pub const PLAY_FIELD_MAX_X: f32 = 700.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;

    /// Terrain
    pub const SEGMENT_HEIGHT: f32 = 20.0;
    pub const EASE_DISTANCE: f32 = 800.0;

    /// Generation is extended in fixed chunks ahead of the camera
    pub const GENERATION_CHUNK: f32 = 1200.0;
    pub const TERRAIN_LOOKAHEAD: f32 = 600.0;
    pub const CREATURE_LOOKAHEAD: f32 = 400.0;
    /// Largest accepted generation chunk
    pub const MAX_GENERATION_CHUNK: f32 = 4.0 * GENERATION_CHUNK;
    /// Largest accepted creature density (creatures per 100 pixels of depth)
    pub const MAX_DENSITY: f32 = 100.0;

    /// Hook rest position is the rod tip, relative to the boat at (400, WATER_LEVEL)
    pub const BOAT_X: f32 = 400.0;
    pub const ROD_OFFSET_X: f32 = 104.0;
    pub const ROD_OFFSET_Y: f32 = -27.0;
    pub const HOOK_SIZE: f32 = 8.0;

    /// Cast / reel timings (seconds)
    pub const CAST_DURATION: f32 = 1.0;
    pub const REEL_DURATION: f32 = 0.8;
    /// Cast target never lands shallower than this below the surface
    pub const CAST_MIN_DEPTH: f32 = 50.0;
    pub const CAST_MAX_ARC: f32 = 100.0;
    pub const CAST_ARC_FACTOR: f32 = 0.3;

    /// Falling hook never rises above this depth
    pub const HOOK_MIN_DEPTH: f32 = 10.0;
    /// Spring target never rises above this depth
    pub const TARGET_MIN_DEPTH: f32 = 20.0;
    /// Spring target padding around the visible viewport
    pub const TARGET_PAD_ABOVE: f32 = 200.0;
    pub const TARGET_PAD_BELOW: f32 = 400.0;
}

/// Rod tip position, where the hook rests while READY
#[inline]
pub fn rod_tip() -> Vec2 {
    use consts::*;
    Vec2::new(BOAT_X + ROD_OFFSET_X, WATER_LEVEL + ROD_OFFSET_Y)
}

/// Convert a world y coordinate to depth below the water line (pixels)
#[inline]
pub fn depth_of(y: f32) -> f32 {
    y - consts::WATER_LEVEL
}

/// Convert pixels of depth to meters
#[inline]
pub fn pixels_to_meters(pixels: f32) -> f32 {
    pixels / consts::PIXELS_PER_METER
}

/// Convert meters of depth to pixels
#[inline]
pub fn meters_to_pixels(meters: f32) -> f32 {
    meters * consts::PIXELS_PER_METER
}

/// Clamp x to the horizontal play field
#[inline]
pub fn clamp_to_play_field(x: f32) -> f32 {
    x.clamp(consts::PLAY_FIELD_MIN_X, consts::PLAY_FIELD_MAX_X)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversion() {
        assert_eq!(meters_to_pixels(100.0), 1000.0);
        assert_eq!(pixels_to_meters(250.0), 25.0);
        assert_eq!(pixels_to_meters(meters_to_pixels(42.0)), 42.0);
    }

    #[test]
    fn test_rod_tip_above_water() {
        let tip = rod_tip();
        assert_eq!(tip, Vec2::new(504.0, -27.0));
        assert!(depth_of(tip.y) < 0.0);
    }

    #[test]
    fn test_clamp_to_play_field() {
        assert_eq!(clamp_to_play_field(0.0), 100.0);
        assert_eq!(clamp_to_play_field(400.0), 400.0);
        assert_eq!(clamp_to_play_field(1000.0), 700.0);
    }
}
