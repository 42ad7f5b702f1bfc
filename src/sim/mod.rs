//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded randomness only (sine hash for terrain, PCG stream for creatures)
//! - Stable iteration order (creatures by id)
//! - No rendering, audio or platform dependencies
//! - No I/O; the host drives everything through `World::advance`

pub mod area;
pub mod camera;
pub mod collision;
pub mod creature;
pub mod events;
pub mod hook;
pub mod prng;
pub mod spawner;
pub mod species;
pub mod storage;
pub mod terrain;
pub mod tween;
pub mod world;

pub use area::{AreaConfiguration, AreaPreset, ColorPair, SpawnRule, SpawnTable, TerrainParameters};
pub use camera::Viewport;
pub use collision::{Aabb, first_overlap};
pub use creature::{CatchInfo, Creature, Heading};
pub use events::GameEvent;
pub use hook::{HookController, HookState};
pub use prng::{RngState, seeded_random, seeded_range};
pub use spawner::{CreatureSpawner, SpawnStats};
pub use species::{Species, catalog};
pub use storage::{BucketTier, Storage};
pub use terrain::{TerrainGenerator, WallPoint, WallSide};
pub use tween::Tween;
pub use world::{FrameReport, TickInput, World};
