//! World driver
//!
//! Owns every generator and controller for one area and advances them in a
//! fixed order each frame: hook, collision, creatures, generation frontier.
//! Everything the host needs back comes out of `advance` as a `FrameReport`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::area::AreaConfiguration;
use super::camera::Viewport;
use super::creature::Creature;
use super::events::GameEvent;
use super::hook::{HookController, HookState};
use super::spawner::CreatureSpawner;
use super::storage::{BucketTier, Storage};
use super::terrain::TerrainGenerator;
use crate::catch_log::{CatchLog, SessionSummary};
use crate::consts::*;
use crate::error::ConfigError;
use crate::settings::{PhysicsOverrides, SimSettings, SpawnSettings};

/// How far below the hook the autopilot looks for prey (pixels)
const AUTOPILOT_RANGE: f32 = 600.0;
/// Where the autopilot casts
const AUTOPILOT_CAST: Vec2 = Vec2::new(BOAT_X, WATER_LEVEL + 300.0);

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Pointer position in world coordinates
    pub pointer: Vec2,
    /// Cast / reel (click, tap, space)
    pub trigger: bool,
    /// Demo mode - the world drives its own input
    pub autopilot: bool,
}

/// What happened during one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    pub hook_state: HookState,
    pub hook_position: Vec2,
    /// Meters below the surface
    pub hook_depth: f32,
    /// kg
    pub storage_weight: f32,
    /// kg (None = unlimited)
    pub storage_capacity: Option<f32>,
    pub live_creatures: usize,
    pub events: Vec<GameEvent>,
}

/// One fishing session in one area
#[derive(Debug, Clone)]
pub struct World {
    area: AreaConfiguration,
    settings: SimSettings,
    terrain: TerrainGenerator,
    spawner: CreatureSpawner,
    hook: HookController,
    storage: Storage,
    camera: Viewport,
    time_secs: f32,
    catch_log: CatchLog,
}

impl World {
    /// Validate and build a world, with the first chunk already generated
    pub fn new(area: AreaConfiguration, settings: SimSettings) -> Result<Self, ConfigError> {
        settings.validate().inspect_err(|e| log::warn!("Rejected settings: {e}"))?;
        area.validate()
            .inspect_err(|e| log::warn!("Rejected area {}: {e}", area.id))?;

        let mut world = Self {
            terrain: TerrainGenerator::new(area.terrain.clone()),
            spawner: CreatureSpawner::new(&area, settings.spawn),
            hook: HookController::new(settings.physics, area.terrain.depth_limit),
            storage: Storage::default(),
            camera: Viewport::default(),
            time_secs: 0.0,
            catch_log: CatchLog::new(),
            area,
            settings,
        };
        world.reset();
        Ok(world)
    }

    /// Switch area. Frontiers and live creatures are rebuilt; storage and the
    /// catch log carry over. On error the current area stays in place.
    pub fn configure(&mut self, area: AreaConfiguration) -> Result<(), ConfigError> {
        area.validate()
            .inspect_err(|e| log::warn!("Rejected area {}: {e}", area.id))?;

        self.terrain = TerrainGenerator::new(area.terrain.clone());
        self.spawner = CreatureSpawner::new(&area, self.settings.spawn);
        self.hook.set_depth_limit(area.terrain.depth_limit);
        self.area = area;
        self.reset();
        Ok(())
    }

    /// Swap hook physics between frames; nothing changes on error
    pub fn reconfigure(&mut self, overrides: &PhysicsOverrides) -> Result<(), ConfigError> {
        if overrides.is_empty() {
            return Ok(());
        }
        let physics = overrides
            .apply(&self.settings.physics)
            .inspect_err(|e| log::warn!("Rejected physics overrides: {e}"))?;
        self.settings.physics = physics;
        self.hook.set_physics(physics);
        log::info!("Hook physics reconfigured: {physics:?}");
        Ok(())
    }

    /// Swap spawn tuning between frames; nothing changes on error
    pub fn reconfigure_spawn(&mut self, spawn: SpawnSettings) -> Result<(), ConfigError> {
        self.spawner
            .set_settings(spawn)
            .inspect_err(|e| log::warn!("Rejected spawn settings: {e}"))?;
        self.settings.spawn = spawn;
        log::info!("Spawn settings reconfigured: {spawn:?}");
        Ok(())
    }

    /// Back to the surface with a freshly generated first chunk
    pub fn reset(&mut self) {
        self.terrain.reset();
        self.spawner.reset();
        self.hook.reset();
        self.camera = Viewport::default();
        self.time_secs = 0.0;

        let chunk = self.settings.generation_chunk;
        self.terrain.generate(WATER_LEVEL, WATER_LEVEL + chunk);
        self.spawner.generate(WATER_LEVEL, WATER_LEVEL + chunk);

        log::info!(
            "World reset in {} (seed {}): {} wall segments, {} creatures",
            self.area.name,
            self.area.terrain.seed,
            self.terrain.segment_count(),
            self.spawner.live_count()
        );
    }

    /// End the session
    pub fn destroy(self) -> SessionSummary {
        let summary = self.catch_log.summary();
        log::info!(
            "Session over in {}: {} caught, {:.0}g total",
            self.area.name,
            summary.fish_caught,
            summary.total_value
        );
        summary
    }

    /// Advance one frame
    pub fn advance(&mut self, dt: f32, input: &TickInput) -> FrameReport {
        let dt = if dt.is_finite() { dt.clamp(0.0, MAX_FRAME_DT) } else { 0.0 };
        self.time_secs += dt;

        let input = if input.autopilot { self.autopilot(input) } else { *input };
        let mut events = Vec::new();

        if input.trigger {
            self.hook.trigger(input.pointer, self.storage.is_full(), &mut events);
        }
        self.hook.update(dt, input.pointer, &self.camera, &mut events);

        self.check_bite(&mut events);

        self.camera.follow(self.hook.position().y);
        self.spawner
            .update(dt, self.time_secs, self.camera.top, self.camera.bottom());
        self.extend_generation();

        for event in &events {
            if let GameEvent::Catch(info) = event {
                self.storage.add(info.weight);
                self.catch_log.record(info.clone().into());
            }
        }

        FrameReport {
            hook_state: self.hook.state(),
            hook_position: self.hook.position(),
            hook_depth: self.hook.depth_meters(),
            storage_weight: self.storage.weight,
            storage_capacity: self.storage.capacity(),
            live_creatures: self.spawner.live_count(),
            events,
        }
    }

    /// Hand the first creature touching the hook over to it
    fn check_bite(&mut self, events: &mut Vec<GameEvent>) {
        if !self.hook.can_catch(self.storage.is_full()) {
            return;
        }
        let Some(id) = self.spawner.find_overlap(&self.hook.bounds()) else {
            return;
        };
        let Some(creature) = self.spawner.take(id) else {
            return;
        };

        let species_id = creature.species_id.clone();
        match self.hook.hook_creature(creature) {
            Ok(()) => {
                log::debug!("Creature {id} ({species_id}) hooked at {:.1}m", self.hook.depth_meters());
                events.push(GameEvent::Hooked {
                    creature_id: id,
                    species_id,
                });
            }
            Err(creature) => self.spawner.release(creature),
        }
    }

    /// Extend each generator by one chunk when the camera nears its frontier
    fn extend_generation(&mut self) {
        let bottom = self.camera.bottom();
        let chunk = self.settings.generation_chunk;

        if self.terrain.needs_generation(bottom) {
            let from = self.terrain.generated_depth();
            let added = self.terrain.generate(from, from + chunk);
            log::debug!("Terrain extended to {:.0} (+{added} segments)", from + chunk);
        }
        if self.spawner.needs_generation(bottom) {
            let from = self.spawner.generated_depth();
            self.spawner.generate(from, from + chunk);
        }
    }

    /// Demo input: cast when ready, chase the nearest creature below while
    /// falling, reel in when nothing is in reach
    fn autopilot(&self, input: &TickInput) -> TickInput {
        let mut input = TickInput {
            trigger: false,
            ..*input
        };

        match self.hook.state() {
            HookState::Ready => {
                if !self.storage.is_full() {
                    input.pointer = AUTOPILOT_CAST;
                    input.trigger = true;
                }
            }
            HookState::Falling => {
                let hook = self.hook.position();
                let prey = self
                    .spawner
                    .creatures()
                    .filter(|c| c.pos.y >= hook.y && c.pos.y - hook.y <= AUTOPILOT_RANGE)
                    .min_by(|a, b| {
                        a.pos
                            .distance_squared(hook)
                            .partial_cmp(&b.pos.distance_squared(hook))
                            .unwrap_or(std::cmp::Ordering::Equal)
                    });

                match prey {
                    Some(creature) if !self.storage.is_full() => input.pointer = creature.pos,
                    _ => {
                        input.pointer = hook;
                        input.trigger = true;
                    }
                }
            }
            HookState::Casting | HookState::Reeling => {}
        }
        input
    }

    pub fn area(&self) -> &AreaConfiguration {
        &self.area
    }

    pub fn settings(&self) -> &SimSettings {
        &self.settings
    }

    pub fn terrain(&self) -> &TerrainGenerator {
        &self.terrain
    }

    pub fn hook(&self) -> &HookController {
        &self.hook
    }

    pub fn camera(&self) -> &Viewport {
        &self.camera
    }

    pub fn creatures(&self) -> impl Iterator<Item = &Creature> {
        self.spawner.creatures()
    }

    pub fn catch_log(&self) -> &CatchLog {
        &self.catch_log
    }

    pub fn time_secs(&self) -> f32 {
        self.time_secs
    }

    pub fn generated_terrain_depth(&self) -> f32 {
        self.terrain.generated_depth()
    }

    pub fn generated_creature_depth(&self) -> f32 {
        self.spawner.generated_depth()
    }

    pub fn live_creature_count(&self) -> usize {
        self.spawner.live_count()
    }

    pub fn creature_count_by_species(&self) -> std::collections::BTreeMap<String, usize> {
        self.spawner.count_by_species()
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn set_storage_weight(&mut self, weight: f32) {
        self.storage.weight = weight.max(0.0);
    }

    pub fn set_storage_tier(&mut self, tier: BucketTier) {
        self.storage.tier = tier;
    }

    /// Sell the bucket's contents, returning the weight removed
    pub fn empty_storage(&mut self) -> f32 {
        self.storage.empty()
    }
}
