//! Creature spawning and the live-creature set
//!
//! The spawner is the sole owner of live creatures. Generation fills a depth
//! interval according to the area's spawn table; the per-tick update swims
//! every creature and applies the optional despawn policy.

use std::collections::BTreeMap;

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::area::{AreaConfiguration, SpawnRule, SpawnTable};
use super::collision::{Aabb, first_overlap};
use super::creature::{Creature, Heading};
use super::prng::{CREATURE_STREAM, RngState};
use super::species::Species;
use crate::consts::{CREATURE_LOOKAHEAD, PLAY_FIELD_MAX_X, PLAY_FIELD_MIN_X};
use crate::error::ConfigError;
use crate::settings::SpawnSettings;
use crate::{depth_of, pixels_to_meters};

/// Per-creature noise on derived weight (±20%)
const WEIGHT_NOISE: f32 = 0.2;
/// Per-creature noise on derived value (±10%)
const VALUE_NOISE: f32 = 0.1;
/// Body height as a fraction of length
const HEIGHT_RATIO: (f32, f32) = (0.3, 0.6);

/// Generation outcome counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnStats {
    pub attempts: u64,
    pub spawned: u64,
    /// No rule's band covered the sampled depth
    pub no_eligible: u64,
    /// Eligible rules existed but none won its roll, nor the fallback
    pub no_winner: u64,
}

/// Pick a rule: first independent win in table order, else one fallback roll
/// for a uniform pick among all eligible rules
pub fn choose_rule<'a, R: Rng + ?Sized>(
    eligible: &[&'a SpawnRule],
    rng: &mut R,
    fallback_chance: f32,
) -> Option<&'a SpawnRule> {
    if eligible.is_empty() {
        return None;
    }
    for rule in eligible {
        if rng.random::<f32>() < rule.spawn_chance {
            return Some(rule);
        }
    }
    if rng.random::<f32>() < fallback_chance {
        let index = rng.random_range(0..eligible.len());
        return Some(eligible[index]);
    }
    None
}

/// Roll an individual of `species` at `(x, y)`
fn instantiate<R: Rng + ?Sized>(id: u32, species: &Species, x: f32, y: f32, rng: &mut R) -> Creature {
    let size = rng.random_range(species.min_size..=species.max_size);
    let speed = rng.random_range(species.min_speed..=species.max_speed);
    let height = size * rng.random_range(HEIGHT_RATIO.0..=HEIGHT_RATIO.1);
    let heading = if rng.random_bool(0.5) { Heading::Right } else { Heading::Left };

    let ratio = size / species.mid_size();
    let weight = species.weight * ratio * rng.random_range(1.0 - WEIGHT_NOISE..=1.0 + WEIGHT_NOISE);
    let value = species.value * ratio * rng.random_range(1.0 - VALUE_NOISE..=1.0 + VALUE_NOISE);

    Creature {
        id,
        species_id: species.id.clone(),
        name: species.name.clone(),
        pos: glam::Vec2::new(x, y),
        base_y: y,
        size,
        height,
        speed,
        heading,
        weight,
        value,
        color: species.color,
    }
}

/// Spawns, tracks and moves creatures for one area
#[derive(Debug, Clone)]
pub struct CreatureSpawner {
    table: SpawnTable,
    species: Vec<Species>,
    /// Creatures per 100 pixels of depth
    density: f32,
    settings: SpawnSettings,
    rng_state: RngState,
    rng: Pcg32,
    /// Live creatures, keyed and iterated by id
    creatures: BTreeMap<u32, Creature>,
    generated_depth: f32,
    next_id: u32,
    stats: SpawnStats,
}

impl CreatureSpawner {
    pub fn new(area: &AreaConfiguration, settings: SpawnSettings) -> Self {
        let rng_state = RngState::new(area.terrain.seed, CREATURE_STREAM);
        Self {
            table: area.spawn_table.clone(),
            species: area.species.clone(),
            density: area.terrain.density,
            settings,
            rng_state,
            rng: rng_state.to_rng(),
            creatures: BTreeMap::new(),
            generated_depth: 0.0,
            next_id: 1,
            stats: SpawnStats::default(),
        }
    }

    /// Populate `[start, end)`, returning how many creatures were added
    ///
    /// The interval is clipped to the frontier; generation may produce fewer
    /// creatures than the density implies when depths lack eligible species
    /// or every roll fails. Non-finite bounds are a no-op.
    pub fn generate(&mut self, start: f32, end: f32) -> usize {
        if !(start.is_finite() && end.is_finite()) {
            return 0;
        }
        let start = start.max(self.generated_depth);
        let range = end - start;
        if !(range > 0.0) {
            return 0;
        }

        let count = ((range / 100.0) * self.density).floor() as usize;
        let mut added = 0;
        for _ in 0..count {
            self.stats.attempts += 1;

            let y = self.rng.random_range(start..end);
            let depth_meters = pixels_to_meters(depth_of(y));
            let eligible = self.table.eligible(depth_meters);
            if eligible.is_empty() {
                self.stats.no_eligible += 1;
                continue;
            }

            let Some(rule) = choose_rule(&eligible, &mut self.rng, self.settings.fallback_chance) else {
                self.stats.no_winner += 1;
                continue;
            };
            let Some(species) = self.species.iter().find(|s| s.id == rule.species_id) else {
                self.stats.no_winner += 1;
                continue;
            };

            let x = self.rng.random_range(PLAY_FIELD_MIN_X..=PLAY_FIELD_MAX_X);
            let id = self.next_id;
            self.next_id += 1;
            let creature = instantiate(id, species, x, y, &mut self.rng);
            self.creatures.insert(id, creature);
            self.stats.spawned += 1;
            added += 1;
        }

        self.generated_depth = self.generated_depth.max(end);
        log::debug!(
            "Spawned {added}/{count} creatures for {start:.0}..{end:.0} ({} live)",
            self.creatures.len()
        );
        added
    }

    /// Swim every creature; with a despawn margin, drop those outside the padded viewport.
    /// Returns the number despawned.
    pub fn update(&mut self, dt: f32, time_secs: f32, view_top: f32, view_bottom: f32) -> usize {
        for creature in self.creatures.values_mut() {
            creature.update(dt, time_secs);
        }

        let Some(margin) = self.settings.despawn_margin else {
            return 0;
        };
        let (low, high) = (view_top - margin, view_bottom + margin);
        let before = self.creatures.len();
        self.creatures.retain(|_, c| c.pos.y >= low && c.pos.y <= high);
        before - self.creatures.len()
    }

    /// Whether the camera is close enough to the frontier to extend
    pub fn needs_generation(&self, camera_bottom: f32) -> bool {
        camera_bottom + CREATURE_LOOKAHEAD > self.generated_depth
    }

    /// First live creature (by id) whose box overlaps `probe`
    pub fn find_overlap(&self, probe: &Aabb) -> Option<u32> {
        first_overlap(probe, self.creatures.iter().map(|(id, c)| (*id, c.bounds())))
    }

    /// Remove a creature from the live set and hand it over
    pub fn take(&mut self, id: u32) -> Option<Creature> {
        self.creatures.remove(&id)
    }

    /// Put a creature back in the live set (e.g. a hook reset mid-reel)
    pub fn release(&mut self, creature: Creature) {
        self.creatures.insert(creature.id, creature);
    }

    pub fn get(&self, id: u32) -> Option<&Creature> {
        self.creatures.get(&id)
    }

    pub fn creatures(&self) -> impl Iterator<Item = &Creature> {
        self.creatures.values()
    }

    pub fn live_count(&self) -> usize {
        self.creatures.len()
    }

    pub fn count_by_species(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for creature in self.creatures.values() {
            *counts.entry(creature.species_id.clone()).or_insert(0) += 1;
        }
        counts
    }

    pub fn generated_depth(&self) -> f32 {
        self.generated_depth
    }

    pub fn stats(&self) -> SpawnStats {
        self.stats
    }

    /// Swap spawn settings between ticks; invalid settings leave the current ones in place
    pub fn set_settings(&mut self, settings: SpawnSettings) -> Result<(), ConfigError> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    pub fn settings(&self) -> SpawnSettings {
        self.settings
    }

    /// Drop every creature and rewind the frontier and RNG stream
    pub fn reset(&mut self) {
        self.creatures.clear();
        self.generated_depth = 0.0;
        self.next_id = 1;
        self.rng = self.rng_state.to_rng();
        self.stats = SpawnStats::default();
    }
}
