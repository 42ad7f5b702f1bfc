//! Simulation settings
//!
//! Physics constants and spawn tuning. Settings are fixed once a world is
//! built; runtime tuning goes through `PhysicsOverrides`, which is validated
//! and swapped in whole between ticks.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{GENERATION_CHUNK, MAX_GENERATION_CHUNK};
use crate::error::ConfigError;

/// Rubber-band physics constants for the falling hook
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookPhysics {
    /// Pull toward the pointer, per pixel of displacement
    pub spring_strength: f32,
    /// Velocity multiplier applied every tick (0-1, higher = less damping)
    pub damping: f32,
    /// How much pointer y affects the hook (0-1)
    pub vertical_influence: f32,
    /// Constant downward acceleration (pixels/s²)
    pub gravity: f32,
    pub max_horizontal_speed: f32,
    pub max_vertical_speed: f32,
    /// Extra damping multiplier while the pointer is above water
    pub above_water_damping: f32,
}

impl Default for HookPhysics {
    fn default() -> Self {
        Self {
            spring_strength: 10.0,
            damping: 0.85,
            vertical_influence: 0.2,
            gravity: 1200.0,
            max_horizontal_speed: 2000.0,
            max_vertical_speed: 1500.0,
            above_water_damping: 0.9,
        }
    }
}

impl HookPhysics {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fail = |msg: &str| Err(ConfigError::Physics(msg.to_string()));

        if !(self.spring_strength.is_finite() && self.spring_strength >= 0.0) {
            return fail("spring_strength must be finite and non-negative");
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return fail("damping must be in (0, 1)");
        }
        if !(self.vertical_influence > 0.0 && self.vertical_influence < 1.0) {
            return fail("vertical_influence must be in (0, 1)");
        }
        if !self.gravity.is_finite() {
            return fail("gravity must be finite");
        }
        if !(self.max_horizontal_speed.is_finite() && self.max_horizontal_speed > 0.0) {
            return fail("max_horizontal_speed must be positive");
        }
        if !(self.max_vertical_speed.is_finite() && self.max_vertical_speed > 0.0) {
            return fail("max_vertical_speed must be positive");
        }
        if !(self.above_water_damping > 0.0 && self.above_water_damping <= 1.0) {
            return fail("above_water_damping must be in (0, 1]");
        }
        Ok(())
    }
}

/// Named, optional physics overrides
///
/// Unset fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsOverrides {
    pub spring_strength: Option<f32>,
    pub damping: Option<f32>,
    pub vertical_influence: Option<f32>,
    pub gravity: Option<f32>,
    pub max_horizontal_speed: Option<f32>,
    pub max_vertical_speed: Option<f32>,
    pub above_water_damping: Option<f32>,
}

impl PhysicsOverrides {
    /// Apply to `base`, returning the validated result. `base` is untouched on error.
    pub fn apply(&self, base: &HookPhysics) -> Result<HookPhysics, ConfigError> {
        let physics = HookPhysics {
            spring_strength: self.spring_strength.unwrap_or(base.spring_strength),
            damping: self.damping.unwrap_or(base.damping),
            vertical_influence: self.vertical_influence.unwrap_or(base.vertical_influence),
            gravity: self.gravity.unwrap_or(base.gravity),
            max_horizontal_speed: self.max_horizontal_speed.unwrap_or(base.max_horizontal_speed),
            max_vertical_speed: self.max_vertical_speed.unwrap_or(base.max_vertical_speed),
            above_water_damping: self.above_water_damping.unwrap_or(base.above_water_damping),
        };
        physics.validate()?;
        Ok(physics)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Creature spawn tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnSettings {
    /// Chance of a uniform pick among eligible rules when no rule wins its own roll
    pub fallback_chance: f32,
    /// Destroy creatures further than this outside the viewport (None = never despawn)
    pub despawn_margin: Option<f32>,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            fallback_chance: 0.1,
            despawn_margin: None,
        }
    }
}

impl SpawnSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.fallback_chance) {
            return Err(ConfigError::Spawn(format!(
                "fallback_chance {} outside [0, 1]",
                self.fallback_chance
            )));
        }
        if let Some(margin) = self.despawn_margin
            && !(margin.is_finite() && margin >= 0.0)
        {
            return Err(ConfigError::Spawn(format!(
                "despawn_margin {margin} must be finite and non-negative"
            )));
        }
        Ok(())
    }
}

/// Complete simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimSettings {
    pub physics: HookPhysics,
    pub spawn: SpawnSettings,
    /// Depth covered by each generation extension (pixels)
    pub generation_chunk: f32,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            physics: HookPhysics::default(),
            spawn: SpawnSettings::default(),
            generation_chunk: GENERATION_CHUNK,
        }
    }
}

impl SimSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate()?;
        self.spawn.validate()?;
        if !(self.generation_chunk > 0.0 && self.generation_chunk <= MAX_GENERATION_CHUNK) {
            return Err(ConfigError::Spawn(format!(
                "generation_chunk {} outside (0, {MAX_GENERATION_CHUNK}]",
                self.generation_chunk
            )));
        }
        Ok(())
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SimSettings::default().validate().is_ok());
    }

    #[test]
    fn test_overrides_apply_named_fields_only() {
        let base = HookPhysics::default();
        let overrides = PhysicsOverrides {
            gravity: Some(600.0),
            damping: Some(0.5),
            ..Default::default()
        };
        let physics = overrides.apply(&base).unwrap();
        assert_eq!(physics.gravity, 600.0);
        assert_eq!(physics.damping, 0.5);
        assert_eq!(physics.spring_strength, base.spring_strength);
        assert_eq!(physics.max_vertical_speed, base.max_vertical_speed);
    }

    #[test]
    fn test_overrides_rejected_when_out_of_range() {
        let base = HookPhysics::default();
        let overrides = PhysicsOverrides {
            damping: Some(1.5),
            ..Default::default()
        };
        assert!(matches!(overrides.apply(&base), Err(ConfigError::Physics(_))));

        let overrides = PhysicsOverrides {
            vertical_influence: Some(0.0),
            ..Default::default()
        };
        assert!(overrides.apply(&base).is_err());
    }

    #[test]
    fn test_empty_overrides() {
        assert!(PhysicsOverrides::default().is_empty());
        let base = HookPhysics::default();
        assert_eq!(PhysicsOverrides::default().apply(&base).unwrap(), base);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings =
            SimSettings::from_json(r#"{ "spawn": { "fallback_chance": 0.25, "despawn_margin": 300.0 } }"#)
                .unwrap();
        assert_eq!(settings.spawn.fallback_chance, 0.25);
        assert_eq!(settings.spawn.despawn_margin, Some(300.0));
        assert_eq!(settings.physics, HookPhysics::default());
        assert_eq!(settings.generation_chunk, GENERATION_CHUNK);
    }

    #[test]
    fn test_generation_chunk_bounded() {
        let mut settings = SimSettings {
            generation_chunk: MAX_GENERATION_CHUNK,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
        for chunk in [f32::MAX, f32::INFINITY, f32::NAN, 0.0, -600.0, MAX_GENERATION_CHUNK * 2.0] {
            settings.generation_chunk = chunk;
            assert!(matches!(settings.validate(), Err(ConfigError::Spawn(_))), "{chunk}");
        }
    }

    #[test]
    fn test_invalid_json_settings() {
        assert!(matches!(
            SimSettings::from_json("{ not json"),
            Err(ConfigError::Serialization(_))
        ));
        assert!(matches!(
            SimSettings::from_json(r#"{ "spawn": { "fallback_chance": 2.0, "despawn_margin": null } }"#),
            Err(ConfigError::Spawn(_))
        ));
    }
}
