//! Configuration errors
//!
//! The simulation itself never fails mid-tick; everything that can be wrong
//! is caught when an area or settings are handed to the world.

/// Rejected area configuration or settings
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("min wall width {min} exceeds max wall width {max}")]
    WallWidthOrder { min: f32, max: f32 },

    #[error("wall widths must be finite and max wall width positive (min {min}, max {max})")]
    WallWidthRange { min: f32, max: f32 },

    #[error("roughness {0} outside [0, 1]")]
    Roughness(f32),

    #[error("density {0} outside [0, 100]")]
    Density(f32),

    #[error("depth limit {0} must be positive")]
    DepthLimit(f32),

    #[error("spawn table is empty")]
    EmptySpawnTable,

    #[error("spawn rule references unknown species '{0}'")]
    UnknownSpecies(String),

    #[error("spawn rule for '{species}' has chance {chance} outside [0, 1]")]
    SpawnChance { species: String, chance: f32 },

    #[error("spawn rule for '{species}' has inverted band {min}m..{max}m")]
    SpawnBand { species: String, min: f32, max: f32 },

    #[error("species '{0}' has an invalid size, speed, weight or value range")]
    SpeciesRange(String),

    #[error("invalid physics parameter: {0}")]
    Physics(String),

    #[error("invalid spawn setting: {0}")]
    Spawn(String),

    #[error("unknown area '{0}'")]
    UnknownArea(String),

    #[error("invalid argument: {0}")]
    Argument(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Serialization(err.to_string())
    }
}
