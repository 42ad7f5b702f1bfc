//! Fishing areas
//!
//! An area bundles display metadata, terrain parameters and a spawn table.
//! It is selected once per session and never mutated afterwards.

use serde::{Deserialize, Serialize};

use super::species::{Species, catalog};
use crate::consts::MAX_DENSITY;
use crate::error::ConfigError;

/// Two 0xRRGGBB colors
///
/// Walls: primary = fill, secondary = outline.
/// Water: primary = water, secondary = sky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub primary: u32,
    pub secondary: u32,
}

impl ColorPair {
    pub const fn new(primary: u32, secondary: u32) -> Self {
        Self { primary, secondary }
    }
}

/// Cavern wall generation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainParameters {
    /// Creatures per 100 pixels of depth
    pub density: f32,
    /// Wall jitter intensity (0-1)
    pub roughness: f32,
    pub min_wall_width: f32,
    pub max_wall_width: f32,
    pub seed: u64,
    /// Hook auto-reels past this depth (meters)
    pub depth_limit: f32,
}

impl TerrainParameters {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.min_wall_width, self.max_wall_width);
        if !(min.is_finite() && max.is_finite() && min >= 0.0 && max > 0.0) {
            return Err(ConfigError::WallWidthRange { min, max });
        }
        if min > max {
            return Err(ConfigError::WallWidthOrder { min, max });
        }
        if !(0.0..=1.0).contains(&self.roughness) {
            return Err(ConfigError::Roughness(self.roughness));
        }
        if !(0.0..=MAX_DENSITY).contains(&self.density) {
            return Err(ConfigError::Density(self.density));
        }
        if !(self.depth_limit.is_finite() && self.depth_limit > 0.0) {
            return Err(ConfigError::DepthLimit(self.depth_limit));
        }
        Ok(())
    }
}

/// Where and how often a species appears
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnRule {
    pub species_id: String,
    pub min_depth_meters: f32,
    pub max_depth_meters: f32,
    /// Independent roll (0-1) when this rule is eligible
    pub spawn_chance: f32,
}

impl SpawnRule {
    pub fn new(species_id: &str, band: (f32, f32), spawn_chance: f32) -> Self {
        Self {
            species_id: species_id.to_string(),
            min_depth_meters: band.0,
            max_depth_meters: band.1,
            spawn_chance,
        }
    }

    /// Whether the band contains `depth_meters` (inclusive)
    #[inline]
    pub fn covers(&self, depth_meters: f32) -> bool {
        depth_meters >= self.min_depth_meters && depth_meters <= self.max_depth_meters
    }
}

/// Ordered spawn rules; earlier rules roll first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpawnTable {
    pub rules: Vec<SpawnRule>,
}

impl SpawnTable {
    pub fn new(rules: Vec<SpawnRule>) -> Self {
        Self { rules }
    }

    /// Rules whose band contains `depth_meters`, in table order
    pub fn eligible(&self, depth_meters: f32) -> Vec<&SpawnRule> {
        self.rules.iter().filter(|r| r.covers(depth_meters)).collect()
    }

    pub fn validate(&self, species: &[Species]) -> Result<(), ConfigError> {
        if self.rules.is_empty() {
            return Err(ConfigError::EmptySpawnTable);
        }
        for rule in &self.rules {
            if !species.iter().any(|s| s.id == rule.species_id) {
                return Err(ConfigError::UnknownSpecies(rule.species_id.clone()));
            }
            if !(0.0..=1.0).contains(&rule.spawn_chance) {
                return Err(ConfigError::SpawnChance {
                    species: rule.species_id.clone(),
                    chance: rule.spawn_chance,
                });
            }
            if !(rule.min_depth_meters <= rule.max_depth_meters) {
                return Err(ConfigError::SpawnBand {
                    species: rule.species_id.clone(),
                    min: rule.min_depth_meters,
                    max: rule.max_depth_meters,
                });
            }
        }
        Ok(())
    }
}

/// Complete configuration of a fishing area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaConfiguration {
    pub id: String,
    pub name: String,
    pub description: String,
    pub wall_colors: ColorPair,
    pub water_colors: ColorPair,
    pub terrain: TerrainParameters,
    pub spawn_table: SpawnTable,
    /// Species the spawn table may reference
    #[serde(default = "catalog")]
    pub species: Vec<Species>,
}

impl AreaConfiguration {
    /// Check every invariant; a world refuses an area that fails this
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.terrain.validate()?;
        for species in &self.species {
            species.validate()?;
        }
        self.spawn_table.validate(&self.species)
    }

    pub fn species(&self, id: &str) -> Option<&Species> {
        self.species.iter().find(|s| s.id == id)
    }
}

/// Built-in areas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AreaPreset {
    #[default]
    ShallowWaters,
    DeepCaverns,
    NarrowCanyon,
    CoralReef,
    AbyssalTrench,
}

impl AreaPreset {
    pub const ALL: [AreaPreset; 5] = [
        AreaPreset::ShallowWaters,
        AreaPreset::DeepCaverns,
        AreaPreset::NarrowCanyon,
        AreaPreset::CoralReef,
        AreaPreset::AbyssalTrench,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AreaPreset::ShallowWaters => "SHALLOW_WATERS",
            AreaPreset::DeepCaverns => "DEEP_CAVERNS",
            AreaPreset::NarrowCanyon => "NARROW_CANYON",
            AreaPreset::CoralReef => "CORAL_REEF",
            AreaPreset::AbyssalTrench => "ABYSSAL_TRENCH",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "shallow_waters" | "shallow" => Some(AreaPreset::ShallowWaters),
            "deep_caverns" | "deep" => Some(AreaPreset::DeepCaverns),
            "narrow_canyon" | "canyon" => Some(AreaPreset::NarrowCanyon),
            "coral_reef" | "reef" => Some(AreaPreset::CoralReef),
            "abyssal_trench" | "abyss" => Some(AreaPreset::AbyssalTrench),
            _ => None,
        }
    }

    pub fn config(&self) -> AreaConfiguration {
        match self {
            AreaPreset::ShallowWaters => AreaConfiguration {
                id: self.as_str().into(),
                name: "Shallow Waters".into(),
                description: "A peaceful coastal area perfect for beginners. Clear waters and gentle currents."
                    .into(),
                wall_colors: ColorPair::new(0x8B7355, 0x654321),
                water_colors: ColorPair::new(0x4EABC7, 0x87CEEB),
                terrain: TerrainParameters {
                    density: 1.0,
                    roughness: 0.1,
                    min_wall_width: 90.0,
                    max_wall_width: 110.0,
                    seed: 12345,
                    depth_limit: 1000.0,
                },
                spawn_table: SpawnTable::new(vec![
                    SpawnRule::new("herring", (0.0, 30.0), 0.6),
                    SpawnRule::new("mackerel", (0.0, 60.0), 0.5),
                    SpawnRule::new("whiting", (20.0, 120.0), 0.4),
                    SpawnRule::new("haddock", (50.0, 200.0), 0.35),
                    SpawnRule::new("atlantic_cod", (80.0, 400.0), 0.3),
                    SpawnRule::new("flounder", (150.0, 600.0), 0.25),
                    SpawnRule::new("sole", (300.0, 800.0), 0.2),
                    SpawnRule::new("bass", (500.0, 1000.0), 0.15),
                ]),
                species: catalog(),
            },
            AreaPreset::DeepCaverns => AreaConfiguration {
                id: self.as_str().into(),
                name: "Deep Caverns".into(),
                description: "Mysterious underwater caves with rare fish and challenging terrain.".into(),
                wall_colors: ColorPair::new(0x696969, 0x2F4F4F),
                water_colors: ColorPair::new(0x2E5984, 0x2F4F4F),
                terrain: TerrainParameters {
                    density: 4.0,
                    roughness: 0.8,
                    min_wall_width: 40.0,
                    max_wall_width: 100.0,
                    seed: 54321,
                    depth_limit: 2000.0,
                },
                spawn_table: SpawnTable::new(vec![
                    SpawnRule::new("pollock", (0.0, 300.0), 0.5),
                    SpawnRule::new("atlantic_cod", (100.0, 800.0), 0.35),
                    SpawnRule::new("haddock", (200.0, 900.0), 0.3),
                    SpawnRule::new("bass", (600.0, 1600.0), 0.2),
                    SpawnRule::new("tuna", (1200.0, 2000.0), 0.08),
                ]),
                species: catalog(),
            },
            AreaPreset::NarrowCanyon => AreaConfiguration {
                id: self.as_str().into(),
                name: "Narrow Canyon".into(),
                description: "A tight underwater passage with fast currents and elusive fish.".into(),
                wall_colors: ColorPair::new(0x708090, 0x556B6B),
                water_colors: ColorPair::new(0x3A5F8A, 0x4682B4),
                terrain: TerrainParameters {
                    density: 5.0,
                    roughness: 0.9,
                    min_wall_width: 20.0,
                    max_wall_width: 60.0,
                    seed: 99999,
                    depth_limit: 1500.0,
                },
                spawn_table: SpawnTable::new(vec![
                    SpawnRule::new("mackerel", (0.0, 200.0), 0.45),
                    SpawnRule::new("whiting", (0.0, 400.0), 0.4),
                    SpawnRule::new("pollock", (200.0, 1000.0), 0.3),
                    SpawnRule::new("sole", (600.0, 1500.0), 0.2),
                ]),
                species: catalog(),
            },
            AreaPreset::CoralReef => AreaConfiguration {
                id: self.as_str().into(),
                name: "Coral Reef".into(),
                description: "A vibrant tropical reef teeming with colorful fish and exotic species.".into(),
                wall_colors: ColorPair::new(0xFF6347, 0xDC143C),
                water_colors: ColorPair::new(0x00CED1, 0x00BFFF),
                terrain: TerrainParameters {
                    density: 2.0,
                    roughness: 0.3,
                    min_wall_width: 60.0,
                    max_wall_width: 120.0,
                    seed: 77777,
                    depth_limit: 800.0,
                },
                spawn_table: SpawnTable::new(vec![
                    SpawnRule::new("herring", (0.0, 100.0), 0.5),
                    SpawnRule::new("mackerel", (0.0, 300.0), 0.45),
                    SpawnRule::new("flounder", (100.0, 500.0), 0.3),
                    SpawnRule::new("sole", (200.0, 800.0), 0.25),
                    SpawnRule::new("bass", (400.0, 800.0), 0.2),
                ]),
                species: catalog(),
            },
            AreaPreset::AbyssalTrench => AreaConfiguration {
                id: self.as_str().into(),
                name: "Abyssal Trench".into(),
                description: "The deepest, darkest depths where legendary creatures lurk.".into(),
                wall_colors: ColorPair::new(0x000000, 0x1C1C1C),
                water_colors: ColorPair::new(0x191970, 0x000080),
                terrain: TerrainParameters {
                    density: 6.0,
                    roughness: 1.0,
                    min_wall_width: 10.0,
                    max_wall_width: 50.0,
                    seed: 66666,
                    depth_limit: 3000.0,
                },
                spawn_table: SpawnTable::new(vec![
                    SpawnRule::new("pollock", (0.0, 500.0), 0.3),
                    SpawnRule::new("bass", (300.0, 1500.0), 0.2),
                    SpawnRule::new("tuna", (1000.0, 3000.0), 0.12),
                ]),
                species: catalog(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_validate() {
        for preset in AreaPreset::ALL {
            let area = preset.config();
            assert!(area.validate().is_ok(), "{} should validate", preset.as_str());
            assert_eq!(AreaPreset::from_str(preset.as_str()), Some(preset));
        }
    }

    #[test]
    fn test_preset_aliases() {
        assert_eq!(AreaPreset::from_str("reef"), Some(AreaPreset::CoralReef));
        assert_eq!(AreaPreset::from_str("Deep Caverns"), Some(AreaPreset::DeepCaverns));
        assert_eq!(AreaPreset::from_str("narrow-canyon"), Some(AreaPreset::NarrowCanyon));
        assert_eq!(AreaPreset::from_str("moon"), None);
    }

    #[test]
    fn test_wall_width_order_rejected() {
        let mut area = AreaPreset::ShallowWaters.config();
        area.terrain.min_wall_width = 120.0;
        area.terrain.max_wall_width = 100.0;
        assert_eq!(
            area.validate(),
            Err(ConfigError::WallWidthOrder { min: 120.0, max: 100.0 })
        );
    }

    #[test]
    fn test_depth_limit_must_be_positive() {
        let mut area = AreaPreset::ShallowWaters.config();
        area.terrain.depth_limit = 0.0;
        assert_eq!(area.validate(), Err(ConfigError::DepthLimit(0.0)));
    }

    #[test]
    fn test_density_bounded() {
        let mut area = AreaPreset::ShallowWaters.config();
        area.terrain.density = MAX_DENSITY;
        assert!(area.validate().is_ok());
        for density in [1e30, MAX_DENSITY + 1.0, f32::INFINITY, -1.0] {
            area.terrain.density = density;
            assert_eq!(area.validate(), Err(ConfigError::Density(density)));
        }
        area.terrain.density = f32::NAN;
        assert!(matches!(area.validate(), Err(ConfigError::Density(_))));
    }

    #[test]
    fn test_empty_spawn_table_rejected() {
        let mut area = AreaPreset::CoralReef.config();
        area.spawn_table.rules.clear();
        assert_eq!(area.validate(), Err(ConfigError::EmptySpawnTable));
    }

    #[test]
    fn test_unknown_species_rejected() {
        let mut area = AreaPreset::CoralReef.config();
        area.spawn_table.rules.push(SpawnRule::new("kraken", (0.0, 10.0), 0.5));
        assert_eq!(area.validate(), Err(ConfigError::UnknownSpecies("kraken".into())));
    }

    #[test]
    fn test_spawn_chance_range_rejected() {
        let mut area = AreaPreset::CoralReef.config();
        area.spawn_table.rules[0].spawn_chance = 1.5;
        assert!(matches!(area.validate(), Err(ConfigError::SpawnChance { .. })));
    }

    #[test]
    fn test_eligible_rules_keep_table_order() {
        let table = AreaPreset::ShallowWaters.config().spawn_table;
        let ids: Vec<_> = table.eligible(25.0).iter().map(|r| r.species_id.as_str()).collect();
        assert_eq!(ids, vec!["herring", "mackerel", "whiting"]);
        assert!(table.eligible(5000.0).is_empty());
    }

    #[test]
    fn test_area_json_roundtrip_defaults_species() {
        let area = AreaPreset::NarrowCanyon.config();
        let mut value = serde_json::to_value(&area).unwrap();
        value.as_object_mut().unwrap().remove("species");
        let parsed: AreaConfiguration = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, area);
    }
}
