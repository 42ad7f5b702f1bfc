//! Species catalogue
//!
//! Size and speed ranges bound individual creatures; base weight and value
//! are scaled per creature by its size.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A fish species
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub id: String,
    pub name: String,
    pub min_size: f32,
    pub max_size: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Base weight (kg) at mid-size
    pub weight: f32,
    /// Base value (gold) at mid-size
    pub value: f32,
    /// 0xRRGGBB render color
    pub color: u32,
}

impl Species {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: &str,
        name: &str,
        size: (f32, f32),
        speed: (f32, f32),
        weight: f32,
        value: f32,
        color: u32,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            min_size: size.0,
            max_size: size.1,
            min_speed: speed.0,
            max_speed: speed.1,
            weight,
            value,
            color,
        }
    }

    /// Midpoint of the size range, where weight and value equal their base
    #[inline]
    pub fn mid_size(&self) -> f32 {
        (self.min_size + self.max_size) / 2.0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ok = self.min_size > 0.0
            && self.min_size <= self.max_size
            && self.max_size.is_finite()
            && self.min_speed >= 0.0
            && self.min_speed <= self.max_speed
            && self.max_speed.is_finite()
            && self.weight.is_finite()
            && self.weight >= 0.0
            && self.value.is_finite()
            && self.value >= 0.0;
        if ok {
            Ok(())
        } else {
            Err(ConfigError::SpeciesRange(self.id.clone()))
        }
    }
}

/// The built-in species
pub fn catalog() -> Vec<Species> {
    vec![
        Species::new("atlantic_cod", "Atlantic Cod", (40.0, 80.0), (15.0, 35.0), 2.5, 15.0, 0x8B7355),
        Species::new("haddock", "Haddock", (30.0, 60.0), (20.0, 40.0), 1.8, 12.0, 0x696969),
        Species::new("pollock", "Pollock", (35.0, 70.0), (25.0, 50.0), 2.0, 10.0, 0x2F4F4F),
        Species::new("whiting", "Whiting", (25.0, 45.0), (30.0, 60.0), 1.2, 8.0, 0xF5F5DC),
        Species::new("mackerel", "Mackerel", (28.0, 50.0), (40.0, 80.0), 1.5, 18.0, 0x4682B4),
        Species::new("herring", "Herring", (20.0, 35.0), (35.0, 70.0), 0.8, 5.0, 0xC0C0C0),
        Species::new("flounder", "Flounder", (30.0, 55.0), (10.0, 25.0), 1.4, 20.0, 0x8B4513),
        Species::new("sole", "Sole", (25.0, 40.0), (8.0, 20.0), 1.0, 25.0, 0xD2691E),
        Species::new("bass", "Sea Bass", (50.0, 100.0), (20.0, 45.0), 4.0, 30.0, 0x2E8B57),
        Species::new("tuna", "Bluefin Tuna", (80.0, 150.0), (50.0, 120.0), 25.0, 100.0, 0x191970),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_valid_and_unique() {
        let species = catalog();
        assert_eq!(species.len(), 10);
        for s in &species {
            assert!(s.validate().is_ok(), "{} should be valid", s.id);
        }
        let mut ids: Vec<_> = species.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), species.len());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let bad = Species::new("bad", "Bad", (50.0, 10.0), (1.0, 2.0), 1.0, 1.0, 0);
        assert_eq!(bad.validate(), Err(ConfigError::SpeciesRange("bad".into())));
    }
}
