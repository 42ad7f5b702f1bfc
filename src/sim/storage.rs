//! Catch storage (the bucket)

use serde::{Deserialize, Serialize};

/// Bucket upgrade tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BucketTier {
    #[default]
    Small,
    Medium,
    Large,
    Cooler,
    Bottomless,
}

impl BucketTier {
    /// Capacity in kg (None = unlimited)
    pub fn capacity(&self) -> Option<f32> {
        match self {
            BucketTier::Small => Some(5.0),
            BucketTier::Medium => Some(10.0),
            BucketTier::Large => Some(20.0),
            BucketTier::Cooler => Some(35.0),
            BucketTier::Bottomless => None,
        }
    }

    /// Tier for a 1-based shop level
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(BucketTier::Small),
            2 => Some(BucketTier::Medium),
            3 => Some(BucketTier::Large),
            4 => Some(BucketTier::Cooler),
            5 => Some(BucketTier::Bottomless),
            _ => None,
        }
    }
}

/// Weight currently held against a tier's capacity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Storage {
    pub tier: BucketTier,
    /// kg
    pub weight: f32,
}

impl Storage {
    pub fn new(tier: BucketTier) -> Self {
        Self { tier, weight: 0.0 }
    }

    pub fn capacity(&self) -> Option<f32> {
        self.tier.capacity()
    }

    /// Full once weight reaches capacity
    pub fn is_full(&self) -> bool {
        self.capacity().is_some_and(|cap| self.weight >= cap)
    }

    pub fn add(&mut self, weight: f32) {
        self.weight += weight.max(0.0);
    }

    /// Empty the bucket, returning what it held
    pub fn empty(&mut self) -> f32 {
        std::mem::take(&mut self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_at_capacity() {
        let mut storage = Storage::new(BucketTier::Small);
        assert!(!storage.is_full());
        storage.add(2.5);
        assert!(!storage.is_full());
        storage.add(2.5);
        assert!(storage.is_full());
        assert_eq!(storage.empty(), 5.0);
        assert!(!storage.is_full());
    }

    #[test]
    fn test_bottomless_never_full() {
        let mut storage = Storage::new(BucketTier::Bottomless);
        storage.add(10_000.0);
        assert!(!storage.is_full());
        assert_eq!(storage.capacity(), None);
    }

    #[test]
    fn test_tier_levels() {
        assert_eq!(BucketTier::from_level(1), Some(BucketTier::Small));
        assert_eq!(BucketTier::from_level(4).and_then(|t| t.capacity()), Some(35.0));
        assert_eq!(BucketTier::from_level(0), None);
        assert_eq!(BucketTier::from_level(6), None);
    }
}
