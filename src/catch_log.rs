//! Per-session catch history
//!
//! Every landed creature is recorded; the summary is what a results screen
//! shows when the session ends.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::sim::CatchInfo;

/// A single landed creature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchRecord {
    pub species_id: String,
    pub name: String,
    /// kg
    pub weight: f32,
    /// gold
    pub value: f32,
    pub size: f32,
}

impl From<CatchInfo> for CatchRecord {
    fn from(info: CatchInfo) -> Self {
        Self {
            species_id: info.species_id,
            name: info.name,
            weight: info.weight,
            value: info.value,
            size: info.size,
        }
    }
}

/// End-of-session results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub fish_caught: usize,
    pub total_value: f32,
    pub total_weight: f32,
    /// Species id -> count
    pub fish_by_species: BTreeMap<String, usize>,
    pub best_catch: Option<CatchRecord>,
}

/// Catch history, in landing order
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatchLog {
    pub entries: Vec<CatchRecord>,
}

impl CatchLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: CatchRecord) {
        self.entries.push(record);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_caught(&self) -> usize {
        self.entries.len()
    }

    pub fn total_value(&self) -> f32 {
        self.entries.iter().map(|e| e.value).sum()
    }

    pub fn total_weight(&self) -> f32 {
        self.entries.iter().map(|e| e.weight).sum()
    }

    pub fn count_by_species(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.species_id.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Most valuable catch; the earliest wins a tie
    pub fn best_catch(&self) -> Option<&CatchRecord> {
        self.entries.iter().fold(None, |best: Option<&CatchRecord>, e| match best {
            Some(b) if b.value >= e.value => Some(b),
            _ => Some(e),
        })
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            fish_caught: self.total_caught(),
            total_value: self.total_value(),
            total_weight: self.total_weight(),
            fish_by_species: self.count_by_species(),
            best_catch: self.best_catch().cloned(),
        }
    }
}
