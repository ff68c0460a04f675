use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::datasets::record::Source;

/// Which derived figure an indicator is compared on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonBasis {
    #[default]
    #[serde(rename = "relatief")]
    Relative,
    #[serde(rename = "absoluut")]
    Absolute,
}

/// Whether a high reading is favorable (income) or unfavorable (crime).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreDirection {
    #[default]
    Positive,
    Negative,
}

/// Tolerance band, as a percentage of the baseline.
pub const DEFAULT_MARGIN: f64 = 20.0;

/// Comparison settings applied to one indicator during scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub comparison: ComparisonBasis,
    pub margin: f64,
    /// Fixed baseline overriding the national figure.
    pub base_value: Option<f64>,
    pub direction: ScoreDirection,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            comparison: ComparisonBasis::default(),
            margin: DEFAULT_MARGIN,
            base_value: None,
            direction: ScoreDirection::default(),
        }
    }
}

/// Partial override from the configuration asset; unset fields keep the
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringOverride {
    pub comparison: Option<ComparisonBasis>,
    pub margin: Option<f64>,
    pub base_value: Option<f64>,
    pub direction: Option<ScoreDirection>,
}

impl ScoringOverride {
    pub fn resolve(&self) -> ScoringConfig {
        let defaults = ScoringConfig::default();
        ScoringConfig {
            comparison: self.comparison.unwrap_or(defaults.comparison),
            margin: self.margin.unwrap_or(defaults.margin),
            base_value: self.base_value.or(defaults.base_value),
            direction: self.direction.unwrap_or(defaults.direction),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OverrideLoadError {
    #[error("failed to read scoring overrides: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid scoring override document: {0}")]
    Json(#[from] serde_json::Error),
}

/// The override asset: per-source, per-indicator scoring settings, loaded
/// once by the caller and handed to the engine explicitly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoringOverrides {
    sources: BTreeMap<Source, BTreeMap<String, ScoringOverride>>,
}

impl ScoringOverrides {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, OverrideLoadError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, OverrideLoadError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Degrading loader for process startup: a missing or corrupt asset is
    /// logged and scoring proceeds with defaults for every indicator.
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Self {
        let path = match path {
            Some(path) => path,
            None => return Self::empty(),
        };

        match Self::from_path(path.as_ref()) {
            Ok(overrides) => overrides,
            Err(err) => {
                tracing::warn!(
                    path = %path.as_ref().display(),
                    error = %err,
                    "scoring overrides unavailable, continuing with defaults"
                );
                Self::empty()
            }
        }
    }

    pub fn insert(
        &mut self,
        source: Source,
        key: impl Into<String>,
        value: ScoringOverride,
    ) {
        self.sources
            .entry(source)
            .or_default()
            .insert(key.into(), value);
    }

    pub fn get(&self, source: Source, key: &str) -> Option<&ScoringOverride> {
        self.sources.get(&source).and_then(|keyed| keyed.get(key))
    }

    /// Effective configuration for an indicator: the resolved override when
    /// one exists, the defaults otherwise.
    pub fn config_for(&self, source: Source, key: &str) -> ScoringConfig {
        self.get(source, key)
            .map(ScoringOverride::resolve)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.values().all(BTreeMap::is_empty)
    }
}
