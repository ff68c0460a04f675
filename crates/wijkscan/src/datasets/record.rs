use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::scoring::ScoringConfig;

/// Statistical source feeding the pipeline.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Demographics,
    Health,
    Livability,
    Safety,
}

impl Source {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Demographics => "Demografie",
            Self::Health => "Gezondheid",
            Self::Livability => "Leefbaarheid",
            Self::Safety => "Veiligheid",
        }
    }

    pub const fn ordered() -> [Source; 4] {
        [
            Self::Demographics,
            Self::Health,
            Self::Livability,
            Self::Safety,
        ]
    }
}

/// Verbatim field value as delivered by an upstream statistical API.
///
/// The feeds mix numbers, free text and explicit nulls in one record; `'.'`
/// is the CBS sentinel for "no data" and parses as null, never as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Null,
}

impl RawValue {
    /// Numeric reading of the value; sentinel and malformed text become `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawValue::Number(value) if value.is_finite() => Some(*value),
            RawValue::Number(_) => None,
            RawValue::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() || trimmed == "." {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
            }
            RawValue::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }
}

/// One location's raw key-value payload for a single source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(BTreeMap<String, RawValue>);

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: RawValue) {
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.0.get(key)
    }

    /// The field's value, with absent fields reading as null.
    pub fn value(&self, key: &str) -> RawValue {
        self.0.get(key).cloned().unwrap_or(RawValue::Null)
    }

    pub fn numeric(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(RawValue::as_number)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RawValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, RawValue)> for RawRecord {
    fn from_iter<T: IntoIterator<Item = (String, RawValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Tri-state classification of an indicator against its baseline band.
///
/// The scoring engine applies direction inversion before storing the score,
/// so `AboveExpected` reads as favorable for every indicator regardless of
/// whether a high raw value is good or bad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Score {
    BelowExpected,
    WithinExpected,
    AboveExpected,
}

impl Score {
    pub const fn value(self) -> i8 {
        match self {
            Self::BelowExpected => -1,
            Self::WithinExpected => 0,
            Self::AboveExpected => 1,
        }
    }

    pub const fn invert(self) -> Self {
        match self {
            Self::BelowExpected => Self::AboveExpected,
            Self::WithinExpected => Self::WithinExpected,
            Self::AboveExpected => Self::BelowExpected,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::BelowExpected => "below expected",
            Self::WithinExpected => "within expected",
            Self::AboveExpected => "above expected",
        }
    }
}

impl From<Score> for i8 {
    fn from(score: Score) -> Self {
        score.value()
    }
}

impl TryFrom<i8> for Score {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::BelowExpected),
            0 => Ok(Self::WithinExpected),
            1 => Ok(Self::AboveExpected),
            other => Err(format!("score must be -1, 0 or 1, got {other}")),
        }
    }
}

/// Canonical output unit: one indicator with its derived figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedValue {
    /// Human-readable label resolved by the source's key mapping.
    pub title: String,
    /// The verbatim source value.
    pub original_value: RawValue,
    /// Count-based figure.
    pub absolute: Option<f64>,
    /// Percentage-based figure on a 0-100 scale.
    pub relative: Option<f64>,
    /// Display hint only; never feeds a computation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Configuration applied by the scoring pass, absent before scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring: Option<ScoringConfig>,
    /// Outcome of the scoring pass; stays absent when unscorable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculated_score: Option<Score>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub source: Source,
    pub fetched_at: DateTime<Utc>,
}

/// Parsed indicators for one (location, source) pair.
///
/// Keyed by the raw source key, not the display label, so joins between a
/// location and the national reference stay stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedDataset {
    pub indicators: BTreeMap<String, ParsedValue>,
    pub metadata: DatasetMetadata,
}

impl ParsedDataset {
    pub fn new(source: Source, fetched_at: DateTime<Utc>) -> Self {
        Self {
            indicators: BTreeMap::new(),
            metadata: DatasetMetadata { source, fetched_at },
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: ParsedValue) {
        self.indicators.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&ParsedValue> {
        self.indicators.get(key)
    }

    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_number_treats_sentinels_as_null() {
        assert_eq!(RawValue::Null.as_number(), None);
        assert_eq!(RawValue::Text(String::new()).as_number(), None);
        assert_eq!(RawValue::Text("  ".to_string()).as_number(), None);
        assert_eq!(RawValue::Text(".".to_string()).as_number(), None);
        assert_eq!(RawValue::Text("n.v.t.".to_string()).as_number(), None);
        assert_eq!(RawValue::Text("12.5".to_string()).as_number(), Some(12.5));
        assert_eq!(RawValue::Number(40.0).as_number(), Some(40.0));
        assert_eq!(RawValue::Number(f64::NAN).as_number(), None);
    }

    #[test]
    fn raw_record_deserializes_mixed_payload() {
        let record: RawRecord = serde_json::from_str(
            r#"{"AantalInwoners_5": 8100, "Gemeentenaam_1": "Utrecht", "Verweduwd_16": null}"#,
        )
        .expect("payload deserializes");

        assert_eq!(record.numeric("AantalInwoners_5"), Some(8100.0));
        assert_eq!(
            record.value("Gemeentenaam_1"),
            RawValue::Text("Utrecht".to_string())
        );
        assert!(record.value("Verweduwd_16").is_null());
        assert!(record.value("Ontbrekend_99").is_null());
    }

    #[test]
    fn score_round_trips_through_integers() {
        for score in [
            Score::BelowExpected,
            Score::WithinExpected,
            Score::AboveExpected,
        ] {
            let json = serde_json::to_string(&score).expect("serializes");
            let back: Score = serde_json::from_str(&json).expect("deserializes");
            assert_eq!(back, score);
        }
        assert_eq!(serde_json::to_string(&Score::BelowExpected).unwrap(), "-1");
        assert!(serde_json::from_str::<Score>("2").is_err());
    }

    #[test]
    fn score_inversion_keeps_zero_fixed() {
        assert_eq!(Score::BelowExpected.invert(), Score::AboveExpected);
        assert_eq!(Score::AboveExpected.invert(), Score::BelowExpected);
        assert_eq!(Score::WithinExpected.invert(), Score::WithinExpected);
    }
}
