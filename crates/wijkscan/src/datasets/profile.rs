//! Assembly of the four scored datasets into one location profile, with a
//! summary view for reports and API responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::{ParsedDataset, RawRecord, Score, Source};
use super::scoring::ScoringEngine;
use super::{demographics, health, livability, safety};

/// Parsed (and, after `scored`, classified) datasets for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationProfile {
    pub demographics: ParsedDataset,
    pub health: ParsedDataset,
    pub livability: ParsedDataset,
    pub safety: ParsedDataset,
}

impl LocationProfile {
    /// Parse all four sources for one location. Demographics goes first so
    /// the population and household totals are available as denominators.
    pub fn from_records(
        demographics_record: &RawRecord,
        health_record: &RawRecord,
        livability_record: &RawRecord,
        safety_record: &RawRecord,
        fetched_at: DateTime<Utc>,
    ) -> Self {
        let ctx = demographics::context(demographics_record);
        Self {
            demographics: demographics::parse(demographics_record, fetched_at),
            health: health::parse(health_record, &ctx, fetched_at),
            livability: livability::parse(livability_record, &ctx, fetched_at),
            safety: safety::parse(safety_record, &ctx, fetched_at),
        }
    }

    pub fn dataset(&self, source: Source) -> &ParsedDataset {
        match source {
            Source::Demographics => &self.demographics,
            Source::Health => &self.health,
            Source::Livability => &self.livability,
            Source::Safety => &self.safety,
        }
    }

    /// Score this profile against the national reference profile.
    pub fn scored(&self, engine: &ScoringEngine, national: &LocationProfile) -> LocationProfile {
        LocationProfile {
            demographics: engine.score_dataset(&self.demographics, &national.demographics),
            health: engine.score_dataset(&self.health, &national.health),
            livability: engine.score_dataset(&self.livability, &national.livability),
            safety: engine.score_dataset(&self.safety, &national.safety),
        }
    }

    pub fn summary(&self) -> ProfileSummary {
        let mut sources = Vec::with_capacity(4);
        let mut strengths = Vec::new();
        let mut concerns = Vec::new();

        for source in Source::ordered() {
            let dataset = self.dataset(source);
            let mut tally = ScoreTally::default();

            for (key, value) in &dataset.indicators {
                tally.record(value.calculated_score);
                match value.calculated_score {
                    Some(Score::AboveExpected) => strengths.push(IndicatorHighlight {
                        source,
                        key: key.clone(),
                        title: value.title.clone(),
                    }),
                    Some(Score::BelowExpected) => concerns.push(IndicatorHighlight {
                        source,
                        key: key.clone(),
                        title: value.title.clone(),
                    }),
                    _ => {}
                }
            }

            sources.push(SourceScoreEntry {
                source,
                source_label: source.label(),
                indicator_count: dataset.len(),
                tally,
            });
        }

        ProfileSummary {
            sources,
            strengths,
            concerns,
        }
    }
}

/// Score distribution for one source. Direction inversion in the scoring
/// engine makes `favorable` read correctly for "lower is better" indicators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    pub favorable: usize,
    pub in_line: usize,
    pub unfavorable: usize,
    pub unscored: usize,
}

impl ScoreTally {
    fn record(&mut self, score: Option<Score>) {
        match score {
            Some(Score::AboveExpected) => self.favorable += 1,
            Some(Score::WithinExpected) => self.in_line += 1,
            Some(Score::BelowExpected) => self.unfavorable += 1,
            None => self.unscored += 1,
        }
    }

    pub fn scored_total(&self) -> usize {
        self.favorable + self.in_line + self.unfavorable
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SourceScoreEntry {
    pub source: Source,
    pub source_label: &'static str,
    pub indicator_count: usize,
    pub tally: ScoreTally,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndicatorHighlight {
    pub source: Source,
    pub key: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub sources: Vec<SourceScoreEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub strengths: Vec<IndicatorHighlight>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub concerns: Vec<IndicatorHighlight>,
}
