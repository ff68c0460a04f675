//! Baseline comparison: classify every location indicator as below, within
//! or above the expected range around a national reference figure.

mod config;

pub use config::{
    ComparisonBasis, OverrideLoadError, ScoreDirection, ScoringConfig, ScoringOverride,
    ScoringOverrides, DEFAULT_MARGIN,
};

use super::record::{ParsedDataset, ParsedValue, Score};

/// Stateless engine applying override-aware baseline comparisons.
///
/// The override set is injected once at construction; scoring itself is a
/// pure pass that never mutates its inputs, so one engine can serve
/// concurrent requests.
pub struct ScoringEngine {
    overrides: ScoringOverrides,
}

impl ScoringEngine {
    pub fn new(overrides: ScoringOverrides) -> Self {
        Self { overrides }
    }

    pub fn with_defaults() -> Self {
        Self::new(ScoringOverrides::empty())
    }

    /// Score every indicator of the location dataset against the national
    /// dataset of the same source. Keys missing on the national side stay
    /// unscored unless a fixed baseline override exists.
    pub fn score_dataset(
        &self,
        location: &ParsedDataset,
        national: &ParsedDataset,
    ) -> ParsedDataset {
        let source = location.metadata.source;
        let mut scored = ParsedDataset::new(source, location.metadata.fetched_at);

        for (key, value) in &location.indicators {
            let config = self.overrides.config_for(source, key);
            scored.insert(key.clone(), score_value(value, national.get(key), &config));
        }

        scored
    }
}

/// Score one indicator, returning a new value carrying the applied
/// configuration and the outcome; `None` means unscorable.
pub fn score_value(
    value: &ParsedValue,
    national: Option<&ParsedValue>,
    config: &ScoringConfig,
) -> ParsedValue {
    let mut scored = value.clone();
    scored.calculated_score = classify(value, national, config);
    scored.scoring = Some(config.clone());
    scored
}

fn comparison_figure(value: &ParsedValue, basis: ComparisonBasis) -> Option<f64> {
    match basis {
        ComparisonBasis::Relative => value.relative,
        ComparisonBasis::Absolute => value.absolute,
    }
}

fn classify(
    value: &ParsedValue,
    national: Option<&ParsedValue>,
    config: &ScoringConfig,
) -> Option<Score> {
    let comparison = comparison_figure(value, config.comparison)?;
    let baseline = match config.base_value {
        Some(base) => base,
        None => comparison_figure(national?, config.comparison)?,
    };

    let band = baseline.abs() * config.margin / 100.0;
    let raw = if comparison < baseline - band {
        Score::BelowExpected
    } else if comparison > baseline + band {
        Score::AboveExpected
    } else {
        Score::WithinExpected
    };

    Some(match config.direction {
        ScoreDirection::Positive => raw,
        ScoreDirection::Negative => raw.invert(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::record::RawValue;

    fn value(relative: Option<f64>, absolute: Option<f64>) -> ParsedValue {
        ParsedValue {
            title: "Testindicator".to_string(),
            original_value: RawValue::Null,
            absolute,
            relative,
            unit: None,
            scoring: None,
            calculated_score: None,
        }
    }

    fn score_relative(location: f64, baseline: f64, config: &ScoringConfig) -> Option<Score> {
        let scored = score_value(
            &value(Some(location), None),
            Some(&value(Some(baseline), None)),
            config,
        );
        scored.calculated_score
    }

    #[test]
    fn band_boundaries_are_inclusive() {
        let config = ScoringConfig::default();

        assert_eq!(score_relative(80.0, 100.0, &config), Some(Score::WithinExpected));
        assert_eq!(score_relative(120.0, 100.0, &config), Some(Score::WithinExpected));
        assert_eq!(score_relative(79.9, 100.0, &config), Some(Score::BelowExpected));
        assert_eq!(score_relative(120.1, 100.0, &config), Some(Score::AboveExpected));
        assert_eq!(score_relative(100.0, 100.0, &config), Some(Score::WithinExpected));
    }

    #[test]
    fn negative_direction_inverts_nonzero_scores() {
        let config = ScoringConfig {
            direction: ScoreDirection::Negative,
            ..ScoringConfig::default()
        };

        assert_eq!(score_relative(79.9, 100.0, &config), Some(Score::AboveExpected));
        assert_eq!(score_relative(120.1, 100.0, &config), Some(Score::BelowExpected));
        assert_eq!(score_relative(100.0, 100.0, &config), Some(Score::WithinExpected));
    }

    #[test]
    fn negative_baseline_keeps_band_symmetric() {
        let config = ScoringConfig::default();

        // baseline -10, margin 20% -> band [-12, -8]
        assert_eq!(score_relative(-12.0, -10.0, &config), Some(Score::WithinExpected));
        assert_eq!(score_relative(-12.5, -10.0, &config), Some(Score::BelowExpected));
        assert_eq!(score_relative(-7.5, -10.0, &config), Some(Score::AboveExpected));
    }

    #[test]
    fn fixed_baseline_override_beats_national_figure() {
        let config = ScoringConfig {
            base_value: Some(50.0),
            ..ScoringConfig::default()
        };

        let scored = score_value(&value(Some(75.0), None), None, &config);
        assert_eq!(scored.calculated_score, Some(Score::AboveExpected));
        assert_eq!(scored.scoring.as_ref().map(|c| c.base_value), Some(Some(50.0)));
    }

    #[test]
    fn absolute_basis_reads_the_absolute_figure() {
        let config = ScoringConfig {
            comparison: ComparisonBasis::Absolute,
            ..ScoringConfig::default()
        };

        let scored = score_value(
            &value(None, Some(900.0)),
            Some(&value(None, Some(1000.0))),
            &config,
        );
        assert_eq!(scored.calculated_score, Some(Score::WithinExpected));
    }

    #[test]
    fn missing_figures_are_unscorable() {
        let config = ScoringConfig::default();

        // location has no relative figure
        let scored = score_value(
            &value(None, Some(10.0)),
            Some(&value(Some(10.0), None)),
            &config,
        );
        assert_eq!(scored.calculated_score, None);

        // no national entry, no fixed baseline
        let scored = score_value(&value(Some(10.0), None), None, &config);
        assert_eq!(scored.calculated_score, None);

        // national entry exists but lacks the comparison figure
        let scored = score_value(
            &value(Some(10.0), None),
            Some(&value(None, Some(500.0))),
            &config,
        );
        assert_eq!(scored.calculated_score, None);
    }

    #[test]
    fn scoring_preserves_the_input_value() {
        let config = ScoringConfig::default();
        let input = value(Some(42.0), Some(84.0));
        let before = input.clone();

        let scored = score_value(&input, Some(&value(Some(40.0), None)), &config);

        assert_eq!(input, before);
        assert_eq!(scored.relative, Some(42.0));
        assert_eq!(scored.absolute, Some(84.0));
        assert_eq!(scored.calculated_score, Some(Score::WithinExpected));
    }
}
