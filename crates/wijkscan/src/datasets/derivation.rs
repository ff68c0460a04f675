use super::record::{ParsedValue, RawRecord, RawValue};

/// Denominators resolved from the demographics dataset.
///
/// Demographics is parsed first; the other sources receive the resolved
/// totals through this context rather than re-reading the raw payload.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParseContext {
    pub total_population: Option<f64>,
    pub total_households: Option<f64>,
}

impl ParseContext {
    pub fn with_population(total_population: Option<f64>) -> Self {
        Self {
            total_population,
            total_households: None,
        }
    }
}

/// How a raw field turns into absolute and relative figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Derivation {
    /// Count denominated by the resident total.
    PopulationShare,
    /// Count denominated by the household total.
    HouseholdShare,
    /// Standalone figure without a natural denominator.
    Scalar,
    /// Non-numeric metadata, label only.
    Text,
    /// Source reports a 0-100 percentage; the count is reconstructed from
    /// the population.
    PopulationPercentage,
    /// Incident count; relative is incidents per 100 residents.
    IncidentRate,
}

/// One row of a source's indicator table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IndicatorDef {
    pub(crate) key: &'static str,
    pub(crate) title: &'static str,
    pub(crate) unit: Option<&'static str>,
    pub(crate) derivation: Derivation,
}

pub(crate) fn parse_row(
    record: &RawRecord,
    def: &IndicatorDef,
    ctx: &ParseContext,
) -> ParsedValue {
    value_from_parts(def.title, record.value(def.key), def.unit, def.derivation, ctx)
}

pub(crate) fn value_from_parts(
    title: &str,
    original: RawValue,
    unit: Option<&str>,
    derivation: Derivation,
    ctx: &ParseContext,
) -> ParsedValue {
    let (absolute, relative) = derive_figures(original.as_number(), derivation, ctx);
    ParsedValue {
        title: title.to_string(),
        original_value: original,
        absolute,
        relative,
        unit: unit.map(str::to_string),
        scoring: None,
        calculated_score: None,
    }
}

/// Absolute/relative derivation per the source arithmetic. A missing value
/// or a missing/zero denominator degrades the dependent figure to `None`.
pub(crate) fn derive_figures(
    original: Option<f64>,
    derivation: Derivation,
    ctx: &ParseContext,
) -> (Option<f64>, Option<f64>) {
    let value = match original {
        Some(value) => value,
        None => return (None, None),
    };

    match derivation {
        Derivation::PopulationShare => (Some(value), share_of(value, ctx.total_population)),
        Derivation::HouseholdShare => (Some(value), share_of(value, ctx.total_households)),
        Derivation::Scalar => (Some(value), None),
        Derivation::Text => (None, None),
        Derivation::PopulationPercentage => {
            (scaled_count(value, ctx.total_population), Some(value))
        }
        Derivation::IncidentRate => (Some(value), share_of(value, ctx.total_population)),
    }
}

fn share_of(count: f64, denominator: Option<f64>) -> Option<f64> {
    match denominator {
        Some(total) if total != 0.0 => Some(count / total * 100.0),
        _ => None,
    }
}

fn scaled_count(percentage: f64, population: Option<f64>) -> Option<f64> {
    population
        .filter(|total| *total != 0.0)
        .map(|total| (percentage * total / 100.0).round())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(population: Option<f64>, households: Option<f64>) -> ParseContext {
        ParseContext {
            total_population: population,
            total_households: households,
        }
    }

    #[test]
    fn population_share_divides_by_resident_total() {
        let (absolute, relative) =
            derive_figures(Some(1500.0), Derivation::PopulationShare, &ctx(Some(10_000.0), None));
        assert_eq!(absolute, Some(1500.0));
        assert_eq!(relative, Some(15.0));
    }

    #[test]
    fn zero_denominator_never_divides() {
        let (absolute, relative) =
            derive_figures(Some(25.0), Derivation::IncidentRate, &ctx(Some(0.0), None));
        assert_eq!(absolute, Some(25.0));
        assert_eq!(relative, None);

        let (_, relative) =
            derive_figures(Some(120.0), Derivation::HouseholdShare, &ctx(None, None));
        assert_eq!(relative, None);
    }

    #[test]
    fn percentage_reconstructs_rounded_count() {
        let (absolute, relative) = derive_figures(
            Some(40.0),
            Derivation::PopulationPercentage,
            &ctx(Some(1000.0), None),
        );
        assert_eq!(absolute, Some(400.0));
        assert_eq!(relative, Some(40.0));

        let (absolute, _) = derive_figures(
            Some(33.3),
            Derivation::PopulationPercentage,
            &ctx(Some(850.0), None),
        );
        assert_eq!(absolute, Some(283.0));
    }

    #[test]
    fn missing_value_degrades_to_nulls() {
        for derivation in [
            Derivation::PopulationShare,
            Derivation::Scalar,
            Derivation::PopulationPercentage,
            Derivation::IncidentRate,
        ] {
            let (absolute, relative) =
                derive_figures(None, derivation, &ctx(Some(5000.0), Some(2000.0)));
            assert_eq!(absolute, None);
            assert_eq!(relative, None);
        }
    }
}
