//! CBS Kerncijfers demographics: the source every other parser depends on,
//! because it resolves the population and household denominators.

mod mapping;

use chrono::{DateTime, Utc};

use super::derivation::{derive_figures, parse_row, Derivation, ParseContext};
use super::record::{ParsedDataset, ParsedValue, RawRecord, RawValue, Source};

pub const POPULATION_KEY: &str = "AantalInwoners_5";
pub const HOUSEHOLDS_KEY: &str = "HuishoudensTotaal_28";
pub const WESTERN_BACKGROUND_KEY: &str = "WestersTotaal_17";
pub const NON_WESTERN_BACKGROUND_KEY: &str = "NietWestersTotaal_18";

/// Key of the computed native-born indicator; the feed has no such field.
pub const NATIVE_BORN_KEY: &str = "Autochtoon";

/// Display label for a raw field key; unknown keys pass through unchanged.
pub fn label_for<'a>(key: &'a str) -> &'a str {
    match mapping::indicator_for(key) {
        Some(def) => def.title,
        None => key,
    }
}

pub fn is_known_key(key: &str) -> bool {
    mapping::indicator_for(key).is_some() || key == NATIVE_BORN_KEY
}

pub fn total_population(record: &RawRecord) -> Option<f64> {
    record.numeric(POPULATION_KEY)
}

pub fn total_households(record: &RawRecord) -> Option<f64> {
    record.numeric(HOUSEHOLDS_KEY)
}

/// Denominator context the health, livability and safety parsers consume.
pub fn context(record: &RawRecord) -> ParseContext {
    ParseContext {
        total_population: total_population(record),
        total_households: total_households(record),
    }
}

/// Parse a demographics payload into the canonical indicator set.
///
/// Counts keep their raw figure as absolute and derive the relative share
/// from the population or household total; scalars and percentages stay
/// absolute-only. The native-born indicator is computed, not read.
pub fn parse(record: &RawRecord, fetched_at: DateTime<Utc>) -> ParsedDataset {
    let ctx = context(record);
    let mut dataset = ParsedDataset::new(Source::Demographics, fetched_at);

    for def in mapping::TABLE {
        dataset.insert(def.key, parse_row(record, def, &ctx));
    }
    dataset.insert(NATIVE_BORN_KEY, native_born(record, &ctx));

    dataset
}

/// `Autochtoon` = inwoners - westerse achtergrond - niet-westerse achtergrond.
fn native_born(record: &RawRecord, ctx: &ParseContext) -> ParsedValue {
    let derived = match (
        ctx.total_population,
        record.numeric(WESTERN_BACKGROUND_KEY),
        record.numeric(NON_WESTERN_BACKGROUND_KEY),
    ) {
        (Some(population), Some(western), Some(non_western)) => {
            Some(population - western - non_western)
        }
        _ => None,
    };

    let (absolute, relative) = derive_figures(derived, Derivation::PopulationShare, ctx);
    ParsedValue {
        title: NATIVE_BORN_KEY.to_string(),
        original_value: RawValue::Null,
        absolute,
        relative,
        unit: None,
        scoring: None,
        calculated_score: None,
    }
}
