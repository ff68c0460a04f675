//! RIVM health monitor percentages, reconstructed into resident counts.

mod mapping;

use chrono::{DateTime, Utc};

use super::derivation::{parse_row, ParseContext};
use super::record::{ParsedDataset, RawRecord, Source};

/// Display label for a raw field key; unknown keys pass through unchanged.
pub fn label_for<'a>(key: &'a str) -> &'a str {
    match mapping::indicator_for(key) {
        Some(def) => def.title,
        None => key,
    }
}

pub fn is_known_key(key: &str) -> bool {
    mapping::indicator_for(key).is_some()
}

/// Parse a health payload. The source reports percentages; the absolute
/// count comes from the population total resolved by the demographics parse.
pub fn parse(record: &RawRecord, ctx: &ParseContext, fetched_at: DateTime<Utc>) -> ParsedDataset {
    let mut dataset = ParsedDataset::new(Source::Health, fetched_at);
    for def in mapping::TABLE {
        dataset.insert(def.key, parse_row(record, def, ctx));
    }
    dataset
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fetched_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn percentage_reconstructs_absolute_count() {
        let record: RawRecord =
            serde_json::from_str(r#"{"ErvarenGezondheidGoed_5": 40}"#).expect("record");
        let ctx = ParseContext::with_population(Some(1000.0));

        let dataset = parse(&record, &ctx, fetched_at());
        let health = dataset.get("ErvarenGezondheidGoed_5").expect("mapped");
        assert_eq!(health.relative, Some(40.0));
        assert_eq!(health.absolute, Some(400.0));
        assert_eq!(health.unit.as_deref(), Some("%"));
    }

    #[test]
    fn missing_population_leaves_percentage_only() {
        let record: RawRecord = serde_json::from_str(r#"{"Roker_8": 22.5}"#).expect("record");

        let dataset = parse(&record, &ParseContext::default(), fetched_at());
        let smokers = dataset.get("Roker_8").expect("mapped");
        assert_eq!(smokers.relative, Some(22.5));
        assert_eq!(smokers.absolute, None);
    }

    #[test]
    fn sentinel_values_stay_null() {
        let record: RawRecord =
            serde_json::from_str(r#"{"ErnstigEenzaam_13": ".", "Mantelzorger_15": ""}"#)
                .expect("record");
        let ctx = ParseContext::with_population(Some(5000.0));

        let dataset = parse(&record, &ctx, fetched_at());
        for key in ["ErnstigEenzaam_13", "Mantelzorger_15"] {
            let value = dataset.get(key).expect("mapped");
            assert_eq!(value.absolute, None, "{key}");
            assert_eq!(value.relative, None, "{key}");
        }
    }

    #[test]
    fn label_lookup_falls_back_to_key() {
        assert_eq!(label_for("Roker_8"), "Roker");
        assert_eq!(label_for("Onbekend_99"), "Onbekend_99");
        assert!(!is_known_key("Onbekend_99"));
    }
}
