//! Politie registered-crime counts. Unlike the table-driven sources, the set
//! of crime codes present differs per area, so the parser walks the record's
//! own keys and labels them through the taxonomy.

mod mapping;

use chrono::{DateTime, Utc};

use super::derivation::{value_from_parts, Derivation, ParseContext};
use super::record::{ParsedDataset, RawRecord, Source};

/// Display label for a raw key: the embedded `major.minor.sub` code is
/// looked up in the crime taxonomy; anything else passes through unchanged.
pub fn label_for<'a>(key: &'a str) -> &'a str {
    match mapping::extract_crime_code(key).and_then(mapping::label_for_code) {
        Some(label) => label,
        None => key,
    }
}

pub fn is_known_crime_code(code: &str) -> bool {
    mapping::label_for_code(code).is_some()
}

/// Parse a safety payload: incident counts become absolute figures, with
/// incidents per 100 residents as the relative figure.
pub fn parse(record: &RawRecord, ctx: &ParseContext, fetched_at: DateTime<Utc>) -> ParsedDataset {
    let mut dataset = ParsedDataset::new(Source::Safety, fetched_at);
    for (key, value) in record.iter() {
        dataset.insert(
            key.clone(),
            value_from_parts(label_for(key), value.clone(), None, Derivation::IncidentRate, ctx),
        );
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
    fn crime_keys_resolve_taxonomy_labels() {
        assert_eq!(label_for("Crime_1.1.1"), "Diefstal/inbraak woning");
        assert_eq!(label_for("2.5.2"), "Winkeldiefstal");
        assert_eq!(label_for("garbage"), "garbage");
        assert_eq!(label_for("Crime_9.9.9"), "Crime_9.9.9");
    }

    #[test]
    fn incident_counts_derive_rate_per_hundred_residents() {
        let record: RawRecord =
            serde_json::from_str(r#"{"Crime_1.2.3": 25, "Crime_2.2.1": "."}"#).expect("record");
        let ctx = ParseContext::with_population(Some(5000.0));

        let dataset = parse(&record, &ctx, fetched_at());

        let bike_theft = dataset.get("Crime_1.2.3").expect("keyed by raw key");
        assert_eq!(bike_theft.title, "Diefstal van brom-, snor-, fietsen");
        assert_eq!(bike_theft.absolute, Some(25.0));
        assert_eq!(bike_theft.relative, Some(0.5));

        let vandalism = dataset.get("Crime_2.2.1").expect("keyed by raw key");
        assert_eq!(vandalism.absolute, None);
        assert_eq!(vandalism.relative, None);
    }

    #[test]
    fn missing_population_leaves_counts_without_rate() {
        let record: RawRecord = serde_json::from_str(r#"{"Crime_1.4.5": 12}"#).expect("record");

        let dataset = parse(&record, &ParseContext::default(), fetched_at());
        let assault = dataset.get("Crime_1.4.5").expect("keyed");
        assert_eq!(assault.absolute, Some(12.0));
        assert_eq!(assault.relative, None);
    }

    #[test]
    fn non_numeric_metadata_keys_are_kept_as_nulls() {
        let record: RawRecord =
            serde_json::from_str(r#"{"WijkenEnBuurten": "Centrum"}"#).expect("record");
        let ctx = ParseContext::with_population(Some(5000.0));

        let dataset = parse(&record, &ctx, fetched_at());
        let area = dataset.get("WijkenEnBuurten").expect("keyed");
        assert_eq!(area.title, "WijkenEnBuurten");
        assert_eq!(area.absolute, None);
        assert_eq!(area.relative, None);
    }
}
