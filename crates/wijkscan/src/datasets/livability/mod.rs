//! Livability survey percentages; arithmetic mirrors the health source.

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

pub fn parse(record: &RawRecord, ctx: &ParseContext, fetched_at: DateTime<Utc>) -> ParsedDataset {
    let mut dataset = ParsedDataset::new(Source::Livability, fetched_at);
    for def in mapping::TABLE {
        dataset.insert(def.key, parse_row(record, def, ctx));
    }
    dataset
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn survey_percentages_parse_like_health_figures() {
        let record: RawRecord = serde_json::from_str(
            r#"{"TevredenMetWoonomgeving_6": 84, "ErvaartVeelOverlastInBuurt_7": "."}"#,
        )
        .expect("record");
        let ctx = ParseContext::with_population(Some(2500.0));
        let fetched_at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();

        let dataset = parse(&record, &ctx, fetched_at);

        let satisfied = dataset.get("TevredenMetWoonomgeving_6").expect("mapped");
        assert_eq!(satisfied.title, "Tevreden met woonomgeving");
        assert_eq!(satisfied.relative, Some(84.0));
        assert_eq!(satisfied.absolute, Some(2100.0));

        let nuisance = dataset.get("ErvaartVeelOverlastInBuurt_7").expect("mapped");
        assert_eq!(nuisance.absolute, None);
        assert_eq!(nuisance.relative, None);
    }
}
