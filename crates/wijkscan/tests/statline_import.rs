use std::io::Cursor;

use chrono::{TimeZone, Utc};
use wijkscan::datasets::{demographics, import};

#[test]
fn statline_export_feeds_the_demographics_parser() {
    let export = "Gemeentenaam_1;AantalInwoners_5;Mannen_6;WestersTotaal_17;NietWestersTotaal_18;HuishoudensTotaal_28;GemiddeldeHuishoudensgrootte_32;Gescheiden_15\n\
                  Groningen;50000;24500;6000;4000;26000;1,9;.\n";

    let record = import::raw_record_from_csv(Cursor::new(export)).expect("export imports");
    let fetched_at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    let dataset = demographics::parse(&record, fetched_at);

    let men = dataset.get("Mannen_6").expect("mapped");
    assert_eq!(men.absolute, Some(24500.0));
    assert_eq!(men.relative, Some(49.0));

    // comma decimal from the export survives as a scalar figure
    let household_size = dataset
        .get("GemiddeldeHuishoudensgrootte_32")
        .expect("mapped");
    assert_eq!(household_size.absolute, Some(1.9));
    assert_eq!(household_size.relative, None);

    // the '.' no-data sentinel degrades to nulls, not zero
    let divorced = dataset.get("Gescheiden_15").expect("mapped");
    assert_eq!(divorced.absolute, None);
    assert_eq!(divorced.relative, None);

    let native = dataset.get(demographics::NATIVE_BORN_KEY).expect("derived");
    assert_eq!(native.absolute, Some(40000.0));
    assert_eq!(native.relative, Some(80.0));
}
