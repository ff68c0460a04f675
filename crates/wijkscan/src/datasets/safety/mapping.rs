use std::collections::HashMap;
use std::sync::OnceLock;

/// Politie registered-crime taxonomy, `major.minor.sub` coded.
const CRIME_LABELS: &[(&str, &str)] = &[
    ("1.1.1", "Diefstal/inbraak woning"),
    ("1.1.2", "Diefstal/inbraak box/garage/schuur"),
    ("1.2.1", "Diefstal uit/vanaf motorvoertuigen"),
    ("1.2.2", "Diefstal van motorvoertuigen"),
    ("1.2.3", "Diefstal van brom-, snor-, fietsen"),
    ("1.2.4", "Zakkenrollerij"),
    ("1.2.5", "Diefstal af/uit/van overige voertuigen"),
    ("1.3.1", "Ongevallen (weg)"),
    ("1.4.1", "Zedenmisdrijf"),
    ("1.4.2", "Moord, doodslag"),
    ("1.4.3", "Openlijk geweld (persoon)"),
    ("1.4.4", "Bedreiging"),
    ("1.4.5", "Mishandeling"),
    ("1.4.6", "Straatroof"),
    ("1.4.7", "Overval"),
    ("1.5.2", "Diefstallen (water)"),
    ("1.6.1", "Brand/ontploffing"),
    ("1.6.2", "Overige vermogensdelicten"),
    ("2.1.1", "Drugs/drankoverlast"),
    ("2.2.1", "Vernieling c.q. zaakbeschadiging"),
    ("2.4.1", "Burengerucht (relatieproblemen)"),
    ("2.4.2", "Huisvredebreuk"),
    ("2.5.1", "Diefstal/inbraak bedrijven en instellingen"),
    ("2.5.2", "Winkeldiefstal"),
    ("2.7.3", "Leefbaarheid (overig)"),
    ("3.1.1", "Drugshandel"),
    ("3.1.3", "Wapenhandel"),
    ("3.5.2", "Vreemdelingenzorg"),
    ("3.7.1", "Discriminatie"),
    ("3.7.4", "Cybercrime"),
    ("3.9.1", "Horizontale fraude"),
    ("3.9.2", "Verticale fraude"),
];

static CODE_INDEX: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

pub(crate) fn label_for_code(code: &str) -> Option<&'static str> {
    CODE_INDEX
        .get_or_init(|| CRIME_LABELS.iter().copied().collect())
        .get(code)
        .copied()
}

/// Extract the first `major.minor.sub` numeric code embedded in a raw key,
/// e.g. `Crime_1.1.1` yields `1.1.1`. Keys without such a code yield `None`.
pub(crate) fn extract_crime_code(raw: &str) -> Option<&str> {
    let bytes = raw.as_bytes();
    for start in 0..bytes.len() {
        if !bytes[start].is_ascii_digit() {
            continue;
        }
        if let Some(end) = code_end_from(bytes, start) {
            return Some(&raw[start..end]);
        }
    }
    None
}

/// End offset of a `digits.digits.digits` run beginning at `start`.
fn code_end_from(bytes: &[u8], start: usize) -> Option<usize> {
    let mut index = start;
    for group in 0..3 {
        let group_start = index;
        while index < bytes.len() && bytes[index].is_ascii_digit() {
            index += 1;
        }
        if index == group_start {
            return None;
        }
        if group < 2 {
            if index < bytes.len() && bytes[index] == b'.' {
                index += 1;
            } else {
                return None;
            }
        }
    }
    Some(index)
}
