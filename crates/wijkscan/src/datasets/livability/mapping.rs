use std::collections::HashMap;
use std::sync::OnceLock;

use crate::datasets::derivation::{Derivation, IndicatorDef};

/// Livability-survey indicator set (CBS woonbeleving). Percentages of
/// residents, same arithmetic as the health source.
pub(crate) const TABLE: &[IndicatorDef] = &[
    IndicatorDef {
        key: "TevredenMetWoning_5",
        title: "Tevreden met woning",
        unit: Some("%"),
        derivation: Derivation::PopulationPercentage,
    },
    IndicatorDef {
        key: "TevredenMetWoonomgeving_6",
        title: "Tevreden met woonomgeving",
        unit: Some("%"),
        derivation: Derivation::PopulationPercentage,
    },
    IndicatorDef {
        key: "ErvaartVeelOverlastInBuurt_7",
        title: "Ervaart veel overlast in de buurt",
        unit: Some("%"),
        derivation: Derivation::PopulationPercentage,
    },
    IndicatorDef {
        key: "VoeltZichWelEensOnveilig_8",
        title: "Voelt zich wel eens onveilig in de buurt",
        unit: Some("%"),
        derivation: Derivation::PopulationPercentage,
    },
    IndicatorDef {
        key: "VindtSocialeCohesieVoldoende_9",
        title: "Vindt de sociale samenhang voldoende",
        unit: Some("%"),
        derivation: Derivation::PopulationPercentage,
    },
    IndicatorDef {
        key: "TevredenMetGroenvoorziening_10",
        title: "Tevreden met groenvoorziening",
        unit: Some("%"),
        derivation: Derivation::PopulationPercentage,
    },
    IndicatorDef {
        key: "TevredenMetVoorzieningen_11",
        title: "Tevreden met voorzieningen",
        unit: Some("%"),
        derivation: Derivation::PopulationPercentage,
    },
    IndicatorDef {
        key: "ActiefInDeBuurt_12",
        title: "Actief in de buurt",
        unit: Some("%"),
        derivation: Derivation::PopulationPercentage,
    },
];

static KEY_INDEX: OnceLock<HashMap<&'static str, &'static IndicatorDef>> = OnceLock::new();

pub(crate) fn indicator_for(key: &str) -> Option<&'static IndicatorDef> {
    KEY_INDEX
        .get_or_init(|| TABLE.iter().map(|def| (def.key, def)).collect())
        .get(key)
        .copied()
}
