use std::collections::HashMap;
use std::sync::OnceLock;

use crate::datasets::derivation::{Derivation, IndicatorDef};

/// RIVM Gezondheidsmonitor indicator set. Every figure arrives as a 0-100
/// percentage of residents; the count is reconstructed during parsing.
pub(crate) const TABLE: &[IndicatorDef] = &[
    IndicatorDef {
        key: "ErvarenGezondheidGoed_5",
        title: "Ervaren gezondheid: (zeer) goed",
        unit: Some("%"),
        derivation: Derivation::PopulationPercentage,
    },
    IndicatorDef {
        key: "LangdurigeZiekteOfAandoening_6",
        title: "Langdurige ziekte of aandoening",
        unit: Some("%"),
        derivation: Derivation::PopulationPercentage,
    },
    IndicatorDef {
        key: "BeperktVanwegeGezondheid_7",
        title: "Beperkt vanwege gezondheid",
        unit: Some("%"),
        derivation: Derivation::PopulationPercentage,
    },
    IndicatorDef {
        key: "Roker_8",
        title: "Roker",
        unit: Some("%"),
        derivation: Derivation::PopulationPercentage,
    },
    IndicatorDef {
        key: "OvermatigeDrinker_9",
        title: "Overmatige drinker",
        unit: Some("%"),
        derivation: Derivation::PopulationPercentage,
    },
    IndicatorDef {
        key: "VoldoetAanBeweegrichtlijn_10",
        title: "Voldoet aan beweegrichtlijn",
        unit: Some("%"),
        derivation: Derivation::PopulationPercentage,
    },
    IndicatorDef {
        key: "Overgewicht_11",
        title: "Overgewicht",
        unit: Some("%"),
        derivation: Derivation::PopulationPercentage,
    },
    IndicatorDef {
        key: "ErnstigOvergewicht_12",
        title: "Ernstig overgewicht (obesitas)",
        unit: Some("%"),
        derivation: Derivation::PopulationPercentage,
    },
    IndicatorDef {
        key: "ErnstigEenzaam_13",
        title: "Ernstig eenzaam",
        unit: Some("%"),
        derivation: Derivation::PopulationPercentage,
    },
    IndicatorDef {
        key: "RisicoOpAngstOfDepressie_14",
        title: "Matig of hoog risico op angst of depressie",
        unit: Some("%"),
        derivation: Derivation::PopulationPercentage,
    },
    IndicatorDef {
        key: "Mantelzorger_15",
        title: "Mantelzorger",
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
