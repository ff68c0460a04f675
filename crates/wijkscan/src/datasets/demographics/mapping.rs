use std::collections::HashMap;
use std::sync::OnceLock;

use crate::datasets::derivation::{Derivation, IndicatorDef};

/// Canonical CBS Kerncijfers field set, one authoritative naming vintage.
///
/// Keys carry the ordinal suffix the StatLine feed uses; the suffix is part
/// of the key and joins must preserve it verbatim.
pub(crate) const TABLE: &[IndicatorDef] = &[
    IndicatorDef {
        key: "Gemeentenaam_1",
        title: "Gemeentenaam",
        unit: None,
        derivation: Derivation::Text,
    },
    IndicatorDef {
        key: "SoortRegio_2",
        title: "Soort regio",
        unit: None,
        derivation: Derivation::Text,
    },
    IndicatorDef {
        key: "Codering_3",
        title: "Regiocode",
        unit: None,
        derivation: Derivation::Text,
    },
    IndicatorDef {
        key: "AantalInwoners_5",
        title: "Aantal inwoners",
        unit: None,
        derivation: Derivation::PopulationShare,
    },
    IndicatorDef {
        key: "Mannen_6",
        title: "Mannen",
        unit: None,
        derivation: Derivation::PopulationShare,
    },
    IndicatorDef {
        key: "Vrouwen_7",
        title: "Vrouwen",
        unit: None,
        derivation: Derivation::PopulationShare,
    },
    IndicatorDef {
        key: "k_0Tot15Jaar_8",
        title: "0 tot 15 jaar",
        unit: None,
        derivation: Derivation::PopulationShare,
    },
    IndicatorDef {
        key: "k_15Tot25Jaar_9",
        title: "15 tot 25 jaar",
        unit: None,
        derivation: Derivation::PopulationShare,
    },
    IndicatorDef {
        key: "k_25Tot45Jaar_10",
        title: "25 tot 45 jaar",
        unit: None,
        derivation: Derivation::PopulationShare,
    },
    IndicatorDef {
        key: "k_45Tot65Jaar_11",
        title: "45 tot 65 jaar",
        unit: None,
        derivation: Derivation::PopulationShare,
    },
    IndicatorDef {
        key: "k_65JaarOfOuder_12",
        title: "65 jaar of ouder",
        unit: None,
        derivation: Derivation::PopulationShare,
    },
    IndicatorDef {
        key: "Ongehuwd_13",
        title: "Ongehuwd",
        unit: None,
        derivation: Derivation::PopulationShare,
    },
    IndicatorDef {
        key: "Gehuwd_14",
        title: "Gehuwd",
        unit: None,
        derivation: Derivation::PopulationShare,
    },
    IndicatorDef {
        key: "Gescheiden_15",
        title: "Gescheiden",
        unit: None,
        derivation: Derivation::PopulationShare,
    },
    IndicatorDef {
        key: "Verweduwd_16",
        title: "Verweduwd",
        unit: None,
        derivation: Derivation::PopulationShare,
    },
    IndicatorDef {
        key: "WestersTotaal_17",
        title: "Westerse migratieachtergrond",
        unit: None,
        derivation: Derivation::PopulationShare,
    },
    IndicatorDef {
        key: "NietWestersTotaal_18",
        title: "Niet-westerse migratieachtergrond",
        unit: None,
        derivation: Derivation::PopulationShare,
    },
    IndicatorDef {
        key: "Marokko_19",
        title: "Marokkaanse migratieachtergrond",
        unit: None,
        derivation: Derivation::PopulationShare,
    },
    IndicatorDef {
        key: "NederlandseAntillenEnAruba_20",
        title: "Antilliaanse of Arubaanse migratieachtergrond",
        unit: None,
        derivation: Derivation::PopulationShare,
    },
    IndicatorDef {
        key: "Suriname_21",
        title: "Surinaamse migratieachtergrond",
        unit: None,
        derivation: Derivation::PopulationShare,
    },
    IndicatorDef {
        key: "Turkije_22",
        title: "Turkse migratieachtergrond",
        unit: None,
        derivation: Derivation::PopulationShare,
    },
    IndicatorDef {
        key: "OverigNietWesters_23",
        title: "Overige niet-westerse migratieachtergrond",
        unit: None,
        derivation: Derivation::PopulationShare,
    },
    IndicatorDef {
        key: "GeboorteTotaal_24",
        title: "Geboorten",
        unit: None,
        derivation: Derivation::PopulationShare,
    },
    IndicatorDef {
        key: "SterfteTotaal_26",
        title: "Sterfgevallen",
        unit: None,
        derivation: Derivation::PopulationShare,
    },
    IndicatorDef {
        key: "HuishoudensTotaal_28",
        title: "Huishoudens totaal",
        unit: None,
        derivation: Derivation::Scalar,
    },
    IndicatorDef {
        key: "Eenpersoonshuishoudens_29",
        title: "Eenpersoonshuishoudens",
        unit: None,
        derivation: Derivation::HouseholdShare,
    },
    IndicatorDef {
        key: "HuishoudensZonderKinderen_30",
        title: "Huishoudens zonder kinderen",
        unit: None,
        derivation: Derivation::HouseholdShare,
    },
    IndicatorDef {
        key: "HuishoudensMetKinderen_31",
        title: "Huishoudens met kinderen",
        unit: None,
        derivation: Derivation::HouseholdShare,
    },
    IndicatorDef {
        key: "GemiddeldeHuishoudensgrootte_32",
        title: "Gemiddelde huishoudensgrootte",
        unit: None,
        derivation: Derivation::Scalar,
    },
    IndicatorDef {
        key: "Bevolkingsdichtheid_33",
        title: "Bevolkingsdichtheid",
        unit: Some("inwoners per km\u{b2}"),
        derivation: Derivation::Scalar,
    },
    IndicatorDef {
        key: "Woningvoorraad_34",
        title: "Woningvoorraad",
        unit: None,
        derivation: Derivation::Scalar,
    },
    IndicatorDef {
        key: "GemiddeldeWoningwaarde_35",
        title: "Gemiddelde woningwaarde",
        unit: Some("\u{d7} 1 000 euro"),
        derivation: Derivation::Scalar,
    },
    IndicatorDef {
        key: "PercentageEengezinswoning_36",
        title: "Eengezinswoningen",
        unit: Some("%"),
        derivation: Derivation::Scalar,
    },
    IndicatorDef {
        key: "PercentageMeergezinswoning_37",
        title: "Meergezinswoningen",
        unit: Some("%"),
        derivation: Derivation::Scalar,
    },
    IndicatorDef {
        key: "Koopwoningen_40",
        title: "Koopwoningen",
        unit: Some("%"),
        derivation: Derivation::Scalar,
    },
    IndicatorDef {
        key: "HuurwoningenTotaal_41",
        title: "Huurwoningen totaal",
        unit: Some("%"),
        derivation: Derivation::Scalar,
    },
    IndicatorDef {
        key: "GemiddeldElektriciteitsverbruikTotaal_47",
        title: "Gemiddeld elektriciteitsverbruik",
        unit: Some("kWh"),
        derivation: Derivation::Scalar,
    },
    IndicatorDef {
        key: "GemiddeldAardgasverbruikTotaal_55",
        title: "Gemiddeld aardgasverbruik",
        unit: Some("m\u{b3}"),
        derivation: Derivation::Scalar,
    },
    IndicatorDef {
        key: "AantalInkomensontvangers_64",
        title: "Inkomensontvangers",
        unit: None,
        derivation: Derivation::PopulationShare,
    },
    IndicatorDef {
        key: "GemiddeldInkomenPerInkomensontvanger_65",
        title: "Gemiddeld inkomen per inkomensontvanger",
        unit: Some("\u{d7} 1 000 euro"),
        derivation: Derivation::Scalar,
    },
    IndicatorDef {
        key: "GemiddeldInkomenPerInwoner_66",
        title: "Gemiddeld inkomen per inwoner",
        unit: Some("\u{d7} 1 000 euro"),
        derivation: Derivation::Scalar,
    },
    IndicatorDef {
        key: "AfstandTotHuisartsenpraktijk_95",
        title: "Afstand tot huisartsenpraktijk",
        unit: Some("km"),
        derivation: Derivation::Scalar,
    },
    IndicatorDef {
        key: "AfstandTotGroteSupermarkt_96",
        title: "Afstand tot grote supermarkt",
        unit: Some("km"),
        derivation: Derivation::Scalar,
    },
    IndicatorDef {
        key: "OppervlakteTotaal_97",
        title: "Oppervlakte totaal",
        unit: Some("ha"),
        derivation: Derivation::Scalar,
    },
    IndicatorDef {
        key: "OppervlakteLand_98",
        title: "Oppervlakte land",
        unit: Some("ha"),
        derivation: Derivation::Scalar,
    },
];

static KEY_INDEX: OnceLock<HashMap<&'static str, &'static IndicatorDef>> = OnceLock::new();

pub(crate) fn indicator_for(key: &str) -> Option<&'static IndicatorDef> {
    KEY_INDEX
        .get_or_init(|| TABLE.iter().map(|def| (def.key, def)).collect())
        .get(key)
        .copied()
}
