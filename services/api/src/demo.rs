use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use chrono::Utc;
use clap::Args;
use serde_json::json;
use wijkscan::datasets::profile::{LocationProfile, ProfileSummary};
use wijkscan::datasets::record::Source;
use wijkscan::datasets::scoring::{ScoringEngine, ScoringOverrides};

use crate::error::ApiError;
use crate::infra::SourceRecords;

#[derive(Args, Debug)]
pub(crate) struct ProfileArgs {
    /// JSON payload file with the location's raw records per source
    #[arg(long)]
    pub(crate) location: PathBuf,
    /// JSON payload file with the national reference records per source
    #[arg(long)]
    pub(crate) national: PathBuf,
    /// Scoring override asset; defaults apply when omitted or unreadable
    #[arg(long)]
    pub(crate) overrides: Option<PathBuf>,
    /// Emit the scored profile as JSON instead of a printed report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Emit the scored profile as JSON instead of a printed report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_profile(args: ProfileArgs) -> Result<(), ApiError> {
    let location: SourceRecords =
        serde_json::from_reader(BufReader::new(File::open(&args.location)?))?;
    let national: SourceRecords =
        serde_json::from_reader(BufReader::new(File::open(&args.national)?))?;

    let overrides = ScoringOverrides::load(args.overrides.as_ref());
    let engine = ScoringEngine::new(overrides);

    let fetched_at = Utc::now();
    let scored = location
        .profile(fetched_at)
        .scored(&engine, &national.profile(fetched_at));
    let summary = scored.summary();

    if args.json {
        print_json(&scored, &summary)?;
    } else {
        println!("Location profile report");
        render_profile_report(&scored, &summary);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), ApiError> {
    let location: SourceRecords = serde_json::from_str(SAMPLE_LOCATION)?;
    let national: SourceRecords = serde_json::from_str(SAMPLE_NATIONAL)?;
    let overrides = ScoringOverrides::from_reader(SAMPLE_OVERRIDES.as_bytes())?;
    let engine = ScoringEngine::new(overrides);

    let fetched_at = Utc::now();
    let scored = location
        .profile(fetched_at)
        .scored(&engine, &national.profile(fetched_at));
    let summary = scored.summary();

    if args.json {
        return print_json(&scored, &summary);
    }

    println!("Location statistics demo");
    println!("Area: sample neighborhood vs national baseline (embedded payloads)");
    render_profile_report(&scored, &summary);

    Ok(())
}

fn print_json(profile: &LocationProfile, summary: &ProfileSummary) -> Result<(), ApiError> {
    let payload = json!({ "profile": profile, "summary": summary });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn render_profile_report(profile: &LocationProfile, summary: &ProfileSummary) {
    println!("\nScore overview");
    for entry in &summary.sources {
        println!(
            "- {}: {} favorable, {} in line, {} unfavorable ({} unscored of {})",
            entry.source_label,
            entry.tally.favorable,
            entry.tally.in_line,
            entry.tally.unfavorable,
            entry.tally.unscored,
            entry.indicator_count
        );
    }

    if summary.concerns.is_empty() {
        println!("\nConcerns: none");
    } else {
        println!("\nConcerns");
        for highlight in &summary.concerns {
            println!("- {} ({})", highlight.title, highlight.source.label());
        }
    }

    if summary.strengths.is_empty() {
        println!("\nStrengths: none");
    } else {
        println!("\nStrengths");
        for highlight in &summary.strengths {
            println!("- {} ({})", highlight.title, highlight.source.label());
        }
    }

    println!("\nScored indicators");
    for source in Source::ordered() {
        for value in profile.dataset(source).indicators.values() {
            let score = match value.calculated_score {
                Some(score) => score,
                None => continue,
            };

            let figure = match (value.relative, value.absolute) {
                (Some(relative), _) => format!("{relative:.1}%"),
                (None, Some(absolute)) => match &value.unit {
                    Some(unit) => format!("{absolute} {unit}"),
                    None => format!("{absolute}"),
                },
                (None, None) => "-".to_string(),
            };

            println!(
                "- [{}] {}: {} | {}",
                source.label(),
                value.title,
                figure,
                score.label()
            );
        }
    }
}

const SAMPLE_LOCATION: &str = r#"{
    "demographics": {
        "Gemeentenaam_1": "Rotterdam",
        "SoortRegio_2": "Wijk",
        "Codering_3": "WK059916",
        "AantalInwoners_5": 10000,
        "Mannen_6": 5100,
        "Vrouwen_7": 4900,
        "k_0Tot15Jaar_8": 1700,
        "k_65JaarOfOuder_12": 1100,
        "WestersTotaal_17": 1500,
        "NietWestersTotaal_18": 2700,
        "HuishoudensTotaal_28": 5200,
        "Eenpersoonshuishoudens_29": 2700,
        "GemiddeldeHuishoudensgrootte_32": 1.9,
        "GemiddeldInkomenPerInwoner_66": 21.4,
        "GemiddeldElektriciteitsverbruikTotaal_47": 2130,
        "Gescheiden_15": "."
    },
    "health": {
        "ErvarenGezondheidGoed_5": 68,
        "LangdurigeZiekteOfAandoening_6": 36,
        "Roker_8": 27,
        "ErnstigEenzaam_13": 14,
        "RisicoOpAngstOfDepressie_14": 52
    },
    "livability": {
        "TevredenMetWoning_5": 78,
        "TevredenMetWoonomgeving_6": 70,
        "ErvaartVeelOverlastInBuurt_7": 21,
        "VoeltZichWelEensOnveilig_8": 42
    },
    "safety": {
        "Crime_1.1.1": 86,
        "Crime_1.2.3": 240,
        "Crime_1.4.5": 52,
        "Crime_2.2.1": 130,
        "Crime_2.5.2": 44
    }
}"#;

const SAMPLE_NATIONAL: &str = r#"{
    "demographics": {
        "Gemeentenaam_1": "Nederland",
        "SoortRegio_2": "Land",
        "Codering_3": "NL00",
        "AantalInwoners_5": 17800000,
        "Mannen_6": 8850000,
        "Vrouwen_7": 8950000,
        "k_0Tot15Jaar_8": 2750000,
        "k_65JaarOfOuder_12": 3600000,
        "WestersTotaal_17": 1850000,
        "NietWestersTotaal_18": 2600000,
        "HuishoudensTotaal_28": 8200000,
        "Eenpersoonshuishoudens_29": 3200000,
        "GemiddeldeHuishoudensgrootte_32": 2.1,
        "GemiddeldInkomenPerInwoner_66": 28.4,
        "GemiddeldElektriciteitsverbruikTotaal_47": 2480
    },
    "health": {
        "ErvarenGezondheidGoed_5": 76,
        "LangdurigeZiekteOfAandoening_6": 32,
        "Roker_8": 19,
        "ErnstigEenzaam_13": 11,
        "RisicoOpAngstOfDepressie_14": 44
    },
    "livability": {
        "TevredenMetWoning_5": 86,
        "TevredenMetWoonomgeving_6": 84,
        "ErvaartVeelOverlastInBuurt_7": 14,
        "VoeltZichWelEensOnveilig_8": 32
    },
    "safety": {
        "Crime_1.1.1": 74000,
        "Crime_1.2.3": 310000,
        "Crime_1.4.5": 60000,
        "Crime_2.2.1": 220000,
        "Crime_2.5.2": 64000
    }
}"#;

const SAMPLE_OVERRIDES: &str = r#"{
    "demographics": {
        "GemiddeldInkomenPerInwoner_66": { "comparison": "absoluut" },
        "GemiddeldElektriciteitsverbruikTotaal_47": { "comparison": "absoluut", "direction": "negative" }
    },
    "health": {
        "Roker_8": { "direction": "negative" },
        "LangdurigeZiekteOfAandoening_6": { "direction": "negative" },
        "ErnstigEenzaam_13": { "direction": "negative" },
        "RisicoOpAngstOfDepressie_14": { "direction": "negative" }
    },
    "livability": {
        "ErvaartVeelOverlastInBuurt_7": { "direction": "negative" },
        "VoeltZichWelEensOnveilig_8": { "direction": "negative" }
    },
    "safety": {
        "Crime_1.1.1": { "direction": "negative", "margin": 30 },
        "Crime_1.2.3": { "direction": "negative" },
        "Crime_1.4.5": { "direction": "negative" },
        "Crime_2.2.1": { "direction": "negative" },
        "Crime_2.5.2": { "direction": "negative" }
    }
}"#;
