//! Trait profile command

use clap::Args;
use haqei_engine::{EngineError, HexagramContext, ProfileEngine, ProfileResult};
use haqei_types::{Framework, TraitInput, TraitProfile};
use tabled::Tabled;

use super::hexagram_name;
use crate::error::CliResult;
use crate::output::{print_heading, print_json, print_table, print_warning, score_bar, OutputFormat};

/// A framework code with an optional `:WEIGHT` suffix
#[derive(Debug, Clone, PartialEq)]
pub struct TraitArg {
    pub code: String,
    pub weight: f64,
}

/// Parse `CODE` or `CODE:WEIGHT`; the weight defaults to 1.0.
///
/// Weight range is left to the scorer so that out-of-range values surface
/// as the same error the library reports.
pub fn parse_trait_arg(s: &str) -> Result<TraitArg, String> {
    let (code, weight) = match s.rsplit_once(':') {
        Some((code, weight)) => {
            let weight = weight
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("invalid weight {:?} in {:?}", weight, s))?;
            (code, weight)
        }
        None => (s, 1.0),
    };
    let code = code.trim();
    if code.is_empty() {
        return Err(format!("missing code in {:?}", s));
    }
    Ok(TraitArg {
        code: code.to_string(),
        weight,
    })
}

/// Profile arguments
#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// MBTI type, e.g. INTJ or INTJ:0.8
    #[arg(long, value_name = "CODE[:WEIGHT]", value_parser = parse_trait_arg)]
    pub mbti: Vec<TraitArg>,

    /// Enneagram type, e.g. 5 or 5:0.6
    #[arg(long, value_name = "CODE[:WEIGHT]", value_parser = parse_trait_arg)]
    pub enneagram: Vec<TraitArg>,

    /// StrengthsFinder talent, e.g. Strategic:0.5
    #[arg(long, value_name = "NAME[:WEIGHT]", value_parser = parse_trait_arg)]
    pub strength: Vec<TraitArg>,

    /// King Wen number of a hexagram to attach
    #[arg(long, value_name = "N", requires = "line")]
    pub hexagram: Option<u8>,

    /// Line in focus, 0 (bottom) to 5 (top)
    #[arg(long, value_name = "L", requires = "hexagram")]
    pub line: Option<u8>,
}

impl ProfileArgs {
    pub fn trait_profile(&self) -> TraitProfile {
        let groups = [
            (Framework::Mbti, &self.mbti),
            (Framework::Enneagram, &self.enneagram),
            (Framework::StrengthsFinder, &self.strength),
        ];
        groups
            .into_iter()
            .flat_map(|(framework, args)| {
                args.iter()
                    .map(move |arg| TraitInput::new(framework, arg.code.clone(), arg.weight))
            })
            .collect()
    }

    pub fn hexagram_context(&self) -> Option<HexagramContext> {
        match (self.hexagram, self.line) {
            (Some(hexagram), Some(line)) => Some(HexagramContext::new(hexagram, line)),
            _ => None,
        }
    }
}

#[derive(Tabled)]
struct AffinityRow {
    #[tabled(rename = "Trigram")]
    trigram: String,
    #[tabled(rename = "Archetype")]
    archetype: String,
    #[tabled(rename = "Element")]
    element: String,
    #[tabled(rename = "Affinity")]
    score: String,
}

#[derive(Tabled)]
struct RelationRow {
    #[tabled(rename = "Relation")]
    relation: &'static str,
    #[tabled(rename = "No.")]
    number: u8,
    #[tabled(rename = "Name")]
    name: String,
}

/// Execute the profile command
pub fn execute(args: &ProfileArgs, engine: &ProfileEngine, format: OutputFormat) -> CliResult<()> {
    let result = engine.build_profile(&args.trait_profile(), args.hexagram_context())?;
    match format {
        OutputFormat::Json => print_json(&result),
        OutputFormat::Table => print_profile(&result, engine),
    }
}

fn print_profile(result: &ProfileResult, engine: &ProfileEngine) -> CliResult<()> {
    let interaction = &result.interaction;
    print_heading(&format!(
        "Dominant: {} {}   Secondary: {} {}",
        interaction.primary,
        result.primary_archetype.os_label,
        interaction.secondary,
        result.secondary_archetype.os_label,
    ));
    println!(
        "Confidence: {:.3}   Element relation: {:?}",
        interaction.confidence, interaction.element_relation
    );
    if interaction.ambiguous {
        print_warning("Top trigrams are close; this profile reads as a blend");
    }

    let ranked = engine
        .resolver()
        .ranking(&result.affinity)
        .map_err(EngineError::from)?;
    let rows = ranked
        .into_iter()
        .map(|(trigram, score)| {
            let record = engine.content().trigram(trigram);
            AffinityRow {
                trigram: trigram.to_string(),
                archetype: record.os_label.clone(),
                element: trigram.element().kanji().to_string(),
                score: score_bar(score),
            }
        })
        .collect();
    print_table(rows);

    println!("\nSynergy:  {}", interaction.synergy_text);
    println!("Conflict: {}", interaction.conflict_text);

    if let Some(reading) = &result.hexagram {
        println!();
        print_heading(&format!(
            "{} {} ({}/{}), line {}",
            reading.hexagram, reading.name, reading.upper, reading.lower, reading.line
        ));
        println!("{}", reading.theme);
        let rows = [
            ("綜卦 inverse", reading.inverse),
            ("錯卦 complement", reading.complement),
            ("互卦 nuclear", reading.nuclear),
            ("爻変 line change", reading.line_mutation),
        ]
        .into_iter()
        .map(|(relation, number)| RelationRow {
            relation,
            number,
            name: hexagram_name(engine, number),
        })
        .collect();
        print_table(rows);
    }
    Ok(())
}
