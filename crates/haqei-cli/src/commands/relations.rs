//! Hexagram relations command

use clap::Args;
use haqei_algebra::HexagramRelations;
use haqei_engine::ProfileEngine;
use haqei_types::Trigram;
use serde::Serialize;
use tabled::Tabled;

use super::hexagram_name;
use crate::error::CliResult;
use crate::output::{print_heading, print_json, print_table, OutputFormat};

/// Relations arguments
#[derive(Args, Debug)]
pub struct RelationsArgs {
    /// King Wen number, 1-64
    pub number: u8,

    /// Lines to change together for 之卦, e.g. 0,3
    #[arg(long, value_delimiter = ',', value_name = "LINES")]
    pub changing: Vec<u8>,
}

#[derive(Debug, Serialize)]
struct RelationsOutput {
    name: String,
    upper: Trigram,
    lower: Trigram,
    #[serde(flatten)]
    relations: HexagramRelations,
    #[serde(skip_serializing_if = "Option::is_none")]
    changed: Option<u8>,
}

#[derive(Tabled)]
struct RelationRow {
    #[tabled(rename = "Relation")]
    relation: String,
    #[tabled(rename = "No.")]
    number: u8,
    #[tabled(rename = "Name")]
    name: String,
}

const LINE_NAMES: [&str; 6] = ["初爻変", "二爻変", "三爻変", "四爻変", "五爻変", "上爻変"];

/// Execute the relations command
pub fn execute(args: &RelationsArgs, engine: &ProfileEngine, format: OutputFormat) -> CliResult<()> {
    let algebra = engine.algebra();
    let relations = algebra.relations(args.number)?;
    let (upper, lower) = algebra.trigrams(args.number)?;
    let changed = if args.changing.is_empty() {
        None
    } else {
        Some(algebra.changing(args.number, &args.changing)?)
    };

    if format == OutputFormat::Json {
        return print_json(&RelationsOutput {
            name: hexagram_name(engine, args.number),
            upper,
            lower,
            relations,
            changed,
        });
    }

    print_heading(&format!(
        "{} {} ({}/{})",
        args.number,
        hexagram_name(engine, args.number),
        upper,
        lower
    ));

    let mut rows = vec![
        ("綜卦 inverse".to_string(), relations.inverse),
        ("錯卦 complement".to_string(), relations.complement),
        ("互卦 nuclear".to_string(), relations.nuclear),
    ];
    rows.extend(
        LINE_NAMES
            .iter()
            .zip(relations.mutations)
            .map(|(label, number)| (label.to_string(), number)),
    );
    if let Some(number) = changed {
        let lines: Vec<String> = args.changing.iter().map(u8::to_string).collect();
        rows.push((format!("之卦 lines {}", lines.join(",")), number));
    }

    print_table(
        rows.into_iter()
            .map(|(relation, number)| RelationRow {
                relation,
                number,
                name: hexagram_name(engine, number),
            })
            .collect(),
    );
    Ok(())
}
