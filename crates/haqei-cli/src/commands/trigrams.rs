//! Trigram master data command

use haqei_engine::ProfileEngine;
use tabled::Tabled;

use crate::error::CliResult;
use crate::output::{print_json, print_table, OutputFormat};

#[derive(Tabled)]
struct TrigramRow {
    #[tabled(rename = "ID")]
    id: u8,
    #[tabled(rename = "Trigram")]
    trigram: String,
    #[tabled(rename = "Nature")]
    nature: String,
    #[tabled(rename = "Element")]
    element: char,
    #[tabled(rename = "Family")]
    family: String,
    #[tabled(rename = "Archetype")]
    archetype: String,
}

/// Execute the trigrams command
pub fn execute(engine: &ProfileEngine, format: OutputFormat) -> CliResult<()> {
    let records = engine.content().trigrams();
    if format == OutputFormat::Json {
        return print_json(&records);
    }
    print_table(
        records
            .iter()
            .map(|record| TrigramRow {
                id: record.id.id(),
                trigram: record.id.to_string(),
                nature: record.nature.clone(),
                element: record.element.kanji(),
                family: record.family_position.clone(),
                archetype: record.os_label.clone(),
            })
            .collect(),
    );
    Ok(())
}
