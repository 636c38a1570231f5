//! CLI command implementations

pub mod profile;
pub mod relations;
pub mod trigrams;

use haqei_engine::ProfileEngine;

/// Hexagram name from the master data, empty when absent
pub(crate) fn hexagram_name(engine: &ProfileEngine, number: u8) -> String {
    engine
        .content()
        .hexagram(number)
        .map(|record| record.name.clone())
        .unwrap_or_default()
}
