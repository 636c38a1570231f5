use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::{Arc, OnceLock};

use haqei_types::{Element, Framework, Trigram};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ContentError;

/// Corpus shipped with the crate.
pub const EMBEDDED_CONTENT: &str = include_str!("../data/content.json");

static EMBEDDED: OnceLock<Result<Arc<ContentStore>, ContentError>> = OnceLock::new();

/// Master record for one trigram.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrigramRecord {
    pub id: Trigram,
    pub name: String,
    pub symbol: String,
    /// Natural image (天, 沢, 火, ...)
    pub nature: String,
    pub element: Element,
    pub family_position: String,
    /// Archetype ("OS") label presented for this trigram
    pub os_label: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Master record for one hexagram, keyed by King Wen number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagramRecord {
    pub id: u8,
    pub name: String,
    pub theme: String,
}

/// Directed narrative for a (base, other) trigram pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub synergy: String,
    pub conflict: String,
}

/// One framework code's raw per-trigram weights, in the table's native scale.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightRow {
    /// Code as written in the table
    pub code: String,
    pub weights: [f64; 8],
}

impl WeightRow {
    /// Largest weight in the row; positive for every validated row.
    pub fn max(&self) -> f64 {
        self.weights.iter().copied().fold(0.0, f64::max)
    }

    pub fn get(&self, trigram: Trigram) -> f64 {
        self.weights[trigram.index()]
    }
}

#[derive(Deserialize)]
struct RawContent {
    #[serde(default)]
    version: String,
    trigrams_master: Vec<TrigramRecord>,
    hexagrams_master: Vec<HexagramRecord>,
    mbti_map: BTreeMap<String, Vec<f64>>,
    enneagram_map: BTreeMap<String, BTreeMap<String, f64>>,
    strengthsfinder_map: BTreeMap<String, BTreeMap<String, f64>>,
    trigram_interactions: BTreeMap<String, BTreeMap<String, Interaction>>,
}

/// Read-only corpus: master data, framework weight tables and the directed
/// trigram interaction table.
///
/// Constructed once (validated on construction) and shared by `Arc`; no
/// method mutates it, so concurrent readers need no locking.
#[derive(Debug)]
pub struct ContentStore {
    version: String,
    trigrams: Vec<TrigramRecord>,
    hexagrams: Vec<HexagramRecord>,
    weights: HashMap<Framework, BTreeMap<String, WeightRow>>,
    interactions: HashMap<(Trigram, Trigram), Interaction>,
}

impl ContentStore {
    /// The embedded corpus, parsed on first use.
    ///
    /// The parse runs at most once per process; later calls (from any
    /// thread) share the same `Arc` or the same error.
    pub fn embedded() -> Result<Arc<ContentStore>, ContentError> {
        EMBEDDED
            .get_or_init(|| ContentStore::from_json_str_named(EMBEDDED_CONTENT, "embedded").map(Arc::new))
            .clone()
    }

    /// Load from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ContentError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str_named(&json, &path.display().to_string())
    }

    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        Self::from_json_str_named(json, "inline")
    }

    fn from_json_str_named(json: &str, source_name: &str) -> Result<Self, ContentError> {
        let raw: RawContent = serde_json::from_str(json).map_err(|e| ContentError::Parse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;
        let store = Self::validate(raw)?;
        info!(
            source = source_name,
            version = store.version.as_str(),
            mbti = store.weights[&Framework::Mbti].len(),
            enneagram = store.weights[&Framework::Enneagram].len(),
            strengths = store.weights[&Framework::StrengthsFinder].len(),
            "Content store loaded"
        );
        Ok(store)
    }

    fn validate(raw: RawContent) -> Result<Self, ContentError> {
        let trigrams = validate_trigrams(raw.trigrams_master)?;
        let hexagrams = validate_hexagrams(raw.hexagrams_master)?;

        let mut weights = HashMap::new();
        weights.insert(
            Framework::Mbti,
            dense_rows("mbti_map", Framework::Mbti, raw.mbti_map)?,
        );
        weights.insert(
            Framework::Enneagram,
            sparse_rows("enneagram_map", Framework::Enneagram, raw.enneagram_map)?,
        );
        weights.insert(
            Framework::StrengthsFinder,
            sparse_rows(
                "strengthsfinder_map",
                Framework::StrengthsFinder,
                raw.strengthsfinder_map,
            )?,
        );

        let interactions = validate_interactions(raw.trigram_interactions)?;

        Ok(Self {
            version: raw.version,
            trigrams,
            hexagrams,
            weights,
            interactions,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn trigram(&self, trigram: Trigram) -> &TrigramRecord {
        &self.trigrams[trigram.index()]
    }

    pub fn trigrams(&self) -> &[TrigramRecord] {
        &self.trigrams
    }

    /// Hexagram record by King Wen number.
    pub fn hexagram(&self, number: u8) -> Option<&HexagramRecord> {
        match number {
            1..=64 => self.hexagrams.get(number as usize - 1),
            _ => None,
        }
    }

    /// Row for `code` after the framework's code normalization.
    pub fn weight_row(&self, framework: Framework, code: &str) -> Option<&WeightRow> {
        self.weights
            .get(&framework)
            .and_then(|rows| rows.get(&framework.normalize_code(code)))
    }

    /// Codes known for a framework, in table spelling.
    pub fn codes(&self, framework: Framework) -> Vec<&str> {
        self.weights
            .get(&framework)
            .map(|rows| rows.values().map(|r| r.code.as_str()).collect())
            .unwrap_or_default()
    }

    /// Narrative with `base` as the self trigram and `other` as its partner.
    pub fn interaction(&self, base: Trigram, other: Trigram) -> Result<&Interaction, ContentError> {
        self.interactions
            .get(&(base, other))
            .ok_or(ContentError::MissingInteraction { base, other })
    }
}

fn validate_trigrams(mut records: Vec<TrigramRecord>) -> Result<Vec<TrigramRecord>, ContentError> {
    if records.len() != 8 {
        return Err(ContentError::invalid(
            "trigrams_master",
            format!("expected 8 records, found {}", records.len()),
        ));
    }
    records.sort_by_key(|r| r.id);
    for (record, expected) in records.iter().zip(Trigram::ALL) {
        if record.id != expected {
            return Err(ContentError::invalid(
                "trigrams_master",
                format!("trigram {} is missing or duplicated", expected.id()),
            ));
        }
        if record.element != expected.element() {
            return Err(ContentError::invalid(
                "trigrams_master",
                format!(
                    "trigram {} has element {:?}, expected {:?}",
                    expected.id(),
                    record.element,
                    expected.element()
                ),
            ));
        }
    }
    Ok(records)
}

fn validate_hexagrams(mut records: Vec<HexagramRecord>) -> Result<Vec<HexagramRecord>, ContentError> {
    if records.len() != 64 {
        return Err(ContentError::invalid(
            "hexagrams_master",
            format!("expected 64 records, found {}", records.len()),
        ));
    }
    records.sort_by_key(|r| r.id);
    for (i, record) in records.iter().enumerate() {
        if record.id as usize != i + 1 {
            return Err(ContentError::invalid(
                "hexagrams_master",
                format!("hexagram {} is missing or duplicated", i + 1),
            ));
        }
    }
    Ok(records)
}

fn dense_rows(
    table: &'static str,
    framework: Framework,
    rows: BTreeMap<String, Vec<f64>>,
) -> Result<BTreeMap<String, WeightRow>, ContentError> {
    let mut out = BTreeMap::new();
    for (code, values) in rows {
        let weights: [f64; 8] = values.as_slice().try_into().map_err(|_| {
            ContentError::invalid(
                table,
                format!("row {} has {} entries, expected 8", code, values.len()),
            )
        })?;
        insert_row(table, framework, &mut out, WeightRow { code, weights })?;
    }
    Ok(out)
}

fn sparse_rows(
    table: &'static str,
    framework: Framework,
    rows: BTreeMap<String, BTreeMap<String, f64>>,
) -> Result<BTreeMap<String, WeightRow>, ContentError> {
    let mut out = BTreeMap::new();
    for (code, entries) in rows {
        let mut weights = [0.0; 8];
        let mut seen = [false; 8];
        for (key, weight) in entries {
            let trigram = parse_trigram_key(table, &key)?;
            if seen[trigram.index()] {
                return Err(ContentError::invalid(
                    table,
                    format!("row {} lists trigram {} more than once", code, trigram.id()),
                ));
            }
            seen[trigram.index()] = true;
            weights[trigram.index()] = weight;
        }
        insert_row(table, framework, &mut out, WeightRow { code, weights })?;
    }
    Ok(out)
}

fn insert_row(
    table: &'static str,
    framework: Framework,
    out: &mut BTreeMap<String, WeightRow>,
    row: WeightRow,
) -> Result<(), ContentError> {
    if let Some(bad) = row.weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
        return Err(ContentError::invalid(
            table,
            format!("row {} has weight {} (must be finite and non-negative)", row.code, bad),
        ));
    }
    if row.max() <= 0.0 {
        return Err(ContentError::invalid(
            table,
            format!("row {} has no positive weight", row.code),
        ));
    }
    let key = framework.normalize_code(&row.code);
    if out.contains_key(&key) {
        return Err(ContentError::invalid(
            table,
            format!("code {} appears more than once", row.code),
        ));
    }
    debug!(table, code = row.code.as_str(), "weight row registered");
    out.insert(key, row);
    Ok(())
}

fn validate_interactions(
    table: BTreeMap<String, BTreeMap<String, Interaction>>,
) -> Result<HashMap<(Trigram, Trigram), Interaction>, ContentError> {
    let mut out = HashMap::new();
    for (base_key, row) in table {
        let base = parse_trigram_key("trigram_interactions", &base_key)?;
        for (other_key, interaction) in row {
            let other = parse_trigram_key("trigram_interactions", &other_key)?;
            out.insert((base, other), interaction);
        }
    }
    for base in Trigram::ALL {
        for other in Trigram::ALL {
            if base != other && !out.contains_key(&(base, other)) {
                return Err(ContentError::invalid(
                    "trigram_interactions",
                    format!("missing pair base {} / other {}", base.id(), other.id()),
                ));
            }
        }
    }
    Ok(out)
}

fn parse_trigram_key(table: &'static str, key: &str) -> Result<Trigram, ContentError> {
    key.trim()
        .parse::<u8>()
        .ok()
        .and_then(|id| Trigram::from_id(id).ok())
        .ok_or_else(|| ContentError::invalid(table, format!("trigram key {:?} outside 1-8", key)))
}
