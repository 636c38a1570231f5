//! # haqei-content
//!
//! The read-only corpus the engine consults, and the engine's configuration.
//!
//! ## Content store
//!
//! [`ContentStore`] holds the JSON tables of the HaQei corpus:
//!
//! - `trigrams_master` / `hexagrams_master`: names, symbols, elements, themes
//! - `mbti_map`: dense 8-entry rows per MBTI type (native scale 1–5)
//! - `enneagram_map`: sparse rows per Enneagram type (native scale 0.5–2.5)
//! - `strengthsfinder_map`: sparse rows per talent theme
//! - `trigram_interactions`: directed narratives, outer key = base trigram
//!
//! Tables are validated when loaded; a store that exists is complete. The
//! corpus compiled into the crate is available through
//! [`ContentStore::embedded`], parsed once per process.
//!
//! ## Configuration
//!
//! [`EngineConfig`] is layered from defaults, an optional file and
//! `HAQEI__*` environment variables.

pub mod config;
pub mod error;
pub mod store;

pub use crate::config::{ContentConfig, EngineConfig, LoggingConfig, ResolverConfig, ScorerConfig};
pub use error::{ConfigError, ContentError};
pub use store::{
    ContentStore, HexagramRecord, Interaction, TrigramRecord, WeightRow, EMBEDDED_CONTENT,
};
