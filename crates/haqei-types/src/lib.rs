//! # haqei-types
//!
//! Shared domain vocabulary for the HaQei engine.
//!
//! - **Trigram**: the eight 3-line symbols, numbered 1–8 in corpus order
//!   (乾 兌 離 震 巽 坎 艮 坤) and convertible to their 3-bit line pattern
//! - **Element**: the five elements (五行) and their generating/restraining cycles
//! - **TraitInput / TraitProfile**: weighted personality-framework codes
//! - **AffinityVector**: an 8-entry score vector indexed by trigram
//!
//! Nothing here performs I/O or holds state; every type is `Send + Sync`.

pub mod affinity;
pub mod element;
pub mod error;
pub mod traits;
pub mod trigram;

pub use affinity::AffinityVector;
pub use element::{Element, ElementRelation};
pub use error::TypesError;
pub use traits::{Framework, TraitInput, TraitProfile};
pub use trigram::Trigram;
