//! # haqei-engine
//!
//! Single entry point over the HaQei components:
//!
//! ```text
//! TraitProfile ─ ArchetypeScorer ─ AffinityVector ─ InteractionResolver ─┐
//!                                                                        ├─ ProfileResult
//! HexagramContext (optional) ─ HexagramAlgebra + hexagram master data ───┘
//! ```
//!
//! The engine adds no behavior of its own beyond assembling the result.
//! Errors from any component reach the caller unchanged inside
//! [`EngineError`].
//!
//! ```no_run
//! use haqei_engine::{EngineConfig, HexagramContext, ProfileEngine};
//! use haqei_types::{TraitInput, TraitProfile};
//!
//! let engine = ProfileEngine::from_config(&EngineConfig::default())?;
//! let profile = TraitProfile::new()
//!     .with(TraitInput::mbti("INTJ", 1.0))
//!     .with(TraitInput::enneagram("5", 0.8));
//! let result = engine.build_profile(&profile, Some(HexagramContext::new(1, 0)))?;
//! println!("{}", result.interaction.primary);
//! # Ok::<(), haqei_engine::EngineError>(())
//! ```

pub mod engine;
pub mod error;

pub use engine::{HexagramContext, HexagramReading, ProfileEngine, ProfileResult};
pub use error::EngineError;

// Re-export component types callers need alongside the engine
pub use haqei_algebra::{HexagramAlgebra, HexagramRelations, KingWen};
pub use haqei_content::{ContentStore, EngineConfig};
pub use haqei_resolver::InteractionResult;
