//! # haqei-scorer
//!
//! Maps weighted personality-framework results onto the eight trigram
//! archetypes.
//!
//! ```text
//! (MBTI, "INTJ", 1.0) ─┐
//! (Enneagram, "5", 0.8) ├─ row / row max × weight ─ Σ ─ ÷ total ─ AffinityVector
//! (Strengths, "Focus", 0.5) ┘
//! ```
//!
//! Inputs are validated before anything is summed: an empty profile, a weight
//! outside [0, 1], a repeated `(framework, code)` or a code missing from the
//! weight tables each fail with a distinct [`ScoreError`].

pub mod error;
pub mod scorer;

pub use error::ScoreError;
pub use scorer::{ArchetypeScorer, Contribution};
