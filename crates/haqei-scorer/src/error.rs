use haqei_types::Framework;
use thiserror::Error;

/// Errors from scoring a trait profile.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    #[error("trait profile is empty")]
    EmptyProfile,

    #[error("duplicate trait: {framework} {code} appears more than once")]
    DuplicateTrait { framework: Framework, code: String },

    #[error("unknown trait code: {framework} has no weight row for {code:?}")]
    UnknownTraitCode { framework: Framework, code: String },

    #[error("invalid weight {weight} for {framework} {code}: expected a number in [0, 1]")]
    InvalidWeight {
        framework: Framework,
        code: String,
        weight: f64,
    },

    /// The accumulated vector had no mass to normalize.
    ///
    /// Validated codes always have a positive row, so this only happens when
    /// every input weight is zero or the weight tables are misconfigured.
    #[error("zero affinity: accumulated total {total:e} is not positive")]
    ZeroAffinity { total: f64 },
}
