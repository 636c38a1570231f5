use haqei_content::ContentError;
use haqei_types::Trigram;
use thiserror::Error;

/// Errors from resolving an affinity vector.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    #[error("invalid affinity for {trigram}: {value} is not a finite non-negative number")]
    InvalidAffinity { trigram: Trigram, value: f64 },

    #[error(transparent)]
    Content(#[from] ContentError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ResolveError::InvalidAffinity {
            trigram: Trigram::Kan,
            value: -0.5,
        };
        assert_eq!(
            err.to_string(),
            "invalid affinity for ☵坎: -0.5 is not a finite non-negative number"
        );

        let err: ResolveError = ContentError::MissingInteraction {
            base: Trigram::Li,
            other: Trigram::Kan,
        }
        .into();
        assert!(err.to_string().starts_with("no interaction narrative"));
    }
}
