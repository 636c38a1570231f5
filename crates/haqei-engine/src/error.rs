use haqei_algebra::AlgebraError;
use haqei_content::ContentError;
use haqei_resolver::ResolveError;
use haqei_scorer::ScoreError;
use thiserror::Error;

/// Any component failure, passed through unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    Score(#[from] ScoreError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Algebra(#[from] AlgebraError),

    #[error(transparent)]
    Content(#[from] ContentError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_not_rewrapped() {
        let inner = ScoreError::EmptyProfile;
        let err: EngineError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());

        let inner = AlgebraError::InvalidLine { line: 9 };
        let err: EngineError = inner.clone().into();
        assert_eq!(err, EngineError::Algebra(inner));
    }
}
