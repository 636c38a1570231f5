use thiserror::Error;

/// Errors from parsing or constructing shared domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypesError {
    #[error("unknown framework: {0}")]
    UnknownFramework(String),

    #[error("trigram id out of range: {0} (expected 1-8)")]
    InvalidTrigramId(u8),

    #[error("trigram bit pattern out of range: {0:#05b} (expected 0b000-0b111)")]
    InvalidTrigramBits(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TypesError::InvalidTrigramId(9);
        assert!(err.to_string().contains('9'));

        let err = TypesError::UnknownFramework("DISC".into());
        assert!(err.to_string().contains("DISC"));
    }
}
