use thiserror::Error;

/// Errors from the hexagram algebra.
///
/// The algebra itself is total over valid inputs; every variant here is an
/// out-of-range argument or a malformed injected table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    #[error("invalid hexagram: {reason}")]
    InvalidHexagram { reason: String },

    #[error("invalid line index {line}: expected 0-5 (bottom to top)")]
    InvalidLine { line: u8 },

    #[error("line {line} listed more than once in changing lines")]
    DuplicateLine { line: u8 },

    #[error("invalid King Wen table: {reason}")]
    InvalidKingWenTable { reason: String },
}

impl AlgebraError {
    pub(crate) fn king_wen_out_of_range(number: u8) -> Self {
        AlgebraError::InvalidHexagram {
            reason: format!("King Wen number {} outside 1-64", number),
        }
    }

    pub(crate) fn bits_out_of_range(bits: u8) -> Self {
        AlgebraError::InvalidHexagram {
            reason: format!("bit pattern {:#b} exceeds 6 lines", bits),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = AlgebraError::king_wen_out_of_range(65);
        assert!(err.to_string().contains("65"));

        let err = AlgebraError::InvalidLine { line: 6 };
        assert!(err.to_string().contains("line index 6"));
    }
}
