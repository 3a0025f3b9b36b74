// Sun Oct 18 2026 - Alex

use thiserror::Error;

/// Everything that can go wrong while turning pattern text into a [`Pattern`].
///
/// [`Pattern`]: crate::pattern::Pattern
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("unclosed [N] repeat block at position {position}")]
    UnclosedRepeat { position: usize },
    #[error("incomplete hex byte at position {position}")]
    IncompleteByte { position: usize },
    #[error("repeat syntax used without a preceding element")]
    RepeatWithoutElement,
    #[error("invalid repeat value: {0:?}")]
    InvalidRepeat(String),
    #[error("invalid hex token: {0:?}")]
    InvalidHex(String),
}

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("Patch out of bounds: {len} bytes at offset {offset} exceed buffer of {buffer_len} bytes")]
    OutOfBounds {
        offset: usize,
        len: usize,
        buffer_len: usize,
    },
    #[error("Character {ch:?} at position {position} does not fit in a byte")]
    CharOutOfRange { ch: char, position: usize },
    #[error("Invalid config: {0}")]
    Config(String),
    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PatternError {
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax(_))
    }

    pub fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            Self::Syntax(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_token_or_position() {
        assert_eq!(
            SyntaxError::InvalidHex("GG".to_string()).to_string(),
            "invalid hex token: \"GG\""
        );
        assert_eq!(
            SyntaxError::UnclosedRepeat { position: 4 }.to_string(),
            "unclosed [N] repeat block at position 4"
        );
    }

    #[test]
    fn test_syntax_kind() {
        let err = PatternError::from(SyntaxError::RepeatWithoutElement);
        assert!(err.is_syntax());
        assert_eq!(err.as_syntax(), Some(&SyntaxError::RepeatWithoutElement));

        let err = PatternError::OutOfBounds { offset: 2, len: 4, buffer_len: 4 };
        assert!(!err.is_syntax());
    }
}
