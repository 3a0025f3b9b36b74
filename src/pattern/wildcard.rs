// Sun Oct 18 2026 - Alex

use std::fmt;

/// One pattern position: a concrete byte or `??`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteMatch {
    Exact(u8),
    Any,
}

impl ByteMatch {
    pub fn matches(&self, byte: u8) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(b) => *b == byte,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Any)
    }

    pub fn to_byte(&self) -> Option<u8> {
        match self {
            Self::Any => None,
            Self::Exact(b) => Some(*b),
        }
    }
}

impl From<u8> for ByteMatch {
    fn from(byte: u8) -> Self {
        Self::Exact(byte)
    }
}

impl fmt::Display for ByteMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("??"),
            Self::Exact(b) => write!(f, "{:02X}", b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_matches_everything() {
        assert!((0..=255u8).all(|b| ByteMatch::Any.matches(b)));
    }

    #[test]
    fn test_exact_matches_only_itself() {
        let m = ByteMatch::from(0x4C);
        assert!(m.matches(0x4C));
        assert!(!m.matches(0x4D));
        assert_eq!(m.to_byte(), Some(0x4C));
        assert_eq!(ByteMatch::Any.to_byte(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ByteMatch::Exact(0x0a).to_string(), "0A");
        assert_eq!(ByteMatch::Any.to_string(), "??");
    }
}
