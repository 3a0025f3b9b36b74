// Sun Oct 18 2026 - Alex

use crate::config::Narrowing;
use crate::pattern::{builder, tokenizer, ByteMatch, PatternElement, PatternError, SyntaxError};
use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An ordered run of byte matchers, each with a repeat count.
///
/// Built once through one of the constructors and never changed afterwards;
/// [`find`](Self::find) and [`patch`](Self::patch) only read it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pattern {
    elements: Vec<PatternElement>,
}

impl Pattern {
    pub fn from_elements(elements: Vec<PatternElement>) -> Self {
        Self { elements }
    }

    /// Parses the `AA ?? BB[3]` text form.
    pub fn parse(text: &str) -> Result<Self, SyntaxError> {
        let tokens = tokenizer::tokenize(text)?;
        let pattern = builder::build(&tokens)?;
        log::debug!("Parsed pattern {:?} into {} elements ({} bytes)", text, pattern.elements.len(), pattern.len());
        Ok(pattern)
    }

    /// Joins the arguments with nothing in between, then parses the result.
    /// `["A", "A"]` is therefore the same as `"AA"`.
    pub fn from_args<I, S>(args: I) -> Result<Self, SyntaxError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined: String = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse(&joined)
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            elements: bytes.iter().map(|&b| PatternElement::exact(b)).collect(),
        }
    }

    /// One element per character. Characters above U+00FF keep only their low byte.
    pub fn from_narrow_str(text: &str) -> Self {
        Self {
            elements: text
                .chars()
                .map(|c| PatternElement::exact(truncate_char(c)))
                .collect(),
        }
    }

    /// Two elements per character: the low byte, then `00`.
    pub fn from_wide_str(text: &str) -> Self {
        Self {
            elements: text
                .chars()
                .flat_map(|c| [PatternElement::exact(truncate_char(c)), PatternElement::exact(0)])
                .collect(),
        }
    }

    pub fn from_narrow_str_with(text: &str, narrowing: Narrowing) -> Result<Self, PatternError> {
        let bytes = narrow_chars(text, narrowing)?;
        Ok(Self::from_bytes(&bytes))
    }

    pub fn from_wide_str_with(text: &str, narrowing: Narrowing) -> Result<Self, PatternError> {
        let bytes = narrow_chars(text, narrowing)?;
        Ok(Self {
            elements: bytes
                .into_iter()
                .flat_map(|b| [PatternElement::exact(b), PatternElement::exact(0)])
                .collect(),
        })
    }

    pub fn elements(&self) -> &[PatternElement] {
        &self.elements
    }

    /// Total number of buffer bytes the pattern spans.
    pub fn len(&self) -> usize {
        self.elements.iter().map(PatternElement::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every position the pattern covers, with repeats unrolled.
    pub fn expand(&self) -> impl Iterator<Item = ByteMatch> + '_ {
        self.elements
            .iter()
            .flat_map(|el| std::iter::repeat(el.value()).take(el.len()))
    }

    pub fn wildcard_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|el| el.value().is_wildcard())
            .map(PatternElement::len)
            .sum()
    }

    pub fn significant_count(&self) -> usize {
        self.len() - self.wildcard_count()
    }

    pub fn to_hex_string(&self) -> String {
        self.elements.iter().join(" ")
    }
}

fn truncate_char(c: char) -> u8 {
    (c as u32 & 0xFF) as u8
}

fn narrow_chars(text: &str, narrowing: Narrowing) -> Result<Vec<u8>, PatternError> {
    text.chars()
        .enumerate()
        .map(|(position, ch)| match u8::try_from(ch) {
            Ok(b) => Ok(b),
            Err(_) => match narrowing {
                Narrowing::Truncate => {
                    log::warn!("Truncating {:?} at position {} to {:02X}", ch, position, truncate_char(ch));
                    Ok(truncate_char(ch))
                }
                Narrowing::Reject => Err(PatternError::CharOutOfRange { ch, position }),
            },
        })
        .collect()
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.elements.iter().format(" "))
    }
}

impl FromStr for Pattern {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Pattern {
    type Error = SyntaxError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<&[u8]> for Pattern {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
