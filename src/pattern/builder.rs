// Sun Oct 18 2026 - Alex

use crate::pattern::tokenizer::{Token, TokenKind};
use crate::pattern::{Pattern, PatternElement, SyntaxError};
use std::num::NonZeroU32;

/// Turns a token stream into pattern elements. A repeat token rewrites the
/// count of the element right before it; it never appends.
pub fn build(tokens: &[Token]) -> Result<Pattern, SyntaxError> {
    let mut elements: Vec<PatternElement> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token.kind() {
            TokenKind::Repeat => {
                let last = elements
                    .last_mut()
                    .ok_or(SyntaxError::RepeatWithoutElement)?;
                let count = token
                    .repeat_body()
                    .parse::<NonZeroU32>()
                    .map_err(|_| SyntaxError::InvalidRepeat(token.text().to_string()))?;
                last.set_repeat(count);
            }
            TokenKind::Wildcard => elements.push(PatternElement::wildcard()),
            TokenKind::Byte => elements.push(PatternElement::exact(parse_hex_byte(token.text())?)),
        }
    }

    Ok(Pattern::from_elements(elements))
}

fn parse_hex_byte(text: &str) -> Result<u8, SyntaxError> {
    // from_str_radix alone would also take a leading '+'
    if text.len() != 2 || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(SyntaxError::InvalidHex(text.to_string()));
    }
    u8::from_str_radix(text, 16).map_err(|_| SyntaxError::InvalidHex(text.to_string()))
}

/// Fluent construction without going through text.
///
/// Errors from [`repeat`](Self::repeat) are held until [`build`](Self::build),
/// so calls can be chained freely.
#[derive(Debug, Default)]
pub struct PatternBuilder {
    elements: Vec<PatternElement>,
    error: Option<SyntaxError>,
}

impl PatternBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn byte(mut self, b: u8) -> Self {
        self.elements.push(PatternElement::exact(b));
        self
    }

    pub fn bytes(mut self, bs: &[u8]) -> Self {
        self.elements.extend(bs.iter().map(|&b| PatternElement::exact(b)));
        self
    }

    pub fn wildcard(mut self) -> Self {
        self.elements.push(PatternElement::wildcard());
        self
    }

    /// Appends a single wildcard element covering `count` positions.
    pub fn wildcards(self, count: u32) -> Self {
        self.wildcard().repeat(count)
    }

    /// Same as a `[count]` suffix on the last element.
    pub fn repeat(mut self, count: u32) -> Self {
        if self.error.is_some() {
            return self;
        }
        match (self.elements.last_mut(), NonZeroU32::new(count)) {
            (None, _) => self.error = Some(SyntaxError::RepeatWithoutElement),
            (Some(_), None) => self.error = Some(SyntaxError::InvalidRepeat(format!("[{}]", count))),
            (Some(last), Some(count)) => last.set_repeat(count),
        }
        self
    }

    pub fn build(self) -> Result<Pattern, SyntaxError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(Pattern::from_elements(self.elements)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::tokenizer::tokenize;
    use crate::pattern::ByteMatch;
    use rstest::rstest;

    fn build_str(input: &str) -> Result<Pattern, SyntaxError> {
        build(&tokenize(input)?)
    }

    #[test]
    fn test_repeat_overwrites_last_element() {
        let pattern = build_str("AA[2][5] BB").unwrap();
        assert_eq!(pattern.elements().len(), 2);
        assert_eq!(pattern.elements()[0].len(), 5);
        assert_eq!(pattern.len(), 6);
    }

    #[test]
    fn test_lowercase_hex() {
        let pattern = build_str("ab cD").unwrap();
        let values: Vec<_> = pattern.elements().iter().map(|e| e.value()).collect();
        assert_eq!(values, vec![ByteMatch::Exact(0xAB), ByteMatch::Exact(0xCD)]);
    }

    #[rstest]
    #[case("[3]", SyntaxError::RepeatWithoutElement)]
    #[case("??[x]", SyntaxError::InvalidRepeat("[x]".to_string()))]
    #[case("AA[0]", SyntaxError::InvalidRepeat("[0]".to_string()))]
    #[case("12[-1]", SyntaxError::InvalidRepeat("[-1]".to_string()))]
    #[case("AA[]", SyntaxError::InvalidRepeat("[]".to_string()))]
    #[case("GG", SyntaxError::InvalidHex("GG".to_string()))]
    #[case("+F", SyntaxError::InvalidHex("+F".to_string()))]
    #[case("?A", SyntaxError::InvalidHex("?A".to_string()))]
    fn test_build_errors(#[case] input: &str, #[case] expected: SyntaxError) {
        assert_eq!(build_str(input), Err(expected));
    }

    #[test]
    fn test_builder_matches_parsed_text() {
        let built = PatternBuilder::new()
            .byte(0x12)
            .wildcards(3)
            .bytes(&[0xFF, 0x00])
            .repeat(2)
            .build()
            .unwrap();
        assert_eq!(built, build_str("12 ??[3] FF 00[2]").unwrap());
    }

    #[test]
    fn test_builder_defers_errors() {
        assert_eq!(
            PatternBuilder::new().repeat(2).byte(1).build(),
            Err(SyntaxError::RepeatWithoutElement)
        );
        assert_eq!(
            PatternBuilder::new().byte(1).repeat(0).build(),
            Err(SyntaxError::InvalidRepeat("[0]".to_string()))
        );
    }
}
