// Sun Oct 18 2026 - Alex

use crate::pattern::SyntaxError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Two characters that should form a hex byte. Not validated yet.
    Byte,
    Wildcard,
    /// A `[...]` block including both brackets.
    Repeat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: String,
    position: usize,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Character index in the input with spaces removed.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The text between the brackets of a repeat token.
    pub fn repeat_body(&self) -> &str {
        self.text
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .unwrap_or(&self.text)
    }
}

pub struct Tokenizer {
    chars: Vec<char>,
    pos: usize,
}

impl Tokenizer {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().filter(|&c| c != ' ').collect(),
            pos: 0,
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, SyntaxError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Option<Token>, SyntaxError> {
        let start = self.pos;
        let rest = &self.chars[start..];

        let (kind, width) = match rest {
            [] => return Ok(None),
            ['?', '?', ..] => (TokenKind::Wildcard, 2),
            ['[', ..] => {
                let close = rest
                    .iter()
                    .position(|&c| c == ']')
                    .ok_or(SyntaxError::UnclosedRepeat { position: start })?;
                (TokenKind::Repeat, close + 1)
            }
            [_] => return Err(SyntaxError::IncompleteByte { position: start }),
            _ => (TokenKind::Byte, 2),
        };

        self.pos += width;
        Ok(Some(Token {
            kind,
            text: rest[..width].iter().collect(),
            position: start,
        }))
    }
}

pub fn tokenize(input: &str) -> Result<Vec<Token>, SyntaxError> {
    Tokenizer::new(input).tokenize()
}
