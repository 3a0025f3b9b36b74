// Sun Oct 18 2026 - Alex

pub mod builder;
pub mod element;
pub mod error;
pub mod matcher;
pub mod patcher;
pub mod pattern;
pub mod tokenizer;
pub mod wildcard;

pub use builder::PatternBuilder;
pub use element::PatternElement;
pub use error::{PatternError, SyntaxError};
pub use pattern::Pattern;
pub use tokenizer::{tokenize, Token, TokenKind};
pub use wildcard::ByteMatch;

pub fn parse(text: &str) -> Result<Pattern, SyntaxError> {
    Pattern::parse(text)
}
