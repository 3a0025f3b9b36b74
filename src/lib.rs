// Sun Oct 18 2026 - Alex

//! Byte patterns with wildcards and repeats: `48 8B ?? ??[4] C3`.
//!
//! Parse a pattern, locate it in a buffer, then overwrite the match.
//!
//! ```
//! use byte_pattern::Pattern;
//!
//! let pattern = Pattern::parse("01 02 ??[2] 05").unwrap();
//! let mut buffer = vec![0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
//! assert_eq!(pattern.find(&buffer), Some(1));
//!
//! let nops = Pattern::parse("90[2]").unwrap();
//! nops.patch(&mut buffer, 1).unwrap();
//! assert_eq!(buffer, [0x00, 0x90, 0x90, 0x03, 0x04, 0x05, 0x06]);
//! ```

pub mod config;
pub mod pattern;

pub use config::{Narrowing, PatternConfig};
pub use pattern::{ByteMatch, Pattern, PatternBuilder, PatternElement, PatternError, SyntaxError};
