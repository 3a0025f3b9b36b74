// Sun Oct 18 2026 - Alex

use crate::pattern::ByteMatch;
use std::fmt;
use std::num::NonZeroU32;

/// A value (or wildcard) applied to `repeat` consecutive buffer positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatternElement {
    value: ByteMatch,
    repeat: NonZeroU32,
}

impl PatternElement {
    pub fn new(value: ByteMatch, repeat: NonZeroU32) -> Self {
        Self { value, repeat }
    }

    pub fn single(value: ByteMatch) -> Self {
        Self::new(value, NonZeroU32::MIN)
    }

    pub fn exact(byte: u8) -> Self {
        Self::single(ByteMatch::Exact(byte))
    }

    pub fn wildcard() -> Self {
        Self::single(ByteMatch::Any)
    }

    pub fn value(&self) -> ByteMatch {
        self.value
    }

    pub fn repeat(&self) -> NonZeroU32 {
        self.repeat
    }

    /// Number of buffer positions this element covers.
    pub fn len(&self) -> usize {
        self.repeat.get() as usize
    }

    pub(crate) fn set_repeat(&mut self, repeat: NonZeroU32) {
        self.repeat = repeat;
    }
}

impl fmt::Display for PatternElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)?;
        if self.repeat.get() > 1 {
            write!(f, "[{}]", self.repeat)?;
        }
        Ok(())
    }
}
