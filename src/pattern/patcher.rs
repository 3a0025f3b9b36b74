// Sun Oct 18 2026 - Alex

use crate::pattern::{ByteMatch, Pattern, PatternError};

impl Pattern {
    /// Writes the pattern's concrete bytes into `buffer` at `offset`.
    /// Wildcard positions keep whatever the buffer already holds.
    pub fn patch(&self, buffer: &mut [u8], offset: usize) -> Result<(), PatternError> {
        let len = self.len();
        let buffer_len = buffer.len();
        let window = offset
            .checked_add(len)
            .and_then(|end| buffer.get_mut(offset..end))
            .ok_or(PatternError::OutOfBounds { offset, len, buffer_len })?;

        let mut written = 0;
        for (slot, m) in window.iter_mut().zip(self.expand()) {
            if let ByteMatch::Exact(b) = m {
                *slot = b;
                written += 1;
            }
        }

        log::trace!("Patched {} of {} bytes at 0x{:x}", written, len, offset);
        Ok(())
    }

    /// Finds this pattern and writes `replacement` over the first match.
    /// Returns the match offset, or `None` when nothing was found.
    pub fn replace(&self, replacement: &Pattern, buffer: &mut [u8]) -> Result<Option<usize>, PatternError> {
        match self.find(buffer) {
            Some(offset) => {
                replacement.patch(buffer, offset)?;
                Ok(Some(offset))
            }
            None => Ok(None),
        }
    }
}
