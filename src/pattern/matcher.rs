// Sun Oct 18 2026 - Alex

use crate::config::PatternConfig;
use crate::pattern::{ByteMatch, Pattern};
use memchr::memchr_iter;

impl Pattern {
    /// Lowest offset in `buffer` where every position of the pattern matches.
    ///
    /// An empty pattern never matches.
    pub fn find(&self, buffer: &[u8]) -> Option<usize> {
        self.find_with(buffer, &PatternConfig::default())
    }

    pub fn find_with(&self, buffer: &[u8], config: &PatternConfig) -> Option<usize> {
        let len = self.len();
        if len == 0 || buffer.len() < len {
            return None;
        }
        let last_start = buffer.len() - len;

        let found = match self.anchor().filter(|_| config.prefilter) {
            Some((anchor, byte)) => {
                // only starts whose anchor position holds the anchor byte can match
                let window = &buffer[anchor..=last_start + anchor];
                memchr_iter(byte, window).find(|&start| self.matches_at(buffer, start))
            }
            None => (0..=last_start).find(|&start| self.matches_at(buffer, start)),
        };

        match found {
            Some(offset) => log::trace!("Pattern {} matched at 0x{:x}", self, offset),
            None => log::trace!("Pattern {} not found in {} bytes", self, buffer.len()),
        }
        found
    }

    /// Whether the pattern matches `buffer` starting exactly at `offset`.
    pub fn matches_at(&self, buffer: &[u8], offset: usize) -> bool {
        let len = self.len();
        if len == 0 {
            return false;
        }
        let window = match offset.checked_add(len).and_then(|end| buffer.get(offset..end)) {
            Some(window) => window,
            None => return false,
        };
        self.expand().zip(window).all(|(m, &b)| m.matches(b))
    }

    /// Expanded index and value of the first concrete byte.
    fn anchor(&self) -> Option<(usize, u8)> {
        let mut index = 0;
        for el in self.elements() {
            if let ByteMatch::Exact(b) = el.value() {
                return Some((index, b));
            }
            index += el.len();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn find_both(pattern: &str, buffer: &[u8]) -> Option<usize> {
        let pattern = Pattern::parse(pattern).unwrap();
        let fast = pattern.find(buffer);
        let plain = pattern.find_with(buffer, &PatternConfig::default().with_prefilter(false));
        assert_eq!(fast, plain, "prefilter changed the result for {}", pattern);
        fast
    }

    #[rstest]
    #[case("01 02 ??[2] 05", &[0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06], Some(1))]
    #[case("AA BB CC", &[0x00, 0x01, 0x02], None)]
    #[case("AA", &[], None)]
    #[case("AA BB", &[0xAA], None)]
    #[case("??[2] 05", &[0x05, 0x05, 0x05, 0x05], Some(0))]
    #[case("??[3]", &[0x01, 0x02, 0x03], Some(0))]
    #[case("??[4]", &[0x01, 0x02, 0x03], None)]
    #[case("05 05", &[0x05, 0x04, 0x05, 0x05, 0x05], Some(2))]
    #[case("?? 01", &[0x01, 0x00, 0x01], Some(1))]
    #[case("00[3] FF", &[0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0xFF], Some(3))]
    #[case("FF", &[0x00, 0x00, 0x00, 0xFF], Some(3))]
    fn test_find(#[case] pattern: &str, #[case] buffer: &[u8], #[case] expected: Option<usize>) {
        assert_eq!(find_both(pattern, buffer), expected);
    }

    #[test]
    fn test_empty_pattern_never_matches() {
        let pattern = Pattern::default();
        assert_eq!(pattern.find(&[0x00, 0x01]), None);
        assert_eq!(pattern.find(&[]), None);
        assert!(!pattern.matches_at(&[0x00], 0));
    }

    #[test]
    fn test_returns_lowest_offset() {
        let buffer = [0x90, 0x90, 0xC3, 0x90, 0x90, 0xC3];
        assert_eq!(find_both("90 90 C3", &buffer), Some(0));
        assert_eq!(find_both("90 C3", &buffer), Some(1));
    }

    #[test]
    fn test_matches_at_bounds() {
        let pattern = Pattern::parse("AA ??").unwrap();
        let buffer = [0xAA, 0x01, 0xAA];
        assert!(pattern.matches_at(&buffer, 0));
        assert!(!pattern.matches_at(&buffer, 1));
        assert!(!pattern.matches_at(&buffer, 2));
        assert!(!pattern.matches_at(&buffer, usize::MAX));
    }

    #[test]
    fn test_anchor_skips_leading_wildcards() {
        let pattern = Pattern::parse("??[3] 7F ??").unwrap();
        assert_eq!(pattern.anchor(), Some((3, 0x7F)));
        assert_eq!(Pattern::parse("?? ??").unwrap().anchor(), None);
    }
}
