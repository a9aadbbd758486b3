//! Code point views over the text representations the matcher accepts.
//!
//! Every comparison in this crate walks Unicode scalar values, never storage
//! units. UTF-16 input is decoded pairwise so a supplementary character is
//! one comparison unit, not two.

use std::char::DecodeUtf16;
use std::iter::Copied;
use std::mem;
use std::slice;

use ropey::{Rope, RopeSlice};

/// A piece of text that can be walked as a restartable sequence of code points.
///
/// `code_points()` may be called any number of times; each call starts again
/// from the first code point.
pub trait CodePoints {
    type Iter<'a>: Iterator<Item = char> + Clone
    where
        Self: 'a;

    /// Code points in logical order.
    fn code_points(&self) -> Self::Iter<'_>;

    /// Number of code points, when the representation knows it without scanning.
    fn known_len(&self) -> Option<usize> {
        None
    }

    /// Number of code points.
    fn code_point_len(&self) -> usize {
        self.known_len().unwrap_or_else(|| self.code_points().count())
    }

    fn is_empty_text(&self) -> bool {
        self.code_points().next().is_none()
    }

    /// Where the text lives in memory, if it is a contiguous buffer.
    ///
    /// Two texts with the same footprint hold the same units and therefore the
    /// same code points. Representations that cannot answer return `None`.
    fn footprint(&self) -> Option<Footprint> {
        None
    }
}

/// Address, unit count and unit width of a contiguous text buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Footprint {
    addr: usize,
    units: usize,
    unit_width: usize,
}

impl Footprint {
    pub fn of<T>(units: &[T]) -> Self {
        Self {
            addr: units.as_ptr() as usize,
            units: units.len(),
            unit_width: mem::size_of::<T>(),
        }
    }
}

impl CodePoints for str {
    type Iter<'a> = std::str::Chars<'a>;

    fn code_points(&self) -> Self::Iter<'_> {
        self.chars()
    }

    fn is_empty_text(&self) -> bool {
        self.is_empty()
    }

    fn footprint(&self) -> Option<Footprint> {
        Some(Footprint::of(self.as_bytes()))
    }
}

impl CodePoints for String {
    type Iter<'a> = std::str::Chars<'a>;

    fn code_points(&self) -> Self::Iter<'_> {
        self.chars()
    }

    fn is_empty_text(&self) -> bool {
        self.is_empty()
    }

    fn footprint(&self) -> Option<Footprint> {
        self.as_str().footprint()
    }
}

/// Already-decoded code points.
impl CodePoints for [char] {
    type Iter<'a> = Copied<slice::Iter<'a, char>>;

    fn code_points(&self) -> Self::Iter<'_> {
        self.iter().copied()
    }

    fn known_len(&self) -> Option<usize> {
        Some(self.len())
    }

    fn footprint(&self) -> Option<Footprint> {
        Some(Footprint::of(self))
    }
}

/// UTF-16 code units.
///
/// Surrogate pairs decode to one supplementary code point. An unpaired
/// surrogate decodes to U+FFFD.
impl CodePoints for [u16] {
    type Iter<'a> = Utf16CodePoints<'a>;

    fn code_points(&self) -> Self::Iter<'_> {
        Utf16CodePoints {
            inner: char::decode_utf16(self.iter().copied()),
        }
    }

    fn is_empty_text(&self) -> bool {
        self.is_empty()
    }

    fn footprint(&self) -> Option<Footprint> {
        Some(Footprint::of(self))
    }
}

/// Iterator returned by the `[u16]` implementation of [`CodePoints`].
#[derive(Debug, Clone)]
pub struct Utf16CodePoints<'a> {
    inner: DecodeUtf16<Copied<slice::Iter<'a, u16>>>,
}

impl Iterator for Utf16CodePoints<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        self.inner
            .next()
            .map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl CodePoints for Rope {
    type Iter<'a> = ropey::iter::Chars<'a>;

    fn code_points(&self) -> Self::Iter<'_> {
        self.chars()
    }

    fn known_len(&self) -> Option<usize> {
        Some(self.len_chars())
    }

    fn is_empty_text(&self) -> bool {
        self.len_chars() == 0
    }
}

impl<'s> CodePoints for RopeSlice<'s> {
    type Iter<'a>
        = ropey::iter::Chars<'a>
    where
        Self: 'a;

    fn code_points(&self) -> Self::Iter<'_> {
        self.chars()
    }

    fn known_len(&self) -> Option<usize> {
        Some(self.len_chars())
    }

    fn is_empty_text(&self) -> bool {
        self.len_chars() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn str_yields_scalar_values() {
        let cps: Vec<char> = "a\u{1F600}b".code_points().collect();
        assert_eq!(cps, vec!['a', '\u{1F600}', 'b']);
        assert_eq!("a\u{1F600}b".code_point_len(), 3);
    }

    #[test]
    fn utf16_pairs_surrogates() {
        let units = utf16("x\u{10400}y");
        assert_eq!(units.len(), 4);
        let cps: Vec<char> = units.code_points().collect();
        assert_eq!(cps, vec!['x', '\u{10400}', 'y']);
        assert_eq!(units.code_point_len(), 3);
    }

    #[test]
    fn utf16_lone_surrogate_is_replacement() {
        let units: [u16; 3] = [0x0061, 0xD800, 0x0062];
        let cps: Vec<char> = units[..].code_points().collect();
        assert_eq!(cps, vec!['a', char::REPLACEMENT_CHARACTER, 'b']);
    }

    #[test]
    fn sequences_restart() {
        let text = "héllo";
        let first: String = text.code_points().collect();
        let second: String = text.code_points().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn rope_and_slice() {
        let rope = Rope::from_str("ab\u{1F600}cd");
        assert_eq!(rope.code_point_len(), 5);
        let slice = rope.slice(1..4);
        let cps: Vec<char> = slice.code_points().collect();
        assert_eq!(cps, vec!['b', '\u{1F600}', 'c']);
        assert!(!slice.is_empty_text());
        assert!(rope.slice(2..2).is_empty_text());
    }

    #[test]
    fn char_slice_known_len() {
        let cps = ['a', '\u{1F600}'];
        assert_eq!(cps[..].known_len(), Some(2));
        assert_eq!("ab".known_len(), None);
    }

    #[test]
    fn footprint_distinguishes_subslices() {
        let text = "testing";
        assert_eq!(text.footprint(), text.footprint());
        assert_ne!(text.footprint(), text[..4].footprint());
        assert_ne!(text[..4].footprint(), text[3..].footprint());
    }
}
