//! Optional text operands.
//!
//! Absence and emptiness are different states and every operation in the
//! crate treats them differently, so they are kept apart in the type.

use crate::code_points::CodePoints;

/// A text operand that is either absent or a borrowed piece of text.
///
/// `Text::Present("")` is present and empty; it is not the same as
/// `Text::Absent`.
#[derive(Debug)]
pub enum Text<'a, S: ?Sized + 'a = str> {
    Absent,
    Present(&'a S),
}

impl<S: ?Sized> Clone for Text<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for Text<'_, S> {}

impl Text<'_, str> {
    /// An absent string operand.
    pub const fn absent() -> Self {
        Text::Absent
    }
}

impl<'a, S: ?Sized> Text<'a, S> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Text::Absent)
    }

    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    pub fn as_present(&self) -> Option<&'a S> {
        match *self {
            Text::Absent => None,
            Text::Present(text) => Some(text),
        }
    }
}

impl<S: CodePoints + ?Sized> Text<'_, S> {
    /// True when absent, or present with no code points.
    pub fn is_absent_or_empty(&self) -> bool {
        self.as_present().is_none_or(|text| text.is_empty_text())
    }
}

impl<'a, S: ?Sized> From<&'a S> for Text<'a, S> {
    fn from(text: &'a S) -> Self {
        Text::Present(text)
    }
}

impl<'a, S: ?Sized> From<Option<&'a S>> for Text<'a, S> {
    fn from(text: Option<&'a S>) -> Self {
        text.map_or(Text::Absent, Text::Present)
    }
}

/// Whether `text` is absent or empty.
pub fn is_empty<S: CodePoints + ?Sized>(text: Text<'_, S>) -> bool {
    text.is_absent_or_empty()
}

/// Whether `text` is present and holds at least one code point.
pub fn is_not_empty<S: CodePoints + ?Sized>(text: Text<'_, S>) -> bool {
    !text.is_absent_or_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_empty_are_distinct() {
        let absent = Text::absent();
        let empty = Text::from("");
        assert!(absent.is_absent());
        assert!(empty.is_present());
        assert!(absent.is_absent_or_empty());
        assert!(empty.is_absent_or_empty());
    }

    #[test]
    fn from_option() {
        let none: Option<&str> = None;
        assert!(Text::from(none).is_absent());
        assert_eq!(Text::from(Some("x")).as_present(), Some("x"));
    }

    #[test]
    fn emptiness_predicates() {
        assert!(is_empty(Text::absent()));
        assert!(is_empty(Text::from("")));
        assert!(!is_empty(Text::from(" ")));
        assert!(!is_not_empty(Text::absent()));
        assert!(is_not_empty(Text::from("a")));
    }

    #[test]
    fn utf16_emptiness() {
        let units: Vec<u16> = "\u{1F600}".encode_utf16().collect();
        assert!(is_not_empty(Text::from(&units[..])));
        assert!(is_empty(Text::<[u16]>::Absent));
    }
}
