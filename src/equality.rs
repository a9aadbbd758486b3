//! Code point equality, exact or case-insensitive.

use itertools::{EitherOrBoth, Itertools};

use crate::code_points::CodePoints;
use crate::fold::CaseMode;
use crate::text::Text;

/// Compare two code point sequences pair by pair.
///
/// Stops at the first mismatching pair, or as soon as one side runs out
/// before the other.
pub(crate) fn code_points_eq<A, B>(a: A, b: B, case: CaseMode) -> bool
where
    A: IntoIterator<Item = char>,
    B: IntoIterator<Item = char>,
{
    a.into_iter().zip_longest(b).all(|pair| match pair {
        EitherOrBoth::Both(x, y) => case.chars_eq(x, y),
        EitherOrBoth::Left(_) | EitherOrBoth::Right(_) => false,
    })
}

/// Whether `subject` and `pattern` hold the same code points under `case`.
///
/// Both operands are present. When both refer to the same buffer the answer
/// is `true` without scanning.
pub fn equals<S, P>(subject: &S, pattern: &P, case: CaseMode) -> bool
where
    S: CodePoints + ?Sized,
    P: CodePoints + ?Sized,
{
    if let (Some(a), Some(b)) = (subject.footprint(), pattern.footprint())
        && a == b
    {
        return true;
    }
    if let (Some(a), Some(b)) = (subject.known_len(), pattern.known_len())
        && a != b
    {
        return false;
    }
    code_points_eq(subject.code_points(), pattern.code_points(), case)
}

pub fn equals_exact<S, P>(subject: &S, pattern: &P) -> bool
where
    S: CodePoints + ?Sized,
    P: CodePoints + ?Sized,
{
    equals(subject, pattern, CaseMode::Exact)
}

pub fn equals_ignore_case<S, P>(subject: &S, pattern: &P) -> bool
where
    S: CodePoints + ?Sized,
    P: CodePoints + ?Sized,
{
    equals(subject, pattern, CaseMode::Insensitive)
}

/// Null-safe equality over optional operands.
///
/// Two absent operands are equal; an absent operand never equals a present
/// one, even an empty one.
pub fn equals_text<S, P>(subject: Text<'_, S>, pattern: Text<'_, P>, case: CaseMode) -> bool
where
    S: CodePoints + ?Sized,
    P: CodePoints + ?Sized,
{
    match (subject, pattern) {
        (Text::Absent, Text::Absent) => true,
        (Text::Present(subject), Text::Present(pattern)) => equals(subject, pattern, case),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ropey::Rope;

    #[test]
    fn exact_equality() {
        assert!(equals_exact("test", "test"));
        assert!(!equals_exact("test", "Test"));
        assert!(!equals_exact("test", "tes"));
        assert!(!equals_exact("tes", "test"));
        assert!(equals_exact("", ""));
    }

    #[test]
    fn ignore_case_equality() {
        assert!(equals_ignore_case("TEST", "test"));
        assert!(equals_ignore_case("Straße", "STRAẞE"));
        assert!(!equals_ignore_case("Straße", "STRASSE"));
        assert!(!equals_ignore_case("test", "tests"));
    }

    #[test]
    fn ignore_case_is_symmetric() {
        let samples = ["", "a", "A", "ß", "ẞ", "ſ", "S", "\u{212A}", "k", "Σς", "σΣ"];
        for a in samples {
            for b in samples {
                assert_eq!(
                    equals_ignore_case(a, b),
                    equals_ignore_case(b, a),
                    "asymmetric for {a:?} / {b:?}"
                );
            }
        }
    }

    #[test]
    fn identical_buffer_fast_path() {
        let text = String::from("identical");
        assert!(equals_exact(&text, &text));
        assert!(equals_exact(text.as_str(), &text[..]));
    }

    #[test]
    fn overlapping_slices_are_compared_by_content() {
        let text = "abab";
        assert!(equals_exact(&text[..2], &text[2..]));
        assert!(!equals_exact(&text[..2], &text[..3]));
    }

    #[test]
    fn supplementary_character_is_one_unit() {
        let units: Vec<u16> = "a\u{1F600}".encode_utf16().collect();
        assert!(equals_exact(&units[..], "a\u{1F600}"));
        assert!(!equals_exact(&units[..], "a\u{1F601}"));
        // Same leading surrogate, different trailing surrogate.
        assert!(!equals_exact("\u{1F600}", "\u{1F610}"));
        assert!(equals_ignore_case(&units[..], "A\u{1F600}"));
    }

    #[test]
    fn mixed_representations() {
        let rope = Rope::from_str("Hello");
        let chars: Vec<char> = "hello".chars().collect();
        assert!(equals_ignore_case(&rope, &chars[..]));
        assert!(!equals_exact(&rope, &chars[..]));
        assert!(equals_exact(&rope.slice(1..), "ello"));
    }

    #[test]
    fn known_lengths_short_circuit() {
        let a: Vec<char> = "abc".chars().collect();
        let b: Vec<char> = "abcd".chars().collect();
        assert!(!equals_exact(&a[..], &b[..]));
    }

    #[test]
    fn null_safe_text_equality() {
        assert!(equals_text(Text::absent(), Text::absent(), CaseMode::Exact));
        assert!(!equals_text(Text::absent(), Text::from(""), CaseMode::Exact));
        assert!(!equals_text(Text::from(""), Text::absent(), CaseMode::Insensitive));
        assert!(equals_text(Text::from("AbC"), Text::from("aBc"), CaseMode::Insensitive));
        assert!(!equals_text(Text::from("AbC"), Text::from("aBc"), CaseMode::Exact));
    }
}
