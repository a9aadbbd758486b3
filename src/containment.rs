//! Containment: does a pattern occur anywhere inside a subject.
//!
//! | subject  | pattern   | result                          |
//! |----------|-----------|---------------------------------|
//! | absent   | any       | `false`                         |
//! | present  | absent    | `false`                         |
//! | present  | empty     | `true`                          |
//! | present  | non-empty | sliding-window search           |
//!
//! Only existence is reported; match positions are not computed.

use crate::code_points::CodePoints;
use crate::equality::code_points_eq;
use crate::fold::CaseMode;
use crate::text::Text;

/// Whether `pattern` occurs in `subject` under `case`.
pub fn contains<S, P>(subject: Text<'_, S>, pattern: Text<'_, P>, case: CaseMode) -> bool
where
    S: CodePoints + ?Sized,
    P: CodePoints + ?Sized,
{
    match (subject, pattern) {
        (Text::Present(subject), Text::Present(pattern)) => occurs_in(subject, pattern, case),
        _ => false,
    }
}

pub fn contains_exact<S, P>(subject: Text<'_, S>, pattern: Text<'_, P>) -> bool
where
    S: CodePoints + ?Sized,
    P: CodePoints + ?Sized,
{
    contains(subject, pattern, CaseMode::Exact)
}

pub fn contains_ignore_case<S, P>(subject: Text<'_, S>, pattern: Text<'_, P>) -> bool
where
    S: CodePoints + ?Sized,
    P: CodePoints + ?Sized,
{
    contains(subject, pattern, CaseMode::Insensitive)
}

/// Whether `subject` holds the code point `code_point`. Exact comparison only.
pub fn contains_code_point<S>(subject: Text<'_, S>, code_point: char) -> bool
where
    S: CodePoints + ?Sized,
{
    subject
        .as_present()
        .is_some_and(|subject| subject.code_points().any(|ch| ch == code_point))
}

/// Slide a window the length of `pattern` across `subject` and compare each
/// window pointwise, stopping at the first full match.
fn occurs_in<S, P>(subject: &S, pattern: &P, case: CaseMode) -> bool
where
    S: CodePoints + ?Sized,
    P: CodePoints + ?Sized,
{
    let needle_len = pattern.code_point_len();
    if needle_len == 0 {
        return true;
    }
    let haystack_len = subject.code_point_len();
    if haystack_len < needle_len {
        return false;
    }

    let mut window = subject.code_points();
    for _ in 0..=(haystack_len - needle_len) {
        // Every window has at least `needle_len` code points left, so `take`
        // yields exactly that many.
        if code_points_eq(window.clone().take(needle_len), pattern.code_points(), case) {
            return true;
        }
        window.next();
    }
    false
}
