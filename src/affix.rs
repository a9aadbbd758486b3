//! Prefix and suffix checks.
//!
//! Same absence policy as containment: an absent subject or an absent
//! affix never matches, an empty affix matches any present subject.

use crate::code_points::CodePoints;
use crate::equality::code_points_eq;
use crate::fold::CaseMode;
use crate::text::Text;

/// Whether `subject` begins with `prefix` under `case`.
pub fn starts_with<S, P>(subject: Text<'_, S>, prefix: Text<'_, P>, case: CaseMode) -> bool
where
    S: CodePoints + ?Sized,
    P: CodePoints + ?Sized,
{
    let (Text::Present(subject), Text::Present(prefix)) = (subject, prefix) else {
        return false;
    };
    let prefix_len = prefix.code_point_len();
    if prefix_len == 0 {
        return true;
    }
    // A subject shorter than the prefix leaves `take` short, which the
    // pairwise comparison rejects.
    code_points_eq(subject.code_points().take(prefix_len), prefix.code_points(), case)
}

/// Whether `subject` ends with `suffix` under `case`.
pub fn ends_with<S, P>(subject: Text<'_, S>, suffix: Text<'_, P>, case: CaseMode) -> bool
where
    S: CodePoints + ?Sized,
    P: CodePoints + ?Sized,
{
    let (Text::Present(subject), Text::Present(suffix)) = (subject, suffix) else {
        return false;
    };
    let suffix_len = suffix.code_point_len();
    if suffix_len == 0 {
        return true;
    }
    let subject_len = subject.code_point_len();
    if subject_len < suffix_len {
        return false;
    }
    code_points_eq(
        subject.code_points().skip(subject_len - suffix_len),
        suffix.code_points(),
        case,
    )
}

pub fn starts_with_exact<S, P>(subject: Text<'_, S>, prefix: Text<'_, P>) -> bool
where
    S: CodePoints + ?Sized,
    P: CodePoints + ?Sized,
{
    starts_with(subject, prefix, CaseMode::Exact)
}

pub fn starts_with_ignore_case<S, P>(subject: Text<'_, S>, prefix: Text<'_, P>) -> bool
where
    S: CodePoints + ?Sized,
    P: CodePoints + ?Sized,
{
    starts_with(subject, prefix, CaseMode::Insensitive)
}

pub fn ends_with_exact<S, P>(subject: Text<'_, S>, suffix: Text<'_, P>) -> bool
where
    S: CodePoints + ?Sized,
    P: CodePoints + ?Sized,
{
    ends_with(subject, suffix, CaseMode::Exact)
}

pub fn ends_with_ignore_case<S, P>(subject: Text<'_, S>, suffix: Text<'_, P>) -> bool
where
    S: CodePoints + ?Sized,
    P: CodePoints + ?Sized,
{
    ends_with(subject, suffix, CaseMode::Insensitive)
}
