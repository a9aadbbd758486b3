//! Per-code-point case folding.

use itertools::Itertools;

/// How code points are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    /// Code points must be identical.
    #[default]
    Exact,
    /// Code points are compared after [`fold`].
    Insensitive,
}

impl CaseMode {
    pub fn from_ignore_case(ignore_case: bool) -> Self {
        if ignore_case {
            CaseMode::Insensitive
        } else {
            CaseMode::Exact
        }
    }

    pub fn ignores_case(self) -> bool {
        self == CaseMode::Insensitive
    }

    /// Compare two code points under this mode.
    #[inline]
    pub fn chars_eq(self, a: char, b: char) -> bool {
        a == b || (self.ignores_case() && fold(a) == fold(b))
    }
}

/// Fold `ch` to its case-insensitive representative.
///
/// The upper-case mapping is applied, then the lower-case mapping, each only
/// when it maps to exactly one code point. A character whose full mapping
/// expands (`ß` to `SS`, `İ` to `i̇`) keeps its own value for that step, so
/// the result is always a single code point. The fold is total and
/// idempotent.
pub fn fold(ch: char) -> char {
    if ch.is_ascii() {
        return ch.to_ascii_lowercase();
    }
    let upper = ch.to_uppercase().exactly_one().unwrap_or(ch);
    upper.to_lowercase().exactly_one().unwrap_or(upper)
}
