//! Code-point-aware text matching.
//!
//! Equality, containment, prefix/suffix and character-class tests that walk
//! Unicode code points rather than storage units, with explicit handling of
//! absent and empty operands.
//!
//! # Example
//!
//! ```rust
//! use textmatch::{CaseMode, Text, contains, ends_with, is_numeric, starts_with};
//!
//! let subject = Text::from("TEST");
//! let pattern = Text::from("st");
//!
//! assert!(contains(subject, pattern, CaseMode::Insensitive));
//! assert!(ends_with(subject, pattern, CaseMode::Insensitive));
//! assert!(!starts_with(subject, pattern, CaseMode::Insensitive));
//!
//! // An absent pattern never matches; an empty one always does.
//! assert!(!contains(subject, Text::absent(), CaseMode::Exact));
//! assert!(contains(subject, Text::from(""), CaseMode::Exact));
//!
//! // Empty text belongs to no character class.
//! assert!(is_numeric(Text::from("123")));
//! assert!(!is_numeric(Text::from("")));
//! ```
//!
//! # Absence policy
//!
//! | Operation                     | absent subject | absent pattern | empty pattern |
//! |-------------------------------|----------------|----------------|---------------|
//! | `contains`                    | `false`        | `false`        | `true`        |
//! | `starts_with` / `ends_with`   | `false`        | `false`        | `true`        |
//! | `contains_code_point`         | `false`        | n/a            | n/a           |
//! | `is_alphabetic` and friends   | `false`        | n/a            | n/a           |
//! | `equals_text`                 | `true` if both absent, else `false` | `false` | compared |
//!
//! An empty subject belongs to no character class. `equals` takes present
//! operands only.

mod affix;
mod classify;
mod code_points;
mod containment;
mod equality;
mod fold;
pub mod query;
mod text;

pub use affix::{
    ends_with, ends_with_exact, ends_with_ignore_case, starts_with, starts_with_exact,
    starts_with_ignore_case,
};
pub use classify::{CharClass, is_all, is_alphabetic, is_alphanumeric, is_numeric};
pub use code_points::{CodePoints, Footprint, Utf16CodePoints};
pub use containment::{contains, contains_code_point, contains_exact, contains_ignore_case};
pub use equality::{equals, equals_exact, equals_ignore_case, equals_text};
pub use fold::{CaseMode, fold};
pub use query::{Operands, Operation, Query, parse_code_point};
pub use text::{Text, is_empty, is_not_empty};
