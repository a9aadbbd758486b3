//! Named operations and one-shot queries over string operands.
//!
//! This is the layer the command line front end drives: an operation name
//! is looked up, the operands it needs are supplied, and the query evaluates
//! to a single `bool`.

use std::fmt;

use anyhow::{Result, anyhow, bail};
use itertools::Itertools;
use phf::{Map, phf_map};

use crate::affix::{ends_with, starts_with};
use crate::classify::{CharClass, is_all};
use crate::containment::{contains, contains_code_point};
use crate::equality::equals_text;
use crate::fold::CaseMode;
use crate::text::{Text, is_empty, is_not_empty};

/// Every operation the engine exposes by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Equals,
    EqualsIgnoreCase,
    Contains,
    ContainsIgnoreCase,
    ContainsCodePoint,
    StartsWith,
    StartsWithIgnoreCase,
    EndsWith,
    EndsWithIgnoreCase,
    IsAlphabetic,
    IsAlphanumeric,
    IsNumeric,
    IsEmpty,
    IsNotEmpty,
}

/// The operands an operation consumes besides the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operands {
    Subject,
    SubjectAndPattern,
    SubjectAndCodePoint,
}

/// Operation names. Please keep sorted alphabetically.
const NAME_TO_OPERATION_MAP: Map<&'static str, Operation> = phf_map! {
    "contains" => Operation::Contains,
    "contains-code-point" => Operation::ContainsCodePoint,
    "contains-ignore-case" => Operation::ContainsIgnoreCase,
    "ends-with" => Operation::EndsWith,
    "ends-with-ignore-case" => Operation::EndsWithIgnoreCase,
    "equals" => Operation::Equals,
    "equals-ignore-case" => Operation::EqualsIgnoreCase,
    "is-alphabetic" => Operation::IsAlphabetic,
    "is-alphanumeric" => Operation::IsAlphanumeric,
    "is-empty" => Operation::IsEmpty,
    "is-not-empty" => Operation::IsNotEmpty,
    "is-numeric" => Operation::IsNumeric,
    "starts-with" => Operation::StartsWith,
    "starts-with-ignore-case" => Operation::StartsWithIgnoreCase,
};

impl Operation {
    /// Look up an operation by name.
    ///
    /// Names are matched case-insensitively and `_` is accepted in place of `-`.
    pub fn from_name(name: &str) -> Result<Self> {
        let key = name.trim().to_ascii_lowercase().replace('_', "-");
        NAME_TO_OPERATION_MAP.get(key.as_str()).copied().ok_or_else(|| {
            anyhow!(
                "unknown operation '{}' (expected one of: {})",
                name,
                Self::names().join(", ")
            )
        })
    }

    /// All operation names, sorted.
    pub fn names() -> impl Iterator<Item = &'static str> {
        NAME_TO_OPERATION_MAP.keys().copied().sorted()
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Equals => "equals",
            Operation::EqualsIgnoreCase => "equals-ignore-case",
            Operation::Contains => "contains",
            Operation::ContainsIgnoreCase => "contains-ignore-case",
            Operation::ContainsCodePoint => "contains-code-point",
            Operation::StartsWith => "starts-with",
            Operation::StartsWithIgnoreCase => "starts-with-ignore-case",
            Operation::EndsWith => "ends-with",
            Operation::EndsWithIgnoreCase => "ends-with-ignore-case",
            Operation::IsAlphabetic => "is-alphabetic",
            Operation::IsAlphanumeric => "is-alphanumeric",
            Operation::IsNumeric => "is-numeric",
            Operation::IsEmpty => "is-empty",
            Operation::IsNotEmpty => "is-not-empty",
        }
    }

    pub fn operands(self) -> Operands {
        match self {
            Operation::ContainsCodePoint => Operands::SubjectAndCodePoint,
            Operation::IsAlphabetic
            | Operation::IsAlphanumeric
            | Operation::IsNumeric
            | Operation::IsEmpty
            | Operation::IsNotEmpty => Operands::Subject,
            _ => Operands::SubjectAndPattern,
        }
    }

    /// The operation with case-insensitive comparison, where one exists.
    pub fn ignoring_case(self) -> Option<Self> {
        match self {
            Operation::Equals | Operation::EqualsIgnoreCase => Some(Operation::EqualsIgnoreCase),
            Operation::Contains | Operation::ContainsIgnoreCase => {
                Some(Operation::ContainsIgnoreCase)
            }
            Operation::StartsWith | Operation::StartsWithIgnoreCase => {
                Some(Operation::StartsWithIgnoreCase)
            }
            Operation::EndsWith | Operation::EndsWithIgnoreCase => {
                Some(Operation::EndsWithIgnoreCase)
            }
            _ => None,
        }
    }

    fn case_mode(self) -> CaseMode {
        CaseMode::from_ignore_case(matches!(
            self,
            Operation::EqualsIgnoreCase
                | Operation::ContainsIgnoreCase
                | Operation::StartsWithIgnoreCase
                | Operation::EndsWithIgnoreCase
        ))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a code point written as `U+1F600`, `0x1F600`, or a single character.
pub fn parse_code_point(input: &str) -> Result<char> {
    let hex = input
        .strip_prefix("U+")
        .or_else(|| input.strip_prefix("u+"))
        .or_else(|| input.strip_prefix("0x"))
        .or_else(|| input.strip_prefix("0X"));
    if let Some(hex) = hex {
        let value = u32::from_str_radix(hex, 16)
            .map_err(|_| anyhow!("invalid code point '{}': not a hexadecimal number", input))?;
        return char::from_u32(value)
            .ok_or_else(|| anyhow!("invalid code point '{}': not a Unicode scalar value", input));
    }
    match input.chars().exactly_one() {
        Ok(ch) => Ok(ch),
        Err(_) => bail!(
            "invalid code point '{}': expected U+XXXX, 0xXXXX or a single character",
            input
        ),
    }
}

/// One evaluation of an operation over string operands.
#[derive(Debug, Clone, Copy)]
pub struct Query<'a> {
    pub operation: Operation,
    pub subject: Text<'a>,
    pub pattern: Text<'a>,
    pub code_point: Option<char>,
}

impl<'a> Query<'a> {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            subject: Text::absent(),
            pattern: Text::absent(),
            code_point: None,
        }
    }

    pub fn subject(mut self, subject: impl Into<Text<'a>>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn pattern(mut self, pattern: impl Into<Text<'a>>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn code_point(mut self, code_point: char) -> Self {
        self.code_point = Some(code_point);
        self
    }

    /// Evaluate the query.
    ///
    /// Absent text operands are not errors; they follow the per-operation
    /// absence policy. The only error is a missing code point for
    /// `contains-code-point`.
    pub fn evaluate(&self) -> Result<bool> {
        let case = self.operation.case_mode();
        let outcome = match self.operation {
            Operation::Equals | Operation::EqualsIgnoreCase => {
                equals_text(self.subject, self.pattern, case)
            }
            Operation::Contains | Operation::ContainsIgnoreCase => {
                contains(self.subject, self.pattern, case)
            }
            Operation::ContainsCodePoint => {
                let Some(code_point) = self.code_point else {
                    bail!("operation '{}' requires a code point", self.operation);
                };
                contains_code_point(self.subject, code_point)
            }
            Operation::StartsWith | Operation::StartsWithIgnoreCase => {
                starts_with(self.subject, self.pattern, case)
            }
            Operation::EndsWith | Operation::EndsWithIgnoreCase => {
                ends_with(self.subject, self.pattern, case)
            }
            Operation::IsAlphabetic => is_all(self.subject, CharClass::Alphabetic),
            Operation::IsAlphanumeric => is_all(self.subject, CharClass::Alphanumeric),
            Operation::IsNumeric => is_all(self.subject, CharClass::Numeric),
            Operation::IsEmpty => is_empty(self.subject),
            Operation::IsNotEmpty => is_not_empty(self.subject),
        };
        tracing::debug!(
            operation = %self.operation,
            subject_present = self.subject.is_present(),
            pattern_present = self.pattern.is_present(),
            outcome,
            "evaluated query"
        );
        Ok(outcome)
    }
}
