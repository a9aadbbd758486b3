//! Character class membership over whole texts.

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::code_points::CodePoints;
use crate::text::Text;

/// A class of code points a text can be tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// General category L (Lu, Ll, Lt, Lm, Lo).
    Alphabetic,
    /// Letters and decimal digits.
    Alphanumeric,
    /// General category Nd. Signs, separators, fractions and Roman numerals
    /// are not digits.
    Numeric,
}

impl CharClass {
    pub fn matches(self, ch: char) -> bool {
        let category = get_general_category(ch);
        match self {
            CharClass::Alphabetic => is_letter(category),
            CharClass::Alphanumeric => is_letter(category) || is_digit(category),
            CharClass::Numeric => is_digit(category),
        }
    }
}

fn is_letter(category: GeneralCategory) -> bool {
    matches!(
        category,
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

fn is_digit(category: GeneralCategory) -> bool {
    matches!(category, GeneralCategory::DecimalNumber)
}

/// Whether every code point of `subject` belongs to `class`.
///
/// Absent and empty texts belong to no class.
pub fn is_all<S>(subject: Text<'_, S>, class: CharClass) -> bool
where
    S: CodePoints + ?Sized,
{
    let Text::Present(subject) = subject else {
        return false;
    };
    let mut code_points = subject.code_points().peekable();
    code_points.peek().is_some() && code_points.all(|ch| class.matches(ch))
}

pub fn is_alphabetic<S: CodePoints + ?Sized>(subject: Text<'_, S>) -> bool {
    is_all(subject, CharClass::Alphabetic)
}

pub fn is_alphanumeric<S: CodePoints + ?Sized>(subject: Text<'_, S>) -> bool {
    is_all(subject, CharClass::Alphanumeric)
}

pub fn is_numeric<S: CodePoints + ?Sized>(subject: Text<'_, S>) -> bool {
    is_all(subject, CharClass::Numeric)
}
