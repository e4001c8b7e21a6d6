//! Password improvement sections
//!
//! Each section checks one aspect of a password and yields a tip when the
//! check fails.

mod length;
mod variety;

use std::fmt;

pub use length::{length_section, RECOMMENDED_LENGTH};
pub use variety::{digit_section, lowercase_section, special_section, uppercase_section};

/// Result type for section functions.
/// - `Some(suggestion)` - Section failed, tip to show
/// - `None` - Section passed
pub type SectionResult = Option<Suggestion>;

/// A single improvement tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suggestion {
    UseMoreCharacters,
    AddUppercase,
    AddLowercase,
    AddDigits,
    AddSpecialCharacters,
}

impl Suggestion {
    pub fn text(self) -> &'static str {
        match self {
            Suggestion::UseMoreCharacters => "Use at least 12+ characters for better security.",
            Suggestion::AddUppercase => "Add uppercase letters (A-Z).",
            Suggestion::AddLowercase => "Add lowercase letters (a-z).",
            Suggestion::AddDigits => "Include numbers (0-9).",
            Suggestion::AddSpecialCharacters => "Use special characters (!, @, #, etc.).",
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
