//! Character variety sections - one per character class.

use super::{SectionResult, Suggestion};
use crate::classes::PasswordProfile;

fn missing(present: bool, tip: Suggestion) -> SectionResult {
    if present { None } else { Some(tip) }
}

pub fn uppercase_section(profile: &PasswordProfile) -> SectionResult {
    missing(profile.classes.upper, Suggestion::AddUppercase)
}

pub fn lowercase_section(profile: &PasswordProfile) -> SectionResult {
    missing(profile.classes.lower, Suggestion::AddLowercase)
}

pub fn digit_section(profile: &PasswordProfile) -> SectionResult {
    missing(profile.classes.digit, Suggestion::AddDigits)
}

/// Checks for at least one of the listed special characters.
///
/// # Returns
/// - `Some(Suggestion::AddSpecialCharacters)` if none is present
/// - `None` otherwise
pub fn special_section(profile: &PasswordProfile) -> SectionResult {
    missing(profile.classes.special, Suggestion::AddSpecialCharacters)
}
