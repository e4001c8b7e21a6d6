//! Length section - recommends a longer password.

use super::{SectionResult, Suggestion};
use crate::classes::PasswordProfile;

/// Length below which a longer password is recommended.
pub const RECOMMENDED_LENGTH: usize = 12;

/// Checks if the password reaches the recommended length.
///
/// # Arguments
/// * `profile` - Length and classes of the password, in characters
///
/// # Returns
/// - `Some(Suggestion::UseMoreCharacters)` if shorter than 12 characters
/// - `None` if long enough
pub fn length_section(profile: &PasswordProfile) -> SectionResult {
    if profile.length < RECOMMENDED_LENGTH {
        return Some(Suggestion::UseMoreCharacters);
    }
    None
}
