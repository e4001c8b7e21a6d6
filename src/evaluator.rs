//! Password strength evaluator - tier selection and suggestion orchestration.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::classes::PasswordProfile;
use crate::sections::{
    digit_section, length_section, lowercase_section, special_section, uppercase_section,
    SectionResult, Suggestion,
};
use crate::tier::StrengthTier;

/// Passwords shorter than this are always `TooShort`.
pub const MIN_LENGTH: usize = 6;

/// Passwords shorter than this are at best `Weak`.
pub const WEAK_LENGTH: usize = 8;

/// Tier and tips for one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    pub tier: StrengthTier,
    pub suggestions: Vec<Suggestion>,
}

impl StrengthReport {
    /// `true` when every improvement check passed.
    ///
    /// Stricter than `tier.is_maximal()`: a `VeryStrong` password shorter
    /// than 12 characters still has the length tip.
    pub fn nothing_to_improve(&self) -> bool {
        self.suggestions.is_empty()
    }
}

fn tier_for(profile: &PasswordProfile) -> StrengthTier {
    if profile.length < MIN_LENGTH {
        return StrengthTier::TooShort;
    }
    if profile.length < WEAK_LENGTH {
        return StrengthTier::Weak;
    }
    match profile.classes.count() {
        1 => StrengthTier::Weak,
        2 => StrengthTier::Moderate,
        3 => StrengthTier::Strong,
        // Four classes, or none of the recognised ones
        _ => StrengthTier::VeryStrong,
    }
}

fn suggestions_for(profile: &PasswordProfile) -> Vec<Suggestion> {
    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&PasswordProfile) -> SectionResult); 5] = [
        ("length", length_section),
        ("uppercase", uppercase_section),
        ("lowercase", lowercase_section),
        ("digit", digit_section),
        ("special", special_section),
    ];

    sections
        .into_iter()
        .filter_map(|(_section_name, section_fn)| {
            let result = section_fn(profile);
            #[cfg(feature = "tracing")]
            {
                if result.is_some() {
                    tracing::trace!("password section failed: {}", _section_name);
                }
            }
            result
        })
        .collect()
}

/// Selects the strength tier of a password.
///
/// Rules are checked in order and the first match wins:
/// 1. fewer than 6 characters: `TooShort`
/// 2. fewer than 8 characters, or exactly one character class: `Weak`
/// 3. two classes: `Moderate`
/// 4. three classes: `Strong`
/// 5. anything else: `VeryStrong`
///
/// The last rule also catches passwords of 8+ characters that contain none
/// of the recognised classes (spaces, accented letters).
///
/// # Arguments
/// * `password` - The password to evaluate, possibly empty
///
/// # Returns
/// The `StrengthTier`, which carries label, color and percentage.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthTier {
    let tier = tier_for(&PasswordProfile::scan(password.expose_secret()));

    #[cfg(feature = "tracing")]
    tracing::trace!("password evaluated: {}", tier);

    tier
}

/// Lists improvement tips in fixed order: length, uppercase, lowercase,
/// digits, special characters.
///
/// # Arguments
/// * `password` - The password to inspect
///
/// # Returns
/// One `Suggestion` per failed check. An empty list implies `VeryStrong`.
pub fn password_suggestions(password: &SecretString) -> Vec<Suggestion> {
    suggestions_for(&PasswordProfile::scan(password.expose_secret()))
}

/// Evaluates tier and suggestions together, reading the password once.
pub fn password_report(password: &SecretString) -> StrengthReport {
    let profile = PasswordProfile::scan(password.expose_secret());
    let tier = tier_for(&profile);

    #[cfg(feature = "tracing")]
    tracing::trace!("password evaluated: {}", tier);

    StrengthReport {
        tier,
        suggestions: suggestions_for(&profile),
    }
}

/// Debounce applied before an async evaluation runs.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Async version that sends the report via channel after a short debounce.
///
/// Nothing is sent if `token` is cancelled before the debounce elapses, so a
/// UI can cancel the previous keystroke's evaluation when a new one starts.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `token` - Cancellation token for this evaluation
/// * `tx` - Channel receiving the `StrengthReport`
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before it started");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let report = password_report(password);

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password report: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    fn tier_of(pwd: &str) -> StrengthTier {
        evaluate_password_strength(&secret(pwd))
    }

    #[test]
    fn test_evaluate_empty_password() {
        let tier = tier_of("");
        assert_eq!(tier, StrengthTier::TooShort);
        assert_eq!(tier.percentage(), 0);
    }

    #[test]
    fn test_evaluate_five_characters() {
        assert_eq!(tier_of("abcde"), StrengthTier::TooShort);
    }

    #[test]
    fn test_evaluate_six_lowercase() {
        let tier = tier_of("abcdef");
        assert_eq!(tier, StrengthTier::Weak);
        assert_eq!(tier.percentage(), 25);
    }

    #[test]
    fn test_evaluate_three_classes() {
        let tier = tier_of("Abcdefg1");
        assert_eq!(tier, StrengthTier::Strong);
        assert_eq!(tier.percentage(), 75);
    }

    #[test]
    fn test_evaluate_four_classes() {
        let tier = tier_of("Ab1!efgh");
        assert_eq!(tier, StrengthTier::VeryStrong);
        assert_eq!(tier.percentage(), 100);
    }

    #[test]
    fn test_evaluate_two_classes() {
        let tier = tier_of("password123");
        assert_eq!(tier, StrengthTier::Moderate);
        assert_eq!(tier.percentage(), 50);
    }

    #[test]
    fn test_short_length_overrides_class_count() {
        assert_eq!(tier_of("A1!x"), StrengthTier::TooShort);
        assert_eq!(tier_of("A1!xy"), StrengthTier::TooShort);
    }

    #[test]
    fn test_below_eight_is_weak_regardless_of_classes() {
        assert_eq!(tier_of("Ab1!ef"), StrengthTier::Weak);
        assert_eq!(tier_of("Ab1!efg"), StrengthTier::Weak);
    }

    #[test]
    fn test_single_class_long_password_is_weak() {
        assert_eq!(tier_of("abcdefghijklmnop"), StrengthTier::Weak);
        assert_eq!(tier_of("12345678"), StrengthTier::Weak);
    }

    #[test]
    fn test_no_class_long_password_falls_through_to_very_strong() {
        assert_eq!(tier_of("        "), StrengthTier::VeryStrong);
        assert_eq!(tier_of("éééééééé"), StrengthTier::VeryStrong);
        // Still below 8 characters
        assert_eq!(tier_of("       "), StrengthTier::Weak);
    }

    #[test]
    fn test_no_class_long_password_still_gets_every_tip() {
        let report = password_report(&secret("        "));
        assert_eq!(report.tier, StrengthTier::VeryStrong);
        assert_eq!(report.suggestions.len(), 5);
        assert!(!report.nothing_to_improve());
    }

    #[test]
    fn test_report_matches_separate_calls() {
        for pwd in ["", "abcdef", "password123", "Ab1!efgh", "Sunset!In#Tokyo2024"] {
            let report = password_report(&secret(pwd));
            assert_eq!(report.tier, tier_of(pwd));
            assert_eq!(report.suggestions, password_suggestions(&secret(pwd)));
        }
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 5 characters but 10 bytes
        assert_eq!(tier_of("ééééé"), StrengthTier::TooShort);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        for pwd in ["", "abc", "password123", "Ab1!efgh", "Sunset!In#Tokyo2024"] {
            assert_eq!(tier_of(pwd), tier_of(pwd));
        }
    }

    #[test]
    fn test_suggestions_fixed_order() {
        let suggestions = password_suggestions(&secret(""));
        assert_eq!(
            suggestions,
            vec![
                Suggestion::UseMoreCharacters,
                Suggestion::AddUppercase,
                Suggestion::AddLowercase,
                Suggestion::AddDigits,
                Suggestion::AddSpecialCharacters,
            ]
        );
    }

    #[test]
    fn test_suggestions_partial() {
        let suggestions = password_suggestions(&secret("password123"));
        assert_eq!(
            suggestions,
            vec![
                Suggestion::UseMoreCharacters,
                Suggestion::AddUppercase,
                Suggestion::AddSpecialCharacters,
            ]
        );
    }

    #[test]
    fn test_suggestions_empty_for_maximal_password() {
        let pwd = secret("Sunset!In#Tokyo2024");
        assert!(password_suggestions(&pwd).is_empty());
        assert_eq!(evaluate_password_strength(&pwd), StrengthTier::VeryStrong);
    }

    #[test]
    fn test_empty_suggestions_imply_very_strong() {
        let samples = [
            "", "a", "abcdef", "Abcdefg1", "Ab1!efgh", "password123",
            "Sunset!In#Tokyo2024", "CorrectHorse1!", "ALLUPPER1234!",
        ];
        for pwd in samples {
            let report = password_report(&secret(pwd));
            if report.nothing_to_improve() {
                assert_eq!(report.tier, StrengthTier::VeryStrong, "password '{}'", pwd);
            }
            if report.tier != StrengthTier::VeryStrong {
                assert!(!report.nothing_to_improve(), "password '{}'", pwd);
            }
        }
    }

    #[test]
    fn test_short_very_strong_only_lacks_length() {
        let report = password_report(&secret("Ab1!efgh"));
        assert_eq!(report.tier, StrengthTier::VeryStrong);
        assert!(report.tier.is_maximal());
        assert!(!report.nothing_to_improve());
        assert_eq!(report.suggestions, vec![Suggestion::UseMoreCharacters]);
    }
}
