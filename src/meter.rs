//! Presentation helpers shared by UI shells rendering the strength meter.

use crate::tier::StrengthTier;

/// Color of the unfilled part of the bar.
pub const TRACK_COLOR: &str = "#D3D3D3";

/// Shown instead of suggestions when a password cannot be improved further.
pub const MAXIMAL_STRENGTH_MESSAGE: &str = "Your password is Ultra Strong! 🚀";

/// General advice displayed above the password input.
pub const BEST_PRACTICES: [&str; 8] = [
    "Use at least 12-16 characters for better security.",
    "Include uppercase & lowercase letters (A-Z, a-z).",
    "Add numbers (0-9) and special characters (!, @, #, etc.).",
    "Avoid common words, sequences, or personal information.",
    "Don't reuse passwords across different accounts.",
    "Use passphrases for added security, e.g., Sunset!In#Tokyo2024.",
    "Enable two-factor authentication (2FA) for extra protection.",
    "Never share your password with anyone!",
];

/// CSS background for the strength bar, filled up to the tier's percentage.
pub fn gradient_css(tier: StrengthTier) -> String {
    let pct = tier.percentage();
    format!(
        "linear-gradient(to right, {} {}%, {} {}%)",
        tier.color(),
        pct,
        TRACK_COLOR,
        pct
    )
}

/// Fixed-width text bar such as `[#####-----]`.
///
/// The filled cell count is rounded down.
pub fn text_bar(tier: StrengthTier, width: usize) -> String {
    let filled = filled_cells(width, tier.percentage());
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// `width * pct / 100`, split so the product cannot overflow.
fn filled_cells(width: usize, pct: u8) -> usize {
    let pct = usize::from(pct);
    width / 100 * pct + width % 100 * pct / 100
}
