//! Strength tiers and their meter colors.

use std::fmt;

/// Color swatch associated with a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Red,
    Orange,
    Gold,
    Emerald,
    Green,
}

impl ColorToken {
    /// CSS hex value, e.g. `#FF4C4C`.
    pub fn hex(self) -> &'static str {
        match self {
            ColorToken::Red => "#FF4C4C",
            ColorToken::Orange => "#FF964C",
            ColorToken::Gold => "#FFD700",
            ColorToken::Emerald => "#50C878",
            ColorToken::Green => "#007F00",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

/// One of the five fixed strength categories, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthTier {
    TooShort,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    /// All tiers in ascending order.
    pub const ALL: [StrengthTier; 5] = [
        StrengthTier::TooShort,
        StrengthTier::Weak,
        StrengthTier::Moderate,
        StrengthTier::Strong,
        StrengthTier::VeryStrong,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::TooShort => "Too Short",
            StrengthTier::Weak => "Weak",
            StrengthTier::Moderate => "Moderate",
            StrengthTier::Strong => "Strong",
            StrengthTier::VeryStrong => "Very Strong",
        }
    }

    pub fn color(self) -> ColorToken {
        match self {
            StrengthTier::TooShort => ColorToken::Red,
            StrengthTier::Weak => ColorToken::Orange,
            StrengthTier::Moderate => ColorToken::Gold,
            StrengthTier::Strong => ColorToken::Emerald,
            StrengthTier::VeryStrong => ColorToken::Green,
        }
    }

    /// Fill value of the strength bar: 0, 25, 50, 75 or 100.
    pub fn percentage(self) -> u8 {
        match self {
            StrengthTier::TooShort => 0,
            StrengthTier::Weak => 25,
            StrengthTier::Moderate => 50,
            StrengthTier::Strong => 75,
            StrengthTier::VeryStrong => 100,
        }
    }

    /// Decorative emoji shown next to the label.
    pub fn badge(self) -> &'static str {
        match self {
            StrengthTier::TooShort => "❌",
            StrengthTier::Weak => "⚠️",
            StrengthTier::Moderate => "🟡",
            StrengthTier::Strong => "✅",
            StrengthTier::VeryStrong => "🔥",
        }
    }

    /// Label followed by its badge, e.g. `Very Strong 🔥`.
    pub fn decorated_label(self) -> String {
        format!("{} {}", self.label(), self.badge())
    }

    pub fn is_maximal(self) -> bool {
        self == StrengthTier::VeryStrong
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentages_ascend_in_steps_of_25() {
        let percentages: Vec<u8> = StrengthTier::ALL.iter().map(|t| t.percentage()).collect();
        assert_eq!(percentages, vec![0, 25, 50, 75, 100]);
    }

    #[test]
    fn test_tiers_are_ordered() {
        assert!(StrengthTier::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_colors_are_distinct() {
        let colors: std::collections::HashSet<ColorToken> =
            StrengthTier::ALL.iter().map(|t| t.color()).collect();
        assert_eq!(colors.len(), 5);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(StrengthTier::VeryStrong.to_string(), "Very Strong");
        assert_eq!(StrengthTier::TooShort.to_string(), "Too Short");
        assert_eq!(ColorToken::Gold.to_string(), "#FFD700");
    }

    #[test]
    fn test_decorated_label() {
        assert_eq!(StrengthTier::VeryStrong.decorated_label(), "Very Strong 🔥");
        assert_eq!(StrengthTier::TooShort.decorated_label(), "Too Short ❌");
    }

    #[test]
    fn test_only_very_strong_is_maximal() {
        let maximal: Vec<_> = StrengthTier::ALL.iter().filter(|t| t.is_maximal()).collect();
        assert_eq!(maximal, vec![&StrengthTier::VeryStrong]);
    }
}
