//! Character classes used for scoring.

/// Punctuation accepted as a "special" character.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Returns `true` for characters in [`SPECIAL_CHARACTERS`].
pub fn is_special(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(c)
}

/// Which of the four character classes occur in a password.
///
/// Only ASCII letters count as upper or lower case; accented and other
/// non-ASCII letters belong to no class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterClasses {
    pub lower: bool,
    pub upper: bool,
    pub digit: bool,
    pub special: bool,
}

impl CharacterClasses {
    /// Scans `pwd` once and records every class it touches.
    pub fn scan(pwd: &str) -> Self {
        pwd.chars().fold(Self::default(), |mut classes, c| {
            classes.record(c);
            classes
        })
    }

    fn record(&mut self, c: char) {
        match c {
            'a'..='z' => self.lower = true,
            'A'..='Z' => self.upper = true,
            '0'..='9' => self.digit = true,
            c if is_special(c) => self.special = true,
            _ => {}
        }
    }

    /// Number of classes present, 0 to 4.
    pub fn count(&self) -> usize {
        [self.lower, self.upper, self.digit, self.special]
            .iter()
            .filter(|&&b| b)
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.count() == 4
    }
}

/// Everything scoring needs to know about a password, gathered in one pass.
///
/// Holds only counts and flags, never the password itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordProfile {
    /// Length in characters, not bytes.
    pub length: usize,
    pub classes: CharacterClasses,
}

impl PasswordProfile {
    pub fn scan(pwd: &str) -> Self {
        pwd.chars().fold(Self::default(), |mut profile, c| {
            profile.length += 1;
            profile.classes.record(c);
            profile
        })
    }
}
