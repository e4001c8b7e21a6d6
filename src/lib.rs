//! Password strength meter library
//!
//! Scores a password against four character classes (lowercase, uppercase,
//! digits, special characters) and maps it to one of five fixed tiers, each
//! with a label, a color and a fill percentage for a strength bar. A companion
//! function lists improvement tips.
//!
//! Nothing is stored: the password is borrowed for a single call.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `animation` (default): Enables loading the decorative meter animation
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate_password_strength, password_suggestions, StrengthTier};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("password123".to_string().into());
//!
//! let tier = evaluate_password_strength(&password);
//! assert_eq!(tier, StrengthTier::Moderate);
//! assert_eq!(tier.percentage(), 50);
//! assert_eq!(tier.color().hex(), "#FFD700");
//!
//! for tip in password_suggestions(&password) {
//!     println!("- {}", tip);
//! }
//! ```

// Internal modules
mod classes;
mod evaluator;
mod meter;
mod sections;
mod tier;

#[cfg(feature = "animation")]
mod animation;

// Public API
pub use classes::{is_special, CharacterClasses, PasswordProfile, SPECIAL_CHARACTERS};
pub use evaluator::{
    evaluate_password_strength, password_report, password_suggestions, StrengthReport,
    MIN_LENGTH, WEAK_LENGTH,
};
pub use meter::{gradient_css, text_bar, BEST_PRACTICES, MAXIMAL_STRENGTH_MESSAGE, TRACK_COLOR};
pub use sections::{Suggestion, RECOMMENDED_LENGTH};
pub use tier::{ColorToken, StrengthTier};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_password_strength_tx, DEBOUNCE};

#[cfg(feature = "animation")]
pub use animation::{
    load_animation, Animation, AnimationConfig, AnimationError, AnimationLoader,
    DEFAULT_ANIMATION_URL, DEFAULT_TIMEOUT,
};
