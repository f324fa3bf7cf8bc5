//! Password strength scoring with live feedback
//!
//! This library scores passwords against a weighted rule set and keeps a
//! strength widget in sync with a password field through a debounced
//! controller.
//!
//! # Features
//!
//! - `async` (default): Enables the tokio-driven controller loop with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_STRENGTH_DEBOUNCE_MS`: Debounce window of the controller in
//!   milliseconds (default: `200`)
//!
//! # Example
//!
//! ```rust
//! use pwd_feedback::{evaluate, PasswordRuleConfig, RuleId, StrengthBand};
//! use secrecy::SecretString;
//!
//! let config = PasswordRuleConfig::default();
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! let result = evaluate(&password, &config);
//!
//! println!("Score: {:.0}", result.score());
//! println!("Strength: {}", result.band());
//! assert!(result.is_satisfied(RuleId::Special));
//! assert!(result.band() >= StrengthBand::Good);
//! ```

// Internal modules
mod config;
mod controller;
mod evaluator;
mod presentation;
mod sections;
mod validation;

// Public API
pub use config::{ConfigError, PasswordRuleConfig, Rule, RuleId, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
pub use controller::{
    ControllerSettings, ControllerState, FeedbackController, InputEvent, Instant, SettingsError,
    DEBOUNCE_ENV_VAR, DEFAULT_DEBOUNCE,
};
pub use evaluator::{evaluate, EvaluationResult, StrengthBand, Suggestion, SUGGESTION_THRESHOLD};
pub use presentation::{format_label, render, BandColor, PresentationSurface};
pub use sections::complexity_heuristic;
pub use validation::{
    validate_email, validate_login_form, validate_password, EmailError, LoginFormErrors,
    PasswordError, StrengthAnalyzer, MIN_ACCEPTED_SCORE,
};
