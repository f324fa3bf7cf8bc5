//! Login form validation
//!
//! Submission-time checks built on the same scoring as the live widget.

use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::config::{PasswordRuleConfig, RuleId, DEFAULT_MIN_LENGTH};
use crate::controller::FeedbackController;
use crate::evaluator::{evaluate, EvaluationResult};
use crate::presentation::PresentationSurface;

/// Submissions scoring below this are rejected.
pub const MIN_ACCEPTED_SCORE: f64 = 50.0;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Anything that can score a password on demand.
pub trait StrengthAnalyzer {
    fn analyze_on_demand(&self, password: &SecretString) -> EvaluationResult;
}

impl StrengthAnalyzer for PasswordRuleConfig {
    fn analyze_on_demand(&self, password: &SecretString) -> EvaluationResult {
        evaluate(password, self)
    }
}

impl<S: PresentationSurface> StrengthAnalyzer for FeedbackController<S> {
    fn analyze_on_demand(&self, password: &SecretString) -> EvaluationResult {
        FeedbackController::analyze_on_demand(self, password)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email is required")]
    Required,
    #[error("Please enter a valid email")]
    Invalid,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password is required")]
    Required,
    #[error("Password must be at least {0} characters")]
    TooShort(usize),
    #[error("Make your password stronger. Missing: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("Password is still weak; try adding more unique characters or length.")]
    StillWeak,
}

/// Field errors of a login submission.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoginFormErrors {
    pub email: Option<EmailError>,
    pub password: Option<PasswordError>,
}

impl LoginFormErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

pub fn validate_email(email: &str) -> Result<(), EmailError> {
    if email.trim().is_empty() {
        return Err(EmailError::Required);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(EmailError::Invalid);
    }
    Ok(())
}

/// Checks a password for submission.
///
/// Without an analyzer only the length check applies.
pub fn validate_password<A: StrengthAnalyzer + ?Sized>(
    password: &SecretString,
    analyzer: Option<&A>,
) -> Result<(), PasswordError> {
    let pwd = password.expose_secret();
    if pwd.trim().is_empty() {
        return Err(PasswordError::Required);
    }
    if pwd.chars().count() < DEFAULT_MIN_LENGTH {
        return Err(PasswordError::TooShort(DEFAULT_MIN_LENGTH));
    }

    let Some(analyzer) = analyzer else {
        #[cfg(feature = "tracing")]
        tracing::warn!("no strength analyzer available, falling back to length check");
        return Ok(());
    };

    let result = analyzer.analyze_on_demand(password);
    if result.score() >= MIN_ACCEPTED_SCORE {
        return Ok(());
    }

    let missing: Vec<&'static str> = [
        (RuleId::Lowercase, "lowercase"),
        (RuleId::Uppercase, "uppercase"),
        (RuleId::Number, "number"),
        (RuleId::Special, "special character"),
        (RuleId::Length, "length (8+)"),
    ]
    .into_iter()
    .filter(|(rule, _)| !result.is_satisfied(*rule))
    .map(|(_, name)| name)
    .collect();

    if missing.is_empty() {
        Err(PasswordError::StillWeak)
    } else {
        Err(PasswordError::Missing(missing))
    }
}

/// Validates both login fields.
pub fn validate_login_form<A: StrengthAnalyzer + ?Sized>(
    email: &str,
    password: &SecretString,
    analyzer: Option<&A>,
) -> LoginFormErrors {
    LoginFormErrors {
        email: validate_email(email).err(),
        password: validate_password(password, analyzer).err(),
    }
}
