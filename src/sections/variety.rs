//! Character variety section - checks for lowercase, uppercase, numbers, special chars.

use secrecy::{ExposeSecret, SecretString};
use super::{RuleOutcome, SectionResult};
use crate::config::{PasswordRuleConfig, RuleId};

/// Characters accepted by the `special` rule.
const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

pub fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(c)
}

pub(crate) fn has_lowercase(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_lowercase())
}

pub(crate) fn has_uppercase(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_uppercase())
}

pub(crate) fn has_digit(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_digit())
}

/// Checks each character class rule.
///
/// Only ASCII letters and digits count; accented letters or other scripts
/// satisfy none of the class rules.
pub fn character_variety_section(password: &SecretString, _config: &PasswordRuleConfig) -> SectionResult {
    let pwd = password.expose_secret();

    vec![
        RuleOutcome::binary(RuleId::Lowercase, has_lowercase(pwd)),
        RuleOutcome::binary(RuleId::Uppercase, has_uppercase(pwd)),
        RuleOutcome::binary(RuleId::Number, has_digit(pwd)),
        RuleOutcome::binary(RuleId::Special, pwd.chars().any(is_special)),
    ]
}
