//! Length section - scores password length.

use secrecy::{ExposeSecret, SecretString};
use super::{RuleOutcome, SectionResult};
use crate::config::{PasswordRuleConfig, RuleId};

/// Length at which the length rule earns its full weight.
const FULL_CREDIT_LENGTH: usize = 12;

/// Scores the password length.
///
/// The rule is satisfied at `min_length`, but the earned weight keeps
/// growing linearly until [`FULL_CREDIT_LENGTH`] characters.
pub fn length_section(password: &SecretString, config: &PasswordRuleConfig) -> SectionResult {
    let len = password.expose_secret().chars().count();
    let fraction = (len as f64 / FULL_CREDIT_LENGTH as f64).min(1.0);

    vec![RuleOutcome {
        rule: RuleId::Length,
        satisfied: len >= config.min_length(),
        fraction,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(pwd: &str) -> RuleOutcome {
        let pwd = SecretString::new(pwd.to_string().into());
        length_section(&pwd, &PasswordRuleConfig::default())[0]
    }

    #[test]
    fn test_length_section_too_short() {
        let result = outcome("Short1!");
        assert!(!result.satisfied);
        assert!((result.fraction - 7.0 / 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let result = outcome("12345678");
        assert!(result.satisfied);
        assert!(result.fraction < 1.0);
    }

    #[test]
    fn test_length_section_full_credit() {
        assert_eq!(outcome("twelve_chars").fraction, 1.0);
        assert_eq!(outcome("much_longer_than_twelve").fraction, 1.0);
    }

    #[test]
    fn test_length_section_empty() {
        let result = outcome("");
        assert!(!result.satisfied);
        assert_eq!(result.fraction, 0.0);
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        // 8 chars, 16 bytes
        let result = outcome("éééééééé");
        assert!(result.satisfied);
        assert!((result.fraction - 8.0 / 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_length_section_custom_minimum() {
        let mut rules = PasswordRuleConfig::default().rules().to_vec();
        rules[0].description = "At least 10 characters".to_string();
        let config = PasswordRuleConfig::new(10, 64, rules).unwrap();
        let pwd = SecretString::new("nine_char".to_string().into());
        assert!(!length_section(&pwd, &config)[0].satisfied);
    }
}
