//! Complexity section - penalizes common patterns and repeated characters.

use secrecy::{ExposeSecret, SecretString};
use super::{has_digit, has_lowercase, has_uppercase, RuleOutcome, SectionResult};
use crate::config::{PasswordRuleConfig, RuleId};

/// Substrings that mark a password as following a common pattern.
const COMMON_PATTERNS: [&str; 5] = ["123", "abc", "qwerty", "password", "admin"];

// Heuristic adjustments, in tenths.
const BASELINE: i32 = 7;
const COMMON_PATTERN_PENALTY: i32 = 3;
const REPEAT_PENALTY: i32 = 2;
const MIXED_CASE_BONUS: i32 = 2;
const LETTER_DIGIT_BONUS: i32 = 2;
const LONG_BONUS: i32 = 3;
const LONG_LENGTH: usize = 12;

fn has_repeated_run(pwd: &str, run: usize) -> bool {
    let mut prev = None;
    let mut count = 0;
    for c in pwd.chars() {
        if Some(c) == prev {
            count += 1;
            if count >= run {
                return true;
            }
        } else {
            prev = Some(c);
            count = 1;
        }
    }
    false
}

/// Heuristic in tenths, clamped to `0..=10`.
fn complexity_tenths(pwd: &str) -> i32 {
    let mut tenths = BASELINE;

    // One penalty per category, however many patterns match.
    let lowered = pwd.to_lowercase();
    if COMMON_PATTERNS.iter().any(|p| lowered.contains(p)) {
        tenths -= COMMON_PATTERN_PENALTY;
    }
    if has_repeated_run(pwd, 3) {
        tenths -= REPEAT_PENALTY;
    }

    let lower = has_lowercase(pwd);
    let upper = has_uppercase(pwd);
    if lower && upper {
        tenths += MIXED_CASE_BONUS;
    }
    if has_digit(pwd) && (lower || upper) {
        tenths += LETTER_DIGIT_BONUS;
    }
    if pwd.chars().count() >= LONG_LENGTH {
        tenths += LONG_BONUS;
    }

    tenths.clamp(0, 10)
}

/// Complexity heuristic in `[0, 1]`.
pub fn complexity_heuristic(pwd: &str) -> f64 {
    f64::from(complexity_tenths(pwd)) / 10.0
}

/// Scores the complexity heuristic.
///
/// The rule is satisfied above the 0.7 baseline; the earned weight is the
/// heuristic itself. An empty password earns nothing.
pub fn complexity_section(password: &SecretString, _config: &PasswordRuleConfig) -> SectionResult {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return vec![RuleOutcome::binary(RuleId::Complexity, false)];
    }
    let tenths = complexity_tenths(pwd);

    vec![RuleOutcome {
        rule: RuleId::Complexity,
        satisfied: tenths > BASELINE,
        fraction: f64::from(tenths) / 10.0,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(pwd: &str) -> RuleOutcome {
        let pwd = SecretString::new(pwd.to_string().into());
        complexity_section(&pwd, &PasswordRuleConfig::default())[0]
    }

    #[test]
    fn test_baseline_for_plain_lowercase() {
        assert_eq!(complexity_heuristic("qbxtmzkr"), 0.7);
        assert!(!outcome("qbxtmzkr").satisfied);
    }

    #[test]
    fn test_common_pattern_penalty_applied_once() {
        // "password" and "123" both match, still a single -0.3
        assert_eq!(complexity_heuristic("password123"), 0.6);
        assert_eq!(complexity_heuristic("xpassword"), 0.4);
    }

    #[test]
    fn test_common_pattern_is_case_insensitive() {
        // -0.3 pattern, +0.2 mixed case
        assert_eq!(complexity_heuristic("QWERTYuiop"), 0.6);
    }

    #[test]
    fn test_repeat_penalty() {
        assert_eq!(complexity_heuristic("aaaaaaaa"), 0.5);
        assert_eq!(complexity_heuristic("aabbccdd"), 0.7);
        assert!(has_repeated_run("xx!!!yy", 3));
        assert!(!has_repeated_run("xx!!yy", 3));
    }

    #[test]
    fn test_repeats_lower_than_pattern_free() {
        assert!(outcome("aaaaaaaa").fraction < outcome("qbxtmzkr").fraction);
    }

    #[test]
    fn test_bonuses_accumulate_and_clamp() {
        // +0.2 mixed, +0.2 digit, +0.3 long
        assert_eq!(complexity_heuristic("Zq9vTr4mWx8k"), 1.0);
        let result = outcome("Zq9vTr4mWx8k");
        assert!(result.satisfied);
        assert_eq!(result.fraction, 1.0);
    }

    #[test]
    fn test_mixed_case_alone_satisfies() {
        let result = outcome("QbxTmzkr");
        assert!(result.satisfied);
        assert!((result.fraction - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_penalties_clamp_at_zero() {
        // -0.3 -0.2 from 0.7 leaves 0.2
        assert_eq!(complexity_heuristic("abcccc"), 0.2);
    }

    #[test]
    fn test_empty_password_earns_nothing() {
        assert_eq!(complexity_heuristic(""), 0.7);
        let result = outcome("");
        assert!(!result.satisfied);
        assert_eq!(result.fraction, 0.0);
    }

    #[test]
    fn test_exact_threshold_not_satisfied() {
        // -0.2 repeats, +0.2 mixed case: exactly 0.7
        let result = outcome("AAAbqxz");
        assert!(!result.satisfied);
        assert_eq!(result.fraction, 0.7);
    }
}
