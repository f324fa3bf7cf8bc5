//! Rule configuration
//!
//! Holds the weighted rule set the evaluator scores against.

use std::fmt;
use thiserror::Error;

/// Default minimum length for the `length` rule.
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Default advisory maximum length. Never enforced by scoring.
pub const DEFAULT_MAX_LENGTH: usize = 128;

/// Identifier of a scoring rule.
///
/// The declaration order is the display order of the rule markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleId {
    Length,
    Lowercase,
    Uppercase,
    Number,
    Special,
    Complexity,
}

impl RuleId {
    /// All rule ids, in display order.
    pub const ALL: [RuleId; 6] = [
        RuleId::Length,
        RuleId::Lowercase,
        RuleId::Uppercase,
        RuleId::Number,
        RuleId::Special,
        RuleId::Complexity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::Length => "length",
            RuleId::Lowercase => "lowercase",
            RuleId::Uppercase => "uppercase",
            RuleId::Number => "number",
            RuleId::Special => "special",
            RuleId::Complexity => "complexity",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single weighted rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub id: RuleId,
    pub weight: u32,
    pub description: String,
}

impl Rule {
    pub fn new(id: RuleId, weight: u32, description: impl Into<String>) -> Self {
        Self {
            id,
            weight,
            description: description.into(),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Rule '{0}' is defined more than once")]
    DuplicateRule(RuleId),
    #[error("Rule '{0}' is missing")]
    MissingRule(RuleId),
    #[error("Rule weights must sum to 100, got {0}")]
    WeightSum(u32),
    #[error("Invalid length bounds: min {min}, max {max}")]
    InvalidLengthBounds { min: usize, max: usize },
}

/// Immutable rule set shared by the evaluator and the controller.
///
/// Build it once (usually through [`Default`]) and hand it to whoever needs
/// it; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordRuleConfig {
    min_length: usize,
    max_length: usize,
    rules: Vec<Rule>,
}

impl PasswordRuleConfig {
    /// Builds a custom rule set.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - a rule id appears twice or not at all
    /// - weights do not sum to 100
    /// - `min_length` is zero or greater than `max_length`
    pub fn new(min_length: usize, max_length: usize, rules: Vec<Rule>) -> Result<Self, ConfigError> {
        if min_length == 0 || min_length > max_length {
            return Err(ConfigError::InvalidLengthBounds {
                min: min_length,
                max: max_length,
            });
        }

        for (i, rule) in rules.iter().enumerate() {
            if rules[..i].iter().any(|r| r.id == rule.id) {
                return Err(ConfigError::DuplicateRule(rule.id));
            }
        }
        if let Some(missing) = RuleId::ALL
            .iter()
            .find(|id| !rules.iter().any(|r| r.id == **id))
        {
            return Err(ConfigError::MissingRule(*missing));
        }

        let total: u32 = rules.iter().map(|r| r.weight).sum();
        if total != 100 {
            return Err(ConfigError::WeightSum(total));
        }

        Ok(Self {
            min_length,
            max_length,
            rules,
        })
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Rules in configured order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rule(&self, id: RuleId) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Weight of a rule, 0 for an unknown id.
    pub fn weight(&self, id: RuleId) -> u32 {
        self.rule(id).map(|r| r.weight).unwrap_or(0)
    }
}

impl Default for PasswordRuleConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            rules: vec![
                Rule::new(RuleId::Length, 20, format!("At least {} characters", DEFAULT_MIN_LENGTH)),
                Rule::new(RuleId::Lowercase, 15, "One lowercase letter (a-z)"),
                Rule::new(RuleId::Uppercase, 15, "One uppercase letter (A-Z)"),
                Rule::new(RuleId::Number, 15, "One number (0-9)"),
                Rule::new(RuleId::Special, 15, "One special character (!@#$%^&*)"),
                Rule::new(RuleId::Complexity, 20, "Avoid common patterns"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_rules() -> Vec<Rule> {
        PasswordRuleConfig::default().rules().to_vec()
    }

    #[test]
    fn test_default_weights_sum_to_100() {
        let config = PasswordRuleConfig::default();
        let total: u32 = config.rules().iter().map(|r| r.weight).sum();
        assert_eq!(total, 100);
        assert_eq!(config.min_length(), 8);
        assert_eq!(config.max_length(), 128);
    }

    #[test]
    fn test_default_rule_order() {
        let config = PasswordRuleConfig::default();
        let ids: Vec<RuleId> = config.rules().iter().map(|r| r.id).collect();
        assert_eq!(ids, RuleId::ALL.to_vec());
        assert_eq!(config.weight(RuleId::Length), 20);
        assert_eq!(config.weight(RuleId::Complexity), 20);
        assert_eq!(config.weight(RuleId::Special), 15);
    }

    #[test]
    fn test_new_accepts_standard_rules() {
        let config = PasswordRuleConfig::new(8, 128, standard_rules()).unwrap();
        assert_eq!(config, PasswordRuleConfig::default());
    }

    #[test]
    fn test_new_rejects_duplicate_rule() {
        let mut rules = standard_rules();
        rules[1] = Rule::new(RuleId::Length, 15, "again");
        let result = PasswordRuleConfig::new(8, 128, rules);
        assert_eq!(result, Err(ConfigError::DuplicateRule(RuleId::Length)));
    }

    #[test]
    fn test_new_rejects_missing_rule() {
        let mut rules = standard_rules();
        rules.pop();
        let result = PasswordRuleConfig::new(8, 128, rules);
        assert_eq!(result, Err(ConfigError::MissingRule(RuleId::Complexity)));
    }

    #[test]
    fn test_new_rejects_bad_weight_sum() {
        let mut rules = standard_rules();
        rules[0].weight = 30;
        let result = PasswordRuleConfig::new(8, 128, rules);
        assert_eq!(result, Err(ConfigError::WeightSum(110)));
    }

    #[test]
    fn test_new_rejects_inverted_bounds() {
        let result = PasswordRuleConfig::new(20, 10, standard_rules());
        assert!(matches!(result, Err(ConfigError::InvalidLengthBounds { min: 20, max: 10 })));

        let result = PasswordRuleConfig::new(0, 10, standard_rules());
        assert!(result.is_err());
    }

    #[test]
    fn test_rule_id_display() {
        let names: Vec<String> = RuleId::ALL.iter().map(|id| id.to_string()).collect();
        assert_eq!(
            names,
            vec!["length", "lowercase", "uppercase", "number", "special", "complexity"]
        );
    }
}
