//! Password strength evaluator - main evaluation logic.

use std::collections::BTreeMap;
use std::fmt;

use secrecy::SecretString;

use crate::config::{PasswordRuleConfig, RuleId};
use crate::sections::{character_variety_section, complexity_section, length_section, SectionResult};

/// Below this score the result carries suggestions.
pub const SUGGESTION_THRESHOLD: f64 = 70.0;

/// Qualitative strength derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StrengthBand {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Excellent,
}

impl StrengthBand {
    pub fn from_score(score: f64) -> Self {
        if score < 30.0 {
            StrengthBand::VeryWeak
        } else if score < 50.0 {
            StrengthBand::Weak
        } else if score < 70.0 {
            StrengthBand::Fair
        } else if score < 85.0 {
            StrengthBand::Good
        } else {
            StrengthBand::Excellent
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthBand::VeryWeak => "Very Weak",
            StrengthBand::Weak => "Weak",
            StrengthBand::Fair => "Fair",
            StrengthBand::Good => "Good",
            StrengthBand::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for StrengthBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An improvement hint for a weak password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    MakeLonger { min_length: usize },
    AddUppercase,
    AddLowercase,
    AddNumbers,
    AddSpecial,
    AvoidCommonPatterns,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suggestion::MakeLonger { min_length } => write!(f, "Make it longer ({}+ chars)", min_length),
            Suggestion::AddUppercase => f.write_str("Add uppercase (A-Z)"),
            Suggestion::AddLowercase => f.write_str("Add lowercase (a-z)"),
            Suggestion::AddNumbers => f.write_str("Add numbers (0-9)"),
            Suggestion::AddSpecial => f.write_str("Add special characters (!@#$%)"),
            Suggestion::AvoidCommonPatterns => {
                f.write_str("Avoid common patterns like '123', 'qwerty', 'password'")
            }
        }
    }
}

/// Outcome of a single evaluation.
///
/// Holds no trace of the password itself.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    score: f64,
    satisfied: BTreeMap<RuleId, bool>,
}

impl EvaluationResult {
    #[cfg(test)]
    pub(crate) fn from_parts(score: f64, satisfied: BTreeMap<RuleId, bool>) -> Self {
        Self { score, satisfied }
    }

    /// Score in `[0, 100]`.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Satisfaction flag of every configured rule.
    pub fn satisfied(&self) -> &BTreeMap<RuleId, bool> {
        &self.satisfied
    }

    pub fn is_satisfied(&self, rule: RuleId) -> bool {
        self.satisfied.get(&rule).copied().unwrap_or(false)
    }

    pub fn band(&self) -> StrengthBand {
        StrengthBand::from_score(self.score)
    }

    /// Suggestions in fixed order, empty once the score reaches
    /// [`SUGGESTION_THRESHOLD`].
    pub fn suggestions(&self, config: &PasswordRuleConfig) -> Vec<Suggestion> {
        if self.score >= SUGGESTION_THRESHOLD {
            return Vec::new();
        }

        [
            (RuleId::Length, Suggestion::MakeLonger { min_length: config.min_length() }),
            (RuleId::Uppercase, Suggestion::AddUppercase),
            (RuleId::Lowercase, Suggestion::AddLowercase),
            (RuleId::Number, Suggestion::AddNumbers),
            (RuleId::Special, Suggestion::AddSpecial),
            (RuleId::Complexity, Suggestion::AvoidCommonPatterns),
        ]
        .into_iter()
        .filter(|(rule, _)| !self.is_satisfied(*rule))
        .map(|(_, suggestion)| suggestion)
        .collect()
    }
}

/// Evaluates password strength against the rule set.
///
/// Pure and infallible: any input, including the empty string, yields a
/// result with one entry per configured rule.
pub fn evaluate(password: &SecretString, config: &PasswordRuleConfig) -> EvaluationResult {
    let mut satisfied = BTreeMap::new();
    let mut total = 0.0;

    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&SecretString, &PasswordRuleConfig) -> SectionResult); 3] = [
        ("length", length_section),
        ("variety", character_variety_section),
        ("complexity", complexity_section),
    ];

    for (section_name, section_fn) in sections {
        for outcome in section_fn(password, config) {
            let Some(rule) = config.rule(outcome.rule) else {
                continue;
            };
            #[cfg(feature = "tracing")]
            tracing::trace!(
                section = section_name,
                rule = %outcome.rule,
                satisfied = outcome.satisfied,
                "rule scored"
            );
            satisfied.insert(outcome.rule, outcome.satisfied);
            total += outcome.fraction * f64::from(rule.weight);
        }
        let _ = section_name;
    }

    let result = EvaluationResult {
        score: total.clamp(0.0, 100.0),
        satisfied,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(score = result.score, band = %result.band(), "password evaluated");

    result
}
