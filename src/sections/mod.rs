//! Password evaluation sections
//!
//! Each section scores one aspect of the password against its rules.

mod complexity;
mod length;
mod variety;

use crate::config::RuleId;

pub use complexity::{complexity_heuristic, complexity_section};
pub use length::length_section;
pub use variety::character_variety_section;

pub(crate) use variety::{has_digit, has_lowercase, has_uppercase};

/// How a password fared against a single rule.
///
/// `fraction` is the share of the rule weight earned, in `[0, 1]`. It is
/// independent of `satisfied` for the continuous rules (length, complexity).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleOutcome {
    pub rule: RuleId,
    pub satisfied: bool,
    pub fraction: f64,
}

impl RuleOutcome {
    /// Outcome of an all-or-nothing rule.
    pub fn binary(rule: RuleId, satisfied: bool) -> Self {
        Self {
            rule,
            satisfied,
            fraction: if satisfied { 1.0 } else { 0.0 },
        }
    }
}

/// Result type for section evaluation functions: one outcome per rule the
/// section owns.
pub type SectionResult = Vec<RuleOutcome>;
