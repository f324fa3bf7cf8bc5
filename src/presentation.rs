//! Presentation contract
//!
//! The controller renders through [`PresentationSurface`] and knows nothing
//! else about how results end up on screen.

use crate::config::{PasswordRuleConfig, RuleId};
use crate::evaluator::{EvaluationResult, StrengthBand};

/// Fixed palette, one color per band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BandColor {
    Red,
    Orange,
    Coral,
    Teal,
    Green,
}

impl BandColor {
    pub fn hex(&self) -> &'static str {
        match self {
            BandColor::Red => "#ff4757",
            BandColor::Orange => "#ffa502",
            BandColor::Coral => "#ff6348",
            BandColor::Teal => "#1dd1a1",
            BandColor::Green => "#2ed573",
        }
    }
}

impl StrengthBand {
    pub fn color(&self) -> BandColor {
        match self {
            StrengthBand::VeryWeak => BandColor::Red,
            StrengthBand::Weak => BandColor::Orange,
            StrengthBand::Fair => BandColor::Coral,
            StrengthBand::Good => BandColor::Teal,
            StrengthBand::Excellent => BandColor::Green,
        }
    }
}

/// The narrow update contract a strength widget must provide.
pub trait PresentationSurface {
    /// Sets the progress fill, `percent` in `[0, 100]`.
    fn set_progress(&mut self, percent: f64, color: BandColor);

    fn set_label(&mut self, text: &str, color: BandColor);

    /// Toggles the satisfied marker of a rule. `description` is the rule's
    /// requirement text.
    fn set_rule_marker(&mut self, rule: RuleId, description: &str, satisfied: bool);

    /// Shows the suggestion panel with `lines`, or hides it on `None`.
    fn set_suggestions(&mut self, lines: Option<&[String]>);

    /// Fades the whole widget in or out. Optional.
    fn set_visible(&mut self, _visible: bool) {}
}

/// Label text, e.g. `Strength: Good (79%)`.
pub fn format_label(result: &EvaluationResult) -> String {
    format!(
        "Strength: {} ({}%)",
        result.band(),
        result.score().min(100.0).round()
    )
}

/// Pushes a full result to the surface.
pub fn render<S: PresentationSurface + ?Sized>(
    surface: &mut S,
    result: &EvaluationResult,
    config: &PasswordRuleConfig,
) {
    let color = result.band().color();
    surface.set_progress(result.score().min(100.0), color);
    surface.set_label(&format_label(result), color);

    for rule in config.rules() {
        surface.set_rule_marker(rule.id, &rule.description, result.is_satisfied(rule.id));
    }

    let suggestions = result.suggestions(config);
    if suggestions.is_empty() {
        surface.set_suggestions(None);
    } else {
        let lines: Vec<String> = suggestions.iter().map(|s| s.to_string()).collect();
        surface.set_suggestions(Some(&lines));
    }
}

/// In-memory surface that keeps the last state of every widget part.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub progress: Option<(f64, BandColor)>,
    pub label: Option<(String, BandColor)>,
    pub markers: std::collections::BTreeMap<RuleId, bool>,
    pub suggestions: Option<Vec<String>>,
    pub visible: bool,
    pub renders: usize,
    pub labels: Vec<String>,
}

#[cfg(test)]
impl PresentationSurface for RecordingSurface {
    fn set_progress(&mut self, percent: f64, color: BandColor) {
        self.renders += 1;
        self.progress = Some((percent, color));
    }

    fn set_label(&mut self, text: &str, color: BandColor) {
        self.labels.push(text.to_string());
        self.label = Some((text.to_string(), color));
    }

    fn set_rule_marker(&mut self, rule: RuleId, _description: &str, satisfied: bool) {
        self.markers.insert(rule, satisfied);
    }

    fn set_suggestions(&mut self, lines: Option<&[String]>) {
        self.suggestions = lines.map(|l| l.to_vec());
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
