//! Feedback controller
//!
//! Bridges live input to the evaluator and the presentation surface, with a
//! single-slot debounce in between.

use std::sync::Arc;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

#[cfg(feature = "async")]
pub use tokio::time::Instant;

#[cfg(not(feature = "async"))]
pub use std::time::Instant;

use crate::config::PasswordRuleConfig;
use crate::evaluator::{evaluate, EvaluationResult};
use crate::presentation::{render, PresentationSurface};

/// Default quiescence window before an input is evaluated.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Environment variable overriding the debounce window, in milliseconds.
pub const DEBOUNCE_ENV_VAR: &str = "PWD_STRENGTH_DEBOUNCE_MS";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Invalid {var} value '{value}': expected a number of milliseconds")]
    InvalidDebounce { var: &'static str, value: String },
}

/// Controller tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerSettings {
    pub debounce: Duration,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

impl ControllerSettings {
    /// Reads settings from the environment.
    ///
    /// Priority:
    /// 1. Environment variable `PWD_STRENGTH_DEBOUNCE_MS`
    /// 2. Default of 200 ms
    ///
    /// # Errors
    ///
    /// Returns error if the variable is set but is not a whole number.
    pub fn from_env() -> Result<Self, SettingsError> {
        match std::env::var(DEBOUNCE_ENV_VAR) {
            Ok(raw) => {
                let ms = raw.trim().parse::<u64>().map_err(|_| {
                    #[cfg(feature = "tracing")]
                    tracing::error!("Rejected debounce override: {:?}", raw);
                    SettingsError::InvalidDebounce {
                        var: DEBOUNCE_ENV_VAR,
                        value: raw.clone(),
                    }
                })?;
                Ok(Self {
                    debounce: Duration::from_millis(ms),
                })
            }
            Err(_) => Ok(Self::default()),
        }
    }
}

/// Events delivered by the input source.
#[derive(Debug)]
pub enum InputEvent {
    /// The field now holds this full value.
    Changed(SecretString),
    Focus,
    Blur,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    PendingDebounce,
    Rendered,
}

struct Pending {
    value: SecretString,
    deadline: Instant,
}

/// Debounced bridge between one password input and its strength widget.
///
/// Holds at most one pending value: every new input replaces it and restarts
/// the window. Rendering is skipped when there is no surface.
pub struct FeedbackController<S> {
    config: Arc<PasswordRuleConfig>,
    surface: Option<S>,
    settings: ControllerSettings,
    pending: Option<Pending>,
    state: ControllerState,
    value_is_empty: bool,
}

impl<S: PresentationSurface> FeedbackController<S> {
    pub fn new(config: Arc<PasswordRuleConfig>, surface: Option<S>, settings: ControllerSettings) -> Self {
        Self {
            config,
            surface,
            settings,
            pending: None,
            state: ControllerState::Idle,
            value_is_empty: true,
        }
    }

    pub fn config(&self) -> &PasswordRuleConfig {
        &self.config
    }

    pub fn settings(&self) -> ControllerSettings {
        self.settings
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn into_surface(self) -> Option<S> {
        self.surface
    }

    /// When the pending value settles, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Schedules `value` for evaluation, replacing any pending one.
    pub fn on_input(&mut self, value: SecretString, now: Instant) {
        self.value_is_empty = value.expose_secret().is_empty();

        #[cfg(feature = "tracing")]
        {
            if self.pending.is_some() {
                tracing::trace!("discarding stale pending evaluation");
            }
        }

        self.pending = Some(Pending {
            value,
            deadline: now + self.settings.debounce,
        });
        self.state = ControllerState::PendingDebounce;
    }

    pub fn handle(&mut self, event: InputEvent, now: Instant) {
        match event {
            InputEvent::Changed(value) => self.on_input(value, now),
            InputEvent::Focus => {
                if let Some(surface) = self.surface.as_mut() {
                    surface.set_visible(true);
                }
            }
            InputEvent::Blur => {
                if self.value_is_empty {
                    if let Some(surface) = self.surface.as_mut() {
                        surface.set_visible(false);
                    }
                }
            }
        }
    }

    /// Settles the pending value if its window has elapsed at `now`.
    ///
    /// Returns the result that was rendered, `None` if nothing settled.
    pub fn poll(&mut self, now: Instant) -> Option<EvaluationResult> {
        if self.pending.as_ref().is_none_or(|p| now < p.deadline) {
            return None;
        }
        let pending = self.pending.take()?;

        #[cfg(feature = "tracing")]
        tracing::debug!("debounce settled, evaluating");

        Some(self.render_now(&pending.value))
    }

    /// Evaluates and renders immediately, dropping any pending value.
    ///
    /// Used when the input already holds a value at startup.
    pub fn render_now(&mut self, value: &SecretString) -> EvaluationResult {
        self.pending = None;
        self.value_is_empty = value.expose_secret().is_empty();

        let result = evaluate(value, &self.config);
        match self.surface.as_mut() {
            Some(surface) => render(surface, &result, &self.config),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!("no presentation surface, skipping render");
            }
        }
        self.state = ControllerState::Rendered;
        result
    }

    /// Evaluates without touching presentation state.
    pub fn analyze_on_demand(&self, password: &SecretString) -> EvaluationResult {
        evaluate(password, &self.config)
    }

    /// Drops pending work and hides the widget, as when the form is reset.
    pub fn reset(&mut self) {
        self.pending = None;
        self.state = ControllerState::Idle;
        self.value_is_empty = true;
        if let Some(surface) = self.surface.as_mut() {
            surface.set_visible(false);
        }
    }

    /// Drives the controller from an input channel until `token` is
    /// cancelled or every sender is dropped.
    ///
    /// Returns the controller; a value still inside its window stays pending.
    #[cfg(feature = "async")]
    pub async fn run(mut self, mut events: mpsc::Receiver<InputEvent>, token: CancellationToken) -> Self {
        #[cfg(feature = "tracing")]
        tracing::info!("feedback controller started (debounce {:?})", self.settings.debounce);

        loop {
            let deadline = self.deadline();
            tokio::select! {
                biased;
                _ = token.cancelled() => break,
                event = events.recv() => match event {
                    Some(event) => self.handle(event, Instant::now()),
                    None => break,
                },
                _ = tokio::time::sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    self.poll(Instant::now());
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::info!("feedback controller stopped");

        self
    }
}
