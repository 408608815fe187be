//! Logger construction with injected collaborators.

use std::sync::Arc;

use crate::config::{EnvSource, FieldLabel, LoggerSettings, Precedence, ProcessEnv};
use crate::gate::SeverityGate;
use crate::level::Level;
use crate::logger::Logger;
use crate::sink::ConsoleTarget;

/// Builder for a [`Logger`].
///
/// Defaults match `Logger::new`: process-wide gate, process environment,
/// stdout.
#[derive(Debug)]
pub struct LoggerBuilder {
    settings: LoggerSettings,
    gate: Option<SeverityGate>,
    env: Option<Arc<dyn EnvSource>>,
    console: ConsoleTarget,
}

impl LoggerBuilder {
    pub(crate) fn new(prefix: impl Into<String>) -> Self {
        Self {
            settings: LoggerSettings::with_prefix(prefix),
            gate: None,
            env: None,
            console: ConsoleTarget::Stdout,
        }
    }

    /// Replace all settings, prefix included.
    pub fn settings(mut self, settings: LoggerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Explicit initial threshold.
    pub fn level(mut self, level: Level) -> Self {
        self.settings.level = Some(level);
        self
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.settings.color = enabled;
        self
    }

    pub fn label(mut self, label: FieldLabel) -> Self {
        self.settings.label = label;
        self
    }

    pub fn time_format(mut self, format: impl Into<String>) -> Self {
        self.settings.time_format = format.into();
        self
    }

    pub fn precedence(mut self, precedence: Precedence) -> Self {
        self.settings.precedence = precedence;
        self
    }

    /// Environment variable names for the threshold override and file path.
    pub fn env_vars(mut self, level_var: impl Into<String>, file_var: impl Into<String>) -> Self {
        self.settings.level_var = level_var.into();
        self.settings.file_var = file_var.into();
        self
    }

    /// Share a severity gate instead of the process-wide one.
    pub fn gate(mut self, gate: SeverityGate) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Read configuration from `env` instead of the process environment.
    pub fn env(mut self, env: Arc<dyn EnvSource>) -> Self {
        self.env = Some(env);
        self
    }

    pub fn console(mut self, console: ConsoleTarget) -> Self {
        self.console = console;
        self
    }

    /// Build the logger and its first sink.
    pub fn build(self) -> Logger {
        let gate = self.gate.unwrap_or_else(SeverityGate::global);
        let env = self.env.unwrap_or_else(|| Arc::new(ProcessEnv));
        Logger::from_parts(self.settings, gate, env, self.console)
    }
}
