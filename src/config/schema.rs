//! Logger settings schema.
//!
//! All types derive Serde traits so a host application can embed
//! `LoggerSettings` in its own configuration.

use serde::{Deserialize, Serialize};

use crate::level::Level;

/// Timestamp format used when none is configured or the configured one is
/// invalid.
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

/// Settings a logger's sink is built from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggerSettings {
    /// Explicitly set threshold. `None` reads as Info.
    pub level: Option<Level>,

    /// Context tag attached to every record.
    pub prefix: String,

    /// ANSI color in the console renderer.
    pub color: bool,

    /// Field name the prefix is recorded under.
    pub label: FieldLabel,

    /// `strftime`-style timestamp format.
    pub time_format: String,

    /// Which source wins when resolving the gate threshold.
    pub precedence: Precedence,

    /// Environment variable holding the threshold override.
    pub level_var: String,

    /// Environment variable holding the file destination path.
    pub file_var: String,
}

impl LoggerSettings {
    /// Settings with defaults and the given prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    /// The logger's own threshold.
    pub fn effective_level(&self) -> Level {
        self.level.unwrap_or_default()
    }
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: None,
            prefix: String::new(),
            color: true,
            label: FieldLabel::Prefix,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            precedence: Precedence::EnvironmentFirst,
            level_var: "LOG_LEVEL".to_string(),
            file_var: "LOG_FILE".to_string(),
        }
    }
}

/// Name of the field carrying the prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldLabel {
    #[default]
    Prefix,
    Service,
}

impl FieldLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldLabel::Prefix => "prefix",
            FieldLabel::Service => "service",
        }
    }
}

/// Threshold resolution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Precedence {
    /// Environment override, then the logger's level, then Info.
    #[default]
    EnvironmentFirst,
    /// An explicitly set logger level, then the environment override, then Info.
    LoggerFirst,
}
