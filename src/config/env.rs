//! Environment inputs read at every sink rebuild.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::config::schema::{LoggerSettings, Precedence};
use crate::level::Level;

/// Source of environment-style variables.
pub trait EnvSource: Send + Sync + fmt::Debug {
    /// Value of `key`, if set.
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// An in-memory variable map.
///
/// Values can be changed after the logger is built; the change is seen on
/// the next rebuild, like an edit to the process environment.
#[derive(Debug, Default)]
pub struct MapEnv {
    vars: RwLock<HashMap<String, String>>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        let mut vars = self.vars.write().unwrap_or_else(|e| e.into_inner());
        vars.insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        let mut vars = self.vars.write().unwrap_or_else(|e| e.into_inner());
        vars.remove(key);
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        let vars = self.vars.read().unwrap_or_else(|e| e.into_inner());
        vars.get(key).cloned()
    }
}

/// The environment as seen by one rebuild.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    /// Parseable threshold override. Malformed values are dropped here.
    pub level_override: Option<Level>,

    /// File destination path.
    pub file_path: Option<PathBuf>,
}

impl EnvSnapshot {
    /// Read the variables named in `settings`. Empty values count as unset.
    pub fn read(env: &dyn EnvSource, settings: &LoggerSettings) -> Self {
        let level_override = non_empty(env.var(&settings.level_var))
            .and_then(|raw| raw.parse::<Level>().ok());
        let file_path = non_empty(env.var(&settings.file_var)).map(PathBuf::from);

        Self {
            level_override,
            file_path,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Resolve the threshold stored into the severity gate.
pub fn resolve_threshold(settings: &LoggerSettings, env: &EnvSnapshot) -> Level {
    match settings.precedence {
        Precedence::EnvironmentFirst => env
            .level_override
            .or(settings.level)
            .unwrap_or_default(),
        Precedence::LoggerFirst => settings
            .level
            .or(env.level_override)
            .unwrap_or_default(),
    }
}
