//! The prefix-tagged logger.
//!
//! # Responsibilities
//! - Hold level, prefix and color settings
//! - Rebuild the sink on every settings change
//! - Filter leveled calls against the logger's own level
//! - Emit panic records with a stack trace, then unwind
//!
//! # Design Decisions
//! - Settings and sink live in one immutable snapshot swapped atomically, so
//!   readers never see a sink built from other settings
//! - Emit methods are lock-free and safe to share across threads
//! - Mutators are read-modify-store; concurrent mutators on one logger are
//!   last-writer-wins and must be serialized by the caller
//! - Logging calls never return errors

pub mod builder;
pub mod format;
mod macros;

use std::fmt::{self, Display};
use std::panic::Location;
use std::path::PathBuf;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::{EnvSnapshot, EnvSource, LoggerSettings};
use crate::gate::SeverityGate;
use crate::level::Level;
use crate::sink::{ConsoleTarget, Sink};

pub use builder::LoggerBuilder;

/// Settings together with the sink built from them.
#[derive(Debug)]
struct LoggerState {
    settings: LoggerSettings,
    sink: Sink,
}

/// A leveled logger that tags every record with its prefix.
pub struct Logger {
    state: ArcSwap<LoggerState>,
    gate: SeverityGate,
    env: Arc<dyn EnvSource>,
    console: ConsoleTarget,
}

impl Logger {
    /// Create a logger at Info with color, reading the process environment
    /// and sharing the process-wide gate.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::builder(prefix).build()
    }

    pub fn builder(prefix: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(prefix)
    }

    pub(crate) fn from_parts(
        settings: LoggerSettings,
        gate: SeverityGate,
        env: Arc<dyn EnvSource>,
        console: ConsoleTarget,
    ) -> Self {
        let state = Self::build_state(settings, &gate, env.as_ref(), &console);
        Self {
            state: ArcSwap::from_pointee(state),
            gate,
            env,
            console,
        }
    }

    fn build_state(
        settings: LoggerSettings,
        gate: &SeverityGate,
        env: &dyn EnvSource,
        console: &ConsoleTarget,
    ) -> LoggerState {
        let snapshot = EnvSnapshot::read(env, &settings);
        let sink = Sink::build(&settings, &snapshot, gate, console);
        LoggerState { settings, sink }
    }

    fn update(&self, change: impl FnOnce(&mut LoggerSettings)) -> &Self {
        let mut settings = self.state.load().settings.clone();
        change(&mut settings);
        let state = Self::build_state(settings, &self.gate, self.env.as_ref(), &self.console);
        self.state.store(Arc::new(state));
        self
    }

    // --- Mutators ---

    /// Set the threshold and rebuild the sink.
    pub fn set_level(&self, level: Level) -> &Self {
        self.update(|s| s.level = Some(level))
    }

    /// Set the tag attached to future records and rebuild the sink.
    pub fn set_prefix(&self, prefix: impl Into<String>) -> &Self {
        let prefix = prefix.into();
        self.update(|s| s.prefix = prefix)
    }

    /// Disable (`true`) or re-enable (`false`) ANSI color on the console.
    pub fn set_no_color(&self, disable: bool) -> &Self {
        self.update(|s| s.color = !disable)
    }

    /// Shorthand for `set_no_color(true)`.
    pub fn no_color(&self) -> &Self {
        self.set_no_color(true)
    }

    /// Rebuild with unchanged settings, picking up environment changes.
    pub fn reload(&self) -> &Self {
        self.update(|_| {})
    }

    // --- Accessors ---

    pub fn level(&self) -> Level {
        self.state.load().settings.effective_level()
    }

    pub fn color_enabled(&self) -> bool {
        self.state.load().settings.color
    }

    pub fn prefix(&self) -> String {
        self.state.load().settings.prefix.clone()
    }

    pub fn settings(&self) -> LoggerSettings {
        self.state.load().settings.clone()
    }

    /// Path of the file destination, if one is open.
    pub fn file_destination(&self) -> Option<PathBuf> {
        self.state.load().sink.file_path().map(PathBuf::from)
    }

    /// Threshold resolved at the last rebuild.
    pub fn resolved_threshold(&self) -> Level {
        self.state.load().sink.threshold()
    }

    pub fn gate(&self) -> &SeverityGate {
        &self.gate
    }

    // --- Emission ---

    /// Emit at `level` if it passes the logger's own threshold.
    #[track_caller]
    pub fn log(&self, level: Level, values: &[&dyn Display]) {
        let state = self.state.load();
        if !level.passes(state.settings.effective_level()) {
            return;
        }
        let caller = format::caller_location(Location::caller());
        let message = format::join_values(values);
        state.sink.emit(level, &state.settings.prefix, &caller, &message);
    }

    #[track_caller]
    pub fn trace(&self, values: &[&dyn Display]) {
        self.log(Level::Trace, values);
    }

    #[track_caller]
    pub fn debug(&self, values: &[&dyn Display]) {
        self.log(Level::Debug, values);
    }

    #[track_caller]
    pub fn info(&self, values: &[&dyn Display]) {
        self.log(Level::Info, values);
    }

    #[track_caller]
    pub fn warn(&self, values: &[&dyn Display]) {
        self.log(Level::Warn, values);
    }

    #[track_caller]
    pub fn error(&self, values: &[&dyn Display]) {
        self.log(Level::Error, values);
    }

    /// Record the message with a stack trace, then panic with it.
    ///
    /// Ignores both the logger's level and the severity gate.
    #[track_caller]
    pub fn panic(&self, values: &[&dyn Display]) -> ! {
        let message = format::join_values(values);
        {
            let state = self.state.load();
            let caller = format::caller_location(Location::caller());
            let stack = format::capture_stack();
            state
                .sink
                .emit_panic(&state.settings.prefix, &caller, &stack, &message);
        }
        panic!("{}", message)
    }
}

impl Clone for Logger {
    /// An independent logger starting from the same settings and sink.
    fn clone(&self) -> Self {
        Self {
            state: ArcSwap::new(self.state.load_full()),
            gate: self.gate.clone(),
            env: self.env.clone(),
            console: self.console.clone(),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("settings", &self.state.load().settings)
            .field("gate", &self.gate.threshold())
            .finish()
    }
}
