//! Sink construction and record dispatch.
//!
//! # Responsibilities
//! - Resolve the effective threshold and store it into the severity gate
//! - Build the console destination (pretty, optionally ANSI colored)
//! - Open the optional file destination (JSON lines, append-only)
//! - Fan records out to every destination
//!
//! # Data Flow
//! ```text
//! LoggerSettings + EnvSnapshot
//!     → resolve_threshold → SeverityGate
//!     → Registry
//!         ├─ gate filter (shared threshold; panic records and notices pass)
//!         ├─ console layer (fmt, ANSI on/off)
//!         └─ file layer (fmt json, only when LOG_FILE opened)
//!     → Dispatch (installed by the logger)
//! ```
//!
//! # Design Decisions
//! - The sink is a pure function of settings, environment and gate; it is
//!   rebuilt from scratch, never patched
//! - A file that cannot be opened degrades to console-only with one notice
//! - A time format chrono cannot render falls back to `%H:%M:%S` with one
//!   notice, so no destination drops records over a bad timestamp
//! - Each layer writes independently and drops its own write errors

pub mod console;
pub mod file;

use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};
use tracing::Dispatch;
use tracing_subscriber::filter;
use tracing_subscriber::fmt::{self, time::ChronoLocal};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

use crate::config::{
    resolve_threshold, EnvSnapshot, FieldLabel, LoggerSettings, DEFAULT_TIME_FORMAT,
};
use crate::error::LogError;
use crate::gate::SeverityGate;
use crate::level::Level;

pub use console::{ConsoleTarget, MemoryWriter};

/// Target of leveled records.
pub const RECORD_TARGET: &str = "taglog";

/// Target of panic records. Bypasses the severity gate.
pub const PANIC_TARGET: &str = "taglog::panic";

/// Target of sink diagnostics. Bypasses the severity gate.
pub const NOTICE_TARGET: &str = "taglog::notice";

/// Expand one event per field label; tracing field names are static.
macro_rules! labeled_event {
    ($target:expr, $level:expr, $label:expr, $tag:expr, $($rest:tt)*) => {
        match $label {
            FieldLabel::Prefix => {
                tracing::event!(target: $target, $level, prefix = %$tag, $($rest)*)
            }
            FieldLabel::Service => {
                tracing::event!(target: $target, $level, service = %$tag, $($rest)*)
            }
        }
    };
}

/// An installed destination pipeline.
#[derive(Debug, Clone)]
pub struct Sink {
    dispatch: Dispatch,
    label: FieldLabel,
    threshold: Level,
    file_path: Option<PathBuf>,
}

impl Sink {
    /// Build a sink from settings and an environment snapshot.
    ///
    /// Stores the resolved threshold into `gate`. Never fails: an unopenable
    /// file is reported on the console and left out, an unrenderable time
    /// format is reported and replaced by `DEFAULT_TIME_FORMAT`.
    pub fn build(
        settings: &LoggerSettings,
        env: &EnvSnapshot,
        gate: &SeverityGate,
        console: &ConsoleTarget,
    ) -> Self {
        let threshold = resolve_threshold(settings, env);
        gate.set_threshold(threshold);

        let mut notices = Vec::new();

        let time_format = match check_time_format(&settings.time_format) {
            Ok(()) => settings.time_format.clone(),
            Err(e) => {
                notices.push(e);
                DEFAULT_TIME_FORMAT.to_string()
            }
        };

        let file = match env.file_path.as_deref().map(file::open_append) {
            Some(Ok(handle)) => Some(handle),
            Some(Err(e)) => {
                notices.push(e);
                None
            }
            None => None,
        };
        let file_path = file.as_ref().and(env.file_path.clone());

        let gate_filter = {
            let gate = gate.clone();
            filter::filter_fn(move |meta| {
                let target = meta.target();
                target == PANIC_TARGET
                    || target == NOTICE_TARGET
                    || gate.allows(Level::from_tracing(meta.level()))
            })
        };

        let console_layer = fmt::layer()
            .with_writer(console.make_writer())
            .with_ansi(settings.color)
            .with_target(false)
            .with_timer(ChronoLocal::new(time_format.clone()));

        let fan_out = Registry::default().with(gate_filter).with(console_layer);

        let dispatch = match file {
            Some(handle) => {
                let file_layer = fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(false)
                    .with_span_list(false)
                    .with_ansi(false)
                    .with_writer(handle)
                    .with_timer(ChronoLocal::new(time_format.clone()));
                Dispatch::new(fan_out.with(file_layer))
            }
            None => Dispatch::new(fan_out),
        };

        let sink = Self {
            dispatch,
            label: settings.label,
            threshold,
            file_path,
        };

        for err in &notices {
            sink.notice(err);
        }
        sink
    }

    /// Threshold stored into the gate when this sink was built.
    pub fn threshold(&self) -> Level {
        self.threshold
    }

    /// Path of the active file destination.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Write one leveled record. `Disabled` writes nothing.
    pub fn emit(&self, level: Level, tag: &str, caller: &str, message: &str) {
        let label = self.label;
        tracing::dispatcher::with_default(&self.dispatch, || match level {
            Level::Trace => labeled_event!(
                RECORD_TARGET, tracing::Level::TRACE, label, tag,
                caller = %caller, "{}", message
            ),
            Level::Debug => labeled_event!(
                RECORD_TARGET, tracing::Level::DEBUG, label, tag,
                caller = %caller, "{}", message
            ),
            Level::Info => labeled_event!(
                RECORD_TARGET, tracing::Level::INFO, label, tag,
                caller = %caller, "{}", message
            ),
            Level::Warn => labeled_event!(
                RECORD_TARGET, tracing::Level::WARN, label, tag,
                caller = %caller, "{}", message
            ),
            Level::Error => labeled_event!(
                RECORD_TARGET, tracing::Level::ERROR, label, tag,
                caller = %caller, "{}", message
            ),
            Level::Disabled => {}
        });
    }

    /// Write a panic record with its stack trace.
    pub fn emit_panic(&self, tag: &str, caller: &str, stack: &str, message: &str) {
        let label = self.label;
        tracing::dispatcher::with_default(&self.dispatch, || {
            labeled_event!(
                PANIC_TARGET, tracing::Level::ERROR, label, tag,
                kind = %"panic", caller = %caller, stack = %stack, "{}", message
            )
        });
    }

    fn notice(&self, err: &LogError) {
        let fallback = match err {
            LogError::FileOpen { .. } => "continuing without file destination",
            LogError::InvalidTimeFormat(_) => "using default time format",
            LogError::InvalidLevel(_) => "ignoring level",
        };
        tracing::dispatcher::with_default(&self.dispatch, || {
            tracing::event!(
                target: NOTICE_TARGET,
                tracing::Level::WARN,
                error = %err,
                "{}",
                fallback
            )
        });
    }
}

/// Reject formats containing specifiers chrono cannot render.
fn check_time_format(format: &str) -> Result<(), LogError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(LogError::InvalidTimeFormat(format.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(settings: &LoggerSettings, env: &EnvSnapshot) -> (Sink, SeverityGate, MemoryWriter) {
        let gate = SeverityGate::new(Level::Info);
        let buf = MemoryWriter::new();
        let sink = Sink::build(settings, env, &gate, &ConsoleTarget::Memory(buf.clone()));
        (sink, gate, buf)
    }

    fn plain(prefix: &str) -> LoggerSettings {
        LoggerSettings {
            color: false,
            ..LoggerSettings::with_prefix(prefix)
        }
    }

    #[test]
    fn test_build_stores_threshold() {
        let mut settings = plain("svc");
        settings.level = Some(Level::Warn);
        let (sink, gate, _) = build(&settings, &EnvSnapshot::default());

        assert_eq!(sink.threshold(), Level::Warn);
        assert_eq!(gate.threshold(), Level::Warn);
        assert_eq!(sink.file_path(), None);
    }

    #[test]
    fn test_emit_renders_fields() {
        let (sink, _, buf) = build(&plain("svc"), &EnvSnapshot::default());
        sink.emit(Level::Warn, "svc", "src/main.rs:7", "disk low");

        let out = buf.contents();
        assert!(out.contains("WARN"));
        assert!(out.contains("disk low"));
        assert!(out.contains("prefix=svc"));
        assert!(out.contains("caller=src/main.rs:7"));
    }

    #[test]
    fn test_gate_filters_rendering() {
        let (sink, gate, buf) = build(&plain("svc"), &EnvSnapshot::default());
        gate.set_threshold(Level::Error);

        sink.emit(Level::Warn, "svc", "a.rs:1", "hidden");
        assert!(buf.contents().is_empty());

        sink.emit_panic("svc", "a.rs:2", "frame0", "boom");
        assert!(buf.contents().contains("boom"));
    }

    #[test]
    fn test_service_label() {
        let mut settings = plain("billing");
        settings.label = FieldLabel::Service;
        let (sink, _, buf) = build(&settings, &EnvSnapshot::default());
        sink.emit(Level::Info, "billing", "a.rs:1", "charged");

        let out = buf.contents();
        assert!(out.contains("service=billing"));
        assert!(!out.contains("prefix="));
    }

    #[test]
    fn test_check_time_format() {
        assert!(check_time_format("%H:%M:%S").is_ok());
        assert!(check_time_format("%Y-%m-%dT%H:%M:%S%.3f").is_ok());
        assert!(matches!(
            check_time_format("%Q"),
            Err(LogError::InvalidTimeFormat(f)) if f == "%Q"
        ));
    }

    #[test]
    fn test_invalid_time_format_falls_back() {
        let mut settings = plain("svc");
        settings.time_format = "%Q".into();
        let (sink, _, buf) = build(&settings, &EnvSnapshot::default());

        let notice = buf.contents();
        assert!(notice.contains("invalid time format"));
        assert!(notice.contains("using default time format"));

        buf.clear();
        sink.emit(Level::Info, "svc", "a.rs:1", "stamped");
        let out = buf.contents();
        assert!(out.contains("stamped"));
        assert!(!out.contains("<unknown time>"));
    }

    #[test]
    fn test_panic_record_is_marked() {
        let (sink, _, buf) = build(&plain("svc"), &EnvSnapshot::default());
        sink.emit_panic("svc", "a.rs:2", "frame0", "boom");
        sink.emit(Level::Error, "svc", "a.rs:3", "plain error");

        let lines = buf.lines();
        assert!(lines[0].contains("kind=panic"));
        assert!(!lines[1].contains("kind=panic"));
    }

    #[test]
    fn test_unopenable_file_reports_notice() {
        let dir = tempfile::tempdir().unwrap();
        let env = EnvSnapshot {
            level_override: None,
            file_path: Some(dir.path().join("no/such/dir/app.log")),
        };
        let (sink, _, buf) = build(&plain("svc"), &env);

        assert_eq!(sink.file_path(), None);
        assert!(buf.contents().contains("failed to open log file"));

        buf.clear();
        sink.emit(Level::Info, "svc", "a.rs:1", "still here");
        assert!(buf.contents().contains("still here"));
    }
}
