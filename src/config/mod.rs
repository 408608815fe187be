//! Logger configuration.
//!
//! # Data Flow
//! ```text
//! LoggerSettings (level, prefix, color, label, ...)
//!     + EnvSnapshot (LOG_LEVEL, LOG_FILE read from an EnvSource)
//!     → resolve_threshold (stored into the shared SeverityGate)
//!     → sink::Sink::build
//! ```
//!
//! # Design Decisions
//! - Settings are immutable values; every change produces a new value
//! - The environment is read on each rebuild, never cached
//! - All fields have defaults to allow minimal embedded configs

pub mod env;
pub mod schema;

pub use env::{resolve_threshold, EnvSnapshot, EnvSource, MapEnv, ProcessEnv};
pub use schema::{FieldLabel, LoggerSettings, Precedence, DEFAULT_TIME_FORMAT};
