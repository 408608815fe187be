//! Leveled, prefix-tagged logging.
//!
//! # Architecture Overview
//!
//! ```text
//!   caller ──▶ Logger::info(&[..])            (own level check, #[track_caller])
//!                 │
//!                 ▼
//!              Sink (tracing Dispatch)
//!                 ├─ SeverityGate filter      (shared across loggers)
//!                 ├─ console layer            (pretty, ANSI on/off)
//!                 └─ file layer               (JSON lines, from LOG_FILE)
//!
//!   set_level / set_prefix / set_no_color
//!       → LoggerSettings + EnvSnapshot → Sink::build → atomic swap
//! ```
//!
//! ```rust,no_run
//! use taglog::{log_info, Level, Logger};
//!
//! let logger = Logger::new("api");
//! logger.set_level(Level::Debug);
//! log_info!(logger, "listening on", 8080);
//! ```

pub mod config;
pub mod error;
pub mod gate;
pub mod level;
pub mod logger;
pub mod sink;

pub use config::{EnvSource, FieldLabel, LoggerSettings, MapEnv, Precedence, ProcessEnv};
pub use error::LogError;
pub use gate::SeverityGate;
pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use sink::{ConsoleTarget, MemoryWriter};
