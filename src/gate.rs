//! Shared severity gate.
//!
//! # Responsibilities
//! - Hold the minimum visible severity shared by a group of loggers
//! - Answer the renderer's per-record visibility check
//!
//! # Design Decisions
//! - Injected into each logger instead of being an implicit global
//! - `SeverityGate::global()` is the process-wide instance `Logger::new` uses
//! - Lock-free reads (atomic), so every record can consult it

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, OnceLock};

use crate::level::Level;

/// A cloneable handle to a shared severity threshold.
///
/// Clones observe the same value.
#[derive(Debug, Clone)]
pub struct SeverityGate {
    threshold: Arc<AtomicU8>,
}

impl SeverityGate {
    /// Create a new, isolated gate.
    pub fn new(threshold: Level) -> Self {
        Self {
            threshold: Arc::new(AtomicU8::new(threshold as u8)),
        }
    }

    /// The process-wide gate.
    pub fn global() -> SeverityGate {
        static GLOBAL: OnceLock<SeverityGate> = OnceLock::new();
        GLOBAL.get_or_init(|| SeverityGate::new(Level::Info)).clone()
    }

    /// Current threshold.
    pub fn threshold(&self) -> Level {
        Level::from(self.threshold.load(Ordering::Relaxed))
    }

    /// Replace the threshold for every logger sharing this gate.
    pub fn set_threshold(&self, level: Level) {
        self.threshold.store(level as u8, Ordering::Relaxed);
    }

    /// Whether a record at `level` is visible through the gate.
    pub fn allows(&self, level: Level) -> bool {
        level.passes(self.threshold())
    }

    /// Whether two handles point at the same gate.
    pub fn same_gate(&self, other: &SeverityGate) -> bool {
        Arc::ptr_eq(&self.threshold, &other.threshold)
    }
}

impl Default for SeverityGate {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}
