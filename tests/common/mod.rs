//! Shared utilities for logger integration tests.

use std::path::Path;
use std::sync::Arc;

use taglog::{ConsoleTarget, EnvSource, Level, Logger, LoggerBuilder, MapEnv, MemoryWriter, SeverityGate};

/// A logger wired to an in-memory console, its own gate and a map env.
pub struct Harness {
    pub logger: Logger,
    pub console: MemoryWriter,
    pub env: Arc<MapEnv>,
    pub gate: SeverityGate,
}

/// Plain (uncolored) harness with an empty environment.
pub fn harness(prefix: &str) -> Harness {
    harness_with(prefix, MapEnv::new(), |b| b.color(false))
}

/// Harness with a prepared environment and extra builder settings.
pub fn harness_with(
    prefix: &str,
    env: MapEnv,
    configure: impl FnOnce(LoggerBuilder) -> LoggerBuilder,
) -> Harness {
    let console = MemoryWriter::new();
    let env = Arc::new(env);
    let gate = SeverityGate::new(Level::Info);

    let builder = Logger::builder(prefix)
        .gate(gate.clone())
        .env(env.clone() as Arc<dyn EnvSource>)
        .console(ConsoleTarget::Memory(console.clone()));
    let logger = configure(builder).build();

    Harness {
        logger,
        console,
        env,
        gate,
    }
}

/// Parse every JSON line of a file destination.
#[allow(dead_code)]
pub fn read_records(path: &Path) -> Vec<serde_json::Value> {
    std::fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).expect("file record is not JSON"))
        .collect()
}
