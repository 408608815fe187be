//! Console destination targets.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriter};

/// Where the console renderer writes.
#[derive(Debug, Clone, Default)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
    /// In-memory buffer, for embedding and tests.
    Memory(MemoryWriter),
}

impl ConsoleTarget {
    /// A fresh writer factory for one sink build.
    pub fn make_writer(&self) -> BoxMakeWriter {
        match self {
            ConsoleTarget::Stdout => BoxMakeWriter::new(io::stdout),
            ConsoleTarget::Stderr => BoxMakeWriter::new(io::stderr),
            ConsoleTarget::Memory(buf) => BoxMakeWriter::new(buf.clone()),
        }
    }
}

/// A cloneable in-memory writer. Clones append to the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Non-empty lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn clear(&self) {
        self.buf.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl Write for MemoryWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut buf = self.buf.lock().unwrap_or_else(|e| e.into_inner());
        buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for MemoryWriter {
    type Writer = MemoryWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
