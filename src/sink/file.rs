//! Append-only file destination.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use crate::error::LogError;

/// Open `path` for append, creating it if missing. One attempt, no retry.
///
/// The handle is shared by the sink's layer and closed when the last sink
/// holding it is dropped.
pub fn open_append(path: &Path) -> Result<Arc<File>, LogError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(Arc::new)
        .map_err(|source| LogError::FileOpen {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_append_creates_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");

        {
            let file = open_append(&path).unwrap();
            (&*file).write_all(b"one\n").unwrap();
        }
        {
            let file = open_append(&path).unwrap();
            (&*file).write_all(b"two\n").unwrap();
        }

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_open_append_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("app.log");

        match open_append(&path) {
            Err(LogError::FileOpen { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected FileOpen error, got {:?}", other),
        }
    }
}
