//! Message, caller and stack formatting.

use std::backtrace::Backtrace;
use std::fmt::Display;
use std::panic::Location;
use std::path::Path;

/// Upper bound on the stack text attached to panic records.
pub const MAX_STACK_BYTES: usize = 2048;

/// Build a message from emit arguments.
///
/// One value is rendered as-is. Several values are space-joined and lose at
/// most one trailing `]`.
pub fn join_values(values: &[&dyn Display]) -> String {
    match values {
        [] => String::new(),
        [one] => one.to_string(),
        many => {
            let mut joined = many
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            if joined.ends_with(']') {
                joined.pop();
            }
            joined
        }
    }
}

/// `file:line` of a call site.
pub fn caller_location(location: &Location<'_>) -> String {
    format!("{}:{}", trim_path(location.file()), location.line())
}

/// Absolute paths keep their last two components; relative paths are
/// already crate-rooted.
pub fn trim_path(file: &str) -> &str {
    if !Path::new(file).is_absolute() {
        return file;
    }
    let mut separators = file.rmatch_indices(['/', '\\']);
    separators.next();
    match separators.next() {
        Some((idx, _)) => &file[idx + 1..],
        None => file,
    }
}

/// Capture the current thread's stack, bounded by `MAX_STACK_BYTES`.
pub fn capture_stack() -> String {
    truncate_at_boundary(Backtrace::force_capture().to_string(), MAX_STACK_BYTES)
}

/// Cut `text` to at most `max` bytes without splitting a character.
pub fn truncate_at_boundary(mut text: String, max: usize) -> String {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_values() {
        assert_eq!(join_values(&[]), "");
        assert_eq!(join_values(&[&"solo"]), "solo");
        assert_eq!(join_values(&[&"a", &"b", &"c"]), "a b c");
        assert_eq!(join_values(&[&"count", &3, &1.5]), "count 3 1.5");
    }

    #[test]
    fn test_join_values_trailing_bracket() {
        // Single values keep their bracket
        assert_eq!(join_values(&[&"[x]"]), "[x]");
        assert_eq!(join_values(&[&"ids", &"[1 2]"]), "ids [1 2");
        assert_eq!(join_values(&[&"a", &"]]"]), "a ]");
    }

    #[test]
    fn test_trim_path() {
        assert_eq!(trim_path("src/logger/mod.rs"), "src/logger/mod.rs");
        #[cfg(unix)]
        {
            assert_eq!(trim_path("/home/dev/app/src/main.rs"), "src/main.rs");
            assert_eq!(trim_path("/main.rs"), "/main.rs");
        }
    }

    #[test]
    fn test_caller_location() {
        let here = Location::caller();
        let loc = caller_location(here);
        assert!(loc.ends_with(&format!(":{}", here.line())));
        assert!(loc.contains("format.rs"));
    }

    #[test]
    fn test_truncate_at_boundary() {
        assert_eq!(truncate_at_boundary("short".into(), 10), "short");
        assert_eq!(truncate_at_boundary("abcdef".into(), 4), "abcd");
        // 'é' is two bytes; cutting inside it backs off
        assert_eq!(truncate_at_boundary("aé".into(), 2), "a");
    }

    #[test]
    fn test_capture_stack_bounded() {
        let stack = capture_stack();
        assert!(!stack.is_empty());
        assert!(stack.len() <= MAX_STACK_BYTES);
    }
}
