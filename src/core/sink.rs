// GameLog - core/sink.rs
//
// Observers notified by the log store on every append.
// The console mirror is a sink rather than part of the append path so that
// tests and embedders can swap it for a capturing one.

use crate::core::model::LogEntry;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Receives every entry the store records, after it has been stored.
pub trait LogSink: Send {
    fn on_append(&mut self, entry: &LogEntry);
}

/// The line a console mirror prints for `entry`: `PREFIX: message`.
///
/// General entries carry their severity (`[INFO]: ...`); game entries carry
/// severity and origin (`[WARN][GAME]: ...`).
pub fn console_line(entry: &LogEntry) -> String {
    format!("{}: {}", entry.level().console_prefix(), entry.message())
}

/// Mirrors each entry to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn on_append(&mut self, entry: &LogEntry) {
        let mut out = std::io::stdout().lock();
        // Side channel only; a closed stdout must not affect the store.
        let _ = writeln!(out, "{}", console_line(entry));
    }
}

/// Collects console lines in memory.
///
/// Clones share the same buffer, so a test can keep one handle while the
/// store owns the other.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line captured so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl LogSink for MemorySink {
    fn on_append(&mut self, entry: &LogEntry) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(console_line(entry));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{ClockTime, LogLevel};

    fn entry(level: LogLevel, message: &str) -> LogEntry {
        LogEntry::new(level, ClockTime::from_hms(12, 0, 0).unwrap(), message)
    }

    #[test]
    fn test_console_line_prefixes() {
        let cases = [
            (LogLevel::Info, "[INFO]: m"),
            (LogLevel::Warning, "[WARN]: m"),
            (LogLevel::Error, "[ERROR]: m"),
            (LogLevel::GameEvent, "[INFO][GAME]: m"),
            (LogLevel::GameWarning, "[WARN][GAME]: m"),
            (LogLevel::GameError, "[ERROR][GAME]: m"),
        ];
        for (level, expected) in cases {
            assert_eq!(console_line(&entry(level, "m")), expected);
        }
    }

    #[test]
    fn test_memory_sink_clones_share_buffer() {
        let handle = MemorySink::new();
        let mut sink = handle.clone();
        sink.on_append(&entry(LogLevel::Info, "one"));
        sink.on_append(&entry(LogLevel::GameError, "two"));
        assert_eq!(handle.lines(), vec!["[INFO]: one", "[ERROR][GAME]: two"]);
    }
}
