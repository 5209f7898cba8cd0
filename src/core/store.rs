// GameLog - core/store.rs
//
// In-memory, append-only log store.
//
// The store owns every entry it holds and hands out only `&[LogEntry]`.
// Insertion order is the display and export order. The only removal is a
// full `clear()`. There is no internal locking: the store is meant to live
// in the UI thread's state; a multi-threaded host wraps it in a Mutex.

use crate::core::export;
use crate::core::model::{ClockTime, LogEntry, LogLevel};
use crate::core::sink::LogSink;
use crate::util::error::ExportError;
use std::fmt;
use std::path::Path;

/// Ordered record of everything logged during the process lifetime.
#[derive(Default)]
pub struct LogStore {
    entries: Vec<LogEntry>,
    sinks: Vec<Box<dyn LogSink>>,
}

impl fmt::Debug for LogStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogStore")
            .field("entries", &self.entries.len())
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl LogStore {
    /// Create an empty store with no sinks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`LogStore::add_sink`].
    pub fn with_sink(mut self, sink: impl LogSink + 'static) -> Self {
        self.add_sink(sink);
        self
    }

    /// Register an observer notified after each append.
    pub fn add_sink(&mut self, sink: impl LogSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    // -------------------------------------------------------------------------
    // Append
    // -------------------------------------------------------------------------

    pub fn log_info(&mut self, message: impl Into<String>) {
        self.record(LogLevel::Info, message);
    }

    pub fn log_warning(&mut self, message: impl Into<String>) {
        self.record(LogLevel::Warning, message);
    }

    pub fn log_error(&mut self, message: impl Into<String>) {
        self.record(LogLevel::Error, message);
    }

    pub fn log_game_event(&mut self, text: impl Into<String>) {
        self.record(LogLevel::GameEvent, text);
    }

    pub fn log_game_warning(&mut self, text: impl Into<String>) {
        self.record(LogLevel::GameWarning, text);
    }

    pub fn log_game_error(&mut self, text: impl Into<String>) {
        self.record(LogLevel::GameError, text);
    }

    /// Append an entry stamped with the current local time.
    pub fn record(&mut self, level: LogLevel, message: impl Into<String>) {
        self.record_at(level, message, ClockTime::now());
    }

    /// Append an entry with an explicit timestamp.
    pub fn record_at(&mut self, level: LogLevel, message: impl Into<String>, timestamp: ClockTime) {
        self.entries.push(LogEntry::new(level, timestamp, message));
        if let Some(entry) = self.entries.last() {
            for sink in &mut self.sinks {
                sink.on_append(entry);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Read
    // -------------------------------------------------------------------------

    /// All entries, oldest first.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry. Sinks are kept.
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        tracing::debug!(removed, "Log cleared");
    }

    // -------------------------------------------------------------------------
    // Export
    // -------------------------------------------------------------------------

    /// One canonical line per entry, newline-terminated, store order.
    pub fn export_to_string(&self) -> String {
        export::export_to_string(&self.entries)
    }

    /// Write the same text as [`LogStore::export_to_string`] to `path`,
    /// truncating any existing file. Returns the number of lines written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<usize, ExportError> {
        let path = path.as_ref();
        match export::save_to_file(&self.entries, path) {
            Ok(lines) => {
                tracing::info!(path = %path.display(), lines, "Log saved");
                Ok(lines)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Log save failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Category;
    use crate::core::sink::MemorySink;

    fn at(h: u8, m: u8, s: u8) -> ClockTime {
        ClockTime::from_hms(h, m, s).unwrap()
    }

    #[test]
    fn test_count_tracks_appends_since_clear() {
        let mut store = LogStore::new();
        assert_eq!(store.count(), 0);
        store.log_info("one");
        store.log_game_event("two");
        store.log_error("three");
        assert_eq!(store.count(), 3);
        store.clear();
        assert_eq!(store.count(), 0);
        assert!(store.entries().is_empty());
        store.log_warning("four");
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_store_can_move_across_threads() {
        fn assert_send<T: Send>() {}
        assert_send::<LogStore>();
    }

    #[test]
    fn test_clear_on_empty_store() {
        let mut store = LogStore::new();
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_entries_preserve_append_order() {
        let mut store = LogStore::new();
        store.log_game_error("1");
        store.log_info("2");
        store.log_game_warning("3");
        store.log_warning("4");
        store.log_game_event("5");
        store.log_error("6");

        let levels: Vec<_> = store.entries().iter().map(|e| e.level()).collect();
        assert_eq!(
            levels,
            vec![
                LogLevel::GameError,
                LogLevel::Info,
                LogLevel::GameWarning,
                LogLevel::Warning,
                LogLevel::GameEvent,
                LogLevel::Error,
            ]
        );
        let messages: Vec<_> = store.entries().iter().map(|e| e.message()).collect();
        assert_eq!(messages, vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_helpers_assign_category() {
        let mut store = LogStore::new();
        store.log_info("g");
        store.log_game_event("x");
        assert_eq!(store.entries()[0].level().category(), Category::General);
        assert_eq!(store.entries()[1].level().category(), Category::Game);
    }

    #[test]
    fn test_empty_message_recorded_verbatim() {
        let mut store = LogStore::new();
        store.log_info("");
        assert_eq!(store.count(), 1);
        assert_eq!(store.entries()[0].message(), "");
    }

    #[test]
    fn test_sinks_see_every_append() {
        let capture = MemorySink::new();
        let mut store = LogStore::new().with_sink(capture.clone());
        store.log_info("a");
        store.log_game_warning("b");
        store.log_error("c");
        assert_eq!(
            capture.lines(),
            vec!["[INFO]: a", "[WARN][GAME]: b", "[ERROR]: c"]
        );
    }

    #[test]
    fn test_clear_keeps_sinks() {
        let capture = MemorySink::new();
        let mut store = LogStore::new().with_sink(capture.clone());
        store.log_info("before");
        store.clear();
        store.log_info("after");
        assert_eq!(capture.lines().len(), 2);
    }

    #[test]
    fn test_export_is_repeatable() {
        let mut store = LogStore::new();
        store.record_at(LogLevel::Info, "a", at(10, 0, 0));
        store.record_at(LogLevel::GameError, "b", at(10, 0, 1));
        let first = store.export_to_string();
        assert_eq!(first, store.export_to_string());
        assert_eq!(first, "[10:00:00] [INFO] a\n[10:00:01] [GAME] b\n");
    }

    #[test]
    fn test_game_entries_export_with_game_tag() {
        let mut store = LogStore::new();
        store.log_game_event("e");
        store.log_game_warning("w");
        store.log_game_error("x");
        for line in store.export_to_string().lines() {
            assert_eq!(&line[11..17], "[GAME]", "line: {line}");
        }
        let levels: Vec<_> = store.entries().iter().map(|e| e.level()).collect();
        assert_eq!(
            levels,
            vec![LogLevel::GameEvent, LogLevel::GameWarning, LogLevel::GameError]
        );
    }
}
