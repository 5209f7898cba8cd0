// GameLog - core/export.rs
//
// Plain-text export of log entries in the canonical line format:
//
//   [HH:MM:SS] TAG MESSAGE
//
// One newline-terminated line per entry, store order, no header or footer.
// Core layer: writes to any Write trait object.

use crate::core::model::LogEntry;
use crate::util::error::ExportError;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Render one entry as a canonical line (without the trailing newline).
pub fn format_line(entry: &LogEntry) -> String {
    entry.to_string()
}

/// Write every entry as a newline-terminated canonical line.
///
/// Returns the number of lines written.
pub fn write_lines<W: Write>(entries: &[LogEntry], mut writer: W) -> io::Result<usize> {
    for entry in entries {
        writeln!(writer, "{entry}")?;
    }
    writer.flush()?;
    Ok(entries.len())
}

/// Export all entries into a single string suitable for the clipboard.
pub fn export_to_string(entries: &[LogEntry]) -> String {
    let mut out = String::with_capacity(entries.iter().map(|e| e.message().len() + 20).sum());
    for entry in entries {
        out.push_str(&format_line(entry));
        out.push('\n');
    }
    out
}

/// Write all entries to `path`, replacing any existing content.
///
/// Returns the number of lines written. Fails without panicking when the
/// path cannot be opened for writing; no cleanup is attempted beyond the
/// truncation performed by the open itself.
pub fn save_to_file(entries: &[LogEntry], path: &Path) -> Result<usize, ExportError> {
    let file = File::create(path).map_err(|e| ExportError::Create {
        path: path.to_path_buf(),
        source: e,
    })?;
    write_lines(entries, BufWriter::new(file)).map_err(|e| ExportError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{ClockTime, LogLevel};

    fn make_entry(level: LogLevel, h: u8, m: u8, s: u8, message: &str) -> LogEntry {
        LogEntry::new(level, ClockTime::from_hms(h, m, s).unwrap(), message)
    }

    #[test]
    fn test_export_to_string_one_line_per_entry() {
        let entries = vec![
            make_entry(LogLevel::Info, 9, 0, 1, "a"),
            make_entry(LogLevel::GameWarning, 9, 0, 2, "b"),
            make_entry(LogLevel::Error, 9, 0, 3, "c"),
        ];
        let text = export_to_string(&entries);
        assert_eq!(
            text,
            "[09:00:01] [INFO] a\n[09:00:02] [GAME] b\n[09:00:03] [ERROR] c\n"
        );
    }

    #[test]
    fn test_export_empty_is_empty_string() {
        assert_eq!(export_to_string(&[]), "");
    }

    #[test]
    fn test_empty_message_keeps_trailing_space() {
        let entries = vec![make_entry(LogLevel::Warning, 1, 2, 3, "")];
        assert_eq!(export_to_string(&entries), "[01:02:03] [WARN] \n");
    }

    #[test]
    fn test_write_lines_matches_string_export() {
        let entries = vec![
            make_entry(LogLevel::GameEvent, 23, 59, 59, "Player made a move"),
            make_entry(LogLevel::Warning, 0, 0, 0, "low fuel"),
        ];
        let mut buf = Vec::new();
        let count = write_lines(&entries, &mut buf).unwrap();
        assert_eq!(count, 2);
        assert_eq!(String::from_utf8(buf).unwrap(), export_to_string(&entries));
    }

    #[test]
    fn test_save_to_file_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("log.txt");
        let result = save_to_file(&[], &path);
        assert!(matches!(result, Err(ExportError::Create { .. })));
    }
}
