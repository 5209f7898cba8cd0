// GameLog - tests/e2e_log_store.rs
//
// End-to-end tests for the log store: append, clear, export to string and
// to a real file on disk, through the public library API only.

use gamelog::app::state::AppState;
use gamelog::core::filter::FilterLevel;
use gamelog::core::model::{ClockTime, LogLevel};
use gamelog::core::sink::MemorySink;
use gamelog::core::store::LogStore;
use gamelog::util::error::ExportError;
use std::fs;
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

/// True if `line` is `[HH:MM:SS] TAG MESSAGE` with a known tag.
fn is_canonical(line: &str) -> bool {
    let bytes = line.as_bytes();
    if bytes.len() < 11 || bytes[0] != b'[' || bytes[9] != b']' || bytes[10] != b' ' {
        return false;
    }
    let time = &line[1..9];
    let digits_ok = time
        .char_indices()
        .all(|(i, c)| if i == 2 || i == 5 { c == ':' } else { c.is_ascii_digit() });
    if !digits_ok {
        return false;
    }
    let rest = &line[11..];
    ["[INFO] ", "[WARN] ", "[ERROR] ", "[GAME] "]
        .iter()
        .any(|tag| rest.starts_with(tag))
}

fn tag_of(line: &str) -> &str {
    let rest = &line[11..];
    let end = rest.find(' ').unwrap_or(rest.len());
    &rest[..end]
}

// =============================================================================
// Scenarios
// =============================================================================

/// info "a", game warning "b", error "c" export in order with their tags.
#[test]
fn e2e_mixed_appends_export_in_order() {
    let mut store = LogStore::new();
    let before = ClockTime::now();
    store.log_info("a");
    store.log_game_warning("b");
    store.log_error("c");
    let after = ClockTime::now();
    assert_eq!(store.count(), 3);

    let text = store.export_to_string();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| is_canonical(l)), "lines: {lines:?}");
    assert_eq!(
        lines.iter().map(|l| tag_of(l)).collect::<Vec<_>>(),
        vec!["[INFO]", "[GAME]", "[ERROR]"]
    );
    assert!(lines[0].ends_with("[INFO] a"));
    assert!(lines[1].ends_with("[GAME] b"));
    assert!(lines[2].ends_with("[ERROR] c"));

    // Timestamps fall between the surrounding clock reads, unless the test
    // happened to straddle midnight.
    if before <= after {
        for entry in store.entries() {
            assert!(entry.timestamp() >= before && entry.timestamp() <= after);
        }
    }

    store.clear();
    assert_eq!(store.count(), 0);
    assert_eq!(store.export_to_string(), "");
}

/// Saving then reading back yields the string export byte for byte.
#[test]
fn e2e_save_to_file_matches_string_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game_log.txt");

    let mut store = LogStore::new();
    store.log_game_event("Player made a move");
    store.log_warning("");
    store.log_game_error("Game state corrupted");

    let written = store.save_to_file(&path).unwrap();
    assert_eq!(written, 3);
    assert_eq!(fs::read_to_string(&path).unwrap(), store.export_to_string());
}

/// Saving truncates whatever the file held before.
#[test]
fn e2e_save_to_file_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game_log.txt");
    fs::write(&path, "stale line one\nstale line two\nstale line three\n").unwrap();

    let mut store = LogStore::new();
    store.record_at(LogLevel::Info, "fresh", ClockTime::from_hms(1, 2, 3).unwrap());
    store.save_to_file(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "[01:02:03] [INFO] fresh\n");

    store.clear();
    store.save_to_file(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

/// A path under a directory that does not exist fails without panicking.
#[test]
fn e2e_save_to_unwritable_path_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("does").join("not").join("exist.txt");

    let mut store = LogStore::new();
    store.log_info("kept");
    let result = store.save_to_file(&path);
    assert!(
        matches!(result, Err(ExportError::Create { .. })),
        "expected Create error, got {result:?}"
    );
    assert!(!path.exists());
    assert_eq!(store.count(), 1);
}

/// Saving onto an existing directory fails too.
#[test]
fn e2e_save_onto_directory_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = LogStore::new();
    assert!(store.save_to_file(dir.path()).is_err());
}

/// The console mirror sees every append with severity and origin prefixes.
#[test]
fn e2e_console_mirror_lines() {
    let mirror = MemorySink::new();
    let mut store = LogStore::new().with_sink(mirror.clone());
    store.log_info("a");
    store.log_game_event("b");
    store.log_game_warning("c");
    store.log_game_error("d");
    assert_eq!(
        mirror.lines(),
        vec![
            "[INFO]: a",
            "[INFO][GAME]: b",
            "[WARN][GAME]: c",
            "[ERROR][GAME]: d"
        ]
    );
}

/// Full app flow: start-up, typed input, filter tiers, save.
#[test]
fn e2e_app_state_flow() {
    let dir = tempfile::tempdir().unwrap();
    let save_path = dir.path().join("session.txt");

    let mut state = AppState::new(LogStore::new(), FilterLevel::Warning, save_path.clone(), false);
    state.start_up();
    state.input_buffer = "gg".to_string();
    assert!(state.submit_input());
    state.log.log_game_warning("Invalid move attempted");
    state.log.log_game_error("Game state corrupted");
    state.apply_filters();

    // Warning tier hides the game error only.
    assert_eq!(state.log.count(), 5);
    assert_eq!(state.filtered_indices, vec![0, 1, 2, 3]);

    assert!(state.save_log_default());
    let saved = fs::read_to_string(&save_path).unwrap();
    assert_eq!(saved.lines().count(), 5);
    assert!(saved.contains("[INFO] User typed: \"gg\""));
}
