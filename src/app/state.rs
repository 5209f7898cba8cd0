// GameLog - app/state.rs
//
// Application state management. Owns the log store, the log window's filter
// and input box, window visibility, and the status bar text.
// Owned by the eframe::App implementation.

use crate::app::actions::{self, GameAction};
use crate::core::filter::{FilterLevel, FilterState};
use crate::core::model::LogEntry;
use crate::core::store::LogStore;
use crate::util::constants;
use std::path::{Path, PathBuf};

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// The game log. The only store in the process.
    pub log: LogStore,

    /// Current filter configuration.
    pub filter_state: FilterState,

    /// Indices of entries matching the current filter (into `log.entries()`).
    pub filtered_indices: Vec<usize>,

    /// Whether the Game Log window is shown.
    pub log_window_visible: bool,

    /// Whether the Log Demo window is shown.
    pub demo_window_visible: bool,

    /// Text currently typed into the log window's input box.
    pub input_buffer: String,

    /// Target of "Save To File".
    pub save_path: PathBuf,

    /// Status message for the status bar.
    pub status_message: String,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state around an already configured store.
    pub fn new(log: LogStore, filter_level: FilterLevel, save_path: PathBuf, debug_mode: bool) -> Self {
        let mut state = Self {
            log,
            filter_state: FilterState::with_level(filter_level),
            filtered_indices: Vec::new(),
            log_window_visible: true,
            demo_window_visible: true,
            input_buffer: String::new(),
            save_path,
            status_message: "Ready.".to_string(),
            debug_mode,
        };
        state.apply_filters();
        state
    }

    /// Record the start-up messages.
    pub fn start_up(&mut self) {
        actions::start_up(&mut self.log);
        self.apply_filters();
    }

    /// Recompute filtered indices from current entries and filter state.
    pub fn apply_filters(&mut self) {
        self.filtered_indices =
            crate::core::filter::apply_filters(self.log.entries(), &self.filter_state);
    }

    pub fn set_filter_level(&mut self, level: FilterLevel) {
        self.filter_state.level = level;
        self.apply_filters();
    }

    /// Entries that pass the current filter, in store order.
    pub fn visible_entries(&self) -> impl Iterator<Item = &LogEntry> + '_ {
        self.filtered_indices
            .iter()
            .filter_map(|&i| self.log.entries().get(i))
    }

    pub fn run_action(&mut self, action: GameAction) {
        action.apply(&mut self.log);
        self.apply_filters();
    }

    /// Log the input box contents, if any, and empty the box.
    ///
    /// Returns true when an entry was recorded.
    pub fn submit_input(&mut self) -> bool {
        if self.input_buffer.is_empty() {
            return false;
        }
        let text = std::mem::take(&mut self.input_buffer);
        let text: String = text.chars().take(constants::MAX_INPUT_CHARS).collect();
        self.log
            .log_info(format!("{}\"{text}\"", constants::USER_INPUT_PREFIX));
        self.apply_filters();
        true
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
        self.apply_filters();
        self.status_message = "Log cleared.".to_string();
    }

    /// Save the whole log (unfiltered) to `path`, reporting on the status bar.
    ///
    /// Returns true on success.
    pub fn save_log(&mut self, path: &Path) -> bool {
        match self.log.save_to_file(path) {
            Ok(lines) => {
                self.status_message = format!("Saved {lines} entries to {}.", path.display());
                true
            }
            Err(e) => {
                self.status_message = format!("Save failed: {e}");
                false
            }
        }
    }

    /// Save to the configured `save_path`.
    pub fn save_log_default(&mut self) -> bool {
        let path = self.save_path.clone();
        self.save_log(&path)
    }

    /// Text placed on the clipboard by "Copy To Clipboard" (whole log, unfiltered).
    pub fn clipboard_text(&mut self) -> String {
        self.status_message = format!("Copied {} entries to clipboard.", self.log.count());
        self.log.export_to_string()
    }

    pub fn toggle_log_window(&mut self) {
        self.log_window_visible = !self.log_window_visible;
    }
}
