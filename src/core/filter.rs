// GameLog - core/filter.rs
//
// Display filtering for the log window. The store itself never filters;
// callers pick entries out of `LogStore::entries()` with these rules.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{Category, LogEntry, LogLevel, Severity};
use std::fmt;
use std::str::FromStr;

/// Severity tier shown in the log window.
///
/// Tiers are cumulative from Info upwards. Game levels join the tier of their
/// severity: GameEvent with Info, GameWarning with Warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterLevel {
    /// Info and GameEvent only.
    Info,
    /// Info and Warning, general and game.
    Warning,
    /// Everything, errors included.
    #[default]
    All,
}

impl FilterLevel {
    /// Returns all tiers in the order the options menu lists them.
    pub fn all() -> &'static [FilterLevel] {
        &[FilterLevel::Info, FilterLevel::Warning, FilterLevel::All]
    }

    pub fn includes(&self, level: LogLevel) -> bool {
        let ceiling = match self {
            FilterLevel::Info => Severity::Info,
            FilterLevel::Warning => Severity::Warning,
            FilterLevel::All => Severity::Error,
        };
        level.severity() <= ceiling
    }

    /// Radio button label.
    pub fn label(&self) -> &'static str {
        match self {
            FilterLevel::Info => "Info (show Info only)",
            FilterLevel::Warning => "Warning (show Info + Warning)",
            FilterLevel::All => "Error (show all)",
        }
    }
}

impl fmt::Display for FilterLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FilterLevel::Info => "info",
            FilterLevel::Warning => "warning",
            FilterLevel::All => "all",
        })
    }
}

/// Error returned when a filter level string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFilterLevel(pub String);

impl fmt::Display for UnknownFilterLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown filter level '{}'; expected info, warning, or all",
            self.0
        )
    }
}

impl std::error::Error for UnknownFilterLevel {}

impl FromStr for FilterLevel {
    type Err = UnknownFilterLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "info" => Ok(FilterLevel::Info),
            "warning" | "warn" => Ok(FilterLevel::Warning),
            "all" | "error" => Ok(FilterLevel::All),
            _ => Err(UnknownFilterLevel(s.to_string())),
        }
    }
}

/// Complete filter state. Tier and category toggles are AND-combined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub level: FilterLevel,
    pub show_general: bool,
    pub show_game: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            level: FilterLevel::All,
            show_general: true,
            show_game: true,
        }
    }
}

impl FilterState {
    pub fn with_level(level: FilterLevel) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Returns true if every entry passes.
    pub fn is_empty(&self) -> bool {
        self.level == FilterLevel::All && self.show_general && self.show_game
    }

    pub fn matches(&self, entry: &LogEntry) -> bool {
        let level = entry.level();
        let category_ok = match level.category() {
            Category::General => self.show_general,
            Category::Game => self.show_game,
        };
        category_ok && self.level.includes(level)
    }
}

/// Apply filters to a slice of entries, returning indices of matching entries.
///
/// Indices point into the original slice so the view never copies entries.
pub fn apply_filters(entries: &[LogEntry], filter: &FilterState) -> Vec<usize> {
    if filter.is_empty() {
        return (0..entries.len()).collect();
    }

    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| filter.matches(entry))
        .map(|(idx, _)| idx)
        .collect()
}
