// GameLog - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::constants::{TAG_ERROR, TAG_GAME, TAG_INFO, TAG_WARN};
use chrono::Timelike;
use std::fmt;

// =============================================================================
// Log level
// =============================================================================

/// The six kinds of entry the store records.
///
/// Each level combines a [`Severity`] with a [`Category`]; game levels map onto
/// the same three severities as general ones but carry a distinct origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    GameEvent,
    GameWarning,
    GameError,
}

impl LogLevel {
    /// Returns all variants in declaration order.
    pub fn all() -> &'static [LogLevel] {
        &[
            LogLevel::Info,
            LogLevel::Warning,
            LogLevel::Error,
            LogLevel::GameEvent,
            LogLevel::GameWarning,
            LogLevel::GameError,
        ]
    }

    pub fn severity(&self) -> Severity {
        match self {
            LogLevel::Info | LogLevel::GameEvent => Severity::Info,
            LogLevel::Warning | LogLevel::GameWarning => Severity::Warning,
            LogLevel::Error | LogLevel::GameError => Severity::Error,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            LogLevel::Info | LogLevel::Warning | LogLevel::Error => Category::General,
            LogLevel::GameEvent | LogLevel::GameWarning | LogLevel::GameError => Category::Game,
        }
    }

    /// Export-facing tag. Every game level collapses to `[GAME]`.
    pub fn tag(&self) -> &'static str {
        match self.category() {
            Category::Game => TAG_GAME,
            Category::General => self.severity().tag(),
        }
    }

    /// Prefix written by the console mirror, e.g. `[WARN][GAME]`.
    pub fn console_prefix(&self) -> &'static str {
        match self {
            LogLevel::Info => "[INFO]",
            LogLevel::Warning => "[WARN]",
            LogLevel::Error => "[ERROR]",
            LogLevel::GameEvent => "[INFO][GAME]",
            LogLevel::GameWarning => "[WARN][GAME]",
            LogLevel::GameError => "[ERROR][GAME]",
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Info => "Info",
            LogLevel::Warning => "Warning",
            LogLevel::Error => "Error",
            LogLevel::GameEvent => "Game Event",
            LogLevel::GameWarning => "Game Warning",
            LogLevel::GameError => "Game Error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Severity / category
// =============================================================================

/// Importance of an entry, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Export tag used for general-category entries of this severity.
    pub fn tag(&self) -> &'static str {
        match self {
            Severity::Info => TAG_INFO,
            Severity::Warning => TAG_WARN,
            Severity::Error => TAG_ERROR,
        }
    }
}

/// Origin of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    General,
    Game,
}

// =============================================================================
// Clock time
// =============================================================================

/// Local wall-clock time of day with second precision. No date component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl ClockTime {
    /// Current local time.
    pub fn now() -> Self {
        let now = chrono::Local::now();
        // chrono guarantees hour < 24, minute < 60, second < 60.
        Self {
            hour: now.hour() as u8,
            minute: now.minute() as u8,
            second: now.second() as u8,
        }
    }

    /// Build a time from its components, rejecting out-of-range values.
    pub fn from_hms(hour: u8, minute: u8, second: u8) -> Option<Self> {
        if hour < 24 && minute < 60 && second < 60 {
            Some(Self {
                hour,
                minute,
                second,
            })
        } else {
            None
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

// =============================================================================
// Log entry
// =============================================================================

/// A single recorded log line.
///
/// Fields are private: an entry cannot be altered once the store has it.
/// `Display` renders the canonical export line `[HH:MM:SS] TAG MESSAGE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    level: LogLevel,
    timestamp: ClockTime,
    message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, timestamp: ClockTime, message: impl Into<String>) -> Self {
        Self {
            level,
            timestamp,
            message: message.into(),
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn timestamp(&self) -> ClockTime {
        self.timestamp
    }

    /// Export tag, derived from the level.
    pub fn tag(&self) -> &'static str {
        self.level.tag()
    }

    /// Raw message text, unescaped.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} {}", self.timestamp, self.tag(), self.message)
    }
}
