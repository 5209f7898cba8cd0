// GameLog - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "GameLog";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "GameLog";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Log store
// =============================================================================

/// Export tags. Game-origin entries share a single tag regardless of severity.
pub const TAG_INFO: &str = "[INFO]";
pub const TAG_WARN: &str = "[WARN]";
pub const TAG_ERROR: &str = "[ERROR]";
pub const TAG_GAME: &str = "[GAME]";

/// Default file written by "Save To File" (relative to the working directory).
pub const DEFAULT_SAVE_FILE_NAME: &str = "game_log.txt";

/// Maximum number of characters accepted by the log window input box.
pub const MAX_INPUT_CHARS: usize = 255;

/// Prefix used when recording text typed into the log window.
pub const USER_INPUT_PREFIX: &str = "User typed: ";

// =============================================================================
// Demo content
// =============================================================================

/// Recorded at start-up.
pub const STARTUP_INFO_MESSAGE: &str = "Game started successfully";
pub const STARTUP_GAME_MESSAGE: &str = "Application initialized";

/// Text placed on the clipboard by the Log Demo window.
pub const DEMO_CLIPBOARD_TEXT: &str = "Hello, world!";

// =============================================================================
// UI
// =============================================================================

/// Initial and minimum native window size.
pub const WINDOW_SIZE: [f32; 2] = [1100.0, 720.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [640.0, 400.0];

/// Width of the Game Control test buttons.
pub const TEST_BUTTON_WIDTH: f32 = 100.0;

/// Width of the "Toggle Log Window" button.
pub const TOGGLE_BUTTON_WIDTH: f32 = 200.0;

// =============================================================================
// Logging / config
// =============================================================================

/// Default diagnostics level when neither RUST_LOG, --debug nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Diagnostics levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
