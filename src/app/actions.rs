// GameLog - app/actions.rs
//
// The demo game's log-producing actions: the start-up messages and the six
// test buttons of the Game Control window.

use crate::core::model::LogLevel;
use crate::core::store::LogStore;
use crate::util::constants;

/// One Game Control test button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Info,
    Warning,
    Error,
    GameEvent,
    GameWarning,
    GameError,
}

impl GameAction {
    /// General-category buttons, in row order.
    pub const GENERAL: [GameAction; 3] = [GameAction::Info, GameAction::Warning, GameAction::Error];

    /// Game-category buttons, in row order.
    pub const GAME: [GameAction; 3] = [
        GameAction::GameEvent,
        GameAction::GameWarning,
        GameAction::GameError,
    ];

    pub fn label(&self) -> &'static str {
        self.level().label()
    }

    pub fn level(&self) -> LogLevel {
        match self {
            GameAction::Info => LogLevel::Info,
            GameAction::Warning => LogLevel::Warning,
            GameAction::Error => LogLevel::Error,
            GameAction::GameEvent => LogLevel::GameEvent,
            GameAction::GameWarning => LogLevel::GameWarning,
            GameAction::GameError => LogLevel::GameError,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            GameAction::Info => "Test info message from game",
            GameAction::Warning => "Test warning message from game",
            GameAction::Error => "Test error message from game",
            GameAction::GameEvent => "Player made a move",
            GameAction::GameWarning => "Invalid move attempted",
            GameAction::GameError => "Game state corrupted",
        }
    }

    pub fn apply(&self, log: &mut LogStore) {
        log.record(self.level(), self.message());
    }
}

/// Messages recorded once when the game starts.
pub fn start_up(log: &mut LogStore) {
    log.log_info(constants::STARTUP_INFO_MESSAGE);
    log.log_game_event(constants::STARTUP_GAME_MESSAGE);
}
