// GameLog - ui/panels/control.rs
//
// Game Control window: one button per log level plus the log window toggle.

use crate::app::actions::GameAction;
use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants::{TEST_BUTTON_WIDTH, TOGGLE_BUTTON_WIDTH};

/// Render the Game Control window.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    egui::Window::new("Game Control")
        .default_pos(theme::CONTROL_WINDOW_POS)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("Game Log Test Buttons");
            ui.separator();

            ui.label("Log Level Tests:");
            button_row(ui, state, &GameAction::GENERAL);

            ui.label("Game Event Tests:");
            button_row(ui, state, &GameAction::GAME);

            ui.separator();
            let height = ui.spacing().interact_size.y;
            if ui
                .add_sized([TOGGLE_BUTTON_WIDTH, height], egui::Button::new("Toggle Log Window"))
                .clicked()
            {
                state.toggle_log_window();
            }
        });
}

fn button_row(ui: &mut egui::Ui, state: &mut AppState, actions: &[GameAction]) {
    let height = ui.spacing().interact_size.y;
    ui.horizontal(|ui| {
        for action in actions {
            if ui
                .add_sized([TEST_BUTTON_WIDTH, height], egui::Button::new(action.label()))
                .clicked()
            {
                state.run_action(*action);
            }
        }
    });
}
