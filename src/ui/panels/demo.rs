// GameLog - ui/panels/demo.rs
//
// Log Demo window: a clipboard smoke test alongside the app version.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants;

/// Render the Log Demo window if it is visible.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let mut open = state.demo_window_visible;
    egui::Window::new("Log Demo")
        .open(&mut open)
        .default_pos(theme::DEMO_WINDOW_POS)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(format!(
                "{} v{}",
                constants::APP_NAME,
                constants::APP_VERSION
            ));
            ui.label(format!("{} entries logged", state.log.count()));
            ui.separator();
            let label = format!("Copy \"{}\" to clipboard", constants::DEMO_CLIPBOARD_TEXT);
            if ui.button(label).clicked() {
                ui.ctx().copy_text(constants::DEMO_CLIPBOARD_TEXT.to_string());
                state.status_message = "Copied demo text to clipboard.".to_string();
            }
        });
    state.demo_window_visible = open;
}
