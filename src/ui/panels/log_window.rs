// GameLog - ui/panels/log_window.rs
//
// Game Log window: filter options, clear/save/copy actions, the scrolling
// colour-coded entry list, and the input box that logs typed text.

use crate::app::state::AppState;
use crate::core::filter::FilterLevel;
use crate::ui::theme;
use crate::util::constants::MAX_INPUT_CHARS;

/// Render the Game Log window if it is visible.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.log_window_visible {
        return;
    }

    let mut open = true;
    egui::Window::new("Game Log")
        .open(&mut open)
        .default_pos(theme::LOG_WINDOW_POS)
        .default_size(theme::LOG_WINDOW_SIZE)
        .show(ctx, |ui| {
            toolbar(ui, state);
            ui.separator();
            entry_list(ui, state);
            ui.separator();
            input_box(ui, state);
        });
    if !open {
        state.log_window_visible = false;
    }
}

fn toolbar(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.menu_button("Options", |ui| {
            ui.label("Log Filter Level:");
            let mut changed = false;
            for level in FilterLevel::all() {
                changed |= ui
                    .radio_value(&mut state.filter_state.level, *level, level.label())
                    .changed();
            }
            ui.separator();
            changed |= ui
                .checkbox(&mut state.filter_state.show_general, "General entries")
                .changed();
            changed |= ui
                .checkbox(&mut state.filter_state.show_game, "Game entries")
                .changed();
            if changed {
                state.apply_filters();
            }
        });

        if ui.button("Clear").clicked() {
            state.clear_log();
        }
        if ui.button("Save To File").clicked() {
            state.save_log_default();
        }
        if ui.button("Copy To Clipboard").clicked() {
            let text = state.clipboard_text();
            ui.ctx().copy_text(text);
        }
    });
}

fn entry_list(ui: &mut egui::Ui, state: &AppState) {
    // Reserve room for the separator and the input row below.
    let footer = ui.spacing().item_spacing.y * 2.0 + ui.spacing().interact_size.y;
    let height = (ui.available_height() - footer).max(0.0);

    egui::ScrollArea::both()
        .id_salt("log_entries")
        .max_height(height)
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for entry in state.visible_entries() {
                let mut text = egui::RichText::new(entry.to_string()).monospace();
                if let Some(colour) = theme::severity_colour(entry.level().severity()) {
                    text = text.color(colour);
                }
                ui.label(text);
            }
        });
}

fn input_box(ui: &mut egui::Ui, state: &mut AppState) {
    let response = ui.add(
        egui::TextEdit::singleline(&mut state.input_buffer)
            .char_limit(MAX_INPUT_CHARS)
            .hint_text("Input")
            .desired_width(f32::INFINITY),
    );
    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        state.submit_input();
        response.request_focus();
    }
}
