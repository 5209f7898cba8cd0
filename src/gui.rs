// GameLog - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the menu bar, status bar and the three windows.

use crate::app::state::AppState;
use crate::ui;
use crate::util::constants;

/// The GameLog application.
pub struct GameLogApp {
    pub state: AppState,
}

impl GameLogApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for GameLogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    let save_label = format!("Save Log ({})", self.state.save_path.display());
                    if ui.button(save_label).clicked() {
                        self.state.save_log_default();
                        ui.close_menu();
                    }
                    if ui.button("Save Log As\u{2026}").clicked() {
                        if let Some(dest) = rfd::FileDialog::new()
                            .add_filter("Text", &["txt", "log"])
                            .set_file_name(constants::DEFAULT_SAVE_FILE_NAME)
                            .save_file()
                        {
                            self.state.save_log(&dest);
                        }
                        ui.close_menu();
                    }
                    let has_entries = !self.state.log.is_empty();
                    ui.add_enabled_ui(has_entries, |ui| {
                        if ui.button("Copy Log to Clipboard").clicked() {
                            let text = self.state.clipboard_text();
                            ctx.copy_text(text);
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.state.log_window_visible, "Game Log");
                    ui.checkbox(&mut self.state.demo_window_visible, "Log Demo");
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let total = self.state.log.count();
                    let visible = self.state.filtered_indices.len();
                    if total > 0 {
                        ui.label(format!("{visible}/{total} entries"));
                    }
                });
            });
        });

        // Empty backdrop; the windows float above it.
        egui::CentralPanel::default().show(ctx, |_ui| {});

        ui::panels::demo::render(ctx, &mut self.state);
        ui::panels::control::render(ctx, &mut self.state);
        ui::panels::log_window::render(ctx, &mut self.state);
    }
}
