// GameLog - ui/theme.rs
//
// Colour scheme and severity colour mapping.
// No dependencies on app state or business logic.

use crate::core::model::Severity;
use egui::Color32;

/// Text colour for a given severity. `None` keeps the theme's text colour.
pub fn severity_colour(severity: Severity) -> Option<Color32> {
    match severity {
        Severity::Error => Some(Color32::from_rgb(255, 102, 102)), // Red
        Severity::Warning => Some(Color32::from_rgb(255, 204, 153)), // Orange
        Severity::Info => None,
    }
}

/// Apply the configured light/dark visuals.
pub fn apply(ctx: &egui::Context, dark_mode: bool) {
    let visuals = if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    ctx.set_visuals(visuals);
}

/// Layout constants.
pub const CONTROL_WINDOW_POS: [f32; 2] = [16.0, 48.0];
pub const LOG_WINDOW_POS: [f32; 2] = [400.0, 48.0];
pub const LOG_WINDOW_SIZE: [f32; 2] = [620.0, 480.0];
pub const DEMO_WINDOW_POS: [f32; 2] = [16.0, 320.0];
