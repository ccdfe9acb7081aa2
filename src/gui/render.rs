//! Overlay rendering functions.

use std::time::Instant;

use eframe::egui::{self, Color32, RichText};

use super::state::OverlayState;
use crate::assistant::CycleOutcome;
use crate::counting::Decision;

fn decision_color(decision: Decision) -> Color32 {
    match decision {
        Decision::Hit => Color32::from_rgb(120, 200, 255),
        Decision::Stand => Color32::from_rgb(255, 210, 90),
        Decision::DoubleDown => Color32::from_rgb(120, 230, 120),
        Decision::Split => Color32::from_rgb(240, 140, 240),
    }
}

/// Render the advice lines.
pub fn render_status(ui: &mut egui::Ui, state: &OverlayState) {
    let color = match &state.latest {
        Some(CycleOutcome::Advice(advice)) => decision_color(advice.decision),
        _ => Color32::from_gray(220),
    };

    ui.label(
        RichText::new(state.headline(Instant::now()))
            .size(14.0)
            .strong()
            .color(color),
    );

    if let Some(detail) = state.detail() {
        ui.label(RichText::new(detail).size(11.0).color(Color32::from_gray(170)));
    }
}

/// Render the New Shoe button. Returns true if it was clicked.
pub fn render_controls(ui: &mut egui::Ui, state: &OverlayState) -> bool {
    let mut clicked = false;
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.add_enabled_ui(state.loop_running, |ui| {
            if ui.button(RichText::new("New Shoe").size(13.0)).clicked() {
                clicked = true;
            }
        });
    });
    clicked
}
