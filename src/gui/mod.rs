//! Floating overlay showing the current advice.
//!
//! Provides an always-on-top egui/eframe window with a New Shoe button.

pub mod render;
pub mod state;

use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui::{self, Vec2};

use crate::assistant::AssistantControl;
use state::OverlayState;

/// Overlay application.
pub struct OverlayApp {
    control: Arc<AssistantControl>,
    state: OverlayState,
}

impl OverlayApp {
    pub fn new(control: Arc<AssistantControl>) -> Self {
        Self {
            control,
            state: OverlayState::default(),
        }
    }

    /// Pull the latest outcome from the assistant loop.
    fn poll(&mut self) {
        self.state.loop_running = self.control.is_running();
        if let Some(outcome) = self.control.latest() {
            self.state.latest = Some(outcome);
        }
    }

    /// Handle New Shoe button click.
    fn handle_new_shoe(&mut self) {
        self.control.request_reset();
        self.state.shoe_reset_at = Some(Instant::now());
        tracing::info!("GUI: New shoe requested");
    }
}

impl eframe::App for OverlayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll();

        // Keep polling the loop while the window is open
        ctx.request_repaint_after(Duration::from_millis(200));

        egui::CentralPanel::default().show(ctx, |ui| {
            render::render_status(ui, &self.state);
            if render::render_controls(ui, &self.state) {
                self.handle_new_shoe();
            }
        });
    }
}

/// Run the overlay.
/// This function blocks until the window is closed.
pub fn run_overlay(control: Arc<AssistantControl>, position: [f32; 2]) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(Vec2::new(320.0, 110.0))
            .with_position(position)
            .with_always_on_top()
            .with_decorations(false)
            .with_resizable(false)
            .with_title("Blackjack Assistant"),
        ..Default::default()
    };

    eframe::run_native(
        "Blackjack Assistant",
        options,
        Box::new(|_cc| Ok(Box::new(OverlayApp::new(control)))),
    )
}
