//! Blackjack Assistant
//!
//! Reads the player and dealer hands from the table once per cycle, keeps a
//! Hi-Lo running count across rounds and shows a bet size and a basic
//! strategy decision in a small always-on-top overlay.

mod assistant;
mod counting;
mod gui;
mod logging;
mod ocr;
mod paths;
mod recognition;

use anyhow::{anyhow, Context, Result};
use std::sync::Arc;
use std::time::Duration;

use assistant::{AssistantConfig, AssistantControl, SourceKind};
use recognition::{RecognitionSource, ReplaySource};

fn main() -> Result<()> {
    // Ensure output directories exist
    paths::ensure_directories().context("Failed to create output directories")?;

    logging::init_logging()?;

    // Set up panic hook to log panics
    std::panic::set_hook(Box::new(|panic_info| {
        let msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_default();
        tracing::error!(%location, "PANIC: {}", msg);
    }));

    // Load configuration
    assistant::init_config();
    let config = assistant::get_config();

    let source = build_source(config)?;
    let mut advisor = assistant::Advisor::from_config(config);
    let control = Arc::new(AssistantControl::new());
    let interval = Duration::from_millis(config.cycle_interval_ms);

    if config.headless {
        tracing::info!("Headless mode - advice goes to the log only");
        let mut source = source;
        let mut sink = assistant::LogSink::default();
        assistant::run_assistant_loop(
            &control,
            &mut advisor,
            source.as_mut(),
            &mut sink,
            interval,
        );
        return Ok(());
    }

    let sink = Box::new(assistant::ControlSink::new(control.clone()));
    let handle = assistant::start_assistant(control.clone(), advisor, source, sink, interval)?;

    tracing::info!("Starting overlay...");
    let result = gui::run_overlay(control.clone(), config.overlay_position);

    control.request_stop();
    if handle.join().is_err() {
        tracing::error!("Assistant thread panicked");
    }

    match result {
        Ok(()) => {
            tracing::info!("Overlay exited normally");
            Ok(())
        }
        Err(e) => {
            tracing::error!("GUI error: {}", e);
            Err(anyhow!("GUI error: {}", e))
        }
    }
}

/// Creates the recognition source selected in config.json.
fn build_source(config: &AssistantConfig) -> Result<Box<dyn RecognitionSource + Send>> {
    match config.source {
        SourceKind::Tesseract => {
            let source = ocr::TesseractSource::new(config)
                .context("Failed to set up Tesseract recognition")?;
            tracing::info!(
                player = %config.player_region_path().display(),
                dealer = %config.dealer_region_path().display(),
                "Using Tesseract recognition"
            );
            Ok(Box::new(source))
        }
        SourceKind::Replay => {
            let path = config.replay_file_path();
            let source = ReplaySource::from_file(&path)
                .with_context(|| format!("Failed to load replay from {}", path.display()))?;
            tracing::info!(path = %path.display(), "Using replay recognition");
            Ok(Box::new(source))
        }
    }
}
