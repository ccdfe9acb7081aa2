//! The observation loop around the counting engine.
//!
//! This module provides:
//! - Configuration loaded from config.json
//! - The per-cycle advisor (recognize, count, evaluate, advise)
//! - Presentation sinks for the overlay and headless mode
//! - A background runner with a between-cycles reset trigger

pub mod config;
pub mod runner;
pub mod sink;
pub mod state;

pub use config::{get_config, init_config, AssistantConfig, SourceKind};
pub use runner::{run_assistant_loop, start_assistant, AssistantControl};
pub use sink::{ControlSink, LogSink};
pub use state::{Advisor, CycleOutcome};
