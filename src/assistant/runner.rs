//! Assistant runner - the observation loop.
//!
//! Runs one cycle at a time on a background thread, then sleeps for the
//! configured interval. The GUI talks to the loop only through
//! `AssistantControl`.

use anyhow::{anyhow, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::assistant::sink::PresentationSink;
use crate::assistant::state::{Advisor, CycleOutcome, WaitReason};
use crate::recognition::RecognitionSource;

/// Longest uninterrupted sleep; stop requests are noticed within this time.
const SLEEP_SLICE: Duration = Duration::from_millis(50);

/// Flags and the latest outcome shared between the loop and the GUI.
#[derive(Debug, Default)]
pub struct AssistantControl {
    running: AtomicBool,
    stop_requested: AtomicBool,
    reset_requested: AtomicBool,
    latest: Mutex<Option<CycleOutcome>>,
}

impl AssistantControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the loop is currently running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Asks the loop to reset the count before its next cycle.
    pub fn request_reset(&self) {
        self.reset_requested.store(true, Ordering::SeqCst);
    }

    /// Consumes a pending reset request.
    pub fn take_reset_request(&self) -> bool {
        self.reset_requested.swap(false, Ordering::SeqCst)
    }

    pub fn request_stop(&self) {
        self.stop_requested.store(true, Ordering::SeqCst);
    }

    pub fn is_stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::SeqCst)
    }

    /// Stores the outcome of the latest cycle (called from the loop).
    pub fn publish(&self, outcome: CycleOutcome) {
        if let Ok(mut latest) = self.latest.lock() {
            *latest = Some(outcome);
        }
    }

    /// Gets the outcome of the latest cycle (for GUI display).
    pub fn latest(&self) -> Option<CycleOutcome> {
        self.latest.lock().ok().and_then(|l| l.clone())
    }
}

/// Starts the observation loop in a background thread.
///
/// Returns immediately after spawning the thread.
///
/// # Errors
/// Returns an error if:
/// - The loop is already running
/// - The thread cannot be spawned
pub fn start_assistant(
    control: Arc<AssistantControl>,
    mut advisor: Advisor,
    mut source: Box<dyn RecognitionSource + Send>,
    mut sink: Box<dyn PresentationSink + Send>,
    interval: Duration,
) -> Result<JoinHandle<()>> {
    if control.running.swap(true, Ordering::SeqCst) {
        return Err(anyhow!("Assistant is already running"));
    }
    control.stop_requested.store(false, Ordering::SeqCst);

    tracing::info!(
        interval_ms = interval.as_millis() as u64,
        "Starting assistant loop"
    );

    let thread_control = control.clone();
    let spawned = thread::Builder::new()
        .name("assistant".to_string())
        .spawn(move || {
            run_assistant_loop(
                &thread_control,
                &mut advisor,
                source.as_mut(),
                sink.as_mut(),
                interval,
            );
            thread_control.running.store(false, Ordering::SeqCst);
            tracing::info!("Assistant thread finished");
        });

    match spawned {
        Ok(handle) => Ok(handle),
        Err(e) => {
            control.running.store(false, Ordering::SeqCst);
            Err(anyhow!("Failed to spawn assistant thread: {}", e))
        }
    }
}

/// Runs cycles until a stop is requested or the source is finished.
///
/// Resets requested through `control` are applied between cycles, so the
/// count is only ever touched from this loop.
pub fn run_assistant_loop(
    control: &AssistantControl,
    advisor: &mut Advisor,
    source: &mut dyn RecognitionSource,
    sink: &mut dyn PresentationSink,
    interval: Duration,
) {
    let mut cycles: u64 = 0;

    while !control.is_stop_requested() {
        if control.take_reset_request() {
            advisor.reset();
            sink.render(&advisor.waiting(WaitReason::NewShoe));
            sleep_unless_stopped(control, interval);
            continue;
        }

        let outcome = advisor.cycle(source);
        sink.render(&outcome);
        cycles += 1;

        if source.is_finished() {
            tracing::info!(cycles, "Recognition source finished");
            break;
        }

        sleep_unless_stopped(control, interval);
    }

    let tracker = advisor.tracker();
    let state = tracker.snapshot();
    tracing::info!(
        cycles,
        cards_seen = tracker.cards_seen(),
        running_count = state.running_count,
        decks_remaining = state.decks_remaining,
        "Assistant loop stopped"
    );
}

fn sleep_unless_stopped(control: &AssistantControl, interval: Duration) {
    let deadline = Instant::now() + interval;
    while !control.is_stop_requested() {
        let now = Instant::now();
        if now >= deadline {
            break;
        }
        thread::sleep((deadline - now).min(SLEEP_SLICE));
    }
}
