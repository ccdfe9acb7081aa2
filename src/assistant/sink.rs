//! Where cycle outcomes are rendered.

use std::sync::Arc;

use crate::assistant::runner::AssistantControl;
use crate::assistant::state::CycleOutcome;

/// Consumes the outcome of every cycle.
pub trait PresentationSink {
    fn render(&mut self, outcome: &CycleOutcome);
}

/// Headless sink: writes each outcome to the log.
#[derive(Debug, Default)]
pub struct LogSink {
    last: Option<String>,
}

impl PresentationSink for LogSink {
    fn render(&mut self, outcome: &CycleOutcome) {
        let text = outcome.status_text();
        // Repeated identical outcomes only go to the debug log
        if self.last.as_deref() == Some(text.as_str()) {
            tracing::debug!("{}", text);
        } else {
            tracing::info!("{}", text);
            self.last = Some(text);
        }
    }
}

/// Publishes outcomes to the shared control block for the overlay to poll.
pub struct ControlSink {
    control: Arc<AssistantControl>,
}

impl ControlSink {
    pub fn new(control: Arc<AssistantControl>) -> Self {
        Self { control }
    }
}

impl PresentationSink for ControlSink {
    fn render(&mut self, outcome: &CycleOutcome) {
        tracing::debug!("{}", outcome.status_text());
        self.control.publish(outcome.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::state::WaitReason;

    fn waiting(running_count: i32) -> CycleOutcome {
        CycleOutcome::Waiting {
            reason: WaitReason::NoCards,
            bet: 10,
            running_count,
            true_count: 0.0,
        }
    }

    #[test]
    fn test_control_sink_publishes_latest() {
        let control = Arc::new(AssistantControl::new());
        let mut sink = ControlSink::new(control.clone());
        assert!(control.latest().is_none());

        sink.render(&waiting(1));
        sink.render(&waiting(2));
        assert_eq!(control.latest(), Some(waiting(2)));
    }

    #[test]
    fn test_log_sink_remembers_last_line() {
        let mut sink = LogSink::default();
        sink.render(&waiting(3));
        sink.render(&waiting(3));
        assert_eq!(sink.last, Some(waiting(3).status_text()));
    }
}
