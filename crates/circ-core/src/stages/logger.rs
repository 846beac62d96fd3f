//! Logging stage.

use crate::events::{Event, EventKind};
use crate::stages::Stage;

/// Debug-logs every event flowing through the pipeline, then forwards it
/// unchanged. Kinds in the exclusion list are skipped — keystroke-level
/// noise would drown everything else. Belongs last in the stage list so it
/// sees derived events too.
pub struct LoggerStage {
    exclude: Vec<EventKind>,
}

impl LoggerStage {
    pub fn new() -> Self {
        Self {
            exclude: vec![EventKind::InputChanged],
        }
    }

    pub fn with_exclude(exclude: Vec<EventKind>) -> Self {
        Self { exclude }
    }
}

impl Default for LoggerStage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for LoggerStage {
    fn on_event(&mut self, event: Event, forward: &mut dyn FnMut(Event)) {
        if !self.exclude.contains(&event.kind()) {
            tracing::debug!(?event, "event");
        }
        forward(event);
    }
}
