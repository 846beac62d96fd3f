//! Event-processing driver.
//!
//! The engine owns the stage list and the root state — the explicitly
//! constructed replacement for an ambient singleton store. Processing is
//! single-threaded and run-to-completion: one event is fully staged and
//! reduced before the next is admitted, and the state value is replaced
//! wholesale on every reduction.

use crate::events::Event;
use crate::stages::{LoggerStage, ParserStage, Stage};
use crate::state::{RootState, reduce_root};

/// The synchronous processing loop: stages in front, reducers behind.
pub struct Engine {
    stages: Vec<Box<dyn Stage>>,
    state: RootState,
}

impl Engine {
    /// Engine with the standard stage order: parser first, logger last.
    pub fn new(state: RootState) -> Self {
        Self::with_stages(
            state,
            vec![Box::new(ParserStage), Box::new(LoggerStage::new())],
        )
    }

    /// Engine with a custom stage list, in invocation order.
    pub fn with_stages(state: RootState, stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages, state }
    }

    /// Current state.
    pub fn state(&self) -> &RootState {
        &self.state
    }

    /// Processes one event to completion.
    ///
    /// The event is folded through the stage list front-to-back — each
    /// stage's forwards feed the next stage — and every event that survives
    /// the final stage is reduced into the state in forwarded order. The
    /// observable stream (what reached the reducer) is returned.
    pub fn process(&mut self, event: Event) -> Vec<Event> {
        let mut events = vec![event];
        for stage in &mut self.stages {
            let mut next = Vec::new();
            for event in events {
                stage.on_event(event, &mut |out| next.push(out));
            }
            events = next;
        }

        for event in &events {
            self.state = reduce_root(&self.state, event);
        }
        events
    }

    /// Drains an iterator of events through [`Engine::process`] in order.
    pub fn process_batch(&mut self, events: impl IntoIterator<Item = Event>) -> Vec<Event> {
        let mut observed = Vec::new();
        for event in events {
            observed.extend(self.process(event));
        }
        observed
    }
}
