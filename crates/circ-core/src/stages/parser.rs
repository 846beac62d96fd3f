//! Parsing stage: raw line batches to semantic events.

use circ_proto::{MAX_LINE_LEN, Message};

use crate::dispatch::dispatch;
use crate::events::Event;
use crate::stages::Stage;

/// Tokenizes and dispatches every line of an inbound raw batch.
///
/// The raw batch event itself is forwarded unchanged first, so downstream
/// observers of raw traffic always see it before anything derived from it.
/// Derived semantic events follow in line order. Stateless across
/// invocations: each call is a bounded transformation of exactly its input
/// lines, with no partial-line buffering.
pub struct ParserStage;

impl Stage for ParserStage {
    fn on_event(&mut self, event: Event, forward: &mut dyn FnMut(Event)) {
        match event {
            Event::RawLines { connection, lines } => {
                forward(Event::RawLines {
                    connection: connection.clone(),
                    lines: lines.clone(),
                });

                for line in &lines {
                    if line.len() > MAX_LINE_LEN {
                        tracing::warn!(
                            len = line.len(),
                            max = MAX_LINE_LEN,
                            "inbound line exceeds soft length limit"
                        );
                    }
                    if let Some(derived) = dispatch(&connection, Message::parse(line)) {
                        forward(derived);
                    }
                }
            }
            other => forward(other),
        }
    }
}
