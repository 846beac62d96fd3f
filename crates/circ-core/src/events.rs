//! Engine event types.
//!
//! All inputs to the engine are converted to [`Event`] before processing.
//! The stage pipeline may derive further events (semantic messages from raw
//! batches); the reducers pattern-match on these events to produce the next
//! state.

use std::fmt;

use circ_proto::Prefix;
use serde::Serialize;

/// Opaque key distinguishing one live server connection among several.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ConnectionId(String);

impl ConnectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which buffer of a connection is in view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BufferId {
    /// The connection's status window.
    Status,
    /// A channel conversation.
    Channel(String),
    /// A private conversation with one user.
    Private(String),
}

impl BufferId {
    pub fn is_channel(&self) -> bool {
        matches!(self, BufferId::Channel(_))
    }

    pub fn is_private(&self) -> bool {
        matches!(self, BufferId::Private(_))
    }
}

/// The currently viewed (connection, buffer) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub connection: ConnectionId,
    pub buffer: BufferId,
}

impl Route {
    /// Status buffer of the given connection.
    pub fn status(connection: ConnectionId) -> Self {
        Self {
            connection,
            buffer: BufferId::Status,
        }
    }
}

/// Semantic events derived from recognized inbound commands.
///
/// A closed set: extending recognition means adding a variant here and an
/// arm in [`crate::dispatch::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageEvent {
    /// Someone joined a channel.
    Join { prefix: Prefix, channel: String },
    /// A nick change.
    Nick { prefix: Prefix, nick: String },
    /// A notice to a target.
    Notice {
        prefix: Prefix,
        target: String,
        text: String,
    },
    /// Server liveness probe.
    Ping { prefix: Prefix, token: String },
    /// A message to a channel or user.
    Privmsg {
        prefix: Prefix,
        target: String,
        text: String,
    },
}

/// Unified event enum for the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// One inbound batch of raw lines for a connection.
    RawLines {
        connection: ConnectionId,
        lines: Vec<String>,
    },
    /// A semantic event derived from one recognized raw line.
    Message {
        connection: ConnectionId,
        message: MessageEvent,
    },
    /// Request to open (or reopen) a connection.
    Connect { connection: ConnectionId },
    /// Request to close the window identified by `route`.
    CloseWindow { route: Route },
    /// The viewed (connection, buffer) selection changed.
    SwitchBuffer { route: Route },
    /// Keystroke-level input mirror; unrouted and excluded from logging.
    InputChanged { value: String },
}

/// Discriminant of [`Event`], used for logger exclusion lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    RawLines,
    Message,
    Connect,
    CloseWindow,
    SwitchBuffer,
    InputChanged,
}

impl Event {
    /// The connection this event is associated with; `None` for events that
    /// carry no route/connection association and pass through the reducers
    /// unchanged.
    pub fn connection(&self) -> Option<&ConnectionId> {
        match self {
            Event::RawLines { connection, .. }
            | Event::Message { connection, .. }
            | Event::Connect { connection } => Some(connection),
            Event::CloseWindow { route } | Event::SwitchBuffer { route } => {
                Some(&route.connection)
            }
            Event::InputChanged { .. } => None,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Event::RawLines { .. } => EventKind::RawLines,
            Event::Message { .. } => EventKind::Message,
            Event::Connect { .. } => EventKind::Connect,
            Event::CloseWindow { .. } => EventKind::CloseWindow,
            Event::SwitchBuffer { .. } => EventKind::SwitchBuffer,
            Event::InputChanged { .. } => EventKind::InputChanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routed_events_expose_their_connection() {
        let id = ConnectionId::new("libera");
        let event = Event::Connect {
            connection: id.clone(),
        };
        assert_eq!(event.connection(), Some(&id));

        let event = Event::CloseWindow {
            route: Route::status(id.clone()),
        };
        assert_eq!(event.connection(), Some(&id));
    }

    #[test]
    fn input_changed_is_unrouted() {
        let event = Event::InputChanged {
            value: "hel".into(),
        };
        assert_eq!(event.connection(), None);
        assert_eq!(event.kind(), EventKind::InputChanged);
    }

    #[test]
    fn buffer_kind_predicates() {
        assert!(BufferId::Channel("#rust".into()).is_channel());
        assert!(BufferId::Private("dan".into()).is_private());
        assert!(!BufferId::Status.is_channel());
        assert!(!BufferId::Status.is_private());
    }
}
