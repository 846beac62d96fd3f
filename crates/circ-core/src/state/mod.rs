//! Application state composition and the root reducer.
//!
//! ## State Hierarchy
//!
//! ```text
//! RootState
//! ├── route: Route                 (viewed connection + buffer)
//! └── connections: BTreeMap<ConnectionId, ConnectionState>
//! ```
//!
//! `reduce_root` is a pure function from (state, event) to the next state:
//! it never mutates its input and replaces the whole value on every step.
//! Invariant rules run after base reduction; the only registered one guards
//! window closing.

pub mod connection;
pub mod route;

use std::collections::BTreeMap;

use serde::Serialize;

pub use connection::ConnectionState;
pub use route::reduce_route;

use crate::events::{ConnectionId, Event, Route};

/// The whole application state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootState {
    /// The currently viewed (connection, buffer) pair.
    pub route: Route,
    connections: BTreeMap<ConnectionId, ConnectionState>,
}

impl RootState {
    /// Fresh state with no connections, viewing `route`.
    pub fn new(route: Route) -> Self {
        Self {
            route,
            connections: BTreeMap::new(),
        }
    }

    /// Read-only view of the connection map.
    pub fn connections(&self) -> &BTreeMap<ConnectionId, ConnectionState> {
        &self.connections
    }
}

/// Computes the next root state for one event.
///
/// Unrouted events pass through unchanged. Routed events reduce the route
/// and the targeted connection entry, then any invariant rule registered
/// for the event kind runs on the intermediate state.
pub fn reduce_root(prev: &RootState, event: &Event) -> RootState {
    // Events without a connection association never reach the app reducers.
    if event.connection().is_none() {
        return prev.clone();
    }

    let intermediate = RootState {
        route: reduce_route(&prev.route, event),
        connections: reduce_connection_map(&prev.connections, event),
    };

    match event {
        Event::CloseWindow { route } => apply_close_window(intermediate, route),
        _ => intermediate,
    }
}

/// Recomputes the entry the event targets.
///
/// An existing key is always re-reduced; a connect event also creates the
/// key. Events targeting an unknown key otherwise leave the map alone.
fn reduce_connection_map(
    prev: &BTreeMap<ConnectionId, ConnectionState>,
    event: &Event,
) -> BTreeMap<ConnectionId, ConnectionState> {
    let Some(id) = event.connection() else {
        return prev.clone();
    };

    if prev.contains_key(id) || matches!(event, Event::Connect { .. }) {
        let mut next = prev.clone();
        next.insert(id.clone(), connection::reduce_connection(prev.get(id), event));
        next
    } else {
        prev.clone()
    }
}

/// Close suppression invariant: the last connection never closes, and a
/// close while a conversation buffer is viewed is a no-op. A permitted
/// close removes exactly the targeted key and repoints a route left
/// dangling at the first remaining connection's status window.
fn apply_close_window(state: RootState, closed: &Route) -> RootState {
    let only_connection = state.connections.len() <= 1;
    let conversation = closed.buffer.is_channel() || closed.buffer.is_private();
    if only_connection || conversation {
        return state;
    }

    let RootState {
        route,
        mut connections,
    } = state;
    connections.remove(&closed.connection);

    let route = if route.connection == closed.connection {
        match connections.keys().next() {
            Some(id) => Route::status(id.clone()),
            None => route,
        }
    } else {
        route
    };

    RootState { route, connections }
}

#[cfg(test)]
mod tests {
    use circ_proto::Prefix;

    use super::*;
    use crate::events::{BufferId, MessageEvent};

    fn connected(ids: &[&str]) -> RootState {
        let mut state = RootState::new(Route::status(ConnectionId::new(ids[0])));
        for id in ids {
            state = reduce_root(
                &state,
                &Event::Connect {
                    connection: ConnectionId::new(*id),
                },
            );
        }
        state
    }

    fn close(state: &RootState, route: Route) -> RootState {
        reduce_root(state, &Event::CloseWindow { route })
    }

    #[test]
    fn connect_inserts_a_default_entry() {
        let state = connected(&["libera"]);
        assert_eq!(
            state.connections().get(&ConnectionId::new("libera")),
            Some(&ConnectionState::default())
        );
    }

    #[test]
    fn connect_for_existing_key_resets_the_entry() {
        let mut state = connected(&["libera"]);
        state = reduce_root(
            &state,
            &Event::Message {
                connection: ConnectionId::new("libera"),
                message: MessageEvent::Join {
                    prefix: Prefix::parse("dan!d@localhost"),
                    channel: "#rust".into(),
                },
            },
        );
        assert_eq!(state.connections().len(), 1);

        state = reduce_root(
            &state,
            &Event::Connect {
                connection: ConnectionId::new("libera"),
            },
        );
        assert_eq!(
            state.connections().get(&ConnectionId::new("libera")),
            Some(&ConnectionState::default())
        );
    }

    #[test]
    fn message_for_unknown_connection_leaves_map_unchanged() {
        let state = connected(&["libera"]);
        let next = reduce_root(
            &state,
            &Event::Message {
                connection: ConnectionId::new("ghost"),
                message: MessageEvent::Ping {
                    prefix: Prefix::none(),
                    token: "1".into(),
                },
            },
        );
        assert_eq!(next.connections(), state.connections());
    }

    #[test]
    fn unrouted_event_is_a_no_op() {
        let state = connected(&["libera", "oftc"]);
        let next = reduce_root(&state, &Event::InputChanged { value: "x".into() });
        assert_eq!(next, state);
    }

    #[test]
    fn closing_the_sole_connection_is_suppressed() {
        let state = connected(&["libera"]);
        let next = close(&state, Route::status(ConnectionId::new("libera")));
        assert_eq!(next.connections().len(), 1);
    }

    #[test]
    fn closing_while_a_channel_is_viewed_is_suppressed() {
        let state = connected(&["libera", "oftc"]);
        let next = close(
            &state,
            Route {
                connection: ConnectionId::new("oftc"),
                buffer: BufferId::Channel("#debian".into()),
            },
        );
        assert_eq!(next.connections().len(), 2);
        // The conversation window itself still collapses to status.
        assert_eq!(next.route, Route::status(ConnectionId::new("oftc")));
    }

    #[test]
    fn closing_while_a_private_chat_is_viewed_is_suppressed() {
        let state = connected(&["libera", "oftc"]);
        let next = close(
            &state,
            Route {
                connection: ConnectionId::new("oftc"),
                buffer: BufferId::Private("dan".into()),
            },
        );
        assert_eq!(next.connections().len(), 2);
    }

    #[test]
    fn closing_a_status_window_removes_exactly_that_entry() {
        let mut state = connected(&["libera", "oftc"]);
        state = reduce_root(
            &state,
            &Event::Message {
                connection: ConnectionId::new("libera"),
                message: MessageEvent::Nick {
                    prefix: Prefix::parse("dan!d@localhost"),
                    nick: "danny".into(),
                },
            },
        );

        let next = close(&state, Route::status(ConnectionId::new("oftc")));
        assert_eq!(next.connections().len(), 1);
        let survivor = next
            .connections()
            .get(&ConnectionId::new("libera"))
            .expect("libera survives");
        assert_eq!(survivor.nick.as_deref(), Some("danny"));
        // Route repoints at a connection that still exists.
        assert_eq!(next.route, Route::status(ConnectionId::new("libera")));
    }

    #[test]
    fn reduction_never_mutates_its_input() {
        let state = connected(&["libera", "oftc"]);
        let snapshot = state.clone();
        let _ = close(&state, Route::status(ConnectionId::new("oftc")));
        assert_eq!(state, snapshot);
    }
}
