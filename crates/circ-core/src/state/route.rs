//! Route reducer: which (connection, buffer) pair is in view.

use crate::events::{Event, Route};

/// Computes the next viewed route.
///
/// Switching buffers adopts the requested route; a connect points the view
/// at the new connection's status window; closing a conversation window
/// falls back to the status window of the same connection. Closing a status
/// window is resolved by the close invariant rule, which knows whether the
/// connection survives.
pub fn reduce_route(prev: &Route, event: &Event) -> Route {
    match event {
        Event::SwitchBuffer { route } => route.clone(),
        Event::Connect { connection } => Route::status(connection.clone()),
        Event::CloseWindow { route }
            if route.buffer.is_channel() || route.buffer.is_private() =>
        {
            Route::status(route.connection.clone())
        }
        _ => prev.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{BufferId, ConnectionId};

    fn at_status(id: &str) -> Route {
        Route::status(ConnectionId::new(id))
    }

    #[test]
    fn switch_buffer_adopts_the_route() {
        let next = reduce_route(
            &at_status("libera"),
            &Event::SwitchBuffer {
                route: Route {
                    connection: ConnectionId::new("oftc"),
                    buffer: BufferId::Channel("#debian".into()),
                },
            },
        );
        assert_eq!(next.connection, ConnectionId::new("oftc"));
        assert_eq!(next.buffer, BufferId::Channel("#debian".into()));
    }

    #[test]
    fn connect_views_the_new_connection_status() {
        let next = reduce_route(
            &at_status("libera"),
            &Event::Connect {
                connection: ConnectionId::new("oftc"),
            },
        );
        assert_eq!(next, at_status("oftc"));
    }

    #[test]
    fn closing_a_channel_window_returns_to_status() {
        let prev = Route {
            connection: ConnectionId::new("libera"),
            buffer: BufferId::Channel("#rust".into()),
        };
        let next = reduce_route(
            &prev,
            &Event::CloseWindow {
                route: prev.clone(),
            },
        );
        assert_eq!(next, at_status("libera"));
    }

    #[test]
    fn closing_a_status_window_leaves_route_to_the_invariant_rule() {
        let prev = at_status("libera");
        let next = reduce_route(
            &prev,
            &Event::CloseWindow {
                route: prev.clone(),
            },
        );
        assert_eq!(next, prev);
    }

    #[test]
    fn unrelated_events_keep_the_route() {
        let prev = at_status("libera");
        let next = reduce_route(
            &prev,
            &Event::RawLines {
                connection: ConnectionId::new("libera"),
                lines: vec![],
            },
        );
        assert_eq!(next, prev);
    }
}
