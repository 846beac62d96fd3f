//! Per-connection state and its keyed reducer.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::events::{Event, MessageEvent};

/// State owned by one connection entry.
///
/// Mutated only through [`reduce_connection`] under the connection's key in
/// the root map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConnectionState {
    /// Most recent nick observed in a NICK event on this connection.
    pub nick: Option<String>,
    /// Channels this connection has seen join activity for.
    pub channels: BTreeSet<String>,
    /// Count of PRIVMSG/NOTICE events folded into this connection.
    pub messages_seen: u64,
}

/// Recomputes one connection entry for an event.
///
/// A missing entry starts from the default state. A connect event resets
/// the entry to a fresh state: a reconnect starts a new protocol session,
/// so nothing from the previous one survives. Ping carries no state — its
/// reply belongs to the outgoing layer.
pub fn reduce_connection(prev: Option<&ConnectionState>, event: &Event) -> ConnectionState {
    match event {
        Event::Connect { .. } => ConnectionState::default(),
        Event::Message { message, .. } => {
            let mut next = prev.cloned().unwrap_or_default();
            match message {
                MessageEvent::Join { channel, .. } => {
                    next.channels.insert(channel.clone());
                }
                MessageEvent::Nick { nick, .. } => {
                    next.nick = Some(nick.clone());
                }
                MessageEvent::Notice { .. } | MessageEvent::Privmsg { .. } => {
                    next.messages_seen += 1;
                }
                MessageEvent::Ping { .. } => {}
            }
            next
        }
        _ => prev.cloned().unwrap_or_default(),
    }
}
