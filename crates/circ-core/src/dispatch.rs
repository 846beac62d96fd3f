//! Command-to-event dispatch.
//!
//! A fixed, exact-case mapping from recognized command keywords to semantic
//! event constructors. Unmatched commands produce no event and no
//! diagnostic: unknown traffic is dropped silently for forward
//! compatibility with protocol extensions.

use circ_proto::Message;

use crate::events::{ConnectionId, Event, MessageEvent};

/// Builds the semantic event for one tokenized message, if its command is
/// recognized.
///
/// Fields are drawn positionally from `params`; missing positions degrade
/// to empty strings so the mapping stays total. Text-bearing commands take
/// their text from the last parameter, which is where a trailing parameter
/// always lands.
pub fn dispatch(connection: &ConnectionId, message: Message) -> Option<Event> {
    let Message {
        prefix,
        command,
        params,
    } = message;

    let message = match command.as_str() {
        "JOIN" => MessageEvent::Join {
            prefix,
            channel: param(&params, 0),
        },
        "NICK" => MessageEvent::Nick {
            prefix,
            nick: param(&params, 0),
        },
        "NOTICE" => MessageEvent::Notice {
            prefix,
            target: param(&params, 0),
            text: last_param(&params),
        },
        "PING" => MessageEvent::Ping {
            prefix,
            token: param(&params, 0),
        },
        "PRIVMSG" => MessageEvent::Privmsg {
            prefix,
            target: param(&params, 0),
            text: last_param(&params),
        },
        _ => return None,
    };

    Some(Event::Message {
        connection: connection.clone(),
        message,
    })
}

fn param(params: &[String], index: usize) -> String {
    params.get(index).cloned().unwrap_or_default()
}

fn last_param(params: &[String]) -> String {
    params.last().cloned().unwrap_or_default()
}
