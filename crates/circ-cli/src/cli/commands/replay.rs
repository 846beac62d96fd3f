//! Replay: feed recorded protocol lines through the engine.
//!
//! Stands in for the transport layer: the engine itself never reads
//! sockets, it only consumes event batches from an external producer.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use circ_core::config::Config;
use circ_core::engine::Engine;
use circ_core::events::{ConnectionId, Event, MessageEvent};
use circ_proto::Prefix;

pub fn run(file: Option<&Path>, connection: &str, show_state: bool) -> Result<()> {
    let config = Config::load()?;
    let mut engine = Engine::new(config.initial_state());
    let connection = ConnectionId::new(connection);

    let input = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };
    let lines: Vec<String> = input
        .lines()
        .map(|line| line.trim_end_matches('\r').to_owned())
        .collect();

    engine.process(Event::Connect {
        connection: connection.clone(),
    });
    let observed = engine.process(Event::RawLines { connection, lines });

    for event in &observed {
        if let Event::Message {
            connection,
            message,
        } = event
        {
            println!("{}", render(connection, message));
        }
    }

    if show_state {
        println!(
            "{}",
            serde_json::to_string_pretty(engine.state()).context("serializing state")?
        );
    }

    Ok(())
}

fn render(connection: &ConnectionId, message: &MessageEvent) -> String {
    match message {
        MessageEvent::Join { prefix, channel } => {
            format!("[{connection}] {} joined {channel}", source(prefix))
        }
        MessageEvent::Nick { prefix, nick } => {
            format!("[{connection}] {} is now known as {nick}", source(prefix))
        }
        MessageEvent::Notice {
            prefix,
            target,
            text,
        } => format!("[{connection}] -{}- {target}: {text}", source(prefix)),
        MessageEvent::Ping { token, .. } => format!("[{connection}] ping {token}"),
        MessageEvent::Privmsg {
            prefix,
            target,
            text,
        } => format!("[{connection}] <{}> {target}: {text}", source(prefix)),
    }
}

fn source(prefix: &Prefix) -> &str {
    let name = prefix.name();
    if name.is_empty() { "server" } else { name }
}
