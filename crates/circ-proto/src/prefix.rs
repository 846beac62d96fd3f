//! Sender prefix parsing.
//!
//! An IRC prefix is either a bare server name (`irc.example.com`) or a
//! user-style `nick!user@host` triple. Parsing is total: any input maps to
//! one of the two forms.

use std::fmt;

/// The sender annotation of a protocol line.
///
/// The absent prefix is represented as an empty `Server` string so that
/// consumers always receive a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prefix {
    /// Server-style sender, or the empty string when the line had no prefix.
    Server(String),
    /// User-style `nick!user@host` sender.
    User {
        nick: String,
        user: String,
        host: String,
    },
}

impl Prefix {
    /// The empty prefix of a line without a sender annotation.
    pub fn none() -> Self {
        Prefix::Server(String::new())
    }

    /// Returns true for the empty prefix.
    pub fn is_absent(&self) -> bool {
        matches!(self, Prefix::Server(s) if s.is_empty())
    }

    /// Parses a prefix (without its leading `:`).
    ///
    /// Text without a `!` stays a bare server prefix. Otherwise the text
    /// splits at the first `!` into nick and remainder, and the remainder
    /// splits at the first `@` into user and host. A missing `@` yields an
    /// empty host: the `!` already marks the sender as user-style.
    pub fn parse(text: &str) -> Self {
        let Some(bang) = text.find('!') else {
            return Prefix::Server(text.to_owned());
        };
        let nick = &text[..bang];
        let rest = &text[bang + 1..];
        match rest.find('@') {
            Some(at) => Prefix::User {
                nick: nick.to_owned(),
                user: rest[..at].to_owned(),
                host: rest[at + 1..].to_owned(),
            },
            None => Prefix::User {
                nick: nick.to_owned(),
                user: rest.to_owned(),
                host: String::new(),
            },
        }
    }

    /// Short display name of the sender: the nick for user prefixes, the
    /// server text otherwise.
    pub fn name(&self) -> &str {
        match self {
            Prefix::Server(s) => s,
            Prefix::User { nick, .. } => nick,
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prefix::Server(s) => write!(f, "{s}"),
            Prefix::User { nick, user, host } => write!(f, "{nick}!{user}@{host}"),
        }
    }
}
