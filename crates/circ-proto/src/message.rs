//! IRC message tokenization and rendering.
//!
//! Implements the RFC 2812 line format:
//!   [`:`prefix SPACE] command [SPACE middles] [SPACE `:`trailing]
//!
//! Lines are terminated by CR-LF on the wire; parsing operates on the
//! content without the terminator. Unlike a validating parser, `parse`
//! never fails: malformed input degrades to empty fields.

use std::fmt;

use crate::prefix::Prefix;

/// Soft length limit for one line: 512 bytes minus CR LF.
///
/// Longer lines are still parsed; the pipeline emits a diagnostic.
pub const MAX_LINE_LEN: usize = 510;

/// A tokenized IRC message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Sender annotation; the empty prefix when the line had none.
    pub prefix: Prefix,
    /// The command (e.g. `PRIVMSG`, `001`, `NICK`). Empty for empty input.
    pub command: String,
    /// Parameters in wire order. The last one may have been a trailing
    /// parameter and may embed spaces. Empty middles produced by
    /// consecutive spaces are preserved verbatim.
    pub params: Vec<String>,
}

impl Message {
    /// Tokenizes one line (without line terminators). Total: every input
    /// yields a message.
    ///
    /// A `:`-led line with no space at all is treated as prefix-only:
    /// empty command, no params.
    pub fn parse(line: &str) -> Self {
        let mut rest = line;
        let mut prefix = Prefix::none();

        if let Some(after_colon) = rest.strip_prefix(':') {
            match after_colon.find(' ') {
                Some(i) => {
                    prefix = Prefix::parse(&after_colon[..i]);
                    rest = &after_colon[i + 1..];
                }
                None => {
                    return Message {
                        prefix: Prefix::parse(after_colon),
                        command: String::new(),
                        params: Vec::new(),
                    };
                }
            }
        }

        let (command, mut rest) = match rest.find(' ') {
            Some(i) => (&rest[..i], &rest[i + 1..]),
            None => (rest, ""),
        };

        let mut params = Vec::new();

        // Middle parameters: space-delimited until a `:`-led remainder.
        while !rest.is_empty() && !rest.starts_with(':') {
            match rest.find(' ') {
                Some(i) => {
                    params.push(rest[..i].to_owned());
                    rest = &rest[i + 1..];
                }
                None => {
                    params.push(rest.to_owned());
                    rest = "";
                }
            }
        }

        // Trailing parameter: everything after the single leading `:`.
        if let Some(trailing) = rest.strip_prefix(':') {
            params.push(trailing.to_owned());
        }

        Message {
            prefix,
            command: command.to_owned(),
            params,
        }
    }

    /// Renders back to the wire format (without the trailing CR-LF).
    ///
    /// The last parameter is always written in trailing `:`-form, which is
    /// valid for any message and keeps re-parsing structure-identical.
    pub fn to_line(&self) -> String {
        let mut out = String::new();

        if !self.prefix.is_absent() {
            out.push(':');
            out.push_str(&self.prefix.to_string());
            out.push(' ');
        }

        out.push_str(&self.command);

        if !self.params.is_empty() {
            let last = self.params.len() - 1;
            for (i, param) in self.params.iter().enumerate() {
                out.push(' ');
                if i == last {
                    out.push(':');
                }
                out.push_str(param);
            }
        }

        out
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_line())
    }
}
