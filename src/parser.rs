// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Parsing for plain-text Slack transcripts.
//!
//! Copying a conversation out of Slack as plain text produces lines like:
//!
//! ```text
//! Alice 3:15 PM
//! hello
//! world
//! 3:20
//! later
//! ```
//!
//! A line ending in a time with an AM/PM designator starts a new message from
//! the named sender. A bare time on its own line means the same sender spoke
//! again later; Slack omits the name in that case. Everything else is body
//! text belonging to the most recent message.
//!
//! # Example
//!
//! ```
//! use slackdown::parser::parse_transcript;
//!
//! let messages = parse_transcript("Alice 3:15 PM\nhello\n3:20\nlater\n");
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[1].sender.as_deref(), Some("Alice"));
//! assert_eq!(messages[1].body, ["later"]);
//! ```

use crate::message::{Message, Overrides};
use regex::Regex;
use std::sync::LazyLock;

static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*) ([0-9]+:[0-9]+ (?:AM|PM))$").expect("header pattern is valid")
});

static CONTINUATION_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+:[0-9]+$").expect("time pattern is valid"));

static EMOJI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":[^:]+:").expect("emoji pattern is valid"));

/// The role of one transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Starts a new message: `<sender> <h:mm AM|PM>`.
    Header {
        /// Everything before the last time token, trimmed.
        sender: &'a str,
        /// The time token including its AM/PM designator.
        time: &'a str,
    },
    /// A bare `h:mm` line: the previous sender again, at a new time.
    ContinuationTime {
        /// The bare time.
        time: &'a str,
    },
    /// Message content, including blank lines.
    Body {
        /// The line as given.
        text: &'a str,
    },
}

/// Classifies a prepared line (see [`prepare_line`]).
///
/// Classification never fails; anything that is not recognisably a header or
/// a bare time is body text.
#[must_use]
pub fn classify_line(line: &str) -> Line<'_> {
    if let Some(caps) = HEADER.captures(line)
        && let (Some(sender), Some(time)) = (caps.get(1), caps.get(2))
    {
        return Line::Header {
            sender: sender.as_str().trim(),
            time: time.as_str().trim(),
        };
    }

    if CONTINUATION_TIME.is_match(line) {
        return Line::ContinuationTime { time: line };
    }

    Line::Body { text: line }
}

/// Removes `:shortcode:` emoji from a line.
#[must_use]
pub fn strip_emoji(line: &str) -> String {
    EMOJI.replace_all(line, "").into_owned()
}

/// Trims a raw line and removes emoji, ready for [`classify_line`].
#[must_use]
pub fn prepare_line(raw: &str) -> String {
    strip_emoji(raw.trim()).trim().to_owned()
}

/// Parses a whole transcript.
///
/// Equivalent to [`parse_lines`] over `text.lines()`.
#[must_use]
pub fn parse_transcript(text: &str) -> Vec<Message> {
    parse_lines(text.lines())
}

/// Parses several transcripts, concatenating their messages in order.
///
/// Each document is parsed on its own, so a bare time at the top of one
/// document never inherits the sender of the previous document's last message.
#[must_use]
pub fn parse_documents<S: AsRef<str>>(documents: &[S]) -> Vec<Message> {
    documents
        .iter()
        .flat_map(|doc| parse_transcript(doc.as_ref()))
        .collect()
}

/// Groups transcript lines into messages, preserving input order.
///
/// Each header or bare-time line yields exactly one message. Body lines are
/// appended to the most recent message; those seen before any message, and
/// blank ones, are dropped.
#[must_use]
pub fn parse_lines<I, S>(lines: I) -> Vec<Message>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut messages: Vec<Message> = Vec::new();

    for raw in lines {
        let line = prepare_line(raw.as_ref());

        match classify_line(&line) {
            Line::Header { sender, time } => {
                tracing::debug!(sender, time, "message header");
                messages.push(Message::new(sender, time));
            }
            Line::ContinuationTime { time } => {
                tracing::debug!(time, "continuation");
                let next = Message::continuation(
                    messages.last(),
                    Overrides {
                        timestamp: Some(time.to_owned()),
                        ..Default::default()
                    },
                );
                messages.push(next);
            }
            Line::Body { text } => match messages.last_mut() {
                Some(current) if !text.is_empty() => current.push_line(text),
                Some(_) => {}
                None => tracing::debug!(line = text, "skipping text before first message"),
            },
        }
    }

    messages
}
