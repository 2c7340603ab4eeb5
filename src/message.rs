// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! The message model produced by the transcript parser.
//!
//! A [`Message`] groups a sender, the time it was sent, and the body lines
//! that followed it in the pasted transcript.

use serde::Serialize;

/// A single message (or run of lines) from one sender at one time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Display name of the sender.
    ///
    /// `None` only for continuations that had no message to inherit from.
    pub sender: Option<String>,

    /// Time of day as it appeared in the transcript (e.g. "3:15 PM" or "3:20").
    pub timestamp: Option<String>,

    /// Body lines in display order. Empty when nothing followed the header.
    pub body: Vec<String>,
}

/// Field overrides applied by [`Message::continuation`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Replaces the reference message's sender.
    pub sender: Option<String>,
    /// Replaces the reference message's timestamp.
    pub timestamp: Option<String>,
}

impl Message {
    /// Creates a message with an empty body.
    #[must_use]
    pub fn new(sender: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            sender: Some(sender.into()),
            timestamp: Some(timestamp.into()),
            body: Vec::new(),
        }
    }

    /// Builds a successor of `reference`.
    ///
    /// Sender and timestamp are copied from `reference` unless the matching
    /// field of `overrides` is set. The body always starts empty. With no
    /// reference and no overrides the result has neither sender nor timestamp.
    ///
    /// ```
    /// use slackdown::message::{Message, Overrides};
    ///
    /// let first = Message::new("Alice", "3:15 PM");
    /// let next = Message::continuation(
    ///     Some(&first),
    ///     Overrides { timestamp: Some("3:20".into()), ..Default::default() },
    /// );
    /// assert_eq!(next.sender.as_deref(), Some("Alice"));
    /// assert_eq!(next.timestamp.as_deref(), Some("3:20"));
    /// ```
    #[must_use]
    pub fn continuation(reference: Option<&Self>, overrides: Overrides) -> Self {
        let sender = overrides
            .sender
            .or_else(|| reference.and_then(|m| m.sender.clone()));
        let timestamp = overrides
            .timestamp
            .or_else(|| reference.and_then(|m| m.timestamp.clone()));

        Self {
            sender,
            timestamp,
            body: Vec::new(),
        }
    }

    /// Appends one body line.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.body.push(line.into());
    }
}
