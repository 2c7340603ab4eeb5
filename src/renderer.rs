// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Rendering for parsed transcripts.
//!
//! The default [`OutputFormat::Slack`] output quotes every line so the
//! transcript can be pasted back into Slack as a readable block:
//!
//! ```text
//! > *Alice* 3:15 PM
//! > hello
//! >
//! > world
//!
//! > *Alice* 3:20
//! > later
//! ```
//!
//! Blank quoted lines separate body lines within a message, and an unquoted
//! blank line separates messages.
//!
//! # Example
//!
//! ```
//! use slackdown::message::Message;
//! use slackdown::renderer::{render_transcript, RenderOptions};
//!
//! let mut message = Message::new("Alice", "3:15 PM");
//! message.push_line("hello");
//!
//! let out = render_transcript(&[message], &RenderOptions::default()).unwrap();
//! assert_eq!(out, "> *Alice* 3:15 PM\n> hello\n");
//! ```

use crate::markdown;
use crate::message::Message;
use snafu::prelude::*;
use std::fmt::Write;
use std::str::FromStr;

/// Error type for rendering failures.
#[derive(Debug, Snafu)]
pub enum RenderError {
    /// Failed to serialize messages as JSON.
    #[snafu(display("failed to serialize JSON: {source}"))]
    Json {
        /// The underlying serialization error.
        source: serde_json::Error,
    },
}

/// The shape of the rendered transcript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Block-quoted Slack formatting.
    #[default]
    Slack,
    /// Markdown with bold sender names.
    Markdown,
    /// A JSON array of messages.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slack" => Ok(Self::Slack),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown format '{other}' (expected slack, markdown or json)"
            )),
        }
    }
}

/// Configuration options for transcript rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Output format.
    pub format: OutputFormat,

    /// Shown in place of a missing sender or timestamp.
    pub unknown_sender: String,

    /// Whether to convert Markdown emphasis in body lines to Slack spelling.
    ///
    /// See [`markdown::normalize`]. Ignored for JSON output.
    pub normalize_markdown: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Slack,
            unknown_sender: "unknown".to_owned(),
            normalize_markdown: false,
        }
    }
}

/// Renders parsed messages in the format selected by `opts`.
///
/// # Errors
///
/// Returns [`RenderError::Json`] if JSON serialization fails.
pub fn render_transcript(
    messages: &[Message],
    opts: &RenderOptions,
) -> Result<String, RenderError> {
    match opts.format {
        OutputFormat::Slack => Ok(render_slack(messages, opts)),
        OutputFormat::Markdown => Ok(render_markdown(messages, opts)),
        OutputFormat::Json => render_json(messages),
    }
}

/// Returns whether `message` continues a run from the same sender as `prev`.
#[must_use]
pub fn is_continuation(prev: Option<&Message>, message: &Message) -> bool {
    match (prev.and_then(|p| p.sender.as_deref()), message.sender.as_deref()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Renders messages as a block-quoted Slack transcript.
#[must_use]
pub fn render_slack(messages: &[Message], opts: &RenderOptions) -> String {
    let mut out = String::new();

    for (i, message) in messages.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        writeln!(
            out,
            "> *{}* {}",
            display_or(message.sender.as_deref(), &opts.unknown_sender),
            display_or(message.timestamp.as_deref(), &opts.unknown_sender),
        )
        .unwrap();

        for (j, line) in message.body.iter().enumerate() {
            if j > 0 {
                out.push_str("> \n");
            }
            writeln!(out, "> {}", body_line(line, opts)).unwrap();
        }
    }

    out
}

/// Renders messages as Markdown.
///
/// A message from a new sender gets a `**sender** time` header; one that
/// continues the previous sender only shows its time in italics.
#[must_use]
pub fn render_markdown(messages: &[Message], opts: &RenderOptions) -> String {
    let mut out = String::new();
    let mut prev = None;

    for (i, message) in messages.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let time = display_or(message.timestamp.as_deref(), &opts.unknown_sender);
        if is_continuation(prev, message) {
            writeln!(out, "*{time}*").unwrap();
        } else {
            let sender = display_or(message.sender.as_deref(), &opts.unknown_sender);
            writeln!(out, "**{sender}** {time}").unwrap();
        }

        for line in &message.body {
            writeln!(out, "\n{}", body_line(line, opts)).unwrap();
        }
        prev = Some(message);
    }

    out
}

/// Renders messages as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`RenderError::Json`] if serialization fails.
pub fn render_json(messages: &[Message]) -> Result<String, RenderError> {
    let mut out = serde_json::to_string_pretty(messages).context(JsonSnafu)?;
    out.push('\n');
    Ok(out)
}

fn display_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    value.unwrap_or(fallback)
}

fn body_line(line: &str, opts: &RenderOptions) -> String {
    if opts.normalize_markdown {
        markdown::normalize(line)
    } else {
        line.to_owned()
    }
}
