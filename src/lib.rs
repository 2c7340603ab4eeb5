// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Pretty-print pasted Slack transcripts and convert Markdown to Slack formatting.
//!
//! This crate backs two small filters that read all of their input, transform
//! it, and write the result:
//!
//! - `slackdown` parses a plain-text copy of a Slack conversation into
//!   messages and re-emits them as a block-quoted transcript.
//! - `md2slack` rewrites Markdown bold/italic markup in Slack spelling.
//!
//! # Example
//!
//! ```
//! use slackdown::{parser, renderer};
//!
//! let text = "Alice 3:15 PM\nhello\nworld\n";
//! let messages = parser::parse_transcript(text);
//!
//! let out = renderer::render_transcript(&messages, &renderer::RenderOptions::default()).unwrap();
//! assert_eq!(out, "> *Alice* 3:15 PM\n> hello\n> \n> world\n");
//! ```
//!
//! # Modules
//!
//! - [`message`]: The message model
//! - [`parser`]: Line classification and transcript parsing
//! - [`renderer`]: Slack, Markdown and JSON output
//! - [`markdown`]: Markdown to Slack emphasis conversion
//! - [`input`]: Reading stdin, files and directories
//! - [`output`]: Writing to stdout or a file

#![deny(missing_docs)]

pub mod input;
pub mod markdown;
pub mod message;
pub mod output;
pub mod parser;
pub mod renderer;
