// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Command-line interface for slackdown.
//!
//! This binary pretty-prints a plain-text Slack transcript. Typical use is in
//! a clipboard pipeline:
//!
//! ```text
//! pbpaste | slackdown | pbcopy
//! ```

use lexopt::prelude::*;
use slackdown::output::OutputTarget;
use slackdown::renderer::{OutputFormat, RenderOptions};
use slackdown::{input, output, parser, renderer};
use snafu::prelude::*;
use std::path::PathBuf;

/// File extensions picked up when an input is a directory.
const TRANSCRIPT_EXTENSIONS: &[&str] = &["txt"];

struct Cli {
    input: Vec<PathBuf>,
    output: OutputTarget,
    render: RenderOptions,
    log_level: &'static str,
}

#[derive(Debug, Snafu)]
enum Error {
    #[snafu(display("failed to parse arguments: {source}"))]
    ParseArgs { source: lexopt::Error },

    #[snafu(display("failed to install interrupt handler: {source}"))]
    Interrupt { source: ctrlc::Error },

    #[snafu(transparent)]
    Input { source: input::InputError },

    #[snafu(transparent)]
    Render { source: renderer::RenderError },

    #[snafu(transparent)]
    Output { source: output::OutputError },
}

fn print_help() {
    println!(
        "\
{name} {version}
Pretty-print a plain-text Slack transcript

Usage: {name} [OPTIONS] [INPUT]...

Arguments:
  [INPUT]...  Transcript files or directories of .txt files (default: stdin, - for stdin)

Options:
  -o, --output <FILE>       Output file (default: stdout, - for stdout)
      --format <FORMAT>     Output format: slack, markdown or json (default: slack)
      --unknown-sender <S>  Placeholder for a missing sender (default: unknown)
      --md2slack            Convert Markdown emphasis in message bodies to Slack formatting
  -q, --quiet               Only report errors
  -v, --verbose             Log parsing details to stderr
  -h, --help                Print help
  -V, --version             Print version",
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
    );
}

fn parse_args() -> Result<Cli, lexopt::Error> {
    let mut input = Vec::new();
    let mut output = OutputTarget::Stdout;
    let mut render = RenderOptions::default();
    let mut log_level = "info";

    let mut parser = lexopt::Parser::from_env();
    while let Some(arg) = parser.next()? {
        match arg {
            Short('o') | Long("output") => {
                output = OutputTarget::from_arg(parser.value()?.parse()?);
            }
            Long("format") => render.format = parser.value()?.parse::<OutputFormat>()?,
            Long("unknown-sender") => render.unknown_sender = parser.value()?.string()?,
            Long("md2slack") => render.normalize_markdown = true,
            // Last one wins
            Short('q') | Long("quiet") => log_level = "error",
            Short('v') | Long("verbose") => log_level = "debug",
            Short('h') | Long("help") => {
                print_help();
                std::process::exit(0);
            }
            Short('V') | Long("version") => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            Value(val) => input.push(val.parse()?),
            _ => return Err(arg.unexpected()),
        }
    }

    Ok(Cli {
        input,
        output,
        render,
        log_level,
    })
}

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<(), Error> {
    let cli = parse_args().context(ParseArgsSnafu)?;
    init_logging(cli.log_level);

    input::exit_on_interrupt().context(InterruptSnafu)?;

    let documents = input::read_inputs(&cli.input, TRANSCRIPT_EXTENSIONS)?;
    let messages = parser::parse_documents(&documents);
    tracing::debug!(count = messages.len(), "parsed transcript");

    let rendered = renderer::render_transcript(&messages, &cli.render)?;
    output::write_output(&cli.output, &rendered)?;

    Ok(())
}
