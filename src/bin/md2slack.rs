// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Command-line interface for md2slack.
//!
//! Reads Markdown, rewrites bold and italic markup in Slack spelling, and
//! prints the result.

use lexopt::prelude::*;
use slackdown::output::OutputTarget;
use slackdown::{input, markdown, output};
use snafu::prelude::*;
use std::path::PathBuf;

/// File extensions picked up when an input is a directory.
const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown", "txt"];

struct Cli {
    input: Vec<PathBuf>,
    output: OutputTarget,
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
    Output { source: output::OutputError },
}

fn print_help() {
    println!(
        "\
md2slack {version}
Convert Markdown bold and italic markup to Slack formatting

Usage: md2slack [OPTIONS] [INPUT]...

Arguments:
  [INPUT]...  Markdown files or directories (default: stdin, - for stdin)

Options:
  -o, --output <FILE>  Output file (default: stdout, - for stdout)
  -q, --quiet          Only report errors
  -v, --verbose        Log details to stderr
  -h, --help           Print help
  -V, --version        Print version",
        version = env!("CARGO_PKG_VERSION"),
    );
}

fn parse_args() -> Result<Cli, lexopt::Error> {
    let mut input = Vec::new();
    let mut output = OutputTarget::Stdout;
    let mut log_level = "info";

    let mut parser = lexopt::Parser::from_env();
    while let Some(arg) = parser.next()? {
        match arg {
            Short('o') | Long("output") => {
                output = OutputTarget::from_arg(parser.value()?.parse()?);
            }
            Short('q') | Long("quiet") => log_level = "error",
            Short('v') | Long("verbose") => log_level = "debug",
            Short('h') | Long("help") => {
                print_help();
                std::process::exit(0);
            }
            Short('V') | Long("version") => {
                println!("md2slack {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            Value(val) => input.push(val.parse()?),
            _ => return Err(arg.unexpected()),
        }
    }

    Ok(Cli {
        input,
        output,
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

    let documents = input::read_inputs(&cli.input, MARKDOWN_EXTENSIONS)?;
    let mut converted = markdown::normalize(&input::join_documents(&documents));
    // One newline is appended unconditionally.
    converted.push('\n');

    output::write_output(&cli.output, &converted)?;

    Ok(())
}
