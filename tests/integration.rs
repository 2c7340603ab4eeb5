// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Integration tests for slackdown parsing, rendering and the two binaries.

use slackdown::{input, markdown, parser, renderer};
use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

/// Runs a binary with `args`, feeding `stdin`, and returns its stdout.
fn run(bin: &str, args: &[&str], stdin: &str) -> (bool, String) {
    let mut child = Command::new(bin)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    let out = child.wait_with_output().expect("Failed to wait for binary");
    (
        out.status.success(),
        String::from_utf8(out.stdout).expect("stdout is UTF-8"),
    )
}

fn render_default(text: &str) -> String {
    let messages = parser::parse_transcript(text);
    renderer::render_transcript(&messages, &renderer::RenderOptions::default()).unwrap()
}

/// Tests the basic header-plus-body transcript.
#[test]
fn renders_single_message() {
    let output = render_default("Alice 3:15 PM\nhello\nworld\n");
    assert_eq!(output, "> *Alice* 3:15 PM\n> hello\n> \n> world\n");
}

/// Tests that a bare time starts a new message from the same sender.
#[test]
fn renders_continuation_as_separate_block() {
    let output = render_default("Alice 3:15 PM\n3:20\nlater\n");
    assert_eq!(output, "> *Alice* 3:15 PM\n\n> *Alice* 3:20\n> later\n");
}

/// Tests that text before the first header never reaches the output.
#[test]
fn drops_text_before_first_header() {
    let output = render_default("pasted junk\n\nAlice 3:15 PM\nhello\n");
    assert!(!output.contains("junk"));
    assert_eq!(output, "> *Alice* 3:15 PM\n> hello\n");
}

/// Tests a realistic paste with emoji, blank lines and several senders.
#[test]
fn renders_realistic_transcript() {
    let text = "\
  Alice Smith :coffee:  9:58 AM
  morning all :wave:

  did the deploy go out?
Bob Jones 10:02 AM
yes, about an hour ago
10:03
no errors so far :tada:
";
    let output = render_default(text);

    let expected = [
        "> *Alice Smith* 9:58 AM",
        "> morning all",
        "> ",
        "> did the deploy go out?",
        "",
        "> *Bob Jones* 10:02 AM",
        "> yes, about an hour ago",
        "",
        "> *Bob Jones* 10:03",
        "> no errors so far",
        "",
    ]
    .join("\n");
    assert_eq!(output, expected);
}

/// Tests that body lines can be run through the Markdown normalizer.
#[test]
fn normalizes_markdown_in_bodies() {
    let messages = parser::parse_transcript("Alice 3:15 PM\nthis is **important**\n");
    let opts = renderer::RenderOptions {
        normalize_markdown: true,
        ..Default::default()
    };
    let output = renderer::render_transcript(&messages, &opts).unwrap();
    assert_eq!(output, "> *Alice* 3:15 PM\n> this is *important*\n");
}

/// Tests that normalizing before parsing leaves transcript structure intact.
#[test]
fn normalizing_before_parsing_keeps_headers() {
    let text = markdown::normalize("Alice 3:15 PM\n*hi* there\n");
    let output = render_default(&text);
    assert_eq!(output, "> *Alice* 3:15 PM\n> _hi_ there\n");
}

/// Tests reading a directory of transcripts in file-name order.
#[test]
fn reads_transcript_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("02.txt"), "Bob 3:16 PM\nhi alice\n").unwrap();
    fs::write(dir.path().join("01.txt"), "Alice 3:15 PM\nhi bob").unwrap();
    fs::write(dir.path().join("ignored.json"), "Eve 1:00 AM\n").unwrap();

    let documents = input::read_inputs(&[dir.path().to_path_buf()], &["txt"]).unwrap();
    let messages = parser::parse_documents(&documents);
    let output = renderer::render_transcript(&messages, &renderer::RenderOptions::default())
        .unwrap();

    assert_eq!(
        output,
        "> *Alice* 3:15 PM\n> hi bob\n\n> *Bob* 3:16 PM\n> hi alice\n"
    );
}

/// Tests that a bare time opening a second file is not credited to the first file's sender.
#[test]
fn continuation_does_not_cross_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("01.txt"), "Alice 3:15 PM\nhi").unwrap();
    fs::write(dir.path().join("02.txt"), "3:20\nfrom another chat").unwrap();

    let (ok, stdout) = run(
        env!("CARGO_BIN_EXE_slackdown"),
        &[dir.path().to_str().unwrap()],
        "",
    );
    assert!(ok);
    assert_eq!(
        stdout,
        "> *Alice* 3:15 PM\n> hi\n\n> *unknown* 3:20\n> from another chat\n"
    );
}

/// Sends SIGINT to a binary that is blocked reading stdin and returns
/// whether it exited successfully, along with its stdout.
#[cfg(unix)]
fn interrupt_while_reading(bin: &str) -> (bool, String) {
    let mut child = Command::new(bin)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn binary");

    // Keep stdin open so the binary stays blocked in its read.
    let stdin = child.stdin.take().expect("stdin is piped");

    // Give the binary time to install its handler.
    std::thread::sleep(std::time::Duration::from_millis(500));
    let status = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .expect("Failed to run kill");
    assert!(status.success(), "kill -INT failed");

    let out = child.wait_with_output().expect("Failed to wait for binary");
    drop(stdin);
    (
        out.status.success(),
        String::from_utf8(out.stdout).expect("stdout is UTF-8"),
    )
}

/// Tests that interrupting slackdown while it reads stdin exits cleanly.
#[cfg(unix)]
#[test]
fn slackdown_exits_cleanly_on_interrupt() {
    let (ok, stdout) = interrupt_while_reading(env!("CARGO_BIN_EXE_slackdown"));
    assert!(ok, "slackdown should exit with status 0 on SIGINT");
    assert!(stdout.is_empty());
}

/// Tests that interrupting md2slack while it reads stdin exits cleanly.
#[cfg(unix)]
#[test]
fn md2slack_exits_cleanly_on_interrupt() {
    let (ok, stdout) = interrupt_while_reading(env!("CARGO_BIN_EXE_md2slack"));
    assert!(ok, "md2slack should exit with status 0 on SIGINT");
    assert!(stdout.is_empty());
}

/// Tests the slackdown binary as a stdin/stdout filter.
#[test]
fn slackdown_filters_stdin() {
    let (ok, stdout) = run(
        env!("CARGO_BIN_EXE_slackdown"),
        &[],
        "Alice 3:15 PM\nhello\nworld\n",
    );
    assert!(ok);
    assert_eq!(stdout, "> *Alice* 3:15 PM\n> hello\n> \n> world\n");
}

/// Tests the slackdown binary's JSON output.
#[test]
fn slackdown_emits_json() {
    let (ok, stdout) = run(
        env!("CARGO_BIN_EXE_slackdown"),
        &["--format", "json"],
        "Alice 3:15 PM\nhello\n",
    );
    assert!(ok);

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value[0]["sender"], "Alice");
    assert_eq!(value[0]["body"][0], "hello");
}

/// Tests that unknown flags fail.
#[test]
fn slackdown_rejects_unknown_flag() {
    let (ok, _) = run(env!("CARGO_BIN_EXE_slackdown"), &["--bogus"], "");
    assert!(!ok);
}

/// Tests the md2slack binary as a stdin/stdout filter.
#[test]
fn md2slack_filters_stdin() {
    let (ok, stdout) = run(
        env!("CARGO_BIN_EXE_md2slack"),
        &[],
        "a ***b*** c, **d** and *e*",
    );
    assert!(ok);
    assert_eq!(stdout, "a *_b_* c, *d* and _e_\n");
}

/// Tests that md2slack writes to a file with `-o`.
#[test]
fn md2slack_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("out.txt");

    let (ok, stdout) = run(
        env!("CARGO_BIN_EXE_md2slack"),
        &["-q", "-o", out_path.to_str().unwrap()],
        "__bold__",
    );
    assert!(ok);
    assert!(stdout.is_empty());
    assert_eq!(fs::read_to_string(out_path).unwrap(), "*bold*\n");
}
