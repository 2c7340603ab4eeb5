// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Reading input for the command-line filters.
//!
//! Both binaries read everything up front: standard input when no paths are
//! given, otherwise the named files, with directories searched recursively
//! for files with a matching extension.

use snafu::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Error type for input failures.
#[derive(Debug, Snafu)]
pub enum InputError {
    /// Failed to read standard input.
    #[snafu(display("failed to read standard input: {source}"))]
    ReadStdin {
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to read an input file.
    #[snafu(display("failed to read {}: {source}", path.display()))]
    ReadFile {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to walk an input directory.
    #[snafu(display("failed to walk {}: {source}", path.display()))]
    WalkDir {
        /// The directory being walked.
        path: PathBuf,
        /// The underlying traversal error.
        source: walkdir::Error,
    },
}

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Expands inputs into a list of files.
///
/// Directories are walked recursively for files whose extension is in
/// `extensions`, in file-name order. Other paths (including `-`) are kept
/// as given.
///
/// # Errors
///
/// Returns [`InputError::WalkDir`] if a directory cannot be traversed.
pub fn collect_input_files(
    inputs: &[PathBuf],
    extensions: &[&str],
) -> Result<Vec<PathBuf>, InputError> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            for entry in WalkDir::new(input).sort_by_file_name() {
                let entry = entry.context(WalkDirSnafu { path: input })?;
                let path = entry.path();
                if entry.file_type().is_file()
                    && path
                        .extension()
                        .and_then(|ext| ext.to_str())
                        .is_some_and(|ext| extensions.contains(&ext))
                {
                    files.push(path.to_path_buf());
                }
            }
        } else {
            files.push(input.clone());
        }
    }
    Ok(files)
}

/// Reads every input, one string per file.
///
/// With no inputs, reads standard input. Otherwise each file (or `-`) is read
/// in order. Keeping files apart lets callers process each one on its own,
/// so nothing from one transcript carries over into the next.
///
/// # Errors
///
/// Returns an [`InputError`] if any input cannot be listed or read.
pub fn read_inputs(
    inputs: &[PathBuf],
    extensions: &[&str],
) -> Result<Vec<String>, InputError> {
    if inputs.is_empty() {
        return Ok(vec![read_stdin()?]);
    }

    collect_input_files(inputs, extensions)?
        .iter()
        .map(|path| {
            if is_stdin(path) {
                read_stdin()
            } else {
                tracing::debug!(path = %path.display(), "reading input");
                std::fs::read_to_string(path).context(ReadFileSnafu { path })
            }
        })
        .collect()
}

/// Joins documents in order, inserting a newline after any that lacks one so
/// their lines never run together.
#[must_use]
pub fn join_documents(documents: &[String]) -> String {
    let mut text = String::new();
    for doc in documents {
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(doc);
    }
    text
}

/// Reads standard input to the end.
///
/// # Errors
///
/// Returns [`InputError::ReadStdin`] on I/O failure or invalid UTF-8.
pub fn read_stdin() -> Result<String, InputError> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context(ReadStdinSnafu)?;
    Ok(text)
}

/// Exits with status 0 when the user interrupts the process (Ctrl-C).
///
/// Install once before reading input. Nothing has been written yet at that
/// point, so exiting leaves no partial output behind.
///
/// # Errors
///
/// Returns an error if a signal handler is already installed.
pub fn exit_on_interrupt() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        tracing::debug!("interrupted");
        std::process::exit(0);
    })
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}
