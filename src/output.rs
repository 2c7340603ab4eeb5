// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Writing rendered output for the command-line filters.

use snafu::prelude::*;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Error type for output failures.
#[derive(Debug, Snafu)]
pub enum OutputError {
    /// Failed to write to standard output.
    #[snafu(display("failed to write standard output: {source}"))]
    WriteStdout {
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write the output file.
    #[snafu(display("failed to write {}: {source}", path.display()))]
    WriteFile {
        /// The file being written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Where to write the rendered output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to the specified file, creating parent directories as needed.
    File(PathBuf),
    /// Write to stdout.
    #[default]
    Stdout,
}

impl OutputTarget {
    /// Interprets a command-line value; `-` means stdout.
    #[must_use]
    pub fn from_arg(path: PathBuf) -> Self {
        if path == Path::new(crate::input::STDIN_PATH) {
            Self::Stdout
        } else {
            Self::File(path)
        }
    }
}

/// Writes `text` to `target` in one go.
///
/// # Errors
///
/// Returns an [`OutputError`] if the text cannot be written.
pub fn write_output(target: &OutputTarget, text: &str) -> Result<(), OutputError> {
    match target {
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .context(WriteStdoutSnafu)
        }
        OutputTarget::File(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent).context(WriteFileSnafu { path })?;
            }
            std::fs::write(path, text).context(WriteFileSnafu { path })?;
            tracing::info!("Wrote {}", path.display());
            Ok(())
        }
    }
}
