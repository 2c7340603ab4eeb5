// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Conversion of Markdown emphasis to Slack formatting.
//!
//! Slack spells emphasis differently from Markdown:
//!
//! | Meaning     | Markdown                  | Slack   |
//! |-------------|---------------------------|---------|
//! | bold        | `**x**`, `__x__`          | `*x*`   |
//! | italic      | `*x*`, `_x_`              | `_x_`   |
//! | bold+italic | `***x***`, `**_x_**`, ... | `*_x_*` |
//!
//! The rewrites run in order, combined markers first, so that `***x***` is
//! not taken apart by the italic or bold rules. Every span is matched
//! non-greedily within a single line; unpaired delimiters are left as they are.
//!
//! # Example
//!
//! ```
//! use slackdown::markdown::normalize;
//!
//! assert_eq!(normalize("a ***b*** c"), "a *_b_* c");
//! assert_eq!(normalize("a **b** c"), "a *b* c");
//! assert_eq!(normalize("a *b* c"), "a _b_ c");
//! ```

use regex::Regex;
use std::sync::LazyLock;

const BOLD_ITALIC: &str = "*_${1}_*";
const BOLD: &str = "*${1}*";

static BOLD_ITALIC_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\*\*\*(.*?)\*\*\*",
        r"\*\*_(.*?)_\*\*",
        r"_\*\*(.*?)\*\*_",
        r"__\*(.*?)\*__",
        r"\*__(.*?)__\*",
        r"___(.*?)___",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("bold-italic pattern is valid"))
    .collect()
});

static BOLD_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"\*\*(.*?)\*\*", r"__(.*?)__"]
        .into_iter()
        .map(|p| Regex::new(p).expect("bold pattern is valid"))
        .collect()
});

/// Rewrites Markdown bold, italic and bold+italic spans in Slack spelling.
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut text = text.to_owned();

    for re in BOLD_ITALIC_PATTERNS.iter() {
        text = re.replace_all(&text, BOLD_ITALIC).into_owned();
    }

    // `_x_` is already Slack italic, so only asterisks need rewriting.
    text = star_italic_to_underscore(&text);

    for re in BOLD_PATTERNS.iter() {
        text = re.replace_all(&text, BOLD).into_owned();
    }

    text
}

/// Rewrites `*x*` as `_x_`.
///
/// `*_x_*` runs left by the bold+italic rule are copied through untouched.
/// Otherwise an opening `*` must not be followed by `_` and a closing `*` must
/// not be preceded by `_`. The closing `*` is the nearest one on the same line
/// that qualifies, so `**x**` becomes `__x__` and is picked up later by the
/// bold rule.
fn star_italic_to_underscore(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    // Start of the text not yet copied to `out`.
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'*' {
            i += 1;
            continue;
        }

        if bytes.get(i + 1) == Some(&b'_') {
            // Skip past the end of a `*_x_*` run, or just this `*` if unclosed.
            i = bold_italic_end(bytes, i).map_or(i + 1, |end| end + 1);
            continue;
        }

        let close = (i + 1..bytes.len())
            .take_while(|&j| bytes[j] != b'\n')
            .find(|&j| bytes[j] == b'*' && bytes[j - 1] != b'_');

        match close {
            Some(j) => {
                out.push_str(&text[copied..i]);
                out.push('_');
                out.push_str(&text[i + 1..j]);
                out.push('_');
                copied = j + 1;
                i = j + 1;
            }
            None => i += 1,
        }
    }

    out.push_str(&text[copied..]);
    out
}

/// Finds the closing `*` of a `*_x_*` run opening at `start`, on the same line.
fn bold_italic_end(bytes: &[u8], start: usize) -> Option<usize> {
    (start + 3..bytes.len())
        .take_while(|&k| bytes[k - 1] != b'\n')
        .find(|&k| bytes[k] == b'*' && bytes[k - 1] == b'_')
}
