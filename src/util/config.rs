//! Configuration file parsing utilities.
//!
//! This module provides helpers for parsing configuration files with common
//! patterns like comment skipping and key-value parsing.

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing key=value format
///
/// Output:
/// - `Some((key, value))` if parsing succeeds, `None` otherwise
///
/// Details:
/// - Splits on the first `=` character
/// - Keys are lowercased with `.`, `-` and spaces folded to `_`
/// - Inline comments are stripped from the value, see [`strip_inline_comment`]
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let (raw_key, raw_val) = line.trim().split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    if key.is_empty() {
        return None;
    }
    Some((key, strip_inline_comment(raw_val).to_string()))
}

/// What: Remove an inline comment from a configuration value.
///
/// Inputs:
/// - `s`: Raw value text that may include a trailing comment.
///
/// Output:
/// - Comment-free & trimmed substring of the input.
///
/// Details:
/// - A comment starts at `#` or `//` preceded by whitespace, so values such as
///   `a#b` or `http://x` survive intact.
/// - A leading double-quoted span is never treated as a comment, so `" // "`
///   keeps its content.
#[must_use]
pub fn strip_inline_comment(s: &str) -> &str {
    let bytes = s.as_bytes();
    let lead = s.len() - s.trim_start().len();
    let scan_from = if s[lead..].starts_with('"') {
        s[lead + 1..].find('"').map_or(0, |j| lead + j + 2)
    } else {
        0
    };
    let mut end = s.len();
    for (i, _) in s[scan_from..].match_indices(['#', '/']) {
        let i = i + scan_from;
        let starts_comment = bytes[i] == b'#' || bytes.get(i + 1) == Some(&b'/');
        let after_space = i == 0 || bytes[i - 1].is_ascii_whitespace();
        if starts_comment && after_space {
            end = i;
            break;
        }
    }
    s[..end].trim()
}

/// What: Strip one pair of surrounding double quotes.
///
/// Details:
/// - Lets values keep leading or trailing spaces, e.g. `label_separator = " | "`.
#[must_use]
pub fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
