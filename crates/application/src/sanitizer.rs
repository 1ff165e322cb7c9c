//! Filesystem-safe text cleaning
//!
//! Sanitization works per `/`-separated segment so folder structure written
//! into the template survives while characters produced by variables are
//! cleaned. The last segment is the file name prefix the host appends frame
//! numbers to; a trailing `_` is kept there.

use std::sync::LazyLock;

use regex::Regex;
use rendernames_domain::SanitizationPolicy;

static ILLEGAL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>:"\\|?*\s\x00-\x1f]"#).expect("valid regex"));

static UNDERSCORE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_{2,}").expect("valid regex"));

/// Applies the policy to a resolved template.
///
/// With sanitization enabled every segment is cleaned by
/// [`sanitize_segment`]; separators are never removed. Lowercasing applies
/// to the whole result afterwards, whether or not sanitization is enabled.
///
/// # Examples
///
/// ```
/// use rendernames_application::sanitize;
/// use rendernames_domain::SanitizationPolicy;
///
/// let policy = SanitizationPolicy::sanitizing();
/// assert_eq!(sanitize("a/b c/d", &policy), "a/b_c/d");
/// ```
#[must_use]
pub fn sanitize(text: &str, policy: &SanitizationPolicy) -> String {
    let cleaned = if policy.enabled {
        let segments: Vec<&str> = text.split('/').collect();
        let last = segments.len().saturating_sub(1);
        segments
            .iter()
            .enumerate()
            .map(|(index, segment)| sanitize_segment(segment, index == last))
            .collect::<Vec<_>>()
            .join("/")
    } else {
        text.to_string()
    };

    if policy.lowercase {
        cleaned.to_lowercase()
    } else {
        cleaned
    }
}

/// Cleans a single path segment.
///
/// Illegal characters and whitespace become `_`, runs of `_` collapse,
/// leading dots and underscores are stripped and trailing dots are stripped.
/// Directory segments also lose trailing underscores. `.` and `..` come out
/// empty.
#[must_use]
pub fn sanitize_segment(segment: &str, is_file_name: bool) -> String {
    let replaced = ILLEGAL_CHARS.replace_all(segment, "_");
    let collapsed = UNDERSCORE_RUNS.replace_all(&replaced, "_");
    let trimmed = collapsed.trim_start_matches(['.', '_']);

    let trimmed = if is_file_name {
        trimmed.trim_end_matches('.')
    } else {
        trimmed.trim_end_matches(['.', '_'])
    };

    trimmed.to_string()
}

/// Neutralizes separators inside a variable value so it stays one segment.
#[must_use]
pub fn escape_separators(value: &str) -> String {
    value.replace('/', "_")
}
