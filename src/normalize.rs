//! Line-level normalization of the raw structure document.
//!
//! Two rewrites, both pure and line-independent:
//! inline trailing comments move onto their own block-comment line,
//! and `export type` declarations lose the export qualifier.

use regex::Regex;
use std::sync::LazyLock;

/// Inline trailing comment. Greedy first group, so the split point is the
/// *last* ` // ` on the line.
static RE_INLINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*) // (.*)$").unwrap());

static RE_EXPORT_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^export (type .*)$").unwrap());

/// Rewrite `<content> // <comment>` lines into a `/** <comment> */` line
/// followed by the bare content. Non-matching lines pass through unchanged.
pub fn to_block_comments(input: &str) -> String {
    map_lines(input, |line| match RE_INLINE_COMMENT.captures(line) {
        Some(caps) => format!("/** {} */\n{}", &caps[2], &caps[1]),
        None => line.to_string(),
    })
}

/// Drop the `export` qualifier from `export type …` lines.
pub fn strip_export_qualifier(input: &str) -> String {
    map_lines(input, |line| match RE_EXPORT_TYPE.captures(line) {
        Some(caps) => caps[1].to_string(),
        None => line.to_string(),
    })
}

/// Full normalization pass: block comments first, then export stripping.
pub fn normalize(input: &str) -> String {
    strip_export_qualifier(&to_block_comments(input))
}

fn map_lines(input: &str, f: impl Fn(&str) -> String) -> String {
    input
        .split('\n')
        .map(f)
        .collect::<Vec<_>>()
        .join("\n")
}
