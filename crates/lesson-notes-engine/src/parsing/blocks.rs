use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Rewrites `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Splits normalized text into trimmed, non-empty candidate blocks.
///
/// A separator is either a run of blank lines or a line of three or more
/// dashes with a newline on both sides. Block order follows the source text.
/// Only ASCII whitespace counts as blank, so a stray ideographic space keeps
/// its block together.
pub fn split_blocks(text: &str) -> Vec<&str> {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    let separator = SEPARATOR.get_or_init(|| {
        Regex::new(r"\n(?-u:\s)*\n|\n-{3,}\n").expect("Invalid block separator regex")
    });

    separator
        .split(text)
        .map(str::trim_ascii)
        .filter(|block| !block.is_empty())
        .collect()
}
