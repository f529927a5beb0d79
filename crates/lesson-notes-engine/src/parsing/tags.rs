use regex::Regex;
use std::sync::OnceLock;

/// Candidate key shared by `(Jp):` and `(Japanese):` lines.
pub const JP_LABEL: &str = "jp";
/// Candidate key for `(English):` lines.
pub const ENGLISH_LABEL: &str = "english";
/// Label that marks a transliteration rather than a translation.
pub const ROMAJI_LABEL: &str = "romaji";

/// The semantic role of a single trimmed line within a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineTag {
    /// `Original: <text>`
    Original(String),
    /// `(<Label>): <text>` for any label other than romaji. The label is lowercased.
    Translation { label: String, text: String },
    /// `(Romaji): <text>`
    Romaji(String),
    /// Anything else.
    Untagged,
}

struct TagPatterns {
    original: Regex,
    jp: Regex,
    english: Regex,
    romaji: Regex,
    generic: Regex,
    tag_shape: Regex,
}

fn patterns() -> &'static TagPatterns {
    static PATTERNS: OnceLock<TagPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| TagPatterns {
        original: Regex::new(r"(?i)^Original:(?-u:\s)*(.+)$").expect("Invalid original regex"),
        jp: Regex::new(r"(?i)^\((?:Jp|Japanese)\):(?-u:\s)*(.+)$").expect("Invalid jp regex"),
        english: Regex::new(r"(?i)^\(English\):(?-u:\s)*(.+)$").expect("Invalid english regex"),
        romaji: Regex::new(r"(?i)^\(Romaji\):(?-u:\s)*(.+)$").expect("Invalid romaji regex"),
        generic: Regex::new(r"^\(([^)]+)\):(?-u:\s)*(.+)$").expect("Invalid generic tag regex"),
        tag_shape: Regex::new(r"^\([^)]+\):").expect("Invalid tag shape regex"),
    })
}

fn captured(re: &Regex, line: &str) -> Option<String> {
    re.captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim_ascii().to_string())
}

/// Classifies one line, trying the known tags in priority order before the
/// generic bracket label. The first pattern that matches wins.
pub fn classify_line(line: &str) -> LineTag {
    let p = patterns();

    if let Some(text) = captured(&p.original, line) {
        return LineTag::Original(text);
    }
    if let Some(text) = captured(&p.jp, line) {
        return LineTag::Translation {
            label: JP_LABEL.to_string(),
            text,
        };
    }
    if let Some(text) = captured(&p.english, line) {
        return LineTag::Translation {
            label: ENGLISH_LABEL.to_string(),
            text,
        };
    }
    if let Some(text) = captured(&p.romaji, line) {
        return LineTag::Romaji(text);
    }
    if let Some(c) = p.generic.captures(line) {
        let label = c[1].trim_ascii().to_ascii_lowercase();
        let text = c[2].trim_ascii().to_string();
        if label == ROMAJI_LABEL {
            return LineTag::Romaji(text);
        }
        return LineTag::Translation { label, text };
    }

    LineTag::Untagged
}

/// Whether the line starts with a `(anything):` bracket label, with or
/// without content after it.
pub fn looks_like_tag(line: &str) -> bool {
    patterns().tag_shape.is_match(line)
}
