use std::fmt;

use crate::models::EntryFields;

use super::candidates::TranslationCandidates;
use super::tags::{LineTag, classify_line, looks_like_tag};

/// Why a block produced no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No non-blank lines.
    Empty,
    /// No `Original:` tag and the first line is itself a bracket tag.
    MissingOriginal,
    /// An original was found but no translation line.
    MissingTranslation,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Empty => write!(f, "empty block"),
            SkipReason::MissingOriginal => write!(f, "no original text"),
            SkipReason::MissingTranslation => write!(f, "no translation"),
        }
    }
}

/// Turns one block into at most one entry's worth of text.
pub fn extract_entry(block: &str) -> Result<EntryFields, SkipReason> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim_ascii)
        .filter(|line| !line.is_empty())
        .collect();

    let Some(first_line) = lines.first().copied() else {
        return Err(SkipReason::Empty);
    };

    let mut original: Option<String> = None;
    let mut romaji: Option<String> = None;
    let mut candidates = TranslationCandidates::new();

    for line in &lines {
        match classify_line(line) {
            LineTag::Original(text) => original = Some(text),
            LineTag::Translation { label, text } => candidates.record(label, text),
            LineTag::Romaji(text) => romaji = Some(text),
            LineTag::Untagged => {}
        }
    }

    // Without an Original: tag the first line stands in, unless it is a tag itself.
    let original_text = match original {
        Some(text) => text,
        None if !looks_like_tag(first_line) => first_line.to_string(),
        None => String::new(),
    };
    if original_text.is_empty() {
        return Err(SkipReason::MissingOriginal);
    }

    let translated_text = candidates.resolve().unwrap_or_default().to_string();
    if translated_text.is_empty() {
        return Err(SkipReason::MissingTranslation);
    }

    Ok(EntryFields {
        original_text,
        translated_text,
        romaji_text: romaji,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fields(original: &str, translated: &str, romaji: Option<&str>) -> EntryFields {
        EntryFields {
            original_text: original.to_string(),
            translated_text: translated.to_string(),
            romaji_text: romaji.map(str::to_string),
        }
    }

    #[test]
    fn full_tagged_block() {
        let block = "Original: Hello\n(Jp): こんにちは\n(Romaji): konnichiwa";
        assert_eq!(
            extract_entry(block),
            Ok(fields("Hello", "こんにちは", Some("konnichiwa")))
        );
    }

    #[test]
    fn first_line_is_fallback_original() {
        assert_eq!(
            extract_entry("食べる\n(English): to eat"),
            Ok(fields("食べる", "to eat", None))
        );
    }

    #[test]
    fn fallback_original_ignores_leading_blank_lines() {
        assert_eq!(
            extract_entry("\n   \n食べる\n(English): to eat"),
            Ok(fields("食べる", "to eat", None))
        );
    }

    #[test]
    fn tag_on_first_line_blocks_fallback() {
        assert_eq!(
            extract_entry("(Jp): 食べる\n(English): to eat"),
            Err(SkipReason::MissingOriginal)
        );
    }

    #[test]
    fn bare_original_label_becomes_the_original_text() {
        assert_eq!(
            extract_entry("Original:\n(Jp): 食べる"),
            Ok(fields("Original:", "食べる", None))
        );
    }

    #[test]
    fn jp_beats_english_in_either_order() {
        let english_first = "Original: eat\n(English): to eat\n(Jp): 食べる";
        let jp_first = "Original: eat\n(Jp): 食べる\n(English): to eat";

        assert_eq!(extract_entry(english_first), Ok(fields("eat", "食べる", None)));
        assert_eq!(extract_entry(jp_first), Ok(fields("eat", "食べる", None)));
    }

    #[test]
    fn japanese_label_is_jp() {
        assert_eq!(
            extract_entry("Original: eat\n(Spanish): comer\n(Japanese): 食べる"),
            Ok(fields("eat", "食べる", None))
        );
    }

    #[test]
    fn unknown_labels_fall_back_in_order() {
        assert_eq!(
            extract_entry("Original: eat\n(Spanish): comer\n(French): manger"),
            Ok(fields("eat", "comer", None))
        );
    }

    #[test]
    fn generic_romaji_label_sets_romaji() {
        assert_eq!(
            extract_entry("Original: eat\n( romaji ): taberu\n(Jp): 食べる"),
            Ok(fields("eat", "食べる", Some("taberu")))
        );
    }

    #[test]
    fn later_lines_override_earlier_ones() {
        let block = "Original: first\nOriginal: second\n(Jp): 一\n(Jp): 二\n(Romaji): ichi\n(Romaji): ni";
        assert_eq!(extract_entry(block), Ok(fields("second", "二", Some("ni"))));
    }

    #[test]
    fn untagged_lines_after_the_first_are_ignored() {
        assert_eq!(
            extract_entry("Original: eat\nsome stray note\n(Jp): 食べる\nanother note"),
            Ok(fields("eat", "食べる", None))
        );
    }

    #[test]
    fn original_without_translation_is_skipped() {
        assert_eq!(
            extract_entry("Original: Hello\n(Romaji): haro"),
            Err(SkipReason::MissingTranslation)
        );
        assert_eq!(
            extract_entry("Just a heading"),
            Err(SkipReason::MissingTranslation)
        );
    }

    #[test]
    fn ideographic_space_line_does_not_break_the_block() {
        assert_eq!(
            extract_entry("Original: a\n\u{3000}\n(Jp): あ"),
            Ok(fields("a", "あ", None))
        );
    }

    #[test]
    fn blank_block_is_empty() {
        assert_eq!(extract_entry("  \n\t\n"), Err(SkipReason::Empty));
    }
}
