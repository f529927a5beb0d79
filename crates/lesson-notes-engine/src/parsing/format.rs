use std::fmt::Write;

use crate::models::TranslationEntry;

/// Renders entries back into the paste format so stored notes can be edited as text.
///
/// Every entry becomes an explicit `Original:` / `(Jp):` block. Parsing the
/// output gives back the same text in the same order, but sort orders are
/// renumbered from 1, and text containing blank lines or dash dividers
/// splits into separate blocks.
pub fn format_entries(entries: &[TranslationEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(out, "Original: {}", entry.original_text);
        let _ = writeln!(out, "(Jp): {}", entry.translated_text);
        if let Some(romaji) = entry.romaji_text.as_deref().filter(|r| !r.is_empty()) {
            let _ = writeln!(out, "(Romaji): {romaji}");
        }
        out.push('\n');
    }
    out
}
