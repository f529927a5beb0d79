pub mod blocks;
pub mod candidates;
pub mod extract;
pub mod format;
pub mod tags;

use crate::models::TranslationEntry;

pub use blocks::{normalize_line_endings, split_blocks};
pub use extract::{SkipReason, extract_entry};
pub use format::format_entries;

/// A block that yielded no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedBlock {
    /// 0-based position of the block among the non-empty blocks of the input.
    pub index: usize,
    pub text: String,
    pub reason: SkipReason,
}

/// Result of parsing pasted lesson notes, including the blocks that were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub entries: Vec<TranslationEntry>,
    pub skipped: Vec<SkippedBlock>,
}

/// Parses pasted lesson notes into ordered translation entries.
///
/// Stateless: the same text always yields the same entries. Malformed blocks
/// are dropped rather than reported as errors.
#[derive(Debug, Default, Clone, Copy)]
pub struct LessonTextParser;

impl LessonTextParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, raw: &str) -> Vec<TranslationEntry> {
        self.parse_with_report(raw).entries
    }

    /// Like [`parse`](Self::parse) but also lists the blocks that produced nothing.
    pub fn parse_with_report(&self, raw: &str) -> ParseReport {
        let text = normalize_line_endings(raw);
        let mut report = ParseReport::default();
        let mut sort_order = 1;

        for (index, block) in split_blocks(&text).into_iter().enumerate() {
            match extract_entry(block) {
                Ok(fields) => {
                    report.entries.push(TranslationEntry::new(fields, sort_order));
                    sort_order += 1;
                }
                Err(reason) => {
                    log::debug!("Skipping block {index}: {reason}");
                    report.skipped.push(SkippedBlock {
                        index,
                        text: block.to_string(),
                        reason,
                    });
                }
            }
        }

        log::debug!(
            "Parsed {} entries, skipped {} blocks",
            report.entries.len(),
            report.skipped.len()
        );
        report
    }
}

/// Convenience: parse with a default [`LessonTextParser`].
pub fn parse_lesson_text(raw: &str) -> Vec<TranslationEntry> {
    LessonTextParser.parse(raw)
}
