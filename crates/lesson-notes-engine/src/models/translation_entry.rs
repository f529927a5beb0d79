use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{LessonId, TranslationId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("Original text is required")]
    MissingOriginal,
    #[error("Translated text is required")]
    MissingTranslation,
}

/// The text of one translation, without any ordering.
///
/// Produced by the block extractor and accepted by single-entry edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFields {
    pub original_text: String,
    pub translated_text: String,
    pub romaji_text: Option<String>,
}

impl EntryFields {
    /// Build from raw form input: every field is trimmed of ASCII whitespace and a
    /// blank romaji becomes `None`.
    pub fn new(original: &str, translated: &str, romaji: Option<&str>) -> Self {
        let romaji_text = romaji
            .map(str::trim_ascii)
            .filter(|r| !r.is_empty())
            .map(str::to_string);

        Self {
            original_text: original.trim_ascii().to_string(),
            translated_text: translated.trim_ascii().to_string(),
            romaji_text,
        }
    }

    pub fn validate(&self) -> Result<(), EntryError> {
        if self.original_text.trim_ascii().is_empty() {
            return Err(EntryError::MissingOriginal);
        }
        if self.translated_text.trim_ascii().is_empty() {
            return Err(EntryError::MissingTranslation);
        }
        Ok(())
    }
}

/// One parsed `(original, translated, romaji?)` triple with its 1-based display position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationEntry {
    pub original_text: String,
    pub translated_text: String,
    pub romaji_text: Option<String>,
    pub sort_order: u32,
}

impl TranslationEntry {
    pub fn new(fields: EntryFields, sort_order: u32) -> Self {
        let EntryFields {
            original_text,
            translated_text,
            romaji_text,
        } = fields;

        Self {
            original_text,
            translated_text,
            romaji_text,
            sort_order,
        }
    }

    pub fn fields(&self) -> EntryFields {
        EntryFields {
            original_text: self.original_text.clone(),
            translated_text: self.translated_text.clone(),
            romaji_text: self.romaji_text.clone(),
        }
    }
}

/// A translation entry after the store has given it an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTranslation {
    pub id: TranslationId,
    pub lesson_id: LessonId,
    pub entry: TranslationEntry,
}
