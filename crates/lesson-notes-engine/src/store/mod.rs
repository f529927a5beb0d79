//! Persistence contract for parsed translation entries.
//!
//! The parser hands its output to a [`TranslationStore`]. A bulk re-parse
//! replaces every entry of the lesson; single-entry edits add, update or
//! delete one row while leaving the rest in place.

mod memory;

pub use memory::MemoryStore;

use thiserror::Error;

use crate::models::{
    EntryError, EntryFields, LessonId, StoredTranslation, TranslationEntry, TranslationId,
};
use crate::parsing::LessonTextParser;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Translation {id} not found in {lesson}")]
    NotFound {
        lesson: LessonId,
        id: TranslationId,
    },
    #[error("Invalid translation: {0}")]
    Invalid(#[from] EntryError),
    #[error("No sort order left after the last entry in {lesson}")]
    SortOrderOverflow { lesson: LessonId },
}

pub trait TranslationStore {
    /// Deletes every entry of `lesson`, then inserts `entries` keeping their sort order.
    /// Returns the number of entries inserted.
    fn replace_all(
        &mut self,
        lesson: LessonId,
        entries: &[TranslationEntry],
    ) -> Result<usize, StoreError>;

    /// Entries of `lesson` in ascending sort order.
    fn entries(&self, lesson: LessonId) -> Result<Vec<StoredTranslation>, StoreError>;

    /// Appends one entry after the current last one.
    fn add_entry(
        &mut self,
        lesson: LessonId,
        fields: EntryFields,
    ) -> Result<StoredTranslation, StoreError>;

    /// Replaces the text of one entry, keeping its position.
    fn update_entry(
        &mut self,
        lesson: LessonId,
        id: TranslationId,
        fields: EntryFields,
    ) -> Result<(), StoreError>;

    fn delete_entry(&mut self, lesson: LessonId, id: TranslationId) -> Result<(), StoreError>;
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Please enter lesson notes.")]
    EmptyText,
    #[error("Could not parse any translations from the text.")]
    NothingParsed,
    #[error("Failed to save translations: {0}")]
    Store(#[from] StoreError),
}

/// Parses `raw` and replaces the lesson's entries with the result.
///
/// The store is left untouched when the text is blank or nothing parses.
pub fn import_lesson_text<S: TranslationStore + ?Sized>(
    store: &mut S,
    lesson: LessonId,
    raw: &str,
) -> Result<usize, ImportError> {
    if raw.trim_ascii().is_empty() {
        return Err(ImportError::EmptyText);
    }

    let entries = LessonTextParser::new().parse(raw);
    if entries.is_empty() {
        return Err(ImportError::NothingParsed);
    }

    let count = store.replace_all(lesson, &entries)?;
    log::info!("Imported {count} translations into {lesson}");
    Ok(count)
}
