use std::collections::HashMap;

use super::{StoreError, TranslationStore};
use crate::models::{EntryFields, LessonId, StoredTranslation, TranslationEntry, TranslationId};

/// In-process [`TranslationStore`], one row list per lesson.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    lessons: HashMap<LessonId, Vec<StoredTranslation>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn find_mut(
        &mut self,
        lesson: LessonId,
        id: TranslationId,
    ) -> Result<&mut StoredTranslation, StoreError> {
        self.lessons
            .get_mut(&lesson)
            .and_then(|rows| rows.iter_mut().find(|row| row.id == id))
            .ok_or(StoreError::NotFound { lesson, id })
    }
}

impl TranslationStore for MemoryStore {
    fn replace_all(
        &mut self,
        lesson: LessonId,
        entries: &[TranslationEntry],
    ) -> Result<usize, StoreError> {
        let rows: Vec<StoredTranslation> = entries
            .iter()
            .map(|entry| StoredTranslation {
                id: TranslationId::new(),
                lesson_id: lesson,
                entry: entry.clone(),
            })
            .collect();
        let count = rows.len();
        self.lessons.insert(lesson, rows);
        Ok(count)
    }

    fn entries(&self, lesson: LessonId) -> Result<Vec<StoredTranslation>, StoreError> {
        let mut rows = self.lessons.get(&lesson).cloned().unwrap_or_default();
        rows.sort_by_key(|row| row.entry.sort_order);
        Ok(rows)
    }

    fn add_entry(
        &mut self,
        lesson: LessonId,
        fields: EntryFields,
    ) -> Result<StoredTranslation, StoreError> {
        fields.validate()?;

        let rows = self.lessons.entry(lesson).or_default();
        let next_order = rows
            .iter()
            .map(|row| row.entry.sort_order)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or(StoreError::SortOrderOverflow { lesson })?;

        let row = StoredTranslation {
            id: TranslationId::new(),
            lesson_id: lesson,
            entry: TranslationEntry::new(fields, next_order),
        };
        rows.push(row.clone());
        Ok(row)
    }

    fn update_entry(
        &mut self,
        lesson: LessonId,
        id: TranslationId,
        fields: EntryFields,
    ) -> Result<(), StoreError> {
        fields.validate()?;

        let row = self.find_mut(lesson, id)?;
        let sort_order = row.entry.sort_order;
        row.entry = TranslationEntry::new(fields, sort_order);
        Ok(())
    }

    fn delete_entry(&mut self, lesson: LessonId, id: TranslationId) -> Result<(), StoreError> {
        let rows = self
            .lessons
            .get_mut(&lesson)
            .ok_or(StoreError::NotFound { lesson, id })?;
        let before = rows.len();
        rows.retain(|row| row.id != id);
        if rows.len() == before {
            return Err(StoreError::NotFound { lesson, id });
        }
        Ok(())
    }
}
