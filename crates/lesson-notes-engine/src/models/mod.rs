pub mod ids;
pub mod translation_entry;

pub use ids::{LessonId, TranslationId};
pub use translation_entry::{EntryError, EntryFields, StoredTranslation, TranslationEntry};
