pub mod io;
pub mod models;
pub mod parsing;
pub mod store;

// Re-export key types for easier usage
pub use io::*;
pub use models::*;
pub use parsing::{LessonTextParser, ParseReport, SkipReason, SkippedBlock, parse_lesson_text};
pub use store::{ImportError, MemoryStore, StoreError, TranslationStore, import_lesson_text};
