use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifies one lesson (a class meeting on a given date).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LessonId(pub u64);

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lesson {}", self.0)
    }
}

/// Durable identity of a stored translation, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TranslationId(Uuid);

impl TranslationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TranslationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TranslationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
