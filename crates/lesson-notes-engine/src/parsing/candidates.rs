use super::tags::{ENGLISH_LABEL, JP_LABEL};

/// Translation candidates seen in one block, keyed by lowercased label.
///
/// Kept as an association list so "first recorded label" is well defined.
/// Recording a label again replaces its value in place.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TranslationCandidates {
    entries: Vec<(String, String)>,
}

impl TranslationCandidates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, label: String, text: String) {
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some((_, existing)) => *existing = text,
            None => self.entries.push((label, text)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, text)| text.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The primary translation: `jp`, then `english`, then whichever label came first.
    pub fn resolve(&self) -> Option<&str> {
        self.get(JP_LABEL)
            .filter(|t| !t.is_empty())
            .or_else(|| self.get(ENGLISH_LABEL).filter(|t| !t.is_empty()))
            .or_else(|| self.entries.first().map(|(_, text)| text.as_str()))
    }
}
