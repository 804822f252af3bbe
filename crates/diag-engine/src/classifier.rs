use diag_core::assessment::{CategoryCounts, TextType};
use diag_core::rules::ClassificationKeywords;

/// Decides whether a note reads as a point inspection, a hazard report or a
/// maintenance record by counting category keywords.
pub struct KeywordClassifier {
    keywords: ClassificationKeywords,
}

impl KeywordClassifier {
    pub fn new(keywords: ClassificationKeywords) -> Self {
        Self { keywords }
    }

    /// Every occurrence counts, so a keyword repeated twice scores two.
    pub fn counts(&self, text: &str) -> CategoryCounts {
        CategoryCounts {
            inspection: occurrences(text, &self.keywords.inspection),
            hazard: occurrences(text, &self.keywords.hazard),
            maintenance: occurrences(text, &self.keywords.maintenance),
        }
    }

    pub fn classify(&self, text: &str) -> TextType {
        self.counts(text).resolve()
    }
}

fn occurrences(text: &str, keywords: &[String]) -> usize {
    keywords
        .iter()
        .map(|keyword| text.matches(keyword.as_str()).count())
        .sum()
}
