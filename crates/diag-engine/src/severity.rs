use diag_core::assessment::{SeverityLabel, SeverityResult};
use diag_core::rules::SeverityKeywords;

/// Grades a note by the most severe keyword tier it mentions.
pub struct SeverityAssessor {
    keywords: SeverityKeywords,
}

impl SeverityAssessor {
    pub fn new(keywords: SeverityKeywords) -> Self {
        Self { keywords }
    }

    pub fn assess(&self, text: &str) -> SeverityResult {
        let tiers = [
            (SeverityLabel::Severe, &self.keywords.severe),
            (SeverityLabel::Moderate, &self.keywords.moderate),
            (SeverityLabel::Mild, &self.keywords.mild),
        ];

        tiers
            .into_iter()
            .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k.as_str())))
            .map(|(label, _)| label)
            .unwrap_or(SeverityLabel::Normal)
            .into()
    }
}
