use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};

use diag_core::config::AppConfig;
use diag_core::diagnosis::DiagnosisEngine;
use diag_core::error::Result;
use diag_core::extraction::EntityExtractor;
use diag_core::knowledge::{KnowledgeCounts, KnowledgeStore};
use diag_core::report::DiagnosisReport;
use diag_core::rules::KeywordRules;
use diag_extraction::{JiebaTagger, RuleEntityExtractor};
use diag_knowledge::InMemoryKnowledgeBase;

use crate::classifier::KeywordClassifier;
use crate::recommend::RecommendationGenerator;
use crate::severity::SeverityAssessor;

// ---------------------------------------------------------------------------
// RuleDiagnosisEngine
// ---------------------------------------------------------------------------

/// Keyword-rule diagnosis over a tagged note and an in-memory history.
pub struct RuleDiagnosisEngine {
    extractor: Arc<dyn EntityExtractor>,
    knowledge: Arc<dyn KnowledgeStore>,
    classifier: KeywordClassifier,
    severity: SeverityAssessor,
    recommender: RecommendationGenerator,
    lexicon_terms: usize,
}

impl RuleDiagnosisEngine {
    pub fn new(
        extractor: Arc<dyn EntityExtractor>,
        knowledge: Arc<dyn KnowledgeStore>,
        rules: KeywordRules,
    ) -> Self {
        Self {
            extractor,
            knowledge,
            classifier: KeywordClassifier::new(rules.classification),
            severity: SeverityAssessor::new(rules.severity),
            recommender: RecommendationGenerator::new(rules.fault_advice),
            lexicon_terms: 0,
        }
    }

    /// Wire the jieba tagger, keyword rules and knowledge base described by
    /// `config`. Any loading failure is returned before the engine exists.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let tagger = JiebaTagger::from_config(config)?;
        let lexicon_terms = tagger.lexicon_terms();
        let rules = KeywordRules::load(config)?;
        let knowledge = InMemoryKnowledgeBase::load(config)?;

        info!(
            lexicon_terms,
            knowledge_records = knowledge.counts().total(),
            "Diagnosis engine initialized"
        );

        let extractor = RuleEntityExtractor::new(Arc::new(tagger));
        let mut engine = Self::new(Arc::new(extractor), Arc::new(knowledge), rules);
        engine.lexicon_terms = lexicon_terms;
        Ok(engine)
    }

    pub fn knowledge_counts(&self) -> KnowledgeCounts {
        self.knowledge.counts()
    }

    /// Number of domain terms registered with the tokenizer (0 when the
    /// engine was built around a custom extractor).
    pub fn lexicon_terms(&self) -> usize {
        self.lexicon_terms
    }
}

impl DiagnosisEngine for RuleDiagnosisEngine {
    #[instrument(skip_all, fields(chars = text.chars().count()))]
    fn diagnose(&self, text: &str) -> Result<DiagnosisReport> {
        let entities = self.extractor.extract(text)?;
        let counts = self.classifier.counts(text);
        let text_type = counts.resolve();
        let severity = self.severity.assess(text);

        debug!(
            inspection = counts.inspection,
            hazard = counts.hazard,
            maintenance = counts.maintenance,
            text_type = ?text_type,
            severity = ?severity.label,
            "Scored note"
        );

        let query = self.knowledge.query(&entities.device_names, text_type)?;
        let recommendations = self
            .recommender
            .generate(&entities, &query.matched_records);

        info!(
            text_type = ?text_type,
            severity = ?severity.label,
            devices = entities.device_names.len(),
            matched = query.matched_records.len(),
            risk = %query.risk_level,
            recommendations = recommendations.len(),
            "Diagnosis complete"
        );

        Ok(DiagnosisReport {
            input_text: text.to_string(),
            extracted_entities: entities,
            text_classification: text_type,
            severity,
            matched_records: query.matched_records,
            risk_level: query.risk_level,
            recommendations,
            timestamp: Utc::now(),
        })
    }
}
