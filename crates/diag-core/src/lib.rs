pub mod api_types;
pub mod assessment;
pub mod config;
pub mod diagnosis;
pub mod entity;
pub mod error;
pub mod extraction;
pub mod knowledge;
pub mod report;
pub mod rules;

pub use assessment::{CategoryCounts, SeverityLabel, SeverityResult, TextType};
pub use config::AppConfig;
pub use diagnosis::DiagnosisEngine;
pub use entity::{EntityBundle, TaggedToken};
pub use error::{DiagError, Result};
pub use extraction::{EntityExtractor, PosTagger};
pub use knowledge::{
    DangerLevel, HazardRecord, InspectionRecord, KnowledgeCounts, KnowledgeRecord,
    KnowledgeStore, MaintenanceRecord, QueryResult, RiskLevel,
};
pub use report::DiagnosisReport;
pub use rules::{ClassificationKeywords, FaultAdvice, KeywordRules, SeverityKeywords};
