mod classifier;
mod engine;
mod recommend;
mod severity;

pub use classifier::KeywordClassifier;
pub use engine::RuleDiagnosisEngine;
pub use recommend::{RecommendationGenerator, GUARD_MEASURE_PREFIX, PROCESS_MEASURE_PREFIX};
pub use severity::SeverityAssessor;
