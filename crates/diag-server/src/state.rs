use std::sync::Arc;

use diag_engine::RuleDiagnosisEngine;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RuleDiagnosisEngine>,
}
