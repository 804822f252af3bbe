use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::knowledge::KnowledgeCounts;
use crate::report::DiagnosisReport;

// --- Health ---

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub knowledge: KnowledgeCounts,
    pub lexicon_terms: usize,
}

// --- Index ---

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
    pub usage: String,
}

// --- Diagnosis ---

#[derive(Debug, Serialize, Deserialize)]
pub struct DiagnoseRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DiagnoseResponse {
    pub success: bool,
    pub result: DiagnosisReport,
}

impl From<DiagnosisReport> for DiagnoseResponse {
    fn from(report: DiagnosisReport) -> Self {
        Self {
            success: true,
            result: report,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
