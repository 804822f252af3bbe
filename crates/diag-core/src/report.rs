use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assessment::{SeverityResult, TextType};
use crate::entity::EntityBundle;
use crate::knowledge::{KnowledgeRecord, RiskLevel};

/// Outcome of diagnosing one maintenance note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisReport {
    pub input_text: String,
    pub extracted_entities: EntityBundle,
    pub text_classification: TextType,
    pub severity: SeverityResult,
    pub matched_records: Vec<KnowledgeRecord>,
    pub risk_level: RiskLevel,
    /// Unique advice strings. The set is ordered for stable output only.
    pub recommendations: BTreeSet<String>,
    pub timestamp: DateTime<Utc>,
}

impl DiagnosisReport {
    /// Compare everything except the timestamp.
    pub fn same_findings(&self, other: &DiagnosisReport) -> bool {
        self.input_text == other.input_text
            && self.extracted_entities == other.extracted_entities
            && self.text_classification == other.text_classification
            && self.severity == other.severity
            && self.matched_records == other.matched_records
            && self.risk_level == other.risk_level
            && self.recommendations == other.recommendations
    }
}

impl fmt::Display for DiagnosisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entities = &self.extracted_entities;
        writeln!(f, "=== 工业设备故障诊断报告 ===")?;
        writeln!(f, "输入文本: {}", self.input_text)?;
        writeln!(f, "分类结果: {}", self.text_classification)?;
        writeln!(
            f,
            "严重程度: {} (置信度 {:.1})",
            self.severity.label.display_name(),
            self.severity.confidence
        )?;
        writeln!(f, "风险等级: {}", self.risk_level)?;
        writeln!(f)?;
        writeln!(f, "识别的关键信息:")?;
        writeln!(f, "- 设备名称: {}", entities.device_names.join(", "))?;
        writeln!(f, "- 故障部位: {}", entities.fault_locations.join(", "))?;
        writeln!(f, "- 时间信息: {}", entities.time_info.join(", "))?;
        writeln!(f, "- 技术术语: {}", entities.technical_terms.join(", "))?;
        writeln!(f)?;
        writeln!(f, "维护建议:")?;
        for (i, rec) in self.recommendations.iter().enumerate() {
            writeln!(f, "{}. {rec}", i + 1)?;
        }
        writeln!(f)?;
        writeln!(f, "匹配到 {} 条相关历史记录", self.matched_records.len())?;
        write!(f, "生成时间: {}", self.timestamp.to_rfc3339())
    }
}
