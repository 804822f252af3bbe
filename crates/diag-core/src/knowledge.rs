use std::fmt;

use serde::{Deserialize, Serialize};

use crate::assessment::TextType;
use crate::error::Result;

/// Hazard grading used on the plant's hazard register, A类 being the worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DangerLevel {
    #[serde(rename = "A类", alias = "A")]
    A,
    #[serde(rename = "B类", alias = "B")]
    B,
    #[serde(rename = "C类", alias = "C")]
    C,
    #[serde(rename = "D类", alias = "D")]
    D,
}

impl DangerLevel {
    /// A类 and B类 escalate the risk level of a diagnosis.
    pub fn is_top_tier(&self) -> bool {
        matches!(self, DangerLevel::A | DangerLevel::B)
    }
}

impl fmt::Display for DangerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DangerLevel::A => "A类",
            DangerLevel::B => "B类",
            DangerLevel::C => "C类",
            DangerLevel::D => "D类",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionRecord {
    pub device_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inspection_item: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inspection_result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_measure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guard_measure: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardRecord {
    pub device_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub danger_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub danger_cause: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub danger_level: Option<DangerLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_measure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guard_measure: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub repair_equipment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fault_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repair_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_measure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guard_measure: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "record_type", rename_all = "snake_case")]
pub enum KnowledgeRecord {
    Inspection(InspectionRecord),
    Hazard(HazardRecord),
    Maintenance(MaintenanceRecord),
}

impl KnowledgeRecord {
    pub fn process_measure(&self) -> Option<&str> {
        match self {
            KnowledgeRecord::Inspection(r) => r.process_measure.as_deref(),
            KnowledgeRecord::Hazard(r) => r.process_measure.as_deref(),
            KnowledgeRecord::Maintenance(r) => r.process_measure.as_deref(),
        }
    }

    pub fn guard_measure(&self) -> Option<&str> {
        match self {
            KnowledgeRecord::Inspection(r) => r.guard_measure.as_deref(),
            KnowledgeRecord::Hazard(r) => r.guard_measure.as_deref(),
            KnowledgeRecord::Maintenance(r) => r.guard_measure.as_deref(),
        }
    }

    pub fn danger_level(&self) -> Option<DangerLevel> {
        match self {
            KnowledgeRecord::Hazard(r) => r.danger_level,
            _ => None,
        }
    }
}

/// True when any of `device_names` occurs verbatim inside a record's
/// equipment identifier. Extracted names are often truncated, so this is a
/// raw substring test with no case or punctuation normalization.
pub fn device_name_overlaps(field: &str, device_names: &[String]) -> bool {
    device_names.iter().any(|name| field.contains(name.as_str()))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    #[default]
    Low,
    High,
}

impl RiskLevel {
    /// Escalate to `High`; never lowers.
    pub fn raise(&mut self) {
        *self = RiskLevel::High;
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => f.write_str("low"),
            RiskLevel::High => f.write_str("high"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub matched_records: Vec<KnowledgeRecord>,
    pub risk_level: RiskLevel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeCounts {
    pub inspections: usize,
    pub hazards: usize,
    pub maintenance: usize,
}

impl KnowledgeCounts {
    pub fn total(&self) -> usize {
        self.inspections + self.hazards + self.maintenance
    }
}

/// Read-only access to historical maintenance knowledge.
pub trait KnowledgeStore: Send + Sync {
    /// Match records of the collection selected by `text_type` against the
    /// extracted device names.
    fn query(&self, device_names: &[String], text_type: TextType) -> Result<QueryResult>;

    fn counts(&self) -> KnowledgeCounts;
}
