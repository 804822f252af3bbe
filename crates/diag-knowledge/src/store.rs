use std::path::Path;

use serde::{Deserialize, Serialize};

use diag_core::assessment::TextType;
use diag_core::config::AppConfig;
use diag_core::error::{DiagError, Result};
use diag_core::knowledge::{
    device_name_overlaps, DangerLevel, HazardRecord, InspectionRecord, KnowledgeCounts,
    KnowledgeRecord, KnowledgeStore, MaintenanceRecord, QueryResult,
};

/// Inspection, hazard and maintenance history held in memory.
///
/// Populated once at startup and only read afterwards, so it can be shared
/// across requests without locking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InMemoryKnowledgeBase {
    pub inspections: Vec<InspectionRecord>,
    pub hazards: Vec<HazardRecord>,
    pub maintenance: Vec<MaintenanceRecord>,
}

impl InMemoryKnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// The demonstration data set: one hazard on the 430 rolling-mill line.
    pub fn sample() -> Self {
        Self {
            hazards: vec![HazardRecord {
                device_name: "2#棒-17H轧机机列-430".into(),
                danger_description: Some("135机组#1机凝汽器坑排污泵出力不足".into()),
                danger_cause: Some("叶轮堵塞".into()),
                danger_level: Some(DangerLevel::D),
                process_measure: Some("水泵拆检，清理杂物".into()),
                guard_measure: Some("系统隔离".into()),
            }],
            ..Self::default()
        }
    }

    /// Records from `config.knowledge_path`, or the sample data when unset.
    pub fn load(config: &AppConfig) -> Result<Self> {
        match &config.knowledge_path {
            Some(path) => Self::load_file(path),
            None => {
                tracing::info!("No knowledge file configured, using sample records");
                Ok(Self::sample())
            }
        }
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            DiagError::Knowledge(format!("cannot read knowledge file {}: {e}", path.display()))
        })?;
        let kb = Self::from_json_str(&contents)?;
        let counts = kb.counts();
        tracing::info!(
            path = %path.display(),
            inspections = counts.inspections,
            hazards = counts.hazards,
            maintenance = counts.maintenance,
            "Loaded knowledge base"
        );
        Ok(kb)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn add_inspection(&mut self, record: InspectionRecord) {
        self.inspections.push(record);
    }

    pub fn add_hazard(&mut self, record: HazardRecord) {
        self.hazards.push(record);
    }

    pub fn add_maintenance(&mut self, record: MaintenanceRecord) {
        self.maintenance.push(record);
    }
}

impl KnowledgeStore for InMemoryKnowledgeBase {
    fn query(&self, device_names: &[String], text_type: TextType) -> Result<QueryResult> {
        let mut result = QueryResult::default();

        match text_type {
            TextType::PointInspection => {
                for record in &self.inspections {
                    if device_name_overlaps(&record.device_name, device_names) {
                        result
                            .matched_records
                            .push(KnowledgeRecord::Inspection(record.clone()));
                    }
                }
            }
            TextType::Hazard => {
                for record in &self.hazards {
                    if device_name_overlaps(&record.device_name, device_names) {
                        if record.danger_level.is_some_and(|l| l.is_top_tier()) {
                            result.risk_level.raise();
                        }
                        result
                            .matched_records
                            .push(KnowledgeRecord::Hazard(record.clone()));
                    }
                }
            }
            TextType::Maintenance => {
                for record in &self.maintenance {
                    if device_name_overlaps(&record.repair_equipment, device_names) {
                        result
                            .matched_records
                            .push(KnowledgeRecord::Maintenance(record.clone()));
                    }
                }
            }
        }

        tracing::debug!(
            text_type = ?text_type,
            device_names = device_names.len(),
            matched = result.matched_records.len(),
            risk = %result.risk_level,
            "Knowledge base query complete"
        );

        Ok(result)
    }

    fn counts(&self) -> KnowledgeCounts {
        KnowledgeCounts {
            inspections: self.inspections.len(),
            hazards: self.hazards.len(),
            maintenance: self.maintenance.len(),
        }
    }
}
