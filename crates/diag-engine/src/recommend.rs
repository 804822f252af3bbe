use std::collections::BTreeSet;

use diag_core::entity::EntityBundle;
use diag_core::knowledge::KnowledgeRecord;
use diag_core::rules::FaultAdvice;

pub const PROCESS_MEASURE_PREFIX: &str = "建议采取措施: ";
pub const GUARD_MEASURE_PREFIX: &str = "监护措施: ";

/// Turns matched history and fault locations into maintenance advice.
pub struct RecommendationGenerator {
    fault_advice: Vec<FaultAdvice>,
}

impl RecommendationGenerator {
    pub fn new(fault_advice: Vec<FaultAdvice>) -> Self {
        Self { fault_advice }
    }

    pub fn generate(
        &self,
        entities: &EntityBundle,
        matched_records: &[KnowledgeRecord],
    ) -> BTreeSet<String> {
        let mut recommendations = BTreeSet::new();

        for record in matched_records {
            if let Some(measure) = record.process_measure() {
                recommendations.insert(format!("{PROCESS_MEASURE_PREFIX}{measure}"));
            }
            if let Some(measure) = record.guard_measure() {
                recommendations.insert(format!("{GUARD_MEASURE_PREFIX}{measure}"));
            }
        }

        for location in &entities.fault_locations {
            if let Some(entry) = self.advice_for(location) {
                recommendations.insert(entry.advice.clone());
            }
        }

        recommendations
    }

    fn advice_for(&self, location: &str) -> Option<&FaultAdvice> {
        self.fault_advice
            .iter()
            .find(|entry| location.contains(entry.keyword.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diag_core::knowledge::{DangerLevel, HazardRecord, MaintenanceRecord};
    use diag_core::rules::default_fault_advice;

    fn generator() -> RecommendationGenerator {
        RecommendationGenerator::new(default_fault_advice())
    }

    fn locations(items: &[&str]) -> EntityBundle {
        EntityBundle {
            fault_locations: items.iter().map(|s| s.to_string()).collect(),
            ..EntityBundle::default()
        }
    }

    #[test]
    fn record_measures_become_advice() {
        let record = KnowledgeRecord::Hazard(HazardRecord {
            device_name: "2#棒-17H轧机机列-430".into(),
            danger_description: None,
            danger_cause: Some("叶轮堵塞".into()),
            danger_level: Some(DangerLevel::D),
            process_measure: Some("水泵拆检，清理杂物".into()),
            guard_measure: Some("系统隔离".into()),
        });
        let recs = generator().generate(&EntityBundle::default(), &[record]);
        assert_eq!(recs.len(), 2);
        assert!(recs.contains("建议采取措施: 水泵拆检，清理杂物"));
        assert!(recs.contains("监护措施: 系统隔离"));
    }

    #[test]
    fn record_without_measures_adds_nothing() {
        let record = KnowledgeRecord::Maintenance(MaintenanceRecord {
            repair_equipment: "排污泵".into(),
            fault_description: None,
            repair_content: Some("更换叶轮".into()),
            process_measure: None,
            guard_measure: None,
        });
        assert!(generator().generate(&EntityBundle::default(), &[record]).is_empty());
    }

    #[test]
    fn shared_location_keyword_collapses() {
        let recs = generator().generate(&locations(&["轴承外圈", "轴承内圈", "轴承"]), &[]);
        assert_eq!(recs.len(), 1);
        assert!(recs.contains("建议检查轴承润滑情况，监测振动和温度变化"));
    }

    #[test]
    fn first_table_entry_wins_per_location() {
        // contains both 轴承 and 保持架; the bearing entry comes first
        let recs = generator().generate(&locations(&["轴承保持架"]), &[]);
        assert_eq!(recs.len(), 1);
        assert!(recs.contains("建议检查轴承润滑情况，监测振动和温度变化"));
    }

    #[test]
    fn unknown_locations_are_skipped() {
        let recs = generator().generate(&locations(&["电机自由端", "润滑系统", "轧辊"]), &[]);
        assert_eq!(recs.len(), 2);
        assert!(recs.contains("建议检查润滑油位和油质，清洁过滤器"));
        assert!(recs.contains("建议检查轧辊磨损情况，必要时进行更换"));
    }

    #[test]
    fn duplicate_record_advice_is_deduplicated() {
        let record = KnowledgeRecord::Hazard(HazardRecord {
            device_name: "排污泵".into(),
            danger_description: None,
            danger_cause: None,
            danger_level: None,
            process_measure: Some("清理杂物".into()),
            guard_measure: None,
        });
        let recs = generator().generate(&EntityBundle::default(), &[record.clone(), record]);
        assert_eq!(recs.len(), 1);
    }
}
