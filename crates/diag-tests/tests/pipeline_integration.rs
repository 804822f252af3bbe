use std::collections::HashMap;
use std::sync::Arc;

use diag_core::assessment::{SeverityLabel, TextType};
use diag_core::diagnosis::DiagnosisEngine;
use diag_core::entity::TaggedToken;
use diag_core::extraction::PosTagger;
use diag_core::knowledge::{
    DangerLevel, HazardRecord, KnowledgeRecord, KnowledgeStore, MaintenanceRecord, RiskLevel,
};
use diag_core::report::DiagnosisReport;
use diag_core::rules::KeywordRules;
use diag_engine::RuleDiagnosisEngine;
use diag_extraction::RuleEntityExtractor;
use diag_knowledge::InMemoryKnowledgeBase;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const MILL_NOTE: &str = "检修员小明在5月5日9:00发现430号轧机制动力出现异常波动";

/// Returns a canned token stream per input, so scenarios do not depend on
/// the statistical segmenter. Streams use the same shape `JiebaTagger`
/// produces after rejoining split dates and clock times.
#[derive(Default)]
struct ScriptedTagger {
    scripts: HashMap<String, Vec<TaggedToken>>,
}

impl ScriptedTagger {
    fn with(mut self, text: &str, tokens: &[(&str, &str)]) -> Self {
        self.scripts.insert(
            text.to_string(),
            tokens.iter().map(|(w, t)| TaggedToken::new(*w, *t)).collect(),
        );
        self
    }
}

impl PosTagger for ScriptedTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        self.scripts.get(text).cloned().unwrap_or_default()
    }
}

fn mill_tagger() -> ScriptedTagger {
    ScriptedTagger::default().with(
        MILL_NOTE,
        &[
            ("检修员", "n"),
            ("小明", "nr"),
            ("在", "p"),
            ("5月", "t"),
            ("5日", "t"),
            ("9:00", "t"),
            ("发现", "v"),
            ("430号轧机", "n"),
            ("制动力", "n"),
            ("出现", "v"),
            ("异常", "a"),
            ("波动", "vn"),
        ],
    )
}

fn engine(tagger: ScriptedTagger, knowledge: InMemoryKnowledgeBase) -> RuleDiagnosisEngine {
    RuleDiagnosisEngine::new(
        Arc::new(RuleEntityExtractor::new(Arc::new(tagger))),
        Arc::new(knowledge),
        KeywordRules::default(),
    )
}

fn hazard(device: &str, level: Option<DangerLevel>) -> HazardRecord {
    HazardRecord {
        device_name: device.to_string(),
        danger_description: None,
        danger_cause: None,
        danger_level: level,
        process_measure: Some(format!("{device}停机检查")),
        guard_measure: Some("设置警戒区域".to_string()),
    }
}

fn sample_file() -> InMemoryKnowledgeBase {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/knowledge_sample.json");
    InMemoryKnowledgeBase::load_file(std::path::Path::new(path))
        .expect("bundled knowledge file should load")
}

// ---------------------------------------------------------------------------
// End-to-end scenarios
// ---------------------------------------------------------------------------

#[test]
fn mill_note_is_moderate_hazard() {
    let engine = engine(mill_tagger(), InMemoryKnowledgeBase::sample());
    let report = engine.diagnose(MILL_NOTE).expect("diagnosis should succeed");

    assert_eq!(report.text_classification, TextType::Hazard);
    assert_eq!(report.severity.label, SeverityLabel::Moderate);
    assert_eq!(report.severity.confidence, 0.6);

    let entities = &report.extracted_entities;
    assert_eq!(entities.device_names, vec!["430号轧机"]);
    assert_eq!(entities.time_info, vec!["5月", "5日", "9:00"]);
    assert_eq!(entities.technical_terms, vec!["制动力"]);

    // "430号轧机" is not a substring of "2#棒-17H轧机机列-430"
    assert!(report.matched_records.is_empty());
    assert_eq!(report.risk_level, RiskLevel::Low);
}

#[test]
fn severe_keyword_overrides_other_tiers() {
    let note = "轴承严重磨损，出现异常波动，请注意观察";
    let tagger = ScriptedTagger::default().with(note, &[("轴承", "n"), ("严重", "a")]);
    let report = engine(tagger, InMemoryKnowledgeBase::new())
        .diagnose(note)
        .unwrap();

    assert_eq!(report.severity.label, SeverityLabel::Severe);
    assert_eq!(report.severity.confidence, 0.8);
    assert!(report
        .recommendations
        .contains("建议检查轴承润滑情况，监测振动和温度变化"));
}

#[test]
fn partial_device_name_matches_bottom_tier_hazard() {
    let kb = InMemoryKnowledgeBase::sample();
    let result = kb.query(&["430".to_string()], TextType::Hazard).unwrap();

    assert_eq!(result.matched_records.len(), 1);
    assert_eq!(result.matched_records[0].danger_level(), Some(DangerLevel::D));
    assert_eq!(result.risk_level, RiskLevel::Low);
}

#[test]
fn top_tier_hazard_raises_risk() {
    let note = "凝汽器坑排污泵报警";
    let tagger = ScriptedTagger::default().with(note, &[("凝汽器坑排污泵", "n"), ("报警", "v")]);
    let report = engine(tagger, sample_file()).diagnose(note).unwrap();

    assert_eq!(report.text_classification, TextType::Hazard);
    assert_eq!(report.risk_level, RiskLevel::High);
    assert_eq!(report.matched_records.len(), 1);
    assert!(report.recommendations.contains("建议采取措施: 更换排气阀阀芯"));
    assert!(report.recommendations.contains("监护措施: 设置警戒区域，专人监护"));
}

#[test]
fn mixed_levels_raise_risk_once_any_is_top_tier() {
    let mut kb = InMemoryKnowledgeBase::new();
    kb.add_hazard(hazard("1#高炉鼓风机", Some(DangerLevel::C)));
    kb.add_hazard(hazard("1#高炉鼓风机组", Some(DangerLevel::A)));
    kb.add_hazard(hazard("1#高炉鼓风机电机", None));

    let result = kb.query(&["鼓风机".to_string()], TextType::Hazard).unwrap();
    assert_eq!(result.matched_records.len(), 3);
    assert_eq!(result.risk_level, RiskLevel::High);
}

#[test]
fn classification_selects_collection() {
    let note = "需要对轧机进行定期维修保养";
    let tagger = ScriptedTagger::default().with(note, &[("17H轧机", "n")]);

    let mut kb = InMemoryKnowledgeBase::new();
    kb.add_hazard(hazard("2#棒-17H轧机机列-430", Some(DangerLevel::A)));
    kb.add_maintenance(MaintenanceRecord {
        repair_equipment: "2#棒-17H轧机机列-430".to_string(),
        fault_description: None,
        repair_content: Some("更换轴承".to_string()),
        process_measure: Some("定期润滑".to_string()),
        guard_measure: None,
    });

    let report = engine(tagger, kb).diagnose(note).unwrap();
    assert_eq!(report.text_classification, TextType::Maintenance);
    assert!(matches!(
        report.matched_records.as_slice(),
        [KnowledgeRecord::Maintenance(_)]
    ));
    // hazard register is not consulted for maintenance notes
    assert_eq!(report.risk_level, RiskLevel::Low);
    assert_eq!(
        report.recommendations.iter().collect::<Vec<_>>(),
        vec!["建议采取措施: 定期润滑"]
    );
}

// ---------------------------------------------------------------------------
// Classification tie-breaking
// ---------------------------------------------------------------------------

#[test]
fn classification_tie_rules() {
    let engine = engine(ScriptedTagger::default(), InMemoryKnowledgeBase::new());
    let classify = |text: &str| engine.diagnose(text).unwrap().text_classification;

    assert_eq!(classify("设备运行平稳"), TextType::PointInspection);
    assert_eq!(classify("点检发现异常"), TextType::Hazard);
    assert_eq!(classify("检查后更换"), TextType::Maintenance);
    assert_eq!(classify("点检巡检后更换"), TextType::PointInspection);
    assert_eq!(classify("报警报警，安排检修"), TextType::Hazard);
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn repeated_diagnosis_is_identical_except_timestamp() {
    let engine = engine(mill_tagger(), sample_file());

    let first = engine.diagnose(MILL_NOTE).unwrap();
    let second = engine.diagnose(MILL_NOTE).unwrap();
    assert!(first.same_findings(&second));

    let strip = |report: &DiagnosisReport| {
        let mut value = serde_json::to_value(report).unwrap();
        value.as_object_mut().unwrap().remove("timestamp");
        serde_json::to_string(&value).unwrap()
    };
    assert_eq!(strip(&first), strip(&second));
}

#[test]
fn untokenizable_text_yields_empty_but_complete_report() {
    let engine = engine(ScriptedTagger::default(), sample_file());
    let report = engine.diagnose("？？？").unwrap();

    assert!(report.extracted_entities.is_empty());
    assert_eq!(report.text_classification, TextType::PointInspection);
    assert_eq!(report.severity.label, SeverityLabel::Normal);
    assert_eq!(report.severity.confidence, 0.2);
    assert!(report.matched_records.is_empty());
    assert!(report.recommendations.is_empty());
}

#[test]
fn repeated_locations_give_one_recommendation() {
    let note = "轴承外圈和轴承内圈异常";
    let tagger = ScriptedTagger::default().with(
        note,
        &[("轴承外圈", "n"), ("和", "c"), ("轴承内圈", "n"), ("异常", "a")],
    );
    let report = engine(tagger, InMemoryKnowledgeBase::new())
        .diagnose(note)
        .unwrap();

    assert_eq!(report.extracted_entities.fault_locations.len(), 2);
    assert_eq!(report.recommendations.len(), 1);
}

#[test]
fn report_renders_as_text() {
    let engine = engine(mill_tagger(), InMemoryKnowledgeBase::sample());
    let rendered = engine.diagnose(MILL_NOTE).unwrap().to_string();

    assert!(rendered.starts_with("=== 工业设备故障诊断报告 ==="));
    assert!(rendered.contains("分类结果: 隐患"));
    assert!(rendered.contains("严重程度: 中等 (置信度 0.6)"));
    assert!(rendered.contains("- 设备名称: 430号轧机"));
    assert!(rendered.contains("匹配到 0 条相关历史记录"));
}

// ---------------------------------------------------------------------------
// Real tokenizer
// ---------------------------------------------------------------------------

#[test]
fn jieba_keeps_registered_mill_name_whole() {
    let engine = RuleDiagnosisEngine::from_config(&diag_core::config::AppConfig::default())
        .expect("default engine should build");
    let report = engine.diagnose(MILL_NOTE).unwrap();
    let entities = &report.extracted_entities;

    assert!(entities.device_names.contains(&"430号轧机".to_string()));
    for time in ["5月", "5日", "9:00"] {
        assert!(
            entities.time_info.contains(&time.to_string()),
            "missing {time} in {:?}",
            entities.time_info
        );
    }
    assert_eq!(report.text_classification, TextType::Hazard);
    assert_eq!(report.severity.label, SeverityLabel::Moderate);
}
