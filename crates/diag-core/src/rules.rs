//! Keyword tables driving classification, severity and fault-location advice.
//!
//! Built-in defaults cover the rolling-mill vocabulary. A TOML file can replace
//! any section; sections left out keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::AppConfig;
use crate::error::{DiagError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationKeywords {
    pub inspection: Vec<String>,
    pub hazard: Vec<String>,
    pub maintenance: Vec<String>,
}

impl Default for ClassificationKeywords {
    fn default() -> Self {
        Self {
            inspection: strings(&["点检", "检查", "巡检", "监测", "状态"]),
            hazard: strings(&["隐患", "异常", "故障", "报警", "问题"]),
            maintenance: strings(&["维修", "检修", "保养", "更换", "修复"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityKeywords {
    pub severe: Vec<String>,
    pub moderate: Vec<String>,
    pub mild: Vec<String>,
}

impl Default for SeverityKeywords {
    fn default() -> Self {
        Self {
            severe: strings(&["严重", "紧急", "危险", "故障", "报警", "停机"]),
            moderate: strings(&["问题", "异常", "波动", "不稳定"]),
            mild: strings(&["轻微", "小问题", "注意", "观察"]),
        }
    }
}

/// Canned advice for fault locations containing `keyword`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultAdvice {
    pub keyword: String,
    pub advice: String,
}

impl FaultAdvice {
    fn new(keyword: &str, advice: &str) -> Self {
        Self {
            keyword: keyword.into(),
            advice: advice.into(),
        }
    }
}

pub fn default_fault_advice() -> Vec<FaultAdvice> {
    vec![
        FaultAdvice::new("轴承", "建议检查轴承润滑情况，监测振动和温度变化"),
        FaultAdvice::new("润滑系统", "建议检查润滑油位和油质，清洁过滤器"),
        FaultAdvice::new("轧辊", "建议检查轧辊磨损情况，必要时进行更换"),
        FaultAdvice::new("保持架", "建议检查保持架的状态，检测对应的情况"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordRules {
    pub classification: ClassificationKeywords,
    pub severity: SeverityKeywords,
    /// Checked in order; the first keyword contained in a location wins.
    pub fault_advice: Vec<FaultAdvice>,
}

impl Default for KeywordRules {
    fn default() -> Self {
        Self {
            classification: ClassificationKeywords::default(),
            severity: SeverityKeywords::default(),
            fault_advice: default_fault_advice(),
        }
    }
}

impl KeywordRules {
    /// Rules from `config.rules_path`, or the built-in tables when unset.
    pub fn load(config: &AppConfig) -> Result<Self> {
        match &config.rules_path {
            Some(path) => Self::load_from_file(path),
            None => {
                info!("No rules file configured, using built-in keyword tables");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            DiagError::Config(format!("cannot read rules file {}: {e}", path.display()))
        })?;
        let rules = Self::from_toml_str(&contents)?;
        info!(
            path = %path.display(),
            fault_advice = rules.fault_advice.len(),
            "Loaded keyword rules"
        );
        Ok(rules)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let rules: Self = toml::from_str(contents)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Reject blank keywords: an empty pattern would match every text.
    pub fn validate(&self) -> Result<()> {
        let sets: [(&str, &[String]); 6] = [
            ("classification.inspection", &self.classification.inspection),
            ("classification.hazard", &self.classification.hazard),
            ("classification.maintenance", &self.classification.maintenance),
            ("severity.severe", &self.severity.severe),
            ("severity.moderate", &self.severity.moderate),
            ("severity.mild", &self.severity.mild),
        ];
        for (name, keywords) in sets {
            if keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(DiagError::Config(format!("blank keyword in {name}")));
            }
        }
        if let Some(entry) = self
            .fault_advice
            .iter()
            .find(|a| a.keyword.trim().is_empty() || a.advice.trim().is_empty())
        {
            return Err(DiagError::Config(format!(
                "fault_advice entry has a blank keyword or advice: {entry:?}"
            )));
        }
        Ok(())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
