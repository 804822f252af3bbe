use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextType {
    PointInspection,
    Hazard,
    Maintenance,
}

impl TextType {
    /// Label used in rendered reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            TextType::PointInspection => "点检",
            TextType::Hazard => "隐患",
            TextType::Maintenance => "维修",
        }
    }
}

impl fmt::Display for TextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Keyword hits per text category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub inspection: usize,
    pub hazard: usize,
    pub maintenance: usize,
}

impl CategoryCounts {
    pub fn is_zero(&self) -> bool {
        self.inspection == 0 && self.hazard == 0 && self.maintenance == 0
    }

    /// Resolve the counts to a single text type.
    ///
    /// No hits at all falls back to point-inspection. Otherwise hazard wins
    /// every tie and maintenance wins ties against inspection.
    pub fn resolve(&self) -> TextType {
        if self.is_zero() {
            TextType::PointInspection
        } else if self.hazard >= self.inspection.max(self.maintenance) {
            TextType::Hazard
        } else if self.maintenance >= self.inspection {
            TextType::Maintenance
        } else {
            TextType::PointInspection
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityLabel {
    Severe,
    Moderate,
    Mild,
    Normal,
}

impl SeverityLabel {
    pub fn confidence(&self) -> f64 {
        match self {
            SeverityLabel::Severe => 0.8,
            SeverityLabel::Moderate => 0.6,
            SeverityLabel::Mild => 0.4,
            SeverityLabel::Normal => 0.2,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SeverityLabel::Severe => "严重",
            SeverityLabel::Moderate => "中等",
            SeverityLabel::Mild => "轻微",
            SeverityLabel::Normal => "正常",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeverityResult {
    pub label: SeverityLabel,
    pub confidence: f64,
}

impl From<SeverityLabel> for SeverityResult {
    fn from(label: SeverityLabel) -> Self {
        Self {
            label,
            confidence: label.confidence(),
        }
    }
}
