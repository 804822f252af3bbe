use serde::{Deserialize, Serialize};

/// A word and its part-of-speech flag as produced by the tokenizer.
///
/// Flags follow the ICTCLAS convention used by jieba: every noun-family flag
/// (`n`, `nr`, `ns`, `nz`, `vn`, ...) contains the letter `n`, and `t` marks a
/// temporal word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub text: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
        }
    }

    pub fn is_noun(&self) -> bool {
        self.tag.contains('n')
    }

    pub fn is_temporal(&self) -> bool {
        self.tag == "t"
    }

    /// Length in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Entities pulled out of one maintenance note, grouped by category.
///
/// Tokens are appended in scan order and are not deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityBundle {
    pub device_names: Vec<String>,
    pub fault_locations: Vec<String>,
    pub time_info: Vec<String>,
    pub technical_terms: Vec<String>,
}

impl EntityBundle {
    pub fn is_empty(&self) -> bool {
        self.device_names.is_empty()
            && self.fault_locations.is_empty()
            && self.time_info.is_empty()
            && self.technical_terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.device_names.len()
            + self.fault_locations.len()
            + self.time_info.len()
            + self.technical_terms.len()
    }
}
