use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use diag_core::entity::{EntityBundle, TaggedToken};
use diag_core::error::{DiagError, Result};
use diag_core::extraction::{EntityExtractor, PosTagger};

const DEVICE_MARKERS: &[&str] = &["机", "泵", "阀"];
const LOCATION_MARKERS: &[&str] = &["系统", "部位", "端", "轴承", "轧辊", "保持架"];
const TECHNICAL_MARKERS: &[&str] = &["力", "谱", "振动", "温度"];

/// Device names shorter than this are generic words like 轧机 or 电机.
const MIN_DEVICE_NAME_CHARS: usize = 3;

static TIME_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+[月日时分]").expect("time prefix pattern is valid"));

/// Keyword-rule entity extraction over part-of-speech tagged tokens.
pub struct RuleEntityExtractor {
    tagger: Arc<dyn PosTagger>,
}

impl RuleEntityExtractor {
    pub fn new(tagger: Arc<dyn PosTagger>) -> Self {
        Self { tagger }
    }

    /// Bucket already-tagged tokens. A token can land in several buckets.
    pub fn extract_tokens(tokens: &[TaggedToken]) -> Result<EntityBundle> {
        let mut bundle = EntityBundle::default();

        for (index, token) in tokens.iter().enumerate() {
            if token.text.is_empty() || token.tag.is_empty() {
                return Err(DiagError::Extraction(format!(
                    "malformed token at position {index}: {token:?}"
                )));
            }

            if is_device_name(token) {
                bundle.device_names.push(token.text.clone());
            }
            if is_fault_location(token) {
                bundle.fault_locations.push(token.text.clone());
            }
            if is_time_expression(token) {
                bundle.time_info.push(token.text.clone());
            }
            if is_technical_term(token) {
                bundle.technical_terms.push(token.text.clone());
            }
        }

        Ok(bundle)
    }
}

impl EntityExtractor for RuleEntityExtractor {
    fn extract(&self, text: &str) -> Result<EntityBundle> {
        let tokens = self.tagger.tag(text);
        let bundle = Self::extract_tokens(&tokens)?;

        tracing::debug!(
            tokens = tokens.len(),
            devices = bundle.device_names.len(),
            locations = bundle.fault_locations.len(),
            times = bundle.time_info.len(),
            terms = bundle.technical_terms.len(),
            "Entity extraction complete"
        );

        Ok(bundle)
    }
}

fn contains_any(text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| text.contains(m))
}

fn is_device_name(token: &TaggedToken) -> bool {
    token.is_noun()
        && contains_any(&token.text, DEVICE_MARKERS)
        && token.char_len() >= MIN_DEVICE_NAME_CHARS
}

fn is_fault_location(token: &TaggedToken) -> bool {
    token.is_noun() && contains_any(&token.text, LOCATION_MARKERS)
}

fn is_time_expression(token: &TaggedToken) -> bool {
    token.is_temporal() || TIME_PREFIX.is_match(&token.text)
}

fn is_technical_term(token: &TaggedToken) -> bool {
    token.is_noun() && contains_any(&token.text, TECHNICAL_MARKERS)
}
