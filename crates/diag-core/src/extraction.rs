use crate::entity::{EntityBundle, TaggedToken};
use crate::error::Result;

/// Segments text into words and assigns each a part-of-speech flag.
pub trait PosTagger: Send + Sync {
    fn tag(&self, text: &str) -> Vec<TaggedToken>;
}

pub trait EntityExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Result<EntityBundle>;
}
