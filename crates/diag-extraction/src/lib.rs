mod lexicon;
mod pipeline;

pub use lexicon::{
    merge_time_tokens, JiebaTagger, Lexicon, LexiconEntry, DEFAULT_TERMS, NOUN_TAG, TIME_TAG,
};
pub use pipeline::RuleEntityExtractor;
