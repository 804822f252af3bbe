//! Domain lexicon and the jieba-backed part-of-speech tagger.
//!
//! Multi-character plant terms (mill names, bearing parts, ...) are registered
//! with the segmenter so they come back as single noun tokens instead of being
//! split into their component characters.

use std::path::Path;

use jieba_rs::Jieba;
use tracing::{debug, info};

use diag_core::config::AppConfig;
use diag_core::entity::TaggedToken;
use diag_core::error::{DiagError, Result};
use diag_core::extraction::PosTagger;

pub const NOUN_TAG: &str = "n";

pub const DEFAULT_TERMS: &[&str] = &[
    "轧机",
    "制动力",
    "润滑系统",
    "轧辊",
    "电机自由端",
    "振动",
    "包络谱",
    "轴承外圈",
    "430号轧机",
    "排污泵",
    "管道排气阀",
    "叶轮堵塞",
    "保持架",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    pub term: String,
    pub tag: String,
}

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    pub fn builtin() -> Self {
        Self {
            entries: DEFAULT_TERMS
                .iter()
                .map(|term| LexiconEntry {
                    term: term.to_string(),
                    tag: NOUN_TAG.to_string(),
                })
                .collect(),
        }
    }

    /// Built-in terms plus those from `config.lexicon_path`, if set.
    pub fn load(config: &AppConfig) -> Result<Self> {
        let mut lexicon = Self::builtin();
        if let Some(path) = &config.lexicon_path {
            lexicon.extend(Self::load_file(path)?);
        }
        Ok(lexicon)
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            DiagError::Lexicon(format!("cannot read lexicon {}: {e}", path.display()))
        })?;
        let lexicon = Self::parse(&contents)?;
        info!(path = %path.display(), terms = lexicon.len(), "Loaded custom lexicon");
        Ok(lexicon)
    }

    /// Parse `term` or `term/tag` lines. Blank lines and `#` comments are skipped.
    pub fn parse(contents: &str) -> Result<Self> {
        let mut lexicon = Self::default();
        for (line_no, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (term, tag) = split_tag(line);
            lexicon.push(term, tag).map_err(|e| match e {
                DiagError::Lexicon(msg) => DiagError::Lexicon(format!("line {}: {msg}", line_no + 1)),
                other => other,
            })?;
        }
        Ok(lexicon)
    }

    pub fn push(&mut self, term: &str, tag: &str) -> Result<()> {
        if term.is_empty() {
            return Err(DiagError::Lexicon("empty term".into()));
        }
        if term.chars().any(char::is_whitespace) {
            return Err(DiagError::Lexicon(format!("term `{term}` contains whitespace")));
        }
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DiagError::Lexicon(format!("term `{term}` has invalid tag `{tag}`")));
        }
        self.entries.push(LexiconEntry {
            term: term.to_string(),
            tag: tag.to_string(),
        });
        Ok(())
    }

    pub fn extend(&mut self, other: Lexicon) {
        self.entries.extend(other.entries);
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split `term/tag`. A trailing `/` keeps an empty tag so it is rejected; any
/// other suffix that is not an ASCII tag belongs to the term (`1/2寸阀`).
fn split_tag(line: &str) -> (&str, &str) {
    match line.rsplit_once('/') {
        Some((term, tag)) if tag.trim().is_empty() => (term.trim(), ""),
        Some((term, tag)) if tag.trim().chars().all(|c| c.is_ascii_alphabetic()) => {
            (term.trim(), tag.trim())
        }
        _ => (line, NOUN_TAG),
    }
}

/// jieba segmenter configured with a domain lexicon.
pub struct JiebaTagger {
    jieba: Jieba,
    hmm: bool,
    lexicon_terms: usize,
}

impl JiebaTagger {
    pub fn new(lexicon: &Lexicon, hmm: bool) -> Self {
        let mut jieba = Jieba::new();
        for entry in lexicon.entries() {
            // No frequency: jieba suggests one high enough to keep the term whole.
            jieba.add_word(&entry.term, None, Some(&entry.tag));
        }
        debug!(terms = lexicon.len(), hmm, "Initialized jieba tagger");
        Self {
            jieba,
            hmm,
            lexicon_terms: lexicon.len(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let lexicon = Lexicon::load(config)?;
        Ok(Self::new(&lexicon, config.tokenizer_hmm))
    }

    pub fn lexicon_terms(&self) -> usize {
        self.lexicon_terms
    }
}

impl PosTagger for JiebaTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        let tokens = self
            .jieba
            .tag(text, self.hmm)
            .into_iter()
            .map(|t| TaggedToken::new(t.word, t.tag))
            .collect();
        merge_time_tokens(tokens)
    }
}

pub const TIME_TAG: &str = "t";

const TIME_UNITS: &[&str] = &["月", "日", "时", "分"];
const CLOCK_SEPARATORS: &[&str] = &[":", "："];

fn is_number(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

/// jieba emits `5月` as `5` `月` and `9:00` as `9` `:` `00`. Rejoin both
/// shapes into single `t` tokens.
pub fn merge_time_tokens(tokens: Vec<TaggedToken>) -> Vec<TaggedToken> {
    let mut merged = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];
        if is_number(&token.text) {
            let next = tokens.get(i + 1);
            if let Some(unit) = next.filter(|t| TIME_UNITS.contains(&t.text.as_str())) {
                merged.push(TaggedToken::new(format!("{}{}", token.text, unit.text), TIME_TAG));
                i += 2;
                continue;
            }
            let minutes = tokens.get(i + 2);
            if let (Some(sep), Some(minutes)) = (next, minutes) {
                if CLOCK_SEPARATORS.contains(&sep.text.as_str()) && is_number(&minutes.text) {
                    merged.push(TaggedToken::new(
                        format!("{}:{}", token.text, minutes.text),
                        TIME_TAG,
                    ));
                    i += 3;
                    continue;
                }
            }
        }
        merged.push(token.clone());
        i += 1;
    }

    merged
}
