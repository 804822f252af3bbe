use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVER_PORT: u16 = 8866;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    /// JSON file with inspection/hazard/maintenance records. Built-in sample data when unset.
    pub knowledge_path: Option<PathBuf>,
    /// Extra lexicon terms, one `term` or `term/tag` per line.
    pub lexicon_path: Option<PathBuf>,
    /// TOML override for the keyword rule tables.
    pub rules_path: Option<PathBuf>,
    pub tokenizer_hmm: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".into(),
            server_port: DEFAULT_SERVER_PORT,
            knowledge_path: None,
            lexicon_path: None,
            rules_path: None,
            tokenizer_hmm: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_host: std::env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.server_port),
            knowledge_path: path_var("DIAG_KNOWLEDGE_PATH"),
            lexicon_path: path_var("DIAG_LEXICON_PATH"),
            rules_path: path_var("DIAG_RULES_PATH"),
            tokenizer_hmm: std::env::var("DIAG_TOKENIZER_HMM")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.tokenizer_hmm),
        }
    }
}

fn path_var(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
