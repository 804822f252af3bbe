use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiagError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Lexicon error: {0}")]
    Lexicon(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Knowledge base error: {0}")]
    Knowledge(String),
}

pub type Result<T> = std::result::Result<T, DiagError>;
