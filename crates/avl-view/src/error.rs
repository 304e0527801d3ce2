use avl_forest::InvariantError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid key {0:?}")]
    InvalidKey(String),
    #[error("tree check failed after step {step}: {source}")]
    Invariant {
        step: usize,
        #[source]
        source: InvariantError,
    },
}
