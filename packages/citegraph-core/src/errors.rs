//! Error types for citegraph-core
//!
//! Each feature has its own error enum; `CitegraphError` unifies them for
//! callers that drive several features.

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::alphabet::AlphabetError;
use crate::features::dblp::IngestError;

#[derive(Debug, Error)]
pub enum CitegraphError {
    #[error("Alphabet error: {0}")]
    Alphabet(#[from] AlphabetError),

    #[error("Ingest error: {0}")]
    Ingest(#[from] IngestError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CitegraphError>;
