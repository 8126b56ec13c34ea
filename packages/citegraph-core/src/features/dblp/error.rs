//! Load error types

use thiserror::Error;

use super::domain::MalformedRecord;
use crate::config::ConfigError;
use crate::features::alphabet::AlphabetError;

/// Terminal load failure. Whatever was written to the graph before the
/// failure stays there.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Read failure on the input stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Malformed continuation line under `MalformedPolicy::Abort`
    #[error("Malformed record: {0}")]
    Malformed(MalformedRecord),

    /// Identity-key interning failed
    #[error("Key interning failed: {0}")]
    Alphabet(#[from] AlphabetError),
}

pub type IngestResult<T> = std::result::Result<T, IngestError>;
