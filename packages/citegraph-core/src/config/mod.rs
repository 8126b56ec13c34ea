//! Loader configuration
//!
//! ```rust,ignore
//! use citegraph_core::config::LoaderConfig;
//!
//! let config = LoaderConfig::default().max_records(100_000);
//! let config = LoaderConfig::from_yaml_file("dblp.yaml")?;
//! ```

pub mod error;
pub mod loader_config;

pub use error::{ConfigError, ConfigResult};
pub use loader_config::{LoaderConfig, MalformedPolicy};
