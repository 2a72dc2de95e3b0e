//! Configuration loading errors.

use thiserror::Error;

/// Failure to read or parse a configuration file
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// File could not be read
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    /// Contents are not valid YAML for [`MargaConfig`](super::MargaConfig)
    #[error("invalid config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}
