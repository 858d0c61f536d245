//! Error types for indicator configuration.

use thiserror::Error;

/// Errors raised while configuring a [`SignalIndicator`](crate::SignalIndicator).
///
/// Rendering itself never fails; every variant is produced at the
/// configuration boundary.
#[derive(Debug, Error)]
pub enum IndicatorError {
    /// A value that cannot be normalized, such as a zero bar count.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The configuration document could not be parsed.
    #[error("config parse error: {source}")]
    Parse {
        #[from]
        source: serde_yaml_ng::Error,
    },
}

pub type Result<T, E = IndicatorError> = std::result::Result<T, E>;
