//! Error types for VastuKhoj

use thiserror::Error;

use crate::config::ConfigLoadError;

/// VastuKhoj error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KhojError {
    /// Parameters cannot describe a valid environment (rejected before generation)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Every generation attempt failed the start-to-exit reachability check
    #[error("Environment generation failed after {attempts} attempts")]
    GenerationFailed {
        /// Number of grids sampled and discarded
        attempts: usize,
    },

    /// The YAML configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigLoadError),
}

impl KhojError {
    /// Short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration(_) => "INVALID_CONFIGURATION",
            Self::GenerationFailed { .. } => "GENERATION_FAILED",
            Self::Config(_) => "CONFIG",
        }
    }
}

pub type Result<T> = std::result::Result<T, KhojError>;
