//! Error type for a complete command-line invocation.

use super::{ConfigError, CostModelError};
use thiserror::Error;

/// Any failure while reading a request, estimating it or writing the result.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    CostModel(#[from] CostModelError),

    #[error("Failed to write output: {source}")]
    Output { source: serde_json::Error },
}
