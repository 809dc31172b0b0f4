//! Error types for the cost model.
//!
//! Each concern gets its own error enum so callers can tell a broken
//! reference table apart from a bad request document.

mod config_error;
mod cost_model_error;
mod run_error;

pub use config_error::ConfigError;
pub use cost_model_error::{CostModelError, DataError};
pub use run_error::RunError;

/// Result type alias for estimation operations.
pub type CostModelResult<T> = std::result::Result<T, CostModelError>;

/// Result type alias for configuration loading.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for a full invocation.
pub type RunResult<T> = std::result::Result<T, RunError>;
