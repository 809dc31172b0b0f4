//! Error types for reference data loading and cost estimation.

use crate::layer_kind::LayerKind;
use thiserror::Error;

/// Malformed or inconsistent reference data. Raised while the reference
/// tables are built and aborts startup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("Reference record {network}/{layer} must have a positive operation count, got {ops}")]
    NonPositiveOperations {
        network: String,
        layer: String,
        ops: u64,
    },

    #[error(
        "Reference record {network}/{layer} must have a positive cost: latency {latency} s, energy {energy} J"
    )]
    NonPositiveCost {
        network: String,
        layer: String,
        latency: f64,
        energy: f64,
    },

    #[error("Reference record {network}/{layer} appears more than once in the {kind} table")]
    DuplicateRecord {
        network: String,
        layer: String,
        kind: LayerKind,
    },

    #[error("No {kind} reference record for {network}/{layer}")]
    MissingReference {
        network: String,
        layer: String,
        kind: LayerKind,
    },
}

/// Errors that can occur while estimating layer costs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CostModelError {
    #[error("Invalid reference data: {0}")]
    Data(#[from] DataError),

    #[error(
        "Layer {network}/{layer} is not in the reference tables and no kind or operation count was supplied"
    )]
    UnknownLayer { network: String, layer: String },

    #[error("Cannot scale a {kind} layer: the {kind} reference table is empty")]
    InsufficientData { kind: LayerKind },
}
