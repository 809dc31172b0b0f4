//! Error types for configuration and layer description documents.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a configuration or a layer
/// description file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {source}")]
    Parse { source: serde_json::Error },

    #[error("Failed to parse layer description file '{}': {source}", .path.display())]
    LayersFileParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Layer {layer} of type {layer_type} has no MAC count")]
    MissingMacs { layer: String, layer_type: String },

    #[error("Layer {layer} must have a positive MAC count")]
    InvalidShape { layer: String },

    #[error("Unknown layer kind: {name}")]
    UnknownLayerKind { name: String },

    #[error("No layers requested for network {network} and none could be inferred")]
    NoLayers { network: String },
}
