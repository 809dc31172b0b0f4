//! Estimation requests read from a JSON configuration document.
//!
//! ```json
//! {
//!   "network": "vgg19",
//!   "layers_file": "nets/vgg19.json",
//!   "layers": ["conv1_1", {"name": "extra", "kind": "conv", "macs": 1000}]
//! }
//! ```
//!
//! `layers_file` and `layers` are optional. Without `layers`, every layer of
//! the known network (or every cost-bearing layer of `layers_file`) is used.

use crate::cost_estimator::{LayerRequest, LayerShape};
use crate::errors::{ConfigError, ConfigResult};
use crate::layer_description::LayerDescription;
use crate::layer_kind::LayerKind;
use crate::published_data::known_network;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::{Path, PathBuf};

/// One requested layer: either a bare name or a fully specified shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LayerEntry {
    Name(String),
    Shaped {
        name: String,
        /// Layer kind, `conv`/`fc` or a Caffe layer type.
        kind: String,
        macs: u64,
    },
}

/// Request document processed by one invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Network the requested layers belong to.
    pub network: String,
    /// Layer description file, relative to the base directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layers_file: Option<PathBuf>,
    /// Layers to cost, in order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layers: Option<Vec<LayerEntry>>,
}

impl Configuration {
    pub fn from_json(text: &str) -> ConfigResult<Self> {
        serde_json::from_str(text).map_err(|source| ConfigError::Parse { source })
    }

    pub fn from_reader<R: Read>(reader: R) -> ConfigResult<Self> {
        serde_json::from_reader(reader).map_err(|source| ConfigError::Parse { source })
    }

    /// Loads the layer description file, if one is configured.
    pub fn layer_description(&self, base_dir: &Path) -> ConfigResult<Option<LayerDescription>> {
        self.layers_file
            .as_ref()
            .map(|file| LayerDescription::load(&base_dir.join(file)))
            .transpose()
    }

    /// Expands the configuration into an ordered list of layer requests.
    ///
    /// Named layers pick up their shape from the layer description file when
    /// it lists them, so they can be scaled if they have no reference record.
    pub fn requests(&self, base_dir: &Path) -> ConfigResult<Vec<LayerRequest>> {
        let description = self.layer_description(base_dir)?;
        let shape_of = |layer: &str| description.as_ref().and_then(|d| d.shape(layer));

        if let Some(entries) = &self.layers {
            return entries
                .iter()
                .map(|entry| self.request_for_entry(entry, &shape_of))
                .collect();
        }

        if let Some(layers) = known_network(&self.network) {
            return Ok(layers
                .iter()
                .map(|&(layer, _)| LayerRequest {
                    network: self.network.clone(),
                    layer: layer.to_string(),
                    shape: shape_of(layer),
                })
                .collect());
        }

        match &description {
            Some(description) if !description.is_empty() => Ok(description
                .layers()
                .map(|(layer, shape)| LayerRequest {
                    network: self.network.clone(),
                    layer: layer.to_string(),
                    shape: Some(shape),
                })
                .collect()),
            _ => Err(ConfigError::NoLayers {
                network: self.network.clone(),
            }),
        }
    }

    fn request_for_entry(
        &self,
        entry: &LayerEntry,
        shape_of: &dyn Fn(&str) -> Option<LayerShape>,
    ) -> ConfigResult<LayerRequest> {
        match entry {
            LayerEntry::Name(layer) => Ok(LayerRequest {
                network: self.network.clone(),
                layer: layer.clone(),
                shape: shape_of(layer.as_str()),
            }),
            LayerEntry::Shaped { name, kind, macs } => {
                let kind = LayerKind::get_by_name(kind)
                    .ok_or_else(|| ConfigError::UnknownLayerKind { name: kind.clone() })?;
                if *macs == 0 {
                    return Err(ConfigError::InvalidShape { layer: name.clone() });
                }
                Ok(LayerRequest::with_shape(&self.network, name, kind, *macs))
            }
        }
    }
}
