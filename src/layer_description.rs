//! Layer description files produced by the network extraction tool.
//!
//! The tool walks a Caffe model and writes a JSON array with one object per
//! layer: its name, its Caffe type and, for convolutional and inner-product
//! layers, the number of MACs of a forward pass. Layers without MACs (ReLU,
//! pooling, input...) carry no cost and are skipped here.

use crate::cost_estimator::LayerShape;
use crate::errors::{ConfigError, ConfigResult};
use crate::layer_kind::LayerKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// One entry of a layer description file, as written by the extraction tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerDescriptionEntry {
    pub name: String,
    /// Caffe layer type, e.g. "Convolution" or "InnerProduct".
    #[serde(rename = "type")]
    pub layer_type: String,
    /// Forward-pass MACs. Only present for cost-bearing layers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macs: Option<u64>,
}

/// Cost-bearing layers of one network, in file order.
#[derive(Debug, Clone, Default)]
pub struct LayerDescription {
    layers: Vec<(String, LayerShape)>,
    index: HashMap<String, usize>,
}

impl LayerDescription {
    /// Builds a description from raw entries, keeping cost-bearing layers.
    ///
    /// A convolutional or inner-product entry must carry a positive MAC count.
    pub fn from_entries(entries: Vec<LayerDescriptionEntry>) -> ConfigResult<Self> {
        let mut description = Self::default();

        for entry in entries {
            let Some(kind) = LayerKind::get_by_name(&entry.layer_type) else {
                continue;
            };

            let macs = match entry.macs {
                Some(0) => {
                    return Err(ConfigError::InvalidShape { layer: entry.name });
                }
                Some(macs) => macs,
                None => {
                    return Err(ConfigError::MissingMacs {
                        layer: entry.name,
                        layer_type: entry.layer_type,
                    });
                }
            };

            description
                .index
                .insert(entry.name.clone(), description.layers.len());
            description
                .layers
                .push((entry.name, LayerShape { kind, macs }));
        }

        Ok(description)
    }

    /// Parses the JSON text of a description file.
    pub fn from_json(text: &str, path: &Path) -> ConfigResult<Self> {
        let entries: Vec<LayerDescriptionEntry> =
            serde_json::from_str(text).map_err(|source| ConfigError::LayersFileParse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_entries(entries)
    }

    /// Reads and parses a description file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text, path)
    }

    /// Shape of the named layer, if it is cost-bearing.
    pub fn shape(&self, layer: &str) -> Option<LayerShape> {
        self.index.get(layer).map(|&i| self.layers[i].1)
    }

    /// Cost-bearing layers in file order.
    pub fn layers(&self) -> impl Iterator<Item = (&str, LayerShape)> {
        self.layers
            .iter()
            .map(|(name, shape)| (name.as_str(), *shape))
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
