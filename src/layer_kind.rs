//! Layer kinds supported by the cost model.
//!
//! Every cost-bearing layer is either convolutional or fully-connected. The
//! kind selects which reference table and which per-operation averages apply.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Represents the category of a cost-bearing neural network layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    /// Convolutional layer, costed from the Eyeriss measurements.
    Conv,
    /// Fully-connected layer, costed from the EIE measurements.
    Fc,
}

impl LayerKind {
    /// All kinds, in the order reports and lookups visit them.
    pub const ALL: [LayerKind; 2] = [LayerKind::Conv, LayerKind::Fc];

    /// Get a layer kind by name.
    ///
    /// Accepts the crate's own spelling (`conv`, `fc`) as well as the layer
    /// type names emitted by the Caffe extraction tool. Deconvolutions cost
    /// the same MACs as convolutions and are treated as such.
    pub fn get_by_name(type_name: &str) -> Option<Self> {
        let map: HashMap<&str, LayerKind> = [
            ("conv", LayerKind::Conv),
            ("Convolution", LayerKind::Conv),
            ("Deconvolution", LayerKind::Conv),
            ("fc", LayerKind::Fc),
            ("InnerProduct", LayerKind::Fc),
        ]
        .iter()
        .cloned()
        .collect();

        map.get(type_name).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LayerKind::Conv => "conv",
            LayerKind::Fc => "fc",
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_by_name() {
        assert_eq!(LayerKind::get_by_name("conv"), Some(LayerKind::Conv));
        assert_eq!(LayerKind::get_by_name("fc"), Some(LayerKind::Fc));
        assert_eq!(LayerKind::get_by_name("Convolution"), Some(LayerKind::Conv));
        assert_eq!(
            LayerKind::get_by_name("Deconvolution"),
            Some(LayerKind::Conv)
        );
        assert_eq!(LayerKind::get_by_name("InnerProduct"), Some(LayerKind::Fc));
        assert_eq!(LayerKind::get_by_name("ReLU"), None);
        assert_eq!(LayerKind::get_by_name("Pooling"), None);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&LayerKind::Conv).unwrap(), "\"conv\"");
        let kind: LayerKind = serde_json::from_str("\"fc\"").unwrap();
        assert_eq!(kind, LayerKind::Fc);
    }

    #[test]
    fn test_display() {
        assert_eq!(LayerKind::Conv.to_string(), "conv");
        assert_eq!(LayerKind::Fc.to_string(), "fc");
    }
}
