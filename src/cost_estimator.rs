//! Resolution of layer requests to costs.
//!
//! A request names a layer by network and layer name. Layers measured in the
//! published papers are answered straight from the reference tables; any
//! other layer needs a kind and an operation count so it can be scaled.

use crate::errors::{CostModelError, CostModelResult};
use crate::layer_cost::LayerCost;
use crate::layer_kind::LayerKind;
use crate::reference_table::{LayerRecord, ReferenceTables};
use crate::scaling_model::ScalingModel;
use log::debug;
use serde::{Deserialize, Serialize};

/// Kind and size of a layer, typically taken from a layer description file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerShape {
    pub kind: LayerKind,
    /// Number of multiply-accumulate operations.
    pub macs: u64,
}

/// A single layer to be costed.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerRequest {
    pub network: String,
    pub layer: String,
    /// Shape used when the layer is not in the reference tables.
    pub shape: Option<LayerShape>,
}

impl LayerRequest {
    /// Request for a layer expected to be in the reference tables.
    pub fn known(network: &str, layer: &str) -> Self {
        Self {
            network: network.to_string(),
            layer: layer.to_string(),
            shape: None,
        }
    }

    /// Request carrying a shape, so it can be scaled if no record exists.
    pub fn with_shape(network: &str, layer: &str, kind: LayerKind, macs: u64) -> Self {
        Self {
            network: network.to_string(),
            layer: layer.to_string(),
            shape: Some(LayerShape { kind, macs }),
        }
    }
}

/// How a request was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// Taken unchanged from a reference record.
    Measured,
    /// Derived from per-operation averages.
    Scaled,
}

/// Cost of one resolved request.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerEstimate {
    pub kind: LayerKind,
    pub cost: LayerCost,
    pub resolution: Resolution,
}

/// Estimates layer costs from the reference tables. Holds the tables by
/// shared reference and never mutates them.
pub struct CostEstimator<'a> {
    tables: &'a ReferenceTables,
}

impl<'a> CostEstimator<'a> {
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &'a ReferenceTables {
        self.tables
    }

    /// Looks up a measured record. With a shape, only the table of that kind
    /// is searched.
    fn lookup(&self, request: &LayerRequest) -> Option<&'a LayerRecord> {
        match request.shape {
            Some(shape) => self
                .tables
                .table(shape.kind)
                .get(&request.network, &request.layer),
            None => self.tables.find(&request.network, &request.layer),
        }
    }

    /// Resolves one request: exact record first, then scaling, else an error.
    pub fn estimate(&self, request: &LayerRequest) -> CostModelResult<LayerEstimate> {
        if let Some(record) = self.lookup(request) {
            debug!(
                "{}/{}: measured {} layer, latency {:.6e} s, energy {:.6e} J",
                request.network, request.layer, record.kind, record.cost.latency, record.cost.energy
            );
            return Ok(LayerEstimate {
                kind: record.kind,
                cost: record.cost,
                resolution: Resolution::Measured,
            });
        }

        let shape = request.shape.ok_or_else(|| CostModelError::UnknownLayer {
            network: request.network.clone(),
            layer: request.layer.clone(),
        })?;

        let cost = ScalingModel::new(self.tables).estimate(shape.kind, shape.macs)?;
        debug!(
            "{}/{}: scaled {} layer with {} MACs, latency {:.6e} s, energy {:.6e} J",
            request.network, request.layer, shape.kind, shape.macs, cost.latency, cost.energy
        );
        Ok(LayerEstimate {
            kind: shape.kind,
            cost,
            resolution: Resolution::Scaled,
        })
    }
}
