//! Cost estimates for layers that are not in the reference tables.
//!
//! The model assumes the cost of one MAC is roughly constant within a layer
//! kind, whatever the layer's shape. It is linear with zero intercept: fixed
//! per-layer overheads are not modeled. The diagnostic report shows how far
//! the measured layers stray from that assumption.

use crate::errors::{CostModelError, CostModelResult};
use crate::layer_cost::LayerCost;
use crate::layer_kind::LayerKind;
use crate::reference_table::{ReferenceTable, ReferenceTables};
use serde::Serialize;

/// Mean cost of a single operation over every record of one kind.
///
/// Averages are pooled across all reference networks of the kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AverageCostPerOperation {
    pub kind: LayerKind,
    /// Mean of `energy / ops`, in joules per MAC.
    pub energy: f64,
    /// Mean of `latency / ops`, in seconds per MAC.
    pub latency: f64,
}

impl AverageCostPerOperation {
    /// Computes the arithmetic mean of per-record cost per operation.
    pub fn from_table(table: &ReferenceTable) -> CostModelResult<Self> {
        if table.is_empty() {
            return Err(CostModelError::InsufficientData { kind: table.kind() });
        }

        let count = table.len() as f64;
        let sum: LayerCost = table
            .records()
            .iter()
            .map(|record| record.cost.per_operation(record.ops))
            .sum();

        Ok(Self {
            kind: table.kind(),
            energy: sum.energy / count,
            latency: sum.latency / count,
        })
    }

    /// Estimated cost of a layer with `ops` operations.
    pub fn estimate(&self, ops: u64) -> LayerCost {
        let ops = ops as f64;
        LayerCost {
            energy: ops * self.energy,
            latency: ops * self.latency,
        }
    }
}

/// Scales per-operation averages of the reference tables to new layers.
pub struct ScalingModel<'a> {
    tables: &'a ReferenceTables,
}

impl<'a> ScalingModel<'a> {
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self { tables }
    }

    /// Averages for one kind. Recomputed on every call.
    pub fn average(&self, kind: LayerKind) -> CostModelResult<AverageCostPerOperation> {
        AverageCostPerOperation::from_table(self.tables.table(kind))
    }

    /// Estimates a layer of the given kind from its operation count.
    pub fn estimate(&self, kind: LayerKind, ops: u64) -> CostModelResult<LayerCost> {
        Ok(self.average(kind)?.estimate(ops))
    }
}
