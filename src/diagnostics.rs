//! Per-operation cost of every reference record.
//!
//! Scaling assumes cost per MAC is close to constant within a layer kind.
//! This report lists the measured ratios next to the averages used for
//! scaling so the spread can be checked by eye. It only reads the tables.

use crate::errors::CostModelResult;
use crate::layer_kind::LayerKind;
use crate::reference_table::ReferenceTables;
use crate::scaling_model::{AverageCostPerOperation, ScalingModel};
use log::debug;
use serde::Serialize;
use std::fmt;

/// Cost per operation of one reference record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticEntry {
    pub network: String,
    pub layer: String,
    pub kind: LayerKind,
    /// Joules per MAC.
    pub energy_per_op: f64,
    /// Seconds per MAC.
    pub latency_per_op: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticReport {
    pub entries: Vec<DiagnosticEntry>,
    pub averages: Vec<AverageCostPerOperation>,
}

impl DiagnosticReport {
    /// Builds the report: convolutional records first, then fully-connected,
    /// each in load order. Kinds with no records have no average.
    pub fn build(tables: &ReferenceTables) -> CostModelResult<Self> {
        let mut entries = Vec::new();
        let mut averages = Vec::new();
        let model = ScalingModel::new(tables);

        for kind in LayerKind::ALL {
            let table = tables.table(kind);
            for record in table.records() {
                let per_op = record.cost.per_operation(record.ops);
                debug!(
                    "{}/{}: {:.3e} J/op, {:.3e} s/op",
                    record.network, record.layer, per_op.energy, per_op.latency
                );
                entries.push(DiagnosticEntry {
                    network: record.network.clone(),
                    layer: record.layer.clone(),
                    kind,
                    energy_per_op: per_op.energy,
                    latency_per_op: per_op.latency,
                });
            }

            if !table.is_empty() {
                averages.push(model.average(kind)?);
            }
        }

        Ok(Self { entries, averages })
    }
}

impl fmt::Display for DiagnosticReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<10} {:<10} {:<5} {:>12} {:>12}",
            "Network", "Layer", "Kind", "J/op", "s/op"
        )?;
        writeln!(f, "{:-<53}", "")?;
        for entry in &self.entries {
            writeln!(
                f,
                "{:<10} {:<10} {:<5} {:>12.3e} {:>12.3e}",
                entry.network, entry.layer, entry.kind, entry.energy_per_op, entry.latency_per_op
            )?;
        }
        writeln!(f, "{:-<53}", "")?;
        for average in &self.averages {
            writeln!(
                f,
                "{:<10} {:<10} {:<5} {:>12.3e} {:>12.3e}",
                "mean", "", average.kind, average.energy, average.latency
            )?;
        }
        Ok(())
    }
}
