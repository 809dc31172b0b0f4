//! Reference tables of measured per-layer costs.
//!
//! Measurements are converted to SI units, normalized to the common 65 nm
//! process node and validated once, when the tables are built. After that
//! the tables are read-only and shared by reference.

use crate::errors::DataError;
use crate::layer_cost::LayerCost;
use crate::layer_kind::LayerKind;
use crate::published_data::{
    EIE_LAYERS, EIE_POWER_MW, EIE_PROCESS_NM, EIE_TIME_UNIT, EYERISS_LAYERS, EYERISS_PROCESS_NM,
    EYERISS_TIME_UNIT, KNOWN_NETWORKS, POWER_UNIT,
};
use std::collections::HashMap;

/// Per-layer measurement in SI units, still in its original process node.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub network: String,
    pub layer: String,
    /// Number of multiply-accumulate operations.
    pub ops: u64,
    /// Latency in seconds.
    pub latency: f64,
    /// Power in watts. For EIE this is the constant whole-chip figure.
    pub power: f64,
}

/// Process-scaling correction between two fabrication nodes.
///
/// Under constant-field (Dennard) scaling with linear factor `k`, time
/// scales with `k` and power with `k²`. Energy is never scaled directly: it
/// is recomputed from the scaled power and time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessScaling {
    factor: f64,
}

impl ProcessScaling {
    /// No correction. Used for data already at the target node.
    pub const IDENTITY: ProcessScaling = ProcessScaling { factor: 1.0 };

    /// Scaling from a source node to a target node, both in nanometers.
    pub fn between(source_nm: f64, target_nm: f64) -> Self {
        Self {
            factor: target_nm / source_nm,
        }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn scale_time(&self, time: f64) -> f64 {
        time * self.factor
    }

    pub fn scale_power(&self, power: f64) -> f64 {
        power * (self.factor * self.factor)
    }

    /// Normalizes a measurement to the target node.
    ///
    /// The order matters for bit-exact results: time and power are scaled
    /// individually and energy is their product after scaling.
    pub fn normalize(&self, measurement: &Measurement) -> LayerCost {
        let latency = self.scale_time(measurement.latency);
        let power = self.scale_power(measurement.power);
        LayerCost::new(latency, power * latency)
    }
}

/// Cost of one known layer on the common process node.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerRecord {
    pub network: String,
    pub layer: String,
    pub kind: LayerKind,
    /// Number of multiply-accumulate operations.
    pub ops: u64,
    pub cost: LayerCost,
}

/// Ordered, validated records for one layer kind, keyed by (network, layer).
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    kind: LayerKind,
    records: Vec<LayerRecord>,
    index: HashMap<(String, String), usize>,
}

impl ReferenceTable {
    /// Creates an empty table for the given kind.
    pub fn empty(kind: LayerKind) -> Self {
        Self {
            kind,
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Builds a table from raw measurements, normalizing each one.
    ///
    /// Fails if any record has a non-positive operation count or cost, or if
    /// a (network, layer) pair appears twice.
    pub fn from_measurements(
        kind: LayerKind,
        measurements: &[Measurement],
        scaling: ProcessScaling,
    ) -> Result<Self, DataError> {
        let mut table = Self::empty(kind);
        for measurement in measurements {
            let cost = scaling.normalize(measurement);
            table.insert(LayerRecord {
                network: measurement.network.clone(),
                layer: measurement.layer.clone(),
                kind,
                ops: measurement.ops,
                cost,
            })?;
        }
        Ok(table)
    }

    /// Builds a table from already-normalized records.
    pub fn from_records(kind: LayerKind, records: Vec<LayerRecord>) -> Result<Self, DataError> {
        let mut table = Self::empty(kind);
        for record in records {
            table.insert(record)?;
        }
        Ok(table)
    }

    fn insert(&mut self, record: LayerRecord) -> Result<(), DataError> {
        Self::validate_record(&record)?;

        let key = (record.network.clone(), record.layer.clone());
        if self.index.contains_key(&key) {
            return Err(DataError::DuplicateRecord {
                network: record.network,
                layer: record.layer,
                kind: self.kind,
            });
        }

        self.index.insert(key, self.records.len());
        self.records.push(LayerRecord {
            kind: self.kind,
            ..record
        });
        Ok(())
    }

    fn validate_record(record: &LayerRecord) -> Result<(), DataError> {
        if record.ops == 0 {
            return Err(DataError::NonPositiveOperations {
                network: record.network.clone(),
                layer: record.layer.clone(),
                ops: record.ops,
            });
        }

        let LayerCost { latency, energy } = record.cost;
        let positive = |value: f64| value.is_finite() && value > 0.0;
        if !positive(latency) || !positive(energy) {
            return Err(DataError::NonPositiveCost {
                network: record.network.clone(),
                layer: record.layer.clone(),
                latency,
                energy,
            });
        }

        Ok(())
    }

    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    /// Exact lookup by network and layer name.
    pub fn get(&self, network: &str, layer: &str) -> Option<&LayerRecord> {
        self.index
            .get(&(network.to_string(), layer.to_string()))
            .map(|&i| &self.records[i])
    }

    /// Records in load order.
    pub fn records(&self) -> &[LayerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The convolutional and fully-connected reference tables together.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    conv: ReferenceTable,
    fc: ReferenceTable,
}

impl ReferenceTables {
    /// Pairs two tables. Each table must hold records of its own kind.
    pub fn new(conv: ReferenceTable, fc: ReferenceTable) -> Self {
        debug_assert_eq!(conv.kind(), LayerKind::Conv);
        debug_assert_eq!(fc.kind(), LayerKind::Fc);
        Self { conv, fc }
    }

    /// Builds both tables from the published EIE and Eyeriss data, with
    /// EIE scaled from 45 nm to 65 nm, and checks that every layer of every
    /// known network is covered.
    pub fn published() -> Result<Self, DataError> {
        let eie_power = EIE_POWER_MW * POWER_UNIT;
        let fc_measurements: Vec<Measurement> = EIE_LAYERS
            .iter()
            .map(|m| Measurement {
                network: m.network.to_string(),
                layer: m.layer.to_string(),
                ops: m.macs,
                latency: m.latency_us * EIE_TIME_UNIT,
                power: eie_power,
            })
            .collect();

        let conv_measurements: Vec<Measurement> = EYERISS_LAYERS
            .iter()
            .map(|m| Measurement {
                network: m.network.to_string(),
                layer: m.layer.to_string(),
                ops: m.macs,
                latency: m.latency_ms * EYERISS_TIME_UNIT,
                power: m.power_mw * POWER_UNIT,
            })
            .collect();

        let fc = ReferenceTable::from_measurements(
            LayerKind::Fc,
            &fc_measurements,
            ProcessScaling::between(EIE_PROCESS_NM, EYERISS_PROCESS_NM),
        )?;
        let conv = ReferenceTable::from_measurements(
            LayerKind::Conv,
            &conv_measurements,
            ProcessScaling::IDENTITY,
        )?;

        let tables = Self::new(conv, fc);
        for (network, layers) in KNOWN_NETWORKS {
            tables.validate_coverage(network, layers)?;
        }
        Ok(tables)
    }

    /// Checks that each (layer, kind) of a network has a record in the
    /// matching table.
    pub fn validate_coverage(
        &self,
        network: &str,
        layers: &[(&str, LayerKind)],
    ) -> Result<(), DataError> {
        for &(layer, kind) in layers {
            if self.table(kind).get(network, layer).is_none() {
                return Err(DataError::MissingReference {
                    network: network.to_string(),
                    layer: layer.to_string(),
                    kind,
                });
            }
        }
        Ok(())
    }

    pub fn table(&self, kind: LayerKind) -> &ReferenceTable {
        match kind {
            LayerKind::Conv => &self.conv,
            LayerKind::Fc => &self.fc,
        }
    }

    /// Looks a layer up in the convolutional table, then the fully-connected one.
    pub fn find(&self, network: &str, layer: &str) -> Option<&LayerRecord> {
        LayerKind::ALL
            .iter()
            .find_map(|&kind| self.table(kind).get(network, layer))
    }
}
