//! First-order energy and latency model for CNN inference on accelerators.
//!
//! Per-layer costs come from two published accelerator studies: EIE for
//! fully-connected layers and Eyeriss for convolutional layers, normalized to
//! a common 65 nm process. Layers that were measured are looked up directly;
//! other layers are scaled from the mean cost per MAC of their kind. Layer
//! costs are summed into convolutional, fully-connected and grand totals.

pub mod aggregator;
pub mod configuration;
pub mod cost_estimator;
pub mod diagnostics;
pub mod errors;
pub mod invocation;
pub mod layer_cost;
pub mod layer_description;
pub mod layer_kind;
pub mod published_data;
pub mod reference_table;
pub mod scaling_model;

pub use aggregator::{Aggregator, Totals};
pub use configuration::Configuration;
pub use cost_estimator::{CostEstimator, LayerRequest, LayerShape};
pub use diagnostics::DiagnosticReport;
pub use layer_cost::LayerCost;
pub use layer_kind::LayerKind;
pub use reference_table::{LayerRecord, ReferenceTable, ReferenceTables};
pub use scaling_model::{AverageCostPerOperation, ScalingModel};
