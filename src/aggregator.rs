//! Summation of layer costs over a whole request list.

use crate::cost_estimator::{CostEstimator, LayerEstimate, LayerRequest, Resolution};
use crate::errors::CostModelResult;
use crate::layer_cost::LayerCost;
use crate::layer_kind::LayerKind;
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Convolutional, fully-connected and grand totals.
///
/// Latencies add because layers run one after another; energies add by
/// definition.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub conv: LayerCost,
    pub fc: LayerCost,
    pub total: LayerCost,
}

impl Totals {
    /// Adds one estimate to its kind's total and to the grand total.
    pub fn add(&mut self, estimate: &LayerEstimate) {
        match estimate.kind {
            LayerKind::Conv => self.conv += estimate.cost,
            LayerKind::Fc => self.fc += estimate.cost,
        }
        self.total += estimate.cost;
    }

    pub fn from_estimates(estimates: &[LayerEstimate]) -> Self {
        let mut totals = Self::default();
        for estimate in estimates {
            totals.add(estimate);
        }
        totals
    }

    pub fn by_kind(&self, kind: LayerKind) -> LayerCost {
        match kind {
            LayerKind::Conv => self.conv,
            LayerKind::Fc => self.fc,
        }
    }
}

/// Runs the cost estimator over an ordered list of requests.
pub struct Aggregator<'a> {
    estimator: &'a CostEstimator<'a>,
}

impl<'a> Aggregator<'a> {
    pub fn new(estimator: &'a CostEstimator<'a>) -> Self {
        Self { estimator }
    }

    /// Resolves every request, in order. The first failure aborts the batch.
    pub fn estimate_all(&self, requests: &[LayerRequest]) -> CostModelResult<Vec<LayerEstimate>> {
        requests
            .iter()
            .map(|request| self.estimator.estimate(request))
            .collect()
    }

    /// Totals of all requests. An empty list yields zero totals.
    pub fn aggregate(&self, requests: &[LayerRequest]) -> CostModelResult<Totals> {
        let estimates = self.estimate_all(requests)?;

        let scaled = estimates
            .iter()
            .filter(|e| e.resolution == Resolution::Scaled)
            .count();
        if scaled > 0 {
            warn!(
                "{} of {} layers estimated from per-operation averages",
                scaled,
                estimates.len()
            );
        }

        let totals = Totals::from_estimates(&estimates);
        info!(
            "Estimated {} layers: latency {:.4} s, energy {:.4} J",
            estimates.len(),
            totals.total.latency,
            totals.total.energy
        );
        Ok(totals)
    }
}
