//! Latency and energy cost of running one or more layers.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Cost of executing a layer (or a sum of layers) on the modeled accelerator.
///
/// Latency is in seconds and energy in joules. Sums treat layers as strictly
/// serial: no overlap or pipelining between layers is modeled.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayerCost {
    /// Energy in joules.
    pub energy: f64,
    /// Latency in seconds.
    pub latency: f64,
}

impl LayerCost {
    pub const ZERO: LayerCost = LayerCost {
        energy: 0.0,
        latency: 0.0,
    };

    pub fn new(latency: f64, energy: f64) -> Self {
        Self { energy, latency }
    }

    /// Cost divided by an operation count, i.e. the cost of a single MAC.
    pub fn per_operation(&self, ops: u64) -> LayerCost {
        let ops = ops as f64;
        LayerCost {
            energy: self.energy / ops,
            latency: self.latency / ops,
        }
    }

    /// Scales both components by the same factor.
    pub fn scaled(&self, factor: f64) -> LayerCost {
        LayerCost {
            energy: self.energy * factor,
            latency: self.latency * factor,
        }
    }
}

impl Add for LayerCost {
    type Output = LayerCost;

    fn add(self, other: LayerCost) -> LayerCost {
        LayerCost {
            energy: self.energy + other.energy,
            latency: self.latency + other.latency,
        }
    }
}

impl AddAssign for LayerCost {
    fn add_assign(&mut self, other: LayerCost) {
        self.energy += other.energy;
        self.latency += other.latency;
    }
}

impl Sum for LayerCost {
    fn sum<I: Iterator<Item = LayerCost>>(iter: I) -> LayerCost {
        iter.fold(LayerCost::ZERO, |acc, cost| acc + cost)
    }
}
