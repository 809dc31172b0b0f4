//! Published per-layer measurements for the two reference accelerators.
//!
//! Fully-connected layers come from the EIE paper (Han et al., ISCA 2016),
//! which reports wall-clock time per layer in microseconds and a single total
//! power figure for the chip. Convolutional layers come from the Eyeriss
//! paper (Chen et al., JSSC 2017), which reports per-layer latency in
//! milliseconds and per-layer power in milliwatts. Both chips were built on
//! TSMC processes of different generations.
//!
//! Operation counts are the dense forward-pass MACs of one image, matching
//! what the Caffe extraction tool reports for the same layer.

use crate::layer_kind::LayerKind;

/// EIE reports latencies in microseconds.
pub const EIE_TIME_UNIT: f64 = 1e-6;

/// Eyeriss reports latencies in milliseconds.
pub const EYERISS_TIME_UNIT: f64 = 1e-3;

/// Both papers report power in milliwatts.
pub const POWER_UNIT: f64 = 1e-3;

/// Process node of the EIE implementation.
pub const EIE_PROCESS_NM: f64 = 45.0;

/// Process node of the Eyeriss implementation. All costs are normalized to it.
pub const EYERISS_PROCESS_NM: f64 = 65.0;

/// Total measured EIE power, assumed constant across layers.
pub const EIE_POWER_MW: f64 = 590.0;

/// One fully-connected layer measured on EIE. Only latency is reported.
#[derive(Debug, Clone, Copy)]
pub struct EieMeasurement {
    pub network: &'static str,
    pub layer: &'static str,
    pub macs: u64,
    pub latency_us: f64,
}

/// One convolutional layer measured on Eyeriss.
#[derive(Debug, Clone, Copy)]
pub struct EyerissMeasurement {
    pub network: &'static str,
    pub layer: &'static str,
    pub macs: u64,
    pub power_mw: f64,
    pub latency_ms: f64,
}

/// "Actual Time" row of the EIE benchmark table.
pub const EIE_LAYERS: &[EieMeasurement] = &[
    EieMeasurement {
        network: "alexnet",
        layer: "fc6",
        macs: 37_748_736,
        latency_us: 30.3,
    },
    EieMeasurement {
        network: "alexnet",
        layer: "fc7",
        macs: 16_777_216,
        latency_us: 12.2,
    },
    EieMeasurement {
        network: "alexnet",
        layer: "fc8",
        macs: 4_096_000,
        latency_us: 9.9,
    },
    EieMeasurement {
        network: "vgg16",
        layer: "fc6",
        macs: 102_760_448,
        latency_us: 34.4,
    },
    EieMeasurement {
        network: "vgg16",
        layer: "fc7",
        macs: 16_777_216,
        latency_us: 8.7,
    },
    EieMeasurement {
        network: "vgg16",
        layer: "fc8",
        macs: 4_096_000,
        latency_us: 8.4,
    },
];

macro_rules! eyeriss {
    ($network:expr, $layer:expr, $macs:expr, $power:expr, $latency:expr) => {
        EyerissMeasurement {
            network: $network,
            layer: $layer,
            macs: $macs,
            power_mw: $power,
            latency_ms: $latency,
        }
    };
}

/// Per-layer breakdown tables for AlexNet and VGG-16 on Eyeriss.
pub const EYERISS_LAYERS: &[EyerissMeasurement] = &[
    eyeriss!("alexnet", "conv1", 105_415_200, 332.0, 16.5),
    eyeriss!("alexnet", "conv2", 223_948_800, 288.0, 39.2),
    eyeriss!("alexnet", "conv3", 149_520_384, 266.0, 21.8),
    eyeriss!("alexnet", "conv4", 112_140_288, 235.0, 16.0),
    eyeriss!("alexnet", "conv5", 74_760_192, 236.0, 10.0),
    eyeriss!("vgg16", "conv1_1", 86_704_128, 247.0, 76.3),
    eyeriss!("vgg16", "conv1_2", 1_849_688_064, 218.0, 907.9),
    eyeriss!("vgg16", "conv2_1", 924_844_032, 242.0, 470.9),
    eyeriss!("vgg16", "conv2_2", 1_849_688_064, 231.0, 892.0),
    eyeriss!("vgg16", "conv3_1", 924_844_032, 254.0, 241.1),
    eyeriss!("vgg16", "conv3_2", 1_849_688_064, 235.0, 460.9),
    eyeriss!("vgg16", "conv3_3", 1_849_688_064, 233.0, 457.7),
    eyeriss!("vgg16", "conv4_1", 924_844_032, 278.0, 135.8),
    eyeriss!("vgg16", "conv4_2", 1_849_688_064, 261.0, 254.8),
    eyeriss!("vgg16", "conv4_3", 1_849_688_064, 240.0, 246.3),
    eyeriss!("vgg16", "conv5_1", 462_422_016, 258.0, 54.1),
    eyeriss!("vgg16", "conv5_2", 462_422_016, 236.0, 56.8),
    eyeriss!("vgg16", "conv5_3", 462_422_016, 230.0, 54.8),
];

/// Cost-bearing layers of AlexNet, in execution order.
pub const ALEXNET_LAYERS: &[(&str, LayerKind)] = &[
    ("conv1", LayerKind::Conv),
    ("conv2", LayerKind::Conv),
    ("conv3", LayerKind::Conv),
    ("conv4", LayerKind::Conv),
    ("conv5", LayerKind::Conv),
    ("fc6", LayerKind::Fc),
    ("fc7", LayerKind::Fc),
    ("fc8", LayerKind::Fc),
];

/// Cost-bearing layers of VGG-16, in execution order.
pub const VGG16_LAYERS: &[(&str, LayerKind)] = &[
    ("conv1_1", LayerKind::Conv),
    ("conv1_2", LayerKind::Conv),
    ("conv2_1", LayerKind::Conv),
    ("conv2_2", LayerKind::Conv),
    ("conv3_1", LayerKind::Conv),
    ("conv3_2", LayerKind::Conv),
    ("conv3_3", LayerKind::Conv),
    ("conv4_1", LayerKind::Conv),
    ("conv4_2", LayerKind::Conv),
    ("conv4_3", LayerKind::Conv),
    ("conv5_1", LayerKind::Conv),
    ("conv5_2", LayerKind::Conv),
    ("conv5_3", LayerKind::Conv),
    ("fc6", LayerKind::Fc),
    ("fc7", LayerKind::Fc),
    ("fc8", LayerKind::Fc),
];

/// Networks whose every layer is covered by the published measurements.
pub const KNOWN_NETWORKS: &[(&str, &[(&str, LayerKind)])] =
    &[("alexnet", ALEXNET_LAYERS), ("vgg16", VGG16_LAYERS)];

/// Returns the ordered layer list of a known network.
pub fn known_network(name: &str) -> Option<&'static [(&'static str, LayerKind)]> {
    KNOWN_NETWORKS
        .iter()
        .find(|(network, _)| *network == name)
        .map(|(_, layers)| *layers)
}
