//! Tests for layer lookup and scaling against the published reference tables.

use fodlam::cost_estimator::Resolution;
use fodlam::errors::CostModelError;
use fodlam::published_data::VGG16_LAYERS;
use fodlam::{
    AverageCostPerOperation, CostEstimator, LayerCost, LayerKind, LayerRequest, ReferenceTable,
    ReferenceTables, ScalingModel,
};

fn relative_difference(a: f64, b: f64) -> f64 {
    (a - b).abs() / a.abs().max(b.abs())
}

#[test]
fn test_lookup_returns_normalized_record_unchanged() {
    let tables = ReferenceTables::published().unwrap();
    let estimator = CostEstimator::new(&tables);

    for &(layer, kind) in VGG16_LAYERS {
        let estimate = estimator
            .estimate(&LayerRequest::known("vgg16", layer))
            .unwrap();
        let record = tables.table(kind).get("vgg16", layer).unwrap();

        assert_eq!(estimate.resolution, Resolution::Measured, "{}", layer);
        assert_eq!(estimate.kind, kind);
        assert_eq!(estimate.cost, record.cost);
    }
}

#[test]
fn test_fully_connected_records_are_process_scaled() {
    let tables = ReferenceTables::published().unwrap();
    let record = tables.table(LayerKind::Fc).get("vgg16", "fc6").unwrap();

    let k = 65.0 / 45.0;
    let latency = 34.4 * 1e-6 * k;
    let power = 590.0 * 1e-3 * (k * k);
    assert_eq!(record.cost.latency, latency);
    assert_eq!(record.cost.energy, power * latency);
}

#[test]
fn test_unmeasured_layer_is_scaled_from_kind_average() {
    let tables = ReferenceTables::published().unwrap();
    let estimator = CostEstimator::new(&tables);
    let macs = 462_422_016;

    let estimate = estimator
        .estimate(&LayerRequest::with_shape(
            "vgg19",
            "conv5_4",
            LayerKind::Conv,
            macs,
        ))
        .unwrap();
    let average = ScalingModel::new(&tables).average(LayerKind::Conv).unwrap();

    assert_eq!(estimate.resolution, Resolution::Scaled);
    assert_eq!(estimate.cost, average.estimate(macs));
    assert_eq!(estimate.cost.latency, macs as f64 * average.latency);
}

#[test]
fn test_scaling_is_linear_in_operation_count() {
    let tables = ReferenceTables::published().unwrap();
    let estimator = CostEstimator::new(&tables);

    for kind in LayerKind::ALL {
        let single = estimator
            .estimate(&LayerRequest::with_shape("new", "a", kind, 12_345_678))
            .unwrap()
            .cost;
        let double = estimator
            .estimate(&LayerRequest::with_shape("new", "b", kind, 24_691_356))
            .unwrap()
            .cost;

        assert_eq!(double.latency, 2.0 * single.latency);
        assert_eq!(double.energy, 2.0 * single.energy);
    }
}

#[test]
fn test_average_is_invariant_under_record_order() {
    let tables = ReferenceTables::published().unwrap();

    for kind in LayerKind::ALL {
        let table = tables.table(kind);
        let mut reversed = table.records().to_vec();
        reversed.reverse();
        let mut rotated = table.records().to_vec();
        rotated.rotate_left(2);

        let forward = AverageCostPerOperation::from_table(table).unwrap();
        for records in [reversed, rotated] {
            let reordered =
                AverageCostPerOperation::from_table(&ReferenceTable::from_records(kind, records).unwrap())
                    .unwrap();
            assert!(relative_difference(forward.latency, reordered.latency) < 1e-12);
            assert!(relative_difference(forward.energy, reordered.energy) < 1e-12);
        }
    }
}

#[test]
fn test_cost_per_operation_is_within_an_order_of_magnitude() {
    let tables = ReferenceTables::published().unwrap();

    for kind in LayerKind::ALL {
        let table = tables.table(kind);
        let average = AverageCostPerOperation::from_table(table).unwrap();
        for record in table.records() {
            let per_op = record.cost.per_operation(record.ops);
            let ratio = per_op.energy / average.energy;
            assert!(ratio > 0.1 && ratio < 10.0, "{}/{}", record.network, record.layer);
        }
    }
}

#[test]
fn test_unknown_layer_is_an_error_not_zero() {
    let tables = ReferenceTables::published().unwrap();
    let estimator = CostEstimator::new(&tables);

    let result = estimator.estimate(&LayerRequest::known("vgg19", "conv5_4"));
    assert_eq!(
        result,
        Err(CostModelError::UnknownLayer {
            network: "vgg19".to_string(),
            layer: "conv5_4".to_string(),
        })
    );
}

#[test]
fn test_scaling_without_reference_records_fails() {
    let conv = ReferenceTables::published()
        .unwrap()
        .table(LayerKind::Conv)
        .clone();
    let tables = ReferenceTables::new(conv, ReferenceTable::empty(LayerKind::Fc));
    let estimator = CostEstimator::new(&tables);

    let result = estimator.estimate(&LayerRequest::with_shape("x", "fc1", LayerKind::Fc, 100));
    assert_eq!(
        result,
        Err(CostModelError::InsufficientData {
            kind: LayerKind::Fc
        })
    );

    // Convolutional scaling still works.
    let cost = estimator
        .estimate(&LayerRequest::with_shape("x", "conv1", LayerKind::Conv, 100))
        .unwrap()
        .cost;
    assert!(cost.latency > 0.0 && cost.energy > 0.0);
    assert_ne!(cost, LayerCost::ZERO);
}
