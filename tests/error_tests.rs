//! Tests for error types and their messages.

use fodlam::errors::{ConfigError, CostModelError, DataError, RunError};
use fodlam::invocation::{run, Mode};
use fodlam::{Configuration, LayerKind};
use std::path::Path;

#[cfg(test)]
mod cost_model_error_tests {
    use super::*;

    #[test]
    fn test_unknown_layer_message_names_the_layer() {
        let error = CostModelError::UnknownLayer {
            network: "vgg19".to_string(),
            layer: "conv5_4".to_string(),
        };
        assert!(error.to_string().contains("vgg19/conv5_4"));
    }

    #[test]
    fn test_insufficient_data_message_names_the_kind() {
        let error = CostModelError::InsufficientData {
            kind: LayerKind::Fc,
        };
        assert_eq!(
            error.to_string(),
            "Cannot scale a fc layer: the fc reference table is empty"
        );
    }

    #[test]
    fn test_data_error_converts() {
        let data = DataError::MissingReference {
            network: "vgg16".to_string(),
            layer: "fc6".to_string(),
            kind: LayerKind::Fc,
        };
        let error: CostModelError = data.clone().into();
        assert_eq!(error, CostModelError::Data(data));
        assert!(error.to_string().contains("No fc reference record for vgg16/fc6"));
    }
}

#[cfg(test)]
mod run_error_tests {
    use super::*;

    #[test]
    fn test_malformed_input_is_config_error() {
        let result = run(Mode::Estimate, "{".as_bytes(), Vec::new(), Path::new("."));
        assert!(matches!(
            result,
            Err(RunError::Config(ConfigError::Parse { .. }))
        ));
    }

    #[test]
    fn test_missing_layers_file_is_io_error() {
        let input = r#"{"network": "resnet", "layers_file": "does/not/exist.json"}"#;
        let result = run(Mode::Estimate, input.as_bytes(), Vec::new(), Path::new("."));
        match result {
            Err(RunError::Config(ConfigError::Io { path, .. })) => {
                assert!(path.ends_with("does/not/exist.json"))
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_unresolvable_layer_fails_whole_request() {
        let config = Configuration::from_json(
            r#"{"network": "vgg16", "layers": ["conv1_1", "conv9_9", "fc6"]}"#,
        )
        .unwrap();
        let tables = fodlam::ReferenceTables::published().unwrap();
        let result = fodlam::invocation::estimate_configuration(&tables, &config, Path::new("."));

        match result {
            Err(RunError::CostModel(CostModelError::UnknownLayer { network, layer })) => {
                assert_eq!(network, "vgg16");
                assert_eq!(layer, "conv9_9");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_zero_macs_is_invalid_shape() {
        let input = r#"{"network": "x", "layers": [{"name": "c", "kind": "conv", "macs": 0}]}"#;
        let result = run(Mode::Estimate, input.as_bytes(), Vec::new(), Path::new("."));
        assert!(matches!(
            result,
            Err(RunError::Config(ConfigError::InvalidShape { .. }))
        ));
    }
}
