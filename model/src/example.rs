use comms::specs::{ModelMetadata, TensorSpec};
use log::info;
use serde_json::Value;

use super::{Features, Model, Result};

/// Placeholder handler: echoes its features back and reports a fixed, fictitious metadata record.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExampleModel;

impl ExampleModel {
    /// Returns a new `ExampleModel`.
    pub fn new() -> Self {
        Self
    }
}

impl Model for ExampleModel {
    fn predict(&self, features: &Features, names: &[String], meta: &[Value]) -> Result<Vec<f64>> {
        info!("model features: {features}");
        info!("model names: {names:?}");
        info!("model meta: {meta:?}");
        Ok(features.to_list())
    }

    fn init_metadata(&self) -> ModelMetadata {
        ModelMetadata {
            name: "model-name".into(),
            versions: vec!["model-version".into()],
            platform: "platform-name".into(),
            inputs: vec![TensorSpec::new("input", "BYTES", [3])],
            outputs: vec![TensorSpec::new("output", "BYTES", [5, 6])],
        }
    }
}
