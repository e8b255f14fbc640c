use comms::specs::ModelMetadata;
use log::{debug, info};
use serde_json::Value;

use super::{Features, Model, Result};

/// Echo handler whose metadata is provided from the outside, e.g. a deployment file.
#[derive(Debug, Clone)]
pub struct StaticModel {
    metadata: ModelMetadata,
}

impl StaticModel {
    /// Creates a new `StaticModel`.
    ///
    /// # Arguments
    /// * `metadata` - The record `init_metadata` will report.
    ///
    /// # Returns
    /// A new `StaticModel` instance.
    pub fn new(metadata: ModelMetadata) -> Self {
        Self { metadata }
    }
}

impl Model for StaticModel {
    fn predict(&self, features: &Features, names: &[String], meta: &[Value]) -> Result<Vec<f64>> {
        let model = &self.metadata.name;
        info!(model = model.as_str(); "model features: {features}");
        info!(model = model.as_str(); "model names: {names:?}");
        info!(model = model.as_str(); "model meta: {meta:?}");
        Ok(features.to_list())
    }

    fn init_metadata(&self) -> ModelMetadata {
        self.metadata.clone()
    }

    fn aggregate(&self, outputs: &[Vec<f64>]) -> Result<Vec<f64>> {
        debug!(model = self.metadata.name.as_str(); "combining {} outputs", outputs.len());
        Ok(outputs.concat())
    }
}
