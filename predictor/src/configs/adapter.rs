use std::collections::HashSet;

use comms::specs::{PredictiveUnit, UnitType};
use log::warn;
use model::{ExampleModel, StaticModel};

use super::{DeploymentConfig, ModelConfig};
use crate::{
    error::{PredictorError, Result},
    process::PredictorProcess,
    registry::ModelRegistry,
};

/// Turns a deployment config into a runnable `PredictorProcess`.
pub struct Adapter;

impl Adapter {
    pub fn new() -> Self {
        Self
    }

    pub fn adapt(&self, config: DeploymentConfig) -> Result<PredictorProcess> {
        self.validate(&config)?;

        let DeploymentConfig { predictor, models } = config;
        let mut registry = ModelRegistry::new();

        for (name, model) in models {
            match model {
                ModelConfig::Example => registry.insert(name, ExampleModel::new()),
                ModelConfig::Static { metadata } => {
                    registry.insert(name, StaticModel::new(metadata))
                }
            }
        }

        Ok(PredictorProcess::new(predictor, registry))
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    fn validate(&self, config: &DeploymentConfig) -> Result<()> {
        if config.predictor.name.is_empty() {
            return Err(PredictorError::InvalidConfig(
                "predictor name must not be empty".into(),
            ));
        }

        let nodes = config.predictor.graph.nodes();
        let mut seen = HashSet::with_capacity(nodes.len());

        for node in &nodes {
            self.validate_node(node)?;

            if !seen.insert(node.name.as_str()) {
                return Err(PredictorError::InvalidConfig(format!(
                    "node name {} is used more than once",
                    node.name
                )));
            }

            if !config.models.contains_key(&node.name) {
                return Err(PredictorError::InvalidConfig(format!(
                    "node {} has no model configured",
                    node.name
                )));
            }
        }

        // Entries for nodes outside the graph are only reported.
        for name in config.models.keys() {
            if !seen.contains(name.as_str()) {
                warn!("model {name} is configured but not part of the graph");
            }
        }

        Ok(())
    }

    fn validate_node(&self, node: &PredictiveUnit) -> Result<()> {
        if node.name.is_empty() {
            return Err(PredictorError::InvalidConfig(
                "node names must not be empty".into(),
            ));
        }

        if node.unit_type == UnitType::Combiner && node.is_leaf() {
            return Err(PredictorError::InvalidConfig(format!(
                "combiner {} must have at least one child",
                node.name
            )));
        }

        Ok(())
    }
}

impl Default for Adapter {
    fn default() -> Self {
        Self::new()
    }
}
