use std::collections::{BTreeMap, HashMap};

use comms::specs::{ModelMetadata, PredictiveUnit};
use log::debug;
use model::Model;

use crate::error::{PredictorError, Result};

/// The handlers of a deployment, keyed by the graph node they serve.
#[derive(Default)]
pub struct ModelRegistry {
    models: HashMap<String, Box<dyn Model>>,
}

impl ModelRegistry {
    /// Returns a new empty `ModelRegistry`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `model` as the handler of the node `name`, replacing any previous one.
    pub fn insert<N, M>(&mut self, name: N, model: M)
    where
        N: Into<String>,
        M: Model + 'static,
    {
        self.models.insert(name.into(), Box::new(model));
    }

    /// Builder flavoured `insert`.
    pub fn with<N, M>(mut self, name: N, model: M) -> Self
    where
        N: Into<String>,
        M: Model + 'static,
    {
        self.insert(name, model);
        self
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Returns the handler of the node `name`.
    pub fn get(&self, name: &str) -> Result<&dyn Model> {
        self.models
            .get(name)
            .map(|model| model.as_ref())
            .ok_or_else(|| PredictorError::UnknownModel(name.to_string()))
    }

    /// Returns the metadata reported by the handler of the node `name`.
    pub fn metadata(&self, name: &str) -> Result<ModelMetadata> {
        self.get(name).map(|model| model.init_metadata())
    }

    /// Collects the metadata of every node of the graph.
    ///
    /// # Arguments
    /// * `graph` - The root of the (sub)graph to walk.
    ///
    /// # Returns
    /// The metadata keyed by node name or an error if any node has no handler.
    pub fn all_model_metadata(
        &self,
        graph: &PredictiveUnit,
    ) -> Result<BTreeMap<String, ModelMetadata>> {
        let mut out = BTreeMap::new();

        for node in graph.nodes() {
            debug!(node = node.name.as_str(); "fetching metadata");
            out.insert(node.name.clone(), self.metadata(&node.name)?);
        }

        Ok(out)
    }
}
