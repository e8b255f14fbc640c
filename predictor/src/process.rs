use comms::{
    msg::{PredictRequest, PredictResponse},
    specs::{GraphMetadata, ModelMetadata, PredictiveUnit, PredictorSpec, UnitType},
};
use log::{debug, info, warn};
use model::Features;
use serde_json::Value;

use crate::{
    error::{PredictorError, Result},
    graph,
    registry::ModelRegistry,
};

/// Runs requests through an inference graph whose nodes are served by in-process handlers.
pub struct PredictorProcess {
    spec: PredictorSpec,
    registry: ModelRegistry,
}

impl PredictorProcess {
    /// Creates a new `PredictorProcess`.
    ///
    /// # Arguments
    /// * `spec` - The inference graph to serve.
    /// * `registry` - The handlers for the graph nodes.
    ///
    /// # Returns
    /// A new `PredictorProcess` instance.
    pub fn new(spec: PredictorSpec, registry: ModelRegistry) -> Self {
        Self { spec, registry }
    }

    pub fn spec(&self) -> &PredictorSpec {
        &self.spec
    }

    /// Makes a prediction going through the entire graph.
    ///
    /// # Arguments
    /// * `features` - The input of the root node.
    /// * `names` - The feature names, handed as is to every node.
    /// * `meta` - The request metadata, handed as is to every node.
    ///
    /// # Returns
    /// The output of the graph or the first error a node produced.
    pub fn predict(
        &self,
        features: &Features,
        names: &[String],
        meta: &[Value],
    ) -> Result<Vec<f64>> {
        self.predict_node(&self.spec.graph, features, names, meta)
    }

    fn predict_node(
        &self,
        node: &PredictiveUnit,
        features: &Features,
        names: &[String],
        meta: &[Value],
    ) -> Result<Vec<f64>> {
        let model = self.registry.get(&node.name)?;
        let model_err = |source| PredictorError::Model {
            node: node.name.clone(),
            source,
        };

        debug!(node = node.name.as_str(); "predicting");

        match (node.unit_type, node.children.first()) {
            (UnitType::Model, child) => {
                let out = model.predict(features, names, meta).map_err(model_err)?;

                let Some(child) = child else {
                    return Ok(out);
                };

                if node.children.len() > 1 {
                    warn!(
                        node = node.name.as_str();
                        "only the first of {} children gets the output", node.children.len()
                    );
                }

                self.predict_node(child, &Features::from(out), names, meta)
            }
            (UnitType::Combiner, Some(_)) => {
                let outputs = node
                    .children
                    .iter()
                    .map(|child| self.predict_node(child, features, names, meta))
                    .collect::<Result<Vec<_>>>()?;

                model.aggregate(&outputs).map_err(model_err)
            }
            (unit_type, _) => Err(PredictorError::UnsupportedUnit {
                node: node.name.clone(),
                unit_type,
            }),
        }
    }

    /// Handles a raw prediction request.
    ///
    /// # Arguments
    /// * `req` - The request as decoded from the hosting runtime.
    ///
    /// # Returns
    /// The response carrying the graph output and the request names, or an error if the
    /// request features aren't a numeric array or a node failed.
    pub fn handle(&self, req: &PredictRequest) -> Result<PredictResponse> {
        let features =
            Features::try_from(&req.data.ndarray).map_err(PredictorError::InvalidFeatures)?;

        info!(
            predictor = self.spec.name.as_str();
            "handling request of shape {:?}", features.shape()
        );
        let values = self.predict(&features, &req.data.names, &req.meta)?;
        Ok(PredictResponse::new(req.data.names.clone(), values))
    }

    /// Returns the metadata of a single node of the graph.
    ///
    /// # Arguments
    /// * `model_name` - The name of the graph node.
    ///
    /// # Returns
    /// The metadata or an `UnknownModel` error if the node isn't part of the graph.
    pub fn metadata(&self, model_name: &str) -> Result<ModelMetadata> {
        self.spec
            .graph
            .find(model_name)
            .ok_or_else(|| PredictorError::UnknownModel(model_name.to_string()))?;

        self.registry.metadata(model_name)
    }

    /// Returns the metadata of the entire graph.
    pub fn graph_metadata(&self) -> Result<GraphMetadata> {
        graph::graph_metadata(&self.spec, &self.registry)
    }
}
