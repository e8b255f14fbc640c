use std::collections::BTreeMap;

use comms::specs::{
    GraphMetadata, ModelMetadata, PredictiveUnit, PredictorSpec, TensorSpec, UnitType,
};
use log::{debug, warn};

use crate::{
    error::{PredictorError, Result},
    registry::ModelRegistry,
};

/// The `(inputs, outputs)` pair of a subgraph.
pub type Shapes = (Vec<TensorSpec>, Vec<TensorSpec>);

/// Whether the tensors on the left can be fed with the tensors on the right.
///
/// Both sides must be non empty and of the same length, and every pair must share the same
/// datatype and shape. Tensor names aren't compared.
pub fn assert_shape_compatibility(lhs: &[TensorSpec], rhs: &[TensorSpec]) -> bool {
    if lhs.is_empty() || rhs.is_empty() || lhs.len() != rhs.len() {
        return false;
    }

    lhs.iter().zip(rhs).all(|(l, r)| l.is_compatible(r))
}

/// Infers the inputs the given subgraph expects and the outputs it produces.
///
/// # Arguments
/// * `node` - The root of the subgraph.
/// * `models` - The metadata of every node, keyed by node name.
///
/// # Returns
/// The `(inputs, outputs)` pair or an error if the subgraph isn't consistent.
pub fn shape_from_graph(
    node: &PredictiveUnit,
    models: &BTreeMap<String, ModelMetadata>,
) -> Result<Shapes> {
    let meta = models
        .get(&node.name)
        .ok_or_else(|| PredictorError::UnknownModel(node.name.clone()))?;

    debug!(node = node.name.as_str(); "inferring shapes");

    match (node.unit_type, node.children.first()) {
        (UnitType::Model, None) => Ok((meta.inputs.clone(), meta.outputs.clone())),
        (UnitType::Model, Some(child)) => {
            if node.children.len() > 1 {
                warn!(
                    node = node.name.as_str();
                    "only the first of {} children is considered", node.children.len()
                );
            }

            let (child_inputs, child_outputs) = shape_from_graph(child, models)?;
            if !assert_shape_compatibility(&meta.outputs, &child_inputs) {
                return Err(PredictorError::ParentChildMismatch {
                    parent: node.name.clone(),
                    child: child.name.clone(),
                });
            }

            Ok((meta.inputs.clone(), child_outputs))
        }
        (UnitType::Combiner, Some(_)) => combiner_shapes(node, meta, models),
        (unit_type, _) => Err(PredictorError::UnsupportedUnit {
            node: node.name.clone(),
            unit_type,
        }),
    }
}

/// A combiner receives the list of its children's outputs, every child is treated as having a
/// single output.
fn combiner_shapes(
    node: &PredictiveUnit,
    meta: &ModelMetadata,
    models: &BTreeMap<String, ModelMetadata>,
) -> Result<Shapes> {
    let mut prev_inputs: Option<Vec<TensorSpec>> = None;
    let mut combined = Vec::with_capacity(node.children.len());

    for child in &node.children {
        let (child_inputs, child_outputs) = shape_from_graph(child, models)?;

        if let Some(prev) = &prev_inputs {
            if !assert_shape_compatibility(prev, &child_inputs) {
                return Err(PredictorError::SiblingMismatch {
                    combiner: node.name.clone(),
                    child: child.name.clone(),
                });
            }
        }

        let got = child_outputs.len();
        let mut outputs = child_outputs.into_iter();
        match (outputs.next(), got) {
            (Some(output), 1) => combined.push(output),
            _ => {
                return Err(PredictorError::MultipleOutputs {
                    node: child.name.clone(),
                    got,
                });
            }
        }

        prev_inputs = Some(child_inputs);
    }

    if !assert_shape_compatibility(&meta.inputs, &combined) {
        return Err(PredictorError::CombinerInputMismatch {
            combiner: node.name.clone(),
        });
    }

    Ok((prev_inputs.unwrap_or_default(), meta.outputs.clone()))
}

/// Builds the metadata of an entire predictor.
///
/// # Arguments
/// * `spec` - The predictor whose graph gets described.
/// * `registry` - The handlers serving the graph nodes.
///
/// # Returns
/// The graph metadata or an error if a node has no handler or the shapes don't line up.
pub fn graph_metadata(spec: &PredictorSpec, registry: &ModelRegistry) -> Result<GraphMetadata> {
    let models = registry.all_model_metadata(&spec.graph)?;
    let (graph_inputs, graph_outputs) = shape_from_graph(&spec.graph, &models)?;

    Ok(GraphMetadata {
        name: spec.name.clone(),
        models,
        graph_inputs,
        graph_outputs,
    })
}
