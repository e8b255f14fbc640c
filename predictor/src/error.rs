use std::{error::Error, fmt, io};

use comms::specs::UnitType;
use model::ModelErr;

/// The predictor module's result type.
pub type Result<T> = std::result::Result<T, PredictorError>;

/// All errors that can occur while walking an inference graph.
#[derive(Debug)]
pub enum PredictorError {
    /// Invalid deployment, caught before any model gets built.
    InvalidConfig(String),
    /// No model is registered under the given graph node name.
    UnknownModel(String),
    /// A `MODEL` node produces something its first child can't consume.
    ParentChildMismatch { parent: String, child: String },
    /// A combiner child expects a different input than its previous sibling.
    SiblingMismatch { combiner: String, child: String },
    /// The combined outputs of the children don't match the combiner's inputs.
    CombinerInputMismatch { combiner: String },
    /// A combiner child doesn't have exactly one output.
    MultipleOutputs { node: String, got: usize },
    /// The node's unit type can't be handled at that position of the graph.
    UnsupportedUnit { node: String, unit_type: UnitType },
    /// The request's features couldn't be turned into a numeric array.
    InvalidFeatures(ModelErr),
    /// A model handler failed.
    Model { node: String, source: ModelErr },
    /// The deployment file isn't valid JSON for a deployment.
    Json(serde_json::Error),
    /// An underlying I/O error not covered by the above variants.
    Io(io::Error),
}

impl fmt::Display for PredictorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::UnknownModel(name) => write!(f, "no model registered for node {name}"),
            Self::ParentChildMismatch { parent, child } => write!(
                f,
                "outputs of {parent} are incompatible with the inputs of its child {child}"
            ),
            Self::SiblingMismatch { combiner, child } => write!(
                f,
                "child {child} of {combiner} has a different input than its siblings"
            ),
            Self::CombinerInputMismatch { combiner } => write!(
                f,
                "inputs of {combiner} don't match the combined outputs of its children"
            ),
            Self::MultipleOutputs { node, got } => {
                write!(f, "node {node} must have exactly one output, got {got}")
            }
            Self::UnsupportedUnit { node, unit_type } => {
                write!(f, "node {node} of type {unit_type:?} is not supported here")
            }
            Self::InvalidFeatures(e) => write!(f, "invalid request: {e}"),
            Self::Model { node, source } => write!(f, "model {node} error: {source}"),
            Self::Json(e) => write!(f, "json error: {e}"),
            Self::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl Error for PredictorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidFeatures(e) => Some(e),
            Self::Model { source, .. } => Some(source),
            Self::Json(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PredictorError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for PredictorError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Boundary conversion for the binary.
impl From<PredictorError> for io::Error {
    fn from(value: PredictorError) -> Self {
        match value {
            PredictorError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}
