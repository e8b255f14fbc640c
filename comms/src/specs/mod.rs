pub mod graph;
pub mod metadata;

pub use graph::{PredictiveUnit, PredictorSpec, UnitType};
pub use metadata::{GraphMetadata, ModelMetadata, TensorSpec};
