pub mod configs;
pub mod error;
pub mod graph;
mod process;
pub mod registry;

use std::path::Path;

use configs::{Adapter, DeploymentConfig};

pub use error::{PredictorError, Result};
pub use graph::{assert_shape_compatibility, graph_metadata, shape_from_graph};
pub use process::PredictorProcess;
pub use registry::ModelRegistry;

/// Loads a deployment file and builds the process serving its graph.
///
/// # Errors
/// Returns a `PredictorError` if the file can't be read, parsed or is not a valid deployment.
pub fn deploy<P: AsRef<Path>>(path: P) -> Result<PredictorProcess> {
    log::info!("loading deployment from {}", path.as_ref().display());
    let config = DeploymentConfig::load(path)?;
    log::info!(
        "deploying predictor {} with {} model(s)",
        config.predictor.name,
        config.models.len()
    );
    Adapter::new().adapt(config)
}
