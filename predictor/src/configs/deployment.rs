use std::{collections::BTreeMap, fs, path::Path};

use comms::specs::{ModelMetadata, PredictorSpec};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How the handler of a graph node gets built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelConfig {
    /// The placeholder handler with its fixed metadata.
    Example,
    /// An echo handler reporting the given metadata.
    Static { metadata: ModelMetadata },
}

/// A deployment: the inference graph and a handler per node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentConfig {
    pub predictor: PredictorSpec,
    pub models: BTreeMap<String, ModelConfig>,
}

impl DeploymentConfig {
    /// Parses a deployment from its JSON representation.
    pub fn from_json(raw: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(raw)?)
    }

    /// Reads and parses a deployment file.
    ///
    /// # Arguments
    /// * `path` - The location of the JSON file.
    ///
    /// # Returns
    /// The deployment or an error if the file can't be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read(path)?;
        Self::from_json(&raw)
    }
}
