use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Describes one input or output slot of a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TensorSpec {
    pub name: String,
    pub datatype: String,
    pub shape: Vec<usize>,
}

impl TensorSpec {
    /// Creates a new `TensorSpec`.
    ///
    /// # Arguments
    /// * `name` - The name of the slot.
    /// * `datatype` - The element type, e.g. `BYTES` or `FP32`.
    /// * `shape` - The dimensions of the tensor.
    ///
    /// # Returns
    /// A new `TensorSpec` instance.
    pub fn new<N, D, S>(name: N, datatype: D, shape: S) -> Self
    where
        N: Into<String>,
        D: Into<String>,
        S: Into<Vec<usize>>,
    {
        Self {
            name: name.into(),
            datatype: datatype.into(),
            shape: shape.into(),
        }
    }

    /// Whether both tensors carry the same datatype and the same shape, names aren't compared.
    pub fn is_compatible(&self, other: &TensorSpec) -> bool {
        self.datatype == other.datatype && self.shape == other.shape
    }
}

/// The descriptive record a model reports about itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub name: String,
    #[serde(default)]
    pub versions: Vec<String>,
    pub platform: String,
    #[serde(default)]
    pub inputs: Vec<TensorSpec>,
    #[serde(default)]
    pub outputs: Vec<TensorSpec>,
}

/// The metadata of an entire inference graph.
///
/// `models` is keyed by graph node name, the graph inputs are the ones the root
/// expects and the graph outputs the ones the client finally receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphMetadata {
    pub name: String,
    pub models: BTreeMap<String, ModelMetadata>,
    #[serde(rename = "graphinputs")]
    pub graph_inputs: Vec<TensorSpec>,
    #[serde(rename = "graphoutputs")]
    pub graph_outputs: Vec<TensorSpec>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn metadata_uses_lowercase_keys() {
        let meta = ModelMetadata {
            name: "model-name".into(),
            versions: vec!["model-version".into()],
            platform: "platform-name".into(),
            inputs: vec![TensorSpec::new("input", "BYTES", [3])],
            outputs: vec![TensorSpec::new("output", "BYTES", [5, 6])],
        };

        let value = serde_json::to_value(&meta).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "model-name",
                "versions": ["model-version"],
                "platform": "platform-name",
                "inputs": [{"name": "input", "datatype": "BYTES", "shape": [3]}],
                "outputs": [{"name": "output", "datatype": "BYTES", "shape": [5, 6]}],
            })
        );
    }

    #[test]
    fn missing_versions_default_to_empty() {
        let meta: ModelMetadata = serde_json::from_value(json!({
            "name": "m",
            "platform": "p",
            "inputs": [],
            "outputs": [],
        }))
        .unwrap();

        assert!(meta.versions.is_empty());
    }

    #[test]
    fn compatibility_ignores_names() {
        let a = TensorSpec::new("a", "BYTES", [1, 5]);
        let b = TensorSpec::new("b", "BYTES", [1, 5]);
        let c = TensorSpec::new("a", "FP32", [1, 5]);
        let d = TensorSpec::new("a", "BYTES", [5]);

        assert!(a.is_compatible(&b));
        assert!(!a.is_compatible(&c));
        assert!(!a.is_compatible(&d));
    }
}
