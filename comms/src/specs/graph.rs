use serde::{Deserialize, Serialize};

/// The role a node plays inside an inference graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitType {
    #[default]
    Model,
    Combiner,
    Router,
    Transformer,
    OutputTransformer,
}

/// A node of the inference graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictiveUnit {
    pub name: String,
    #[serde(rename = "type", default)]
    pub unit_type: UnitType,
    #[serde(default)]
    pub children: Vec<PredictiveUnit>,
}

impl PredictiveUnit {
    /// Creates a new childless `PredictiveUnit`.
    pub fn new<N: Into<String>>(name: N, unit_type: UnitType) -> Self {
        Self {
            name: name.into(),
            unit_type,
            children: Vec::new(),
        }
    }

    /// Appends a child to this node.
    pub fn with_child(mut self, child: PredictiveUnit) -> Self {
        self.children.push(child);
        self
    }

    /// Whether this node is a leaf of the graph.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns every node of the subgraph rooted here in depth-first pre-order.
    pub fn nodes(&self) -> Vec<&PredictiveUnit> {
        let mut out = Vec::new();
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children.iter().rev());
        }

        out
    }

    /// Looks up a node of the subgraph by its name.
    pub fn find(&self, name: &str) -> Option<&PredictiveUnit> {
        self.nodes().into_iter().find(|node| node.name == name)
    }
}

/// A named inference graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictorSpec {
    pub name: String,
    pub graph: PredictiveUnit,
}
