use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire model module.
pub type Result<T> = std::result::Result<T, ModelErr>;

/// The model module's error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelErr {
    /// The given value can't be turned into a numeric array.
    InvalidFeatures(String),
    /// The handler doesn't provide the requested operation.
    Unsupported { model: String, op: &'static str },
}

impl Display for ModelErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelErr::InvalidFeatures(reason) => write!(f, "invalid features: {reason}"),
            ModelErr::Unsupported { model, op } => {
                write!(f, "model {model} does not support the {op} operation")
            }
        }
    }
}

impl Error for ModelErr {}
