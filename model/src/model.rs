use comms::specs::ModelMetadata;
use serde_json::Value;

use crate::{Features, ModelErr, Result};

/// A handler the hosting serving runtime calls into.
pub trait Model {
    /// Makes a prediction over the given features.
    ///
    /// # Arguments
    /// * `features` - The input data.
    /// * `names` - The feature names sent by the client.
    /// * `meta` - Arbitrary request metadata sent by the client.
    ///
    /// # Returns
    /// The prediction as a plain list of numbers or an error if occurred.
    fn predict(&self, features: &Features, names: &[String], meta: &[Value]) -> Result<Vec<f64>>;

    /// Describes the model, its version and the tensors it consumes and produces.
    fn init_metadata(&self) -> ModelMetadata;

    /// Merges the outputs of the children of a combiner node into a single output.
    ///
    /// # Arguments
    /// * `outputs` - One prediction per child, in child order.
    ///
    /// # Returns
    /// The combined prediction or an error if the model can't combine.
    fn aggregate(&self, outputs: &[Vec<f64>]) -> Result<Vec<f64>> {
        let _ = outputs;
        Err(ModelErr::Unsupported {
            model: self.init_metadata().name,
            op: "aggregate",
        })
    }
}

/// Converts a raw JSON value into features and makes a prediction with it.
///
/// # Arguments
/// * `model` - The handler to call.
/// * `features` - A number or a nested array of numbers.
/// * `names` - The feature names, `None` means no names.
/// * `meta` - The request metadata, `None` means no metadata.
///
/// # Returns
/// The prediction, or the conversion error if `features` isn't a numeric array.
pub fn predict_json<M>(
    model: &M,
    features: &Value,
    names: Option<&[String]>,
    meta: Option<&[Value]>,
) -> Result<Vec<f64>>
where
    M: Model + ?Sized,
{
    let features = Features::try_from(features)?;
    model.predict(&features, names.unwrap_or_default(), meta.unwrap_or_default())
}
