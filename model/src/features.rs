use std::fmt::{self, Display};

use ndarray::{Array1, ArrayD, ArrayViewD, IxDyn};
use serde_json::Value;

use crate::{ModelErr, Result};

/// The numeric input of a prediction, an n-dimensional array of `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Features(ArrayD<f64>);

impl Features {
    /// Returns the dimensions of the features.
    pub fn shape(&self) -> &[usize] {
        self.0.shape()
    }

    /// Returns a read only view over the features.
    pub fn view(&self) -> ArrayViewD<'_, f64> {
        self.0.view()
    }

    /// Flattens the features into a plain list, in logical (row major) order.
    pub fn to_list(&self) -> Vec<f64> {
        self.0.iter().copied().collect()
    }

    /// Walks a JSON value and returns its shape alongside its leaves.
    ///
    /// # Arguments
    /// * `value` - A number or a nested array of numbers.
    /// * `depth` - How deep into the top level value we are, used for error reporting.
    /// * `values` - The buffer where the leaves get pushed.
    ///
    /// # Returns
    /// The shape of `value` or an error if it isn't a rectangular numeric array.
    fn collect(value: &Value, depth: usize, values: &mut Vec<f64>) -> Result<Vec<usize>> {
        match value {
            Value::Number(n) => {
                let x = n.as_f64().ok_or_else(|| {
                    ModelErr::InvalidFeatures(format!("number {n} can't be represented as f64"))
                })?;

                values.push(x);
                Ok(Vec::new())
            }
            Value::Array(items) => {
                let mut inner: Option<Vec<usize>> = None;

                for (i, item) in items.iter().enumerate() {
                    let shape = Self::collect(item, depth + 1, values)?;

                    let expected = inner.get_or_insert_with(|| shape.clone());
                    if *expected != shape {
                        return Err(ModelErr::InvalidFeatures(format!(
                            "ragged array at depth {depth}: element {i} has shape {shape:?}, expected {expected:?}"
                        )));
                    }
                }

                let mut shape = vec![items.len()];
                shape.extend(inner.unwrap_or_default());
                Ok(shape)
            }
            other => Err(ModelErr::InvalidFeatures(format!(
                "expected a number or an array at depth {depth}, got {other}"
            ))),
        }
    }
}

impl TryFrom<&Value> for Features {
    type Error = ModelErr;

    fn try_from(value: &Value) -> Result<Self> {
        let mut values = Vec::new();
        let shape = Self::collect(value, 0, &mut values)?;

        ArrayD::from_shape_vec(IxDyn(&shape), values)
            .map(Self)
            .map_err(|e| ModelErr::InvalidFeatures(e.to_string()))
    }
}

impl From<ArrayD<f64>> for Features {
    fn from(value: ArrayD<f64>) -> Self {
        Self(value)
    }
}

impl From<Vec<f64>> for Features {
    fn from(value: Vec<f64>) -> Self {
        Self(Array1::from(value).into_dyn())
    }
}

impl Display for Features {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::{Array2, ShapeBuilder};
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_nested_arrays() {
        let features = Features::try_from(&json!([[1, 2, 3], [4, 5, 6]])).unwrap();
        assert_eq!(features.shape(), &[2, 3]);
        assert_eq!(features.to_list(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn scalar_is_zero_dimensional() {
        let features = Features::try_from(&json!(7.5)).unwrap();
        assert!(features.shape().is_empty());
        assert_eq!(features.to_list(), [7.5]);
    }

    #[test]
    fn empty_array_is_valid() {
        let features = Features::try_from(&json!([])).unwrap();
        assert_eq!(features.shape(), &[0]);
        assert!(features.to_list().is_empty());
    }

    #[test]
    fn rejects_ragged_arrays() {
        let err = Features::try_from(&json!([[1, 2], [3]])).unwrap_err();
        assert!(matches!(err, ModelErr::InvalidFeatures(_)));
    }

    #[test]
    fn rejects_non_numeric_leaves() {
        let err = Features::try_from(&json!([1, "two", 3])).unwrap_err();
        assert!(matches!(err, ModelErr::InvalidFeatures(_)));

        let err = Features::try_from(&json!({"a": 1})).unwrap_err();
        assert!(matches!(err, ModelErr::InvalidFeatures(_)));
    }

    #[test]
    fn list_follows_logical_order_for_column_major_arrays() {
        let data = Array2::from_shape_vec((2, 2).f(), vec![1.0, 3.0, 2.0, 4.0]).unwrap();
        let features = Features::from(data.into_dyn());
        assert_eq!(features.to_list(), [1.0, 2.0, 3.0, 4.0]);
    }
}
