use std::io;

use serde_json::Value;

use crate::{Deserialize, Serialize};

/// The tensor part of a prediction request.
///
/// `ndarray` is kept as raw JSON, turning it into numbers is up to the model side.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RequestData {
    #[serde(default)]
    pub names: Vec<String>,
    pub ndarray: Value,
}

/// A prediction request as handed over by the hosting runtime.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PredictRequest {
    pub data: RequestData,
    #[serde(default)]
    pub meta: Vec<Value>,
}

/// The tensor part of a prediction response.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResponseData {
    #[serde(default)]
    pub names: Vec<String>,
    pub ndarray: Vec<f64>,
}

/// A prediction response handed back to the hosting runtime.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PredictResponse {
    pub data: ResponseData,
    #[serde(default)]
    pub meta: Vec<Value>,
}

impl PredictResponse {
    /// Creates a new `PredictResponse`.
    ///
    /// # Arguments
    /// * `names` - The feature names to echo back.
    /// * `values` - The predicted values.
    ///
    /// # Returns
    /// A new `PredictResponse` with empty meta.
    pub fn new(names: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            data: ResponseData {
                names,
                ndarray: values,
            },
            meta: Vec::new(),
        }
    }
}

fn decode<'a, T: serde::Deserialize<'a>>(buf: &'a [u8]) -> io::Result<T> {
    serde_json::from_slice(buf).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Received an invalid message: {e}"),
        )
    })
}

fn encode<T: serde::Serialize>(msg: &T, buf: &mut Vec<u8>) -> io::Result<()> {
    serde_json::to_writer(buf, msg).map_err(io::Error::from)
}

impl<'a> Deserialize<'a> for PredictRequest {
    fn deserialize(buf: &'a [u8]) -> io::Result<Self> {
        decode(buf)
    }
}

impl Serialize for PredictRequest {
    fn serialize(&self, buf: &mut Vec<u8>) -> io::Result<()> {
        encode(self, buf)
    }
}

impl<'a> Deserialize<'a> for PredictResponse {
    fn deserialize(buf: &'a [u8]) -> io::Result<Self> {
        decode(buf)
    }
}

impl Serialize for PredictResponse {
    fn serialize(&self, buf: &mut Vec<u8>) -> io::Result<()> {
        encode(self, buf)
    }
}
