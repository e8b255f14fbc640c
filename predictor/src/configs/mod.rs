mod adapter;
mod deployment;

pub use adapter::Adapter;
pub use deployment::{DeploymentConfig, ModelConfig};
