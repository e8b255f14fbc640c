pub mod error;
mod example;
mod features;
mod model;
mod static_model;

pub use error::{ModelErr, Result};
pub use example::ExampleModel;
pub use features::Features;
pub use model::{Model, predict_json};
pub use static_model::StaticModel;
