use std::{env, fs, io};

use comms::msg::PredictRequest;
use log::info;

const DEFAULT_CONFIG: &str = "deployment.json";

fn main() -> io::Result<()> {
    env_logger::init();

    let config = env::var("PREDICTOR_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG.to_string());
    let process = predictor::deploy(&config)?;

    let metadata = process.graph_metadata()?;
    println!("{}", serde_json::to_string_pretty(&metadata)?);

    if let Ok(path) = env::var("PREDICTOR_REQUEST") {
        info!("running request {path}");
        let raw = fs::read(&path)?;
        let req: PredictRequest = comms::from_bytes(&raw)?;
        let res = process.handle(&req)?;
        println!("{}", String::from_utf8_lossy(&comms::to_bytes(&res)?));
    }

    Ok(())
}
