//! Estimate API Server binary
//!
//! Serves the estimate export over HTTP.

use std::path::PathBuf;

use clap::Parser;
use estimate_forge::api::{run_api_server, ApiConfig};
use estimate_forge::config::EstimateConfig;

#[derive(Parser, Debug)]
#[command(name = "estimate-server")]
#[command(version)]
#[command(about = "Estimate API Server - cost-estimate workbooks over HTTP")]
#[command(long_about = r#"
Estimate API Server

Endpoints:
  - POST /api/v1/export    - Flat item list to .xlsx (attachment)
  - POST /api/v1/layout    - Row map of the estimate as JSON

Additional endpoints:
  - GET  /health           - Health check
  - GET  /version          - Server version info
  - GET  /                 - API documentation

Example usage:
  estimate-server                           # Start on localhost:8080
  estimate-server --host 0.0.0.0 --port 3000 --config estimate.yaml

  curl -X POST http://localhost:8080/api/v1/export \
    -H "Content-Type: application/json" \
    -d @items.json -o estimate.xlsx
"#)]
struct Args {
    /// Host address to bind to (use 0.0.0.0 for all interfaces)
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "ESTIMATE_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "ESTIMATE_PORT")]
    port: u16,

    /// YAML configuration file (percentages, font size, sheet name)
    #[arg(short, long, env = "ESTIMATE_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let estimate = match args.config {
        Some(path) => EstimateConfig::load(&path)?,
        None => EstimateConfig::default(),
    };

    let config = ApiConfig {
        host: args.host,
        port: args.port,
        estimate,
    };

    run_api_server(config).await
}
