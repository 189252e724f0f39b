use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use grammarian_core::ExerciseDefinition;
use grammarian_http::server::ServerConfig;

/// Grammarian HTTP API Server
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// JSON file mapping exercise ids to definitions, registered at startup
    #[arg(short, long)]
    exercises: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Note: tracing is initialized by the library start helpers.

    let exercises: HashMap<String, ExerciseDefinition> = match &cli.exercises {
        Some(path) => {
            let contents = std::fs::read_to_string(path)?;
            serde_json::from_str(&contents)?
        }
        None => HashMap::new(),
    };

    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        exercises,
    };

    println!(
        "Starting Grammarian HTTP server on {}:{}",
        config.host, config.port
    );
    grammarian_http::start_with_config(config).await?;

    Ok(())
}
