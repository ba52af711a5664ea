pub mod client;
pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "fleet")]
#[command(about = "Fleet CLI - generate, query and fetch synthetic device telemetry")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Print a freshly generated snapshot of the whole fleet")]
    Snapshot {
        #[arg(long, help = "Seed for reproducible values")]
        seed: Option<u64>,
    },

    #[command(about = "Run the telemetry query pipeline locally")]
    Query {
        #[command(flatten)]
        query: commands::telemetry::QueryArgs,
        #[arg(long, help = "Seed for reproducible values")]
        seed: Option<u64>,
    },

    #[command(about = "Query a running server's /api/telemetry endpoint")]
    Fetch {
        #[arg(long, default_value = "http://127.0.0.1:3000", help = "Server base URL")]
        url: String,
        #[command(flatten)]
        query: commands::telemetry::QueryArgs,
    },

    #[command(about = "Check a sensor value against its threshold")]
    Check {
        #[arg(help = "Sensor name (temperature, humidity, co2)")]
        sensor: String,
        #[arg(help = "Measured value", allow_hyphen_values = true)]
        value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Snapshot { seed } => commands::telemetry::snapshot(seed, output_format),
        Commands::Query { query, seed } => commands::telemetry::query(query, seed, output_format),
        Commands::Fetch { url, query } => commands::telemetry::fetch(&url, query, output_format).await,
        Commands::Check { sensor, value } => commands::sensor::check(&sensor, &value, output_format),
    }
}
