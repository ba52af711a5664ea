use clap::Args;
use rand::{rngs::StdRng, SeedableRng};

use crate::cli::client::TelemetryClient;
use crate::cli::utils;
use crate::cli::OutputFormat;
use crate::filter::{self, TelemetryQuery};
use crate::fleet::{self, Reading};

/// Query options, passed through as raw strings so the pipeline's lenient
/// parsing applies exactly as it does over HTTP.
#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    #[arg(long, help = "Exact device id, e.g. uno-r4-055")]
    pub device_id: Option<String>,
    #[arg(long, help = "Device id prefix")]
    pub device_prefix: Option<String>,
    #[arg(long, allow_hyphen_values = true, help = "Exact packet number")]
    pub packet: Option<String>,
    #[arg(long, allow_hyphen_values = true, help = "Inclusive lower packet bound")]
    pub packet_from: Option<String>,
    #[arg(long, allow_hyphen_values = true, help = "Inclusive upper packet bound")]
    pub packet_to: Option<String>,
    #[arg(long, help = "Sort direction: asc (default) or desc")]
    pub sort: Option<String>,
    #[arg(long, allow_hyphen_values = true, help = "Maximum number of readings")]
    pub limit: Option<String>,
}

impl From<QueryArgs> for TelemetryQuery {
    fn from(args: QueryArgs) -> Self {
        TelemetryQuery {
            device_id: args.device_id,
            device_prefix: args.device_prefix,
            packet: args.packet,
            packet_from: args.packet_from,
            packet_to: args.packet_to,
            sort: args.sort,
            limit: args.limit,
        }
    }
}

fn local_snapshot(seed: Option<u64>) -> Vec<Reading> {
    match seed {
        Some(seed) => fleet::generate_snapshot_with(&mut StdRng::seed_from_u64(seed)),
        None => fleet::generate_snapshot(),
    }
}

pub fn snapshot(seed: Option<u64>, output_format: OutputFormat) -> anyhow::Result<()> {
    utils::output_readings(&output_format, &local_snapshot(seed))
}

pub fn query(args: QueryArgs, seed: Option<u64>, output_format: OutputFormat) -> anyhow::Result<()> {
    let params = TelemetryQuery::from(args);
    tracing::debug!(?params, "running local telemetry query");
    let readings = filter::query(local_snapshot(seed), &params);
    utils::output_readings(&output_format, &readings)
}

pub async fn fetch(url: &str, args: QueryArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let client = TelemetryClient::new(url);
    let readings = client.query(&TelemetryQuery::from(args)).await?;
    utils::output_readings(&output_format, &readings)
}
