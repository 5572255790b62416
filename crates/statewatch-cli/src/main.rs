use clap::Parser;
use tracing_subscriber::EnvFilter;

use statewatch_core::policy::{
    IgnorePolicy, DEFAULT_IGNORE_PREFIXES, DEFAULT_IGNORE_SUFFIXES,
};
use statewatch_core::report::OrphanedStateFileReport;
use statewatch_reports::aws::{EksClusterInventory, S3ObjectLister};
use statewatch_reports::{OrphanedStateFiles, ReportConfig};

/// Report Terraform state files whose owning cluster no longer exists.
///
/// Writes the report as JSON to stdout; logs go to stderr.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// S3 bucket holding the Terraform state files.
    #[arg(long, env = "STATEWATCH_BUCKET")]
    bucket: String,

    /// AWS region whose cluster inventory the state files are checked
    /// against.
    #[arg(long, env = "AWS_REGION")]
    region: String,

    /// Top-level directory to treat as shared (non-cluster) state.
    /// Repeatable; replaces the built-in prefix list when given.
    #[arg(long = "ignore-prefix", value_name = "SEGMENT")]
    ignore_prefixes: Vec<String>,

    /// Directory name whose state files are account-level, not per-cluster.
    /// Repeatable; replaces the built-in suffix list when given.
    #[arg(long = "ignore-suffix", value_name = "SEGMENT")]
    ignore_suffixes: Vec<String>,
}

fn policy_from(args: &Args) -> IgnorePolicy {
    let prefixes = if args.ignore_prefixes.is_empty() {
        DEFAULT_IGNORE_PREFIXES.iter().map(|p| p.to_string()).collect()
    } else {
        args.ignore_prefixes.clone()
    };
    let suffixes = if args.ignore_suffixes.is_empty() {
        DEFAULT_IGNORE_SUFFIXES.iter().map(|s| s.to_string()).collect()
    } else {
        args.ignore_suffixes.clone()
    };
    IgnorePolicy::new(prefixes, suffixes)
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let policy = policy_from(&args);

    let s3 = statewatch_storage::client::build_client().await;
    let eks = statewatch_inventory::client::build_client_with_region(&args.region).await;

    let report = OrphanedStateFiles::new(
        Box::new(S3ObjectLister::new(s3)),
        Box::new(EksClusterInventory::new(eks)),
        ReportConfig {
            bucket: args.bucket,
            region: args.region,
            policy,
        },
    );

    let orphaned = report.list().await?;
    tracing::info!(count = orphaned.len(), "report generated");

    let envelope = OrphanedStateFileReport {
        updated_at: jiff::Timestamp::now(),
        orphaned_statefiles: orphaned,
    };
    println!("{}", serde_json::to_string_pretty(&envelope)?);

    Ok(())
}
