//! Command-line entry point for the subdomain provisioner
//!
//! Reads one JSON descriptor, creates the matching DNS record and reports the
//! result through the exit status: `0` on success (including a record that
//! already existed), `1` on any failure, argument errors included. Every
//! failure prints a `"{kind}: {error}"` line on stderr.
//!
//! Configuration comes from the environment (`DNS_PROVIDER`,
//! `CLOUDFLARE_API_TOKEN`, `CLOUDFLARE_ZONE_ID`, `DNS_BASE_DOMAIN`,
//! `CLOUDFLARE_API_BASE`). Logs go to stderr; a one-line JSON summary of a
//! successful run goes to stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use subdomain_provisioner_core::{run, CoreError, CoreResult, ProvisionOutcome, ProvisionerConfig};
use tracing_subscriber::EnvFilter;

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;

/// Create a DNS record for the subdomain described by a JSON file
#[derive(Parser, Debug)]
#[command(name = "subdomain-provisioner", version, about)]
struct Args {
    /// JSON file with `subdomain`, `target` and an optional `record_type` (A or CNAME)
    input: PathBuf,
}

/// Initialize logging to stderr.
///
/// `RUST_LOG` selects the filter (default `info`); `RUST_LOG_FORMAT=json`
/// switches to JSON lines.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let log_format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact()
                .init();
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(usage_exit_status(&e));
        }
    };
    init_logging();

    let config = ProvisionerConfig::from_env();
    tracing::debug!("Provisioning from {}", args.input.display());

    let result = run(&args.input, &config).await;
    report(&result);
    ExitCode::from(exit_status(&result))
}

/// Print the success summary on stdout or the failure diagnostic on stderr.
fn report(result: &CoreResult<ProvisionOutcome>) {
    match result {
        Ok(outcome) => {
            match outcome {
                ProvisionOutcome::Created { fqdn, .. } => tracing::info!("Provisioned {fqdn}"),
                ProvisionOutcome::AlreadyExists { fqdn } => {
                    tracing::info!("{fqdn} was already provisioned");
                }
            }
            match serde_json::to_string(outcome) {
                Ok(summary) => println!("{summary}"),
                Err(e) => tracing::warn!("Failed to serialize outcome: {e}"),
            }
        }
        Err(e) => {
            tracing::debug!(kind = e.kind(), expected = e.is_expected(), "Run failed");
            // Written directly so RUST_LOG cannot hide it
            eprintln!("{}", diagnostic(e));
        }
    }
}

/// `"{kind}: {error}"`, the line printed for every failed run.
fn diagnostic(error: &CoreError) -> String {
    format!("{}: {error}", error.kind())
}

/// `--help` and `--version` succeed; any other argument error is a failure.
fn usage_exit_status(error: &clap::Error) -> u8 {
    if error.use_stderr() {
        EXIT_FAILURE
    } else {
        EXIT_SUCCESS
    }
}

fn exit_status(result: &CoreResult<ProvisionOutcome>) -> u8 {
    if result.is_ok() {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    }
}
