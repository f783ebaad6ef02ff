//! These structs provide the CLI interface for the receipt-processor CLI.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// receipt-processor: A web service that scores purchase receipts.
///
/// Receipts are submitted as JSON to `POST /receipts/process`, which returns an id. The points
/// awarded to the receipt can then be retrieved from `GET /receipts/{id}/points`. Receipts are
/// held in memory only and are lost when the server stops.
#[derive(Debug, Parser, Clone)]
#[command(version)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the HTTP server.
    ///
    /// The server listens on --host and --port until it receives Ctrl-C.
    Serve(ServeArgs),
    /// Score a receipt stored in a JSON file and print the points awarded by each rule.
    ///
    /// The file must have the same shape as the body of `POST /receipts/process`. Nothing is
    /// stored and no server is started.
    Points(PointsArgs),
    /// Print the JSON Schema of a submitted receipt.
    Schema,
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. See the tracing-subscriber EnvFilter documentation
    /// for its syntax.
    #[arg(long, global = true, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,
}

impl Common {
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}

/// (Not shown): Args for the `receipt-processor serve` command.
#[derive(Debug, Parser, Clone)]
pub struct ServeArgs {
    /// The host name or IP address to listen on.
    #[arg(long, env = "RECEIPT_PROCESSOR_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// The TCP port to listen on.
    #[arg(long, env = "RECEIPT_PROCESSOR_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,
}

impl ServeArgs {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

/// (Not shown): Args for the `receipt-processor points` command.
#[derive(Debug, Parser, Clone)]
pub struct PointsArgs {
    /// The path to a receipt JSON file.
    file: PathBuf,
}

impl PointsArgs {
    pub fn file(&self) -> &Path {
        &self.file
    }
}
