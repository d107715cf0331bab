//! CLI - Command Line Interface
//!
//! The bridge is invoked by the backend as a one-shot subprocess:
//!
//! - `chat-bridge What time is it?`  - question on the command line
//! - `chat-bridge`                   - prompt for the question on stdin
//!
//! The registry endpoint flags exist so tests and deployments can point the
//! bridge elsewhere; their defaults are the fixed production endpoint.

use std::io;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use crate::bridge::Bridge;
use crate::client::ClientConfig;
use crate::error::BridgeError;

/// GymBot chat bridge
#[derive(Parser, Debug)]
#[command(name = "chat-bridge")]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// Question words; joined with single spaces
    #[arg(value_name = "QUERY")]
    pub(crate) query: Vec<String>,

    /// Registry host the service is resolved against
    #[arg(long, default_value = "localhost")]
    pub(crate) registry_host: String,

    /// Registry port
    #[arg(long, default_value_t = 1099)]
    pub(crate) service_port: u16,

    /// Request deadline in seconds; waits indefinitely when omitted
    #[arg(long)]
    pub(crate) deadline: Option<u64>,

    /// Verbose output
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl Cli {
    pub(crate) fn client_config(&self) -> ClientConfig {
        ClientConfig {
            registry_host: self.registry_host.clone(),
            service_port: self.service_port,
            request_timeout: self.deadline.map(Duration::from_secs),
            ..ClientConfig::default()
        }
    }
}

/// Parse CLI arguments and run the bridge once.
pub async fn run_cli() -> Result<(), BridgeError> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so the stdout contract stays clean.
    if cli.verbose {
        tracing_subscriber::fmt().with_writer(io::stderr).init();
    }

    let config = cli.client_config();
    info!("Bridging one question to {}", config.endpoint());

    let bridge = Bridge::new(config);
    bridge.run(&cli.query).await
}
