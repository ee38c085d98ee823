use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use cmdb_client::Client;
use tracing::debug;

mod commands;
mod config;

use commands::Command;

/// cmdbctl — read and change appliance configuration over the CMDB REST API.
#[derive(Parser, Debug)]
#[command(name = "cmdbctl", version, about)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Appliance URL, e.g. https://192.168.1.99.
    #[arg(long)]
    url: Option<String>,

    /// REST API token.
    #[arg(long)]
    token: Option<String>,

    /// Virtual domain to operate in.
    #[arg(long)]
    vdom: Option<String>,

    /// Accept self-signed TLS certificates.
    #[arg(short = 'k', long)]
    insecure: bool,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays pipeable JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cmdbctl=info,cmdb_client=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Command::Objects { ref filter } = cli.command {
        commands::print_objects(filter.as_deref());
        return Ok(());
    }

    let overrides = config::Overrides {
        url: cli.url,
        token: cli.token,
        vdom: cli.vdom,
        insecure: cli.insecure,
    };
    let client_config = config::FileConfig::load(cli.config.as_deref())?.resolve(&overrides)?;
    debug!(
        url = %client_config.url,
        vdom = ?client_config.vdom,
        "Configuration loaded"
    );

    let client = Client::new(&client_config).context("failed to set up appliance client")?;

    commands::run(&client, cli.command).await
}
