mod cli;
mod repl;

use std::io::IsTerminal;

use clap::Parser;
use cli::Cli;
use minesweeper_client::SessionClient;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    // Board output goes to stdout, keep logs on stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging();

    let cli = Cli::parse();
    let config = cli.client_config();
    let mut client = SessionClient::connect(&config)?;
    let server = client.transport().base_url().clone();
    info!("Using server {}", server);

    let interactive = std::io::stdin().is_terminal();
    if interactive {
        println!("minesweeper shell, server {}", server);
        println!("Type `help` for commands.");
    }

    let lines = BufReader::new(tokio::io::stdin()).lines();
    repl::run(&mut client, lines, interactive).await?;

    Ok(())
}
