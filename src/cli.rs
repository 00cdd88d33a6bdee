//! Command-line arguments for the shell.

use std::time::Duration;

use clap::Parser;
use minesweeper_client::{
    ClientConfig, DEFAULT_SERVER_URL, DEFAULT_TIMEOUT_SECONDS, SERVER_URL_VAR, TIMEOUT_VAR,
};

/// Interactive minesweeper client
#[derive(Parser, Debug)]
#[command(name = "minesweeper-shell")]
#[command(about = "Play minesweeper against a remote server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the game server
    #[arg(long, env = SERVER_URL_VAR, default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    /// Request timeout in seconds, at least 1
    #[arg(
        long,
        env = TIMEOUT_VAR,
        default_value_t = DEFAULT_TIMEOUT_SECONDS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_server_url(self.server.clone())
            .with_request_timeout(Duration::from_secs(self.timeout_secs))
    }
}
