//! Minesweeper Client Library
//!
//! This library provides a session client for the minesweeper HTTP server:
//! it starts a game, keeps the server-issued game id, submits moves and
//! renders whatever the server answers.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use minesweeper_client::{ClientConfig, SessionClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let config = ClientConfig::default().with_server_url("http://localhost:3000");
//!     let mut client = SessionClient::connect(&config)?;
//!
//!     // Prints "Started game: <id>"
//!     client.start_game().await?;
//!
//!     // Prints the board, or the raw response if the server sent none
//!     client.make_move(2, 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The transport and the output are pluggable through the [`Transport`] and
//! [`DisplaySink`] traits; [`SessionClient::new`] accepts any pair of them.

mod config;
mod display;
mod error;
mod session;
mod transport;

pub use config::{
    ClientConfig, DEFAULT_SERVER_URL, DEFAULT_TIMEOUT_SECONDS, SERVER_URL_VAR, TIMEOUT_VAR,
};
pub use display::{DisplaySink, StdoutSink};
pub use error::{BoxError, Error};
pub use session::{Session, SessionClient};
pub use transport::{HttpTransport, Transport};

// Re-export common types for convenience
pub use minesweeper_common::{models::*, protocol::*};
pub use reqwest::Method;

pub type Result<T> = std::result::Result<T, Error>;
