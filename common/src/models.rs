use std::fmt;

use serde::{Deserialize, Serialize};

/// Board coordinate as sent to the server. Bounds are owned by the server.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pos {
    pub x: i64,
    pub y: i64,
}

/// Terminal state reported by the server once a game is decided.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    #[serde(rename = "win")]
    Win,
    #[serde(rename = "loss")]
    Loss,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Win => f.write_str("win"),
            GameStatus::Loss => f.write_str("loss"),
        }
    }
}
