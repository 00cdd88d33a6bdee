use std::fmt;

use serde::{Deserialize, Serialize, de::Error as _};
use serde_json::{Map, Value};

use crate::models::{GameStatus, Pos};

pub const NEW_GAME_PATH: &str = "/newgame";
pub const MOVE_PATH: &str = "/move";

const GAME_ID_KEY: &str = "game_id";
const PRETTY_BOARD_KEY: &str = "pretty_board_state";

/// Body of a new game request. Always serializes to `{}`.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct NewGameRequest {}

/// Body of a move request. A missing game id is sent as `null`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct MoveRequest {
    pub game_id: Option<String>,
    pub x: i64,
    pub y: i64,
}

impl MoveRequest {
    pub fn new(game_id: Option<String>, pos: Pos) -> Self {
        Self {
            game_id,
            x: pos.x,
            y: pos.y,
        }
    }
}

/// A decoded server response, split on the presence of a pre-rendered board.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerResponse {
    /// `pretty_board_state` was present and non-null
    FormattedBoard(String),
    /// Anything else, kept as the server sent it
    Raw(Map<String, Value>),
}

impl ServerResponse {
    pub fn board(&self) -> Option<&str> {
        match self {
            ServerResponse::FormattedBoard(board) => Some(board),
            ServerResponse::Raw(_) => None,
        }
    }
}

impl From<Map<String, Value>> for ServerResponse {
    fn from(body: Map<String, Value>) -> Self {
        match body.get(PRETTY_BOARD_KEY) {
            None | Some(Value::Null) => ServerResponse::Raw(body),
            Some(Value::String(board)) => ServerResponse::FormattedBoard(board.clone()),
            // Non-string boards are shown as their JSON text.
            Some(other) => ServerResponse::FormattedBoard(other.to_string()),
        }
    }
}

impl fmt::Display for ServerResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerResponse::FormattedBoard(board) => f.write_str(board),
            ServerResponse::Raw(body) => {
                let json = serde_json::to_string(body).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

/// Typed view of a `/newgame` response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewGame {
    /// `None` when the server left the id out or sent `null`
    pub game_id: Option<String>,
    /// Initial board, if the server rendered one
    pub board: Option<String>,
}

impl TryFrom<Map<String, Value>> for NewGame {
    type Error = serde_json::Error;

    fn try_from(body: Map<String, Value>) -> Result<Self, Self::Error> {
        let game_id = match body.get(GAME_ID_KEY) {
            None | Some(Value::Null) => None,
            Some(Value::String(id)) => Some(id.clone()),
            Some(other) => {
                return Err(serde_json::Error::custom(format!(
                    "`{GAME_ID_KEY}` must be a string, got {other}"
                )));
            }
        };
        let board = ServerResponse::from(body).board().map(str::to_owned);

        Ok(Self { game_id, board })
    }
}

/// Informational fields a move response may carry next to the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseNotes {
    pub status: Option<GameStatus>,
    pub error: Option<String>,
}

impl From<&Map<String, Value>> for ResponseNotes {
    fn from(body: &Map<String, Value>) -> Self {
        let status = body
            .get("status")
            .and_then(|status| GameStatus::deserialize(status).ok());
        let error = body
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_owned);

        Self { status, error }
    }
}
