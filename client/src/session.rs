use minesweeper_common::{
    models::Pos,
    protocol::{
        MOVE_PATH, MoveRequest, NEW_GAME_PATH, NewGame, NewGameRequest, ResponseNotes,
        ServerResponse,
    },
};
use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::{
    ClientConfig, DisplaySink, Error, HttpTransport, Result, StdoutSink, Transport,
};

/// The game currently being played, as identified by the server.
///
/// Starts empty and is only replaced by a successful new game response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    game_id: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the game ID, if a game has been started
    pub fn game_id(&self) -> Option<&str> {
        self.game_id.as_deref()
    }

    /// Check if a game id is held
    pub fn is_active(&self) -> bool {
        self.game_id.is_some()
    }

    fn replace(&mut self, game_id: Option<String>) -> Option<String> {
        std::mem::replace(&mut self.game_id, game_id)
    }
}

/// Session client: starts games and submits moves for a single session
pub struct SessionClient<T, D> {
    transport: T,
    display: D,
    session: Session,
}

impl SessionClient<HttpTransport, StdoutSink> {
    /// Create a client talking HTTP to the configured server and printing to stdout
    pub fn connect(config: &ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::new(transport, StdoutSink))
    }
}

impl<T: Transport, D: DisplaySink> SessionClient<T, D> {
    pub fn new(transport: T, display: D) -> Self {
        Self {
            transport,
            display,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Start a new game and make it the current session.
    ///
    /// A response without `game_id` leaves the session without an id instead
    /// of failing; moves then go out with a `null` id until the next new game.
    /// On error the previous session is kept.
    pub async fn start_game(&mut self) -> Result<NewGame> {
        info!("Starting new game");

        let body = self.post(NEW_GAME_PATH, &NewGameRequest {}).await?;
        let new_game = NewGame::try_from(body).map_err(Error::Decode)?;

        let previous = self.session.replace(new_game.game_id.clone());
        if let Some(previous) = previous {
            debug!("Replacing game {}", previous);
        }

        match &new_game.game_id {
            Some(game_id) => {
                info!("Started game with ID: {}", game_id);
                self.display.show(&format!("Started game: {game_id}"));
            }
            None => {
                warn!("New game response carried no game_id");
                self.display
                    .show("Started game, but the server sent no game id; moves will be sent without one");
            }
        }

        if let Some(board) = &new_game.board {
            self.display.show(board);
        }

        Ok(new_game)
    }

    /// Submit a move for the current session and display the result.
    ///
    /// Coordinates are forwarded unchecked. The board is shown when the server
    /// rendered one, otherwise the whole response.
    pub async fn make_move(&mut self, x: i64, y: i64) -> Result<ServerResponse> {
        debug!("Making move at ({}, {})", x, y);

        if !self.session.is_active() {
            warn!("No active game, sending move without a game_id");
        }
        let request = MoveRequest::new(self.session.game_id.clone(), Pos { x, y });

        let body = self.post(MOVE_PATH, &request).await?;

        let notes = ResponseNotes::from(&body);
        if let Some(error) = &notes.error {
            warn!("Server rejected move: {}", error);
        }
        if let Some(status) = notes.status {
            info!("Game finished: {}", status);
        }

        let response = ServerResponse::from(body);
        self.display.show(&response.to_string());

        Ok(response)
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Map<String, Value>> {
        let body = serde_json::to_value(body).map_err(Error::Encode)?;
        let text = self.transport.send(Method::POST, path, &body).await?;

        serde_json::from_str(&text).map_err(Error::Decode)
    }
}
