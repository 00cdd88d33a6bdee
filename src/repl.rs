//! Line-oriented command loop driving a [`SessionClient`].

use std::{io::Write, ops::ControlFlow, str::FromStr};

use minesweeper_client::{DisplaySink, SessionClient, Transport};
use thiserror::Error;
use tokio::io::{AsyncBufRead, Lines};
use tracing::debug;

const HELP: &str = "\
Commands:
  new            start a new game
  move X Y       reveal the cell at (X, Y)
  status         show the current game id
  help           show this message
  quit           leave the shell";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    NewGame,
    Move { x: i64, y: i64 },
    Status,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`, type `help` for a list")]
    Unknown(String),
    #[error("`{0}` takes no arguments")]
    UnexpectedArguments(String),
    #[error("usage: move X Y")]
    MoveUsage,
    #[error("invalid coordinate `{0}`")]
    InvalidCoordinate(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    /// Accepts `move 2 3` as well as `move(2, 3)` and `move 2,3`
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let normalized = line.replace(['(', ')', ','], " ");
        let mut words = normalized.split_whitespace();
        let name = words.next().ok_or(ParseCommandError::Empty)?.to_lowercase();
        let args: Vec<&str> = words.collect();

        let command = match name.as_str() {
            "new" | "newgame" | "new_game" => Command::NewGame,
            "status" => Command::Status,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            "move" | "m" => {
                let [x, y] = args.as_slice() else {
                    return Err(ParseCommandError::MoveUsage);
                };
                return Ok(Command::Move {
                    x: parse_coordinate(x)?,
                    y: parse_coordinate(y)?,
                });
            }
            _ => return Err(ParseCommandError::Unknown(name)),
        };

        if !args.is_empty() {
            return Err(ParseCommandError::UnexpectedArguments(name));
        }
        Ok(command)
    }
}

fn parse_coordinate(word: &str) -> Result<i64, ParseCommandError> {
    word.parse()
        .map_err(|_| ParseCommandError::InvalidCoordinate(word.to_string()))
}

/// Read commands until `quit` or end of input. Command failures are shown
/// and the loop carries on with the session as it was.
pub async fn run<T, D, R>(
    client: &mut SessionClient<T, D>,
    mut lines: Lines<R>,
    prompt: bool,
) -> std::io::Result<()>
where
    T: Transport,
    D: DisplaySink,
    R: AsyncBufRead + Unpin,
{
    loop {
        if prompt {
            print!("> ");
            std::io::stdout().flush()?;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(command) => {
                if execute(client, command).await.is_break() {
                    break;
                }
            }
            Err(err) => client.display_mut().show(&format!("error: {err}")),
        }
    }

    Ok(())
}

async fn execute<T, D>(client: &mut SessionClient<T, D>, command: Command) -> ControlFlow<()>
where
    T: Transport,
    D: DisplaySink,
{
    let result = match command {
        Command::NewGame => client.start_game().await.map(drop),
        Command::Move { x, y } => client.make_move(x, y).await.map(drop),
        Command::Status => {
            let status = match client.session().game_id() {
                Some(game_id) => format!("Current game: {game_id}"),
                None => "No active game".to_string(),
            };
            client.display_mut().show(&status);
            Ok(())
        }
        Command::Help => {
            client.display_mut().show(HELP);
            Ok(())
        }
        Command::Quit => return ControlFlow::Break(()),
    };

    if let Err(err) = result {
        debug!("Command {:?} failed: {}", command, err);
        client.display_mut().show(&format!("error: {err}"));
    }
    ControlFlow::Continue(())
}
