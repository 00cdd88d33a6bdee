use minesweeper_client::{ClientConfig, ServerResponse, SessionClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Server URL and timeout come from MINESWEEPER_SERVER_URL / MINESWEEPER_TIMEOUT_SECONDS
    let config = ClientConfig::from_env();
    println!("Connecting to {}", config.server_url);

    let mut client = SessionClient::connect(&config)?;

    // Create a new game; the client prints the id and the initial board
    let new_game = client.start_game().await?;
    if new_game.game_id.is_none() {
        println!("Server did not hand out a game id, giving up");
        return Ok(());
    }

    // Sweep the top row until the server stops sending boards
    for x in 0..8 {
        match client.make_move(x, 0).await? {
            ServerResponse::FormattedBoard(_) => {}
            ServerResponse::Raw(body) => {
                println!("Stopping after ({}, 0): {:?}", x, body.get("error"));
                break;
            }
        }
    }

    Ok(())
}
