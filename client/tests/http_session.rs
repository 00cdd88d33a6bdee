use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use minesweeper_client::{ClientConfig, Error, HttpTransport, ServerResponse, SessionClient};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio_test::{assert_err, assert_ok};

type Moves = Arc<Mutex<Vec<Value>>>;

const BOARD: &str = "_ _ _\n_ 1 _\n_ _ _";

fn init_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn config(server_url: String) -> ClientConfig {
    ClientConfig::default()
        .with_server_url(server_url)
        .with_request_timeout(Duration::from_secs(2))
}

fn session_client(server_url: String) -> SessionClient<HttpTransport, Vec<String>> {
    let transport = HttpTransport::new(&config(server_url)).unwrap();
    SessionClient::new(transport, Vec::new())
}

async fn new_game(Json(body): Json<Value>) -> Json<Value> {
    assert_eq!(body, json!({}));
    Json(json!({ "game_id": "abc123" }))
}

async fn record_move(State(moves): State<Moves>, Json(body): Json<Value>) -> Json<Value> {
    moves.lock().unwrap().push(body);
    Json(json!({ "game_id": "abc123", "status": "", "pretty_board_state": BOARD }))
}

fn game_router(moves: Moves) -> Router {
    game_routes().with_state(moves)
}

fn game_routes() -> Router<Moves> {
    Router::new()
        .route("/newgame", post(new_game))
        .route("/move", post(record_move))
}

#[tokio::test]
async fn start_then_move_renders_board() {
    init_logging();
    let moves = Moves::default();
    let mut client = session_client(spawn_server(game_router(moves.clone())).await);

    assert_ok!(client.start_game().await);
    let response = assert_ok!(client.make_move(2, 3).await);

    assert_eq!(response, ServerResponse::FormattedBoard(BOARD.to_string()));
    assert_eq!(
        client.display(),
        &vec!["Started game: abc123".to_string(), BOARD.to_string()]
    );
    assert_eq!(
        *moves.lock().unwrap(),
        vec![json!({ "game_id": "abc123", "x": 2, "y": 3 })]
    );
}

#[tokio::test]
async fn error_status_with_json_body_is_rendered_raw() {
    init_logging();
    let router = Router::new().route(
        "/move",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "must provide a valid game_id" })),
            )
        }),
    );
    let mut client = session_client(spawn_server(router).await);

    let response = assert_ok!(client.make_move(0, 0).await);

    assert!(matches!(response, ServerResponse::Raw(_)));
    let shown: Value = serde_json::from_str(&client.display()[0]).unwrap();
    assert_eq!(shown, json!({ "error": "must provide a valid game_id" }));
}

#[tokio::test]
async fn error_status_with_text_body_is_a_decode_error() {
    init_logging();
    let router = Router::new().route(
        "/newgame",
        post(|| async { (StatusCode::NOT_FOUND, "404 page not found") }),
    );
    let mut client = session_client(spawn_server(router).await);

    let err = assert_err!(client.start_game().await);

    assert!(err.is_decode());
    assert!(client.session().game_id().is_none());
    assert!(client.display().is_empty());
}

#[tokio::test]
async fn slow_server_times_out() {
    init_logging();
    let router = Router::new().route(
        "/newgame",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Json(json!({ "game_id": "late" }))
        }),
    );
    let server_url = spawn_server(router).await;
    let transport = HttpTransport::new(
        &config(server_url).with_request_timeout(Duration::from_millis(200)),
    )
    .unwrap();
    let mut client = SessionClient::new(transport, Vec::<String>::new());

    let err = assert_err!(client.start_game().await);

    assert!(err.is_transport());
    assert!(err.is_timeout());
    assert!(client.session().game_id().is_none());
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    init_logging();
    // Grab a free port, then stop listening on it
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let mut client = session_client(dead_url);

    let err = assert_err!(client.start_game().await);

    assert!(err.is_transport());
    assert!(!err.is_timeout());
    assert!(client.session().game_id().is_none());
    assert!(client.display().is_empty());
}

#[test]
fn rejects_malformed_server_url() {
    let err = HttpTransport::new(&config("not a url".to_string()))
        .err()
        .expect("url should be rejected");
    assert!(matches!(err, Error::InvalidUrl(_)));
}

#[test]
fn rejects_server_url_without_scheme() {
    let err = HttpTransport::new(&config("localhost:3000".to_string()))
        .err()
        .expect("url without a scheme should be rejected");
    assert!(matches!(err, Error::UnsupportedUrl(_)));
    assert!(err.to_string().contains("localhost:3000"));
}

#[tokio::test]
async fn server_url_path_prefix_is_kept() {
    init_logging();
    let moves = Moves::default();
    let router = Router::new().nest("/api", game_routes()).with_state(moves.clone());
    let server_url = format!("{}/api", spawn_server(router).await);
    let mut client = session_client(server_url);

    assert_ok!(client.start_game().await);
    assert_ok!(client.make_move(1, 1).await);

    assert_eq!(client.session().game_id(), Some("abc123"));
    assert_eq!(moves.lock().unwrap().len(), 1);
}
