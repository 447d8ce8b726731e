pub mod files;
pub mod selection;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::{Error, Result};
use crate::manager::{FileManager, Selection};

#[derive(Parser, Debug, Clone)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = "Serve a JSON API for browsing a directory and batch-managing selected entries"
)]
pub struct Args {
    /// Address to bind
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST), env = "FILEDECK_HOST")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, default_value_t = 5000, env = "FILEDECK_PORT")]
    pub port: u16,

    /// Directory selection names initially resolve against
    #[arg(long, default_value = ".", env = "FILEDECK_ROOT")]
    pub root: PathBuf,
}

/// Browse state behind a single lock: the directory selection names resolve
/// against, plus the selection itself.
pub struct Workspace {
    pub current_dir: PathBuf,
    pub selection: Selection,
}

pub struct AppState {
    pub manager: FileManager,
    pub workspace: Mutex<Workspace>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn shared(root: PathBuf) -> SharedState {
        Arc::new(Self {
            manager: FileManager::new(),
            workspace: Mutex::new(Workspace {
                current_dir: root,
                selection: Selection::new(),
            }),
        })
    }
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api/files", get(files::list))
        .route("/api/files/delete", delete(files::delete_selected))
        .route("/api/files/copy", post(files::copy_selected))
        .route("/api/files/move", post(files::move_selected))
        .route(
            "/api/selection",
            get(selection::get_selection).post(selection::apply_action),
        )
        .with_state(state)
}

pub async fn run(args: Args) -> Result<()> {
    let addr = SocketAddr::new(args.host, args.port);
    let state = AppState::shared(args.root);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::Bind { addr, source: e })?;
    log::info!("listening on http://{addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::Serve { source: e })
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::PathNotFound { .. } => StatusCode::NOT_FOUND,
            Error::NotADirectory { .. }
            | Error::InvalidAction { .. }
            | Error::MissingEntry { .. } => StatusCode::BAD_REQUEST,
            Error::PermissionDenied { .. } => StatusCode::FORBIDDEN,
            // Wrapped operation failures surface their root cause's class.
            Error::ListDirectoryFailed { source, .. }
            | Error::CopyFailed { source, .. }
            | Error::MoveFailed { source, .. } => source.status(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
