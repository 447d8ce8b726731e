use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{SharedState, Workspace};
use crate::error::Result;
use crate::manager::{CopyReport, DeletionReport, Entry, MoveReport};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Defaults to the current browse directory when omitted. Used as
    /// given: nothing stops a client from walking outside any intended
    /// root (documented gap, see DESIGN.md).
    pub path: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListingResponse {
    pub path: String,
    pub entries: Vec<Entry>,
}

#[derive(Debug, Deserialize, Default)]
pub struct TransferRequest {
    pub destination: Option<String>,
}

/// GET /api/files?path=P
pub async fn list(
    State(state): State<SharedState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListingResponse>> {
    let mut workspace = state.workspace.lock().await;
    let path = query
        .path
        .map(PathBuf::from)
        .unwrap_or_else(|| workspace.current_dir.clone());

    let entries = state.manager.list_directory(&path).await?;
    // A successful listing moves the browse directory; the selection is
    // deliberately left alone (stale names are tolerated until acted on).
    workspace.current_dir = path.clone();

    Ok(Json(ListingResponse {
        path: path.to_string_lossy().into_owned(),
        entries,
    }))
}

/// DELETE /api/files/delete — acts on the current selection. Always 200;
/// per-entry failures are carried in the report body.
pub async fn delete_selected(State(state): State<SharedState>) -> Json<DeletionReport> {
    let mut workspace = state.workspace.lock().await;
    let Workspace {
        current_dir,
        selection,
    } = &mut *workspace;
    let report = state.manager.delete_selection(current_dir, selection).await;
    Json(report)
}

/// POST /api/files/copy
pub async fn copy_selected(
    State(state): State<SharedState>,
    Json(request): Json<TransferRequest>,
) -> Result<Json<CopyReport>> {
    let workspace = state.workspace.lock().await;
    let report = state
        .manager
        .copy_selection(
            &workspace.current_dir,
            &workspace.selection,
            request.destination,
        )
        .await?;
    Ok(Json(report))
}

/// POST /api/files/move
pub async fn move_selected(
    State(state): State<SharedState>,
    Json(request): Json<TransferRequest>,
) -> Result<Json<MoveReport>> {
    let mut workspace = state.workspace.lock().await;
    let Workspace {
        current_dir,
        selection,
    } = &mut *workspace;
    let report = state
        .manager
        .move_selection(current_dir, selection, request.destination)
        .await?;
    Ok(Json(report))
}
