use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use super::SharedState;
use crate::error::Result;
use crate::manager::{ParsedAction, SelectionAction, parse_action};

#[derive(Debug, Deserialize)]
pub struct ActionRequest {
    pub action: String,
    pub entry: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub selection: Vec<String>,
}

/// GET /api/selection
pub async fn get_selection(State(state): State<SharedState>) -> Json<SelectionResponse> {
    let workspace = state.workspace.lock().await;
    Json(SelectionResponse {
        selection: workspace.selection.get(),
    })
}

/// POST /api/selection — apply one of the four actions and echo the set.
pub async fn apply_action(
    State(state): State<SharedState>,
    Json(request): Json<ActionRequest>,
) -> Result<Json<SelectionResponse>> {
    let mut workspace = state.workspace.lock().await;
    match parse_action(&request.action, request.entry)? {
        ParsedAction::Apply(action) => workspace.selection.apply(action),
        ParsedAction::SelectAll => {
            // The store has no knowledge of directory contents; gather the
            // current entry list on its behalf.
            let entries = state.manager.list_directory(&workspace.current_dir).await?;
            let names = entries.into_iter().map(|e| e.name).collect();
            workspace.selection.apply(SelectionAction::SelectAll(names));
        }
    }
    Ok(Json(SelectionResponse {
        selection: workspace.selection.get(),
    }))
}
