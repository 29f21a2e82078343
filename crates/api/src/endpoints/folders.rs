//! Folder endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
};
use hospidex_common::AppResult;
use hospidex_core::CreateFolderInput;
use hospidex_db::entities::folder::Model as FolderModel;
use serde::{Deserialize, Serialize};

use crate::{response::SuccessResponse, state::AppState};

/// Folder response.
#[derive(Serialize)]
pub struct FolderResponse {
    pub id: i32,
    pub name: String,
    pub parent_id: Option<i32>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<FolderModel> for FolderResponse {
    fn from(f: FolderModel) -> Self {
        Self {
            id: f.id,
            name: f.name,
            parent_id: f.parent_id,
            created_at: f.created_at.to_rfc3339(),
            updated_at: f.updated_at.to_rfc3339(),
        }
    }
}

/// Create folder request.
#[derive(Debug, Default, Deserialize)]
pub struct CreateFolderRequest {
    pub name: Option<String>,
    pub parent_id: Option<i32>,
}

/// Rename folder request.
#[derive(Debug, Default, Deserialize)]
pub struct RenameFolderRequest {
    pub name: Option<String>,
}

/// List all folders.
async fn list_folders(State(state): State<AppState>) -> AppResult<Json<Vec<FolderResponse>>> {
    let folders = state.folder_service.list().await?;
    Ok(Json(folders.into_iter().map(Into::into).collect()))
}

/// Create a folder.
///
/// The body is optional so that an empty request reaches name validation
/// instead of the extractor's rejection.
async fn create_folder(
    State(state): State<AppState>,
    body: Option<Json<CreateFolderRequest>>,
) -> AppResult<(StatusCode, Json<FolderResponse>)> {
    let req = body.map(|Json(r)| r).unwrap_or_default();

    let folder = state
        .folder_service
        .create(CreateFolderInput {
            name: req.name,
            parent_id: req.parent_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(folder.into())))
}

/// Rename a folder.
async fn rename_folder(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Option<Json<RenameFolderRequest>>,
) -> AppResult<Json<FolderResponse>> {
    let req = body.map(|Json(r)| r).unwrap_or_default();

    let folder = state.folder_service.rename(id, req.name).await?;
    Ok(Json(folder.into()))
}

/// Delete a folder and its contents.
async fn delete_folder(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<SuccessResponse> {
    state.folder_service.delete(id).await?;
    Ok(SuccessResponse::ok())
}

/// Create the folders router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_folders).post(create_folder))
        .route("/{id}", patch(rename_folder).delete(delete_folder))
}
