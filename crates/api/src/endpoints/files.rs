//! File endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get},
};
use hospidex_common::{AppError, AppResult};
use hospidex_db::entities::file::Model as FileModel;
use serde::{Deserialize, Serialize};

use crate::{response::SuccessResponse, state::AppState};

/// File response.
#[derive(Serialize)]
pub struct FileResponse {
    pub id: i32,
    pub name: String,
    pub folder_id: i32,
    pub blob_url: String,
    pub size: i64,
    pub mime_type: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<FileModel> for FileResponse {
    fn from(f: FileModel) -> Self {
        Self {
            id: f.id,
            name: f.name,
            folder_id: f.folder_id,
            blob_url: f.blob_url,
            size: f.size,
            mime_type: f.mime_type,
            created_at: f.created_at.to_rfc3339(),
            updated_at: f.updated_at.to_rfc3339(),
        }
    }
}

/// List files query.
///
/// `folder_id` is taken as a raw string and parsed in the handler so that
/// malformed values get the JSON error shape instead of the extractor's
/// plain-text rejection.
#[derive(Debug, Deserialize)]
pub struct ListFilesQuery {
    pub folder_id: Option<String>,
}

/// List files in a folder.
async fn list_files(
    State(state): State<AppState>,
    Query(query): Query<ListFilesQuery>,
) -> AppResult<Json<Vec<FileResponse>>> {
    let folder_id: i32 = query
        .folder_id
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation("folder_id is required".to_string()))?
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid folder_id".to_string()))?;

    let files = state.file_service.list_by_folder(folder_id).await?;
    Ok(Json(files.into_iter().map(Into::into).collect()))
}

/// Delete a file and its blob.
async fn delete_file(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<SuccessResponse> {
    state.file_service.delete(id).await?;
    Ok(SuccessResponse::ok())
}

/// Create the files router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_files))
        .route("/{id}", delete(delete_file))
}
