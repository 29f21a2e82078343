//! Upload endpoint for multipart document batches.

use axum::{
    Json, Router,
    extract::{Multipart, State},
    http::StatusCode,
    routing::post,
};
use hospidex_common::{AppError, AppResult};
use hospidex_core::UploadPayload;

use crate::{endpoints::files::FileResponse, state::AppState};

/// Upload one or more files into a folder via multipart form.
async fn upload_files(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<Vec<FileResponse>>)> {
    let mut folder_id: Option<i32> = None;
    let mut payloads: Vec<UploadPayload> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "folder_id" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                folder_id = Some(
                    text.trim()
                        .parse()
                        .map_err(|_| AppError::BadRequest("Invalid folder_id".to_string()))?,
                );
            }
            "files" => {
                let file_name = field
                    .file_name()
                    .map_or_else(|| "unnamed".to_string(), std::string::ToString::to_string);
                let mime_type = field.content_type().map_or_else(
                    || "application/octet-stream".to_string(),
                    std::string::ToString::to_string,
                );
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?
                    .to_vec();

                payloads.push(UploadPayload {
                    name: file_name,
                    mime_type,
                    data,
                });
            }
            _ => {}
        }
    }

    let folder_id =
        folder_id.ok_or_else(|| AppError::Validation("folder_id is required".to_string()))?;

    let uploaded = state.upload_service.upload(folder_id, payloads).await?;

    Ok((
        StatusCode::CREATED,
        Json(uploaded.into_iter().map(Into::into).collect()),
    ))
}

/// Create the upload router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(upload_files))
}
