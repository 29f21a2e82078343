//! Upload service: blob write plus metadata insert, per payload.

use crate::services::blob::BlobService;
use hospidex_common::{AppError, AppResult};
use hospidex_db::{entities::file, repositories::FileRepository};
use sea_orm::Set;

/// Blob-store namespace for uploaded documents.
const BLOB_NAMESPACE: &str = "hospital";

/// Upload service.
#[derive(Clone)]
pub struct UploadService {
    repo: FileRepository,
    blob: Option<BlobService>,
}

/// One uploaded binary payload.
pub struct UploadPayload {
    /// Original filename as supplied by the client.
    pub name: String,
    /// Client-declared content type.
    pub mime_type: String,
    /// Raw payload bytes.
    pub data: Vec<u8>,
}

impl UploadService {
    /// Create a new upload service. Pass `None` when blob storage is
    /// unconfigured; uploads then record placeholder paths only.
    #[must_use]
    pub fn new(repo: FileRepository, blob: Option<BlobService>) -> Self {
        Self { repo, blob }
    }

    /// Upload payloads into a folder, sequentially and in input order.
    ///
    /// Each payload is written to blob storage (or given a placeholder path
    /// when no blob store is configured), then recorded in the database. The
    /// first failure aborts the batch; rows and blobs persisted by earlier
    /// iterations are left in place.
    pub async fn upload(
        &self,
        folder_id: i32,
        payloads: Vec<UploadPayload>,
    ) -> AppResult<Vec<file::Model>> {
        if payloads.is_empty() {
            return Err(AppError::Validation("No files provided".to_string()));
        }

        let mut uploaded = Vec::with_capacity(payloads.len());

        for payload in payloads {
            let blob_url = if let Some(ref blob) = self.blob {
                blob.put(&blob_path(folder_id, &payload.name), &payload.data)
                    .await?
            } else {
                // Metadata only: no bytes are persisted in this fallback.
                placeholder_url(folder_id, &payload.name)
            };

            let size = payload.data.len() as i64;
            let now = chrono::Utc::now();
            let model = file::ActiveModel {
                name: Set(payload.name),
                folder_id: Set(folder_id),
                blob_url: Set(blob_url),
                size: Set(size),
                mime_type: Set(payload.mime_type),
                created_at: Set(now.into()),
                updated_at: Set(now.into()),
                ..Default::default()
            };

            uploaded.push(self.repo.create(model).await?);
        }

        Ok(uploaded)
    }
}

/// Blob-store path for an uploaded payload.
fn blob_path(folder_id: i32, name: &str) -> String {
    format!("{BLOB_NAMESPACE}/{folder_id}/{name}")
}

/// Placeholder path recorded when no blob store is configured.
fn placeholder_url(folder_id: i32, name: &str) -> String {
    format!("/uploads/{folder_id}/{name}")
}
