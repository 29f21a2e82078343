//! File service: listing and deletion of file metadata.

use crate::services::blob::BlobService;
use hospidex_common::AppResult;
use hospidex_db::{entities::file, repositories::FileRepository};

/// File service.
#[derive(Clone)]
pub struct FileService {
    repo: FileRepository,
    blob: Option<BlobService>,
}

impl FileService {
    /// Create a new file service. Pass `None` when blob storage is
    /// unconfigured; deletion then skips the blob step.
    #[must_use]
    pub fn new(repo: FileRepository, blob: Option<BlobService>) -> Self {
        Self { repo, blob }
    }

    /// List files in a folder, ordered by name ascending.
    pub async fn list_by_folder(&self, folder_id: i32) -> AppResult<Vec<file::Model>> {
        self.repo.find_by_folder(folder_id).await
    }

    /// Delete a file.
    ///
    /// The blob is removed first, best effort: a blob-store failure is logged
    /// and the metadata row is deleted regardless. No compensating action
    /// exists for either phase.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let file = self.repo.get_by_id(id).await?;

        if let Some(ref blob) = self.blob
            && let Err(e) = blob.delete(&file.blob_url).await
        {
            tracing::warn!(
                file_id = file.id,
                blob_url = %file.blob_url,
                error = %e,
                "Failed to delete blob, proceeding with database deletion"
            );
        }

        self.repo.delete(file.id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::services::blob::testing::{FailingBlobStore, RecordingBlobStore};
    use hospidex_common::AppError;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use std::sync::Arc;

    fn file_model(id: i32, name: &str) -> file::Model {
        file::Model {
            id,
            name: name.to_string(),
            folder_id: 1,
            blob_url: format!("https://blobs.test/hospital/1/{name}"),
            size: 2048,
            mime_type: "application/pdf".to_string(),
            created_at: chrono::Utc::now().into(),
            updated_at: chrono::Utc::now().into(),
        }
    }

    fn delete_mock(existing: &file::Model) -> sea_orm::DatabaseConnection {
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing.clone()], vec![existing.clone()]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection()
    }

    #[tokio::test]
    async fn test_delete_missing_file() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<file::Model>::new()])
            .into_connection();
        let svc = FileService::new(FileRepository::new(Arc::new(db)), None);

        let err = svc.delete(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), "File not found");
    }

    #[tokio::test]
    async fn test_delete_without_blob_store() {
        let existing = file_model(3, "scan.pdf");
        let svc = FileService::new(FileRepository::new(Arc::new(delete_mock(&existing))), None);

        svc.delete(3).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_removes_blob_first() {
        let existing = file_model(3, "scan.pdf");
        let blob = Arc::new(RecordingBlobStore::default());
        let svc = FileService::new(
            FileRepository::new(Arc::new(delete_mock(&existing))),
            Some(blob.clone()),
        );

        svc.delete(3).await.unwrap();

        let deletes = blob.deletes.lock().unwrap();
        assert_eq!(deletes.as_slice(), [existing.blob_url.as_str()]);
    }

    #[tokio::test]
    async fn test_blob_failure_does_not_abort_row_delete() {
        let existing = file_model(3, "scan.pdf");
        let svc = FileService::new(
            FileRepository::new(Arc::new(delete_mock(&existing))),
            Some(Arc::new(FailingBlobStore)),
        );

        // Orphaned blob is accepted; the metadata row still goes away.
        svc.delete(3).await.unwrap();
    }
}
