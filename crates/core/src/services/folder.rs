//! Folder service: CRUD over the folder tree.

use hospidex_common::{AppError, AppResult};
use hospidex_db::{entities::folder, repositories::FolderRepository};
use sea_orm::Set;

/// Folder service.
#[derive(Clone)]
pub struct FolderService {
    repo: FolderRepository,
}

/// Input for creating a folder.
pub struct CreateFolderInput {
    /// Folder name. Missing or empty-after-trim values are rejected.
    pub name: Option<String>,
    /// Optional parent folder ID.
    pub parent_id: Option<i32>,
}

impl FolderService {
    /// Create a new folder service.
    #[must_use]
    pub const fn new(repo: FolderRepository) -> Self {
        Self { repo }
    }

    /// List all folders, ordered by name ascending.
    pub async fn list(&self) -> AppResult<Vec<folder::Model>> {
        self.repo.list_all().await
    }

    /// Create a new folder.
    ///
    /// `parent_id` is stored as given; nothing at this layer checks that it
    /// exists or that the result is acyclic.
    pub async fn create(&self, input: CreateFolderInput) -> AppResult<folder::Model> {
        let name = validated_name(input.name.as_deref())?;

        let now = chrono::Utc::now();
        let model = folder::ActiveModel {
            name: Set(name.to_string()),
            parent_id: Set(input.parent_id),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        };

        self.repo.create(model).await
    }

    /// Rename a folder, refreshing `updated_at`.
    pub async fn rename(&self, id: i32, name: Option<String>) -> AppResult<folder::Model> {
        let name = validated_name(name.as_deref())?.to_string();

        let folder = self.repo.get_by_id(id).await?;

        let mut model: folder::ActiveModel = folder.into();
        model.name = Set(name);
        model.updated_at = Set(chrono::Utc::now().into());

        self.repo.update(model).await
    }

    /// Delete a folder.
    ///
    /// Descendant folders and contained files are removed by the store's
    /// cascade rules; blobs of cascade-deleted files stay in blob storage.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let folder = self.repo.get_by_id(id).await?;
        self.repo.delete(folder.id).await
    }
}

/// Trim the folder name, rejecting missing or empty values.
fn validated_name(name: Option<&str>) -> AppResult<&str> {
    match name.map(str::trim) {
        Some(n) if !n.is_empty() => Ok(n),
        _ => Err(AppError::Validation("Folder name is required".to_string())),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use std::sync::Arc;

    fn folder_model(id: i32, name: &str) -> folder::Model {
        folder::Model {
            id,
            name: name.to_string(),
            parent_id: None,
            created_at: chrono::Utc::now().into(),
            updated_at: chrono::Utc::now().into(),
        }
    }

    fn service(db: sea_orm::DatabaseConnection) -> FolderService {
        FolderService::new(FolderRepository::new(Arc::new(db)))
    }

    #[test]
    fn test_validated_name() {
        assert_eq!(validated_name(Some("  RADIOLOGY  ")).unwrap(), "RADIOLOGY");
        assert!(validated_name(None).is_err());
        assert!(validated_name(Some("")).is_err());
        assert!(validated_name(Some("   ")).is_err());
    }

    #[tokio::test]
    async fn test_create_requires_name() {
        // Validation fails before any store call, so an empty mock suffices.
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let svc = service(db);

        let err = svc
            .create(CreateFolderInput {
                name: Some("   ".to_string()),
                parent_id: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.to_string(), "Folder name is required");
    }

    #[tokio::test]
    async fn test_create_returns_inserted_row() {
        let created = folder_model(1, "ADMISSIONS");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![created.clone()]])
            .into_connection();
        let svc = service(db);

        let folder = svc
            .create(CreateFolderInput {
                name: Some("ADMISSIONS".to_string()),
                parent_id: None,
            })
            .await
            .unwrap();

        assert_eq!(folder, created);
    }

    #[tokio::test]
    async fn test_rename_missing_folder() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<folder::Model>::new()])
            .into_connection();
        let svc = service(db);

        let err = svc
            .rename(42, Some("NEW NAME".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_rename_returns_row_with_trimmed_name() {
        let existing = folder_model(7, "OLD NAME");
        let renamed = folder_model(7, "NEW NAME");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing], vec![renamed.clone()]])
            .into_connection();
        let svc = service(db);

        let folder = svc
            .rename(7, Some("  NEW NAME  ".to_string()))
            .await
            .unwrap();

        assert_eq!(folder, renamed);
        assert_eq!(folder.name, "NEW NAME");
    }

    #[tokio::test]
    async fn test_rename_requires_name_before_lookup() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let svc = service(db);

        let err = svc.rename(1, None).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_folder() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<folder::Model>::new()])
            .into_connection();
        let svc = service(db);

        let err = svc.delete(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_issues_single_row_delete() {
        let existing = folder_model(7, "ARCHIVE");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing.clone()], vec![existing]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let svc = service(db);

        svc.delete(7).await.unwrap();
    }
}
