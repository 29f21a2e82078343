//! File repository.

use std::sync::Arc;

use crate::entities::{File, file};
use hospidex_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder,
};

/// File repository for database operations.
#[derive(Clone)]
pub struct FileRepository {
    db: Arc<DatabaseConnection>,
}

impl FileRepository {
    /// Create a new file repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a file by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<file::Model>> {
        File::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a file by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: i32) -> AppResult<file::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("File not found".to_string()))
    }

    /// List files in a folder, ordered by name ascending.
    pub async fn find_by_folder(&self, folder_id: i32) -> AppResult<Vec<file::Model>> {
        File::find()
            .filter(file::Column::FolderId.eq(folder_id))
            .order_by_asc(file::Column::Name)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new file.
    pub async fn create(&self, model: file::ActiveModel) -> AppResult<file::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a file.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let file = self.find_by_id(id).await?;
        if let Some(f) = file {
            f.delete(self.db.as_ref())
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
        }
        Ok(())
    }
}
