//! Folder repository.

use std::sync::Arc;

use crate::entities::{Folder, folder};
use hospidex_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder,
};

/// Folder repository for database operations.
#[derive(Clone)]
pub struct FolderRepository {
    db: Arc<DatabaseConnection>,
}

impl FolderRepository {
    /// Create a new folder repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a folder by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<folder::Model>> {
        Folder::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a folder by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: i32) -> AppResult<folder::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Folder not found".to_string()))
    }

    /// List all folders, ordered by name ascending.
    pub async fn list_all(&self) -> AppResult<Vec<folder::Model>> {
        Folder::find()
            .order_by_asc(folder::Column::Name)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new folder.
    pub async fn create(&self, model: folder::ActiveModel) -> AppResult<folder::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update a folder.
    pub async fn update(&self, model: folder::ActiveModel) -> AppResult<folder::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a folder. Descendant folders and contained files are removed by
    /// the store's cascade rules.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let folder = self.find_by_id(id).await?;
        if let Some(f) = folder {
            f.delete(self.db.as_ref())
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
        }
        Ok(())
    }
}
