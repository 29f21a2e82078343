//! Shared application state.

use hospidex_core::{FileService, FolderService, UploadService};

/// Service handles shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub folder_service: FolderService,
    pub file_service: FileService,
    pub upload_service: UploadService,
}
