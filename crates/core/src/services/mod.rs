//! Business-logic services.

pub mod blob;
pub mod file;
pub mod folder;
pub mod upload;

pub use blob::{BlobService, BlobStore, LocalBlobStore};
pub use file::FileService;
pub use folder::{CreateFolderInput, FolderService};
pub use upload::{UploadPayload, UploadService};
