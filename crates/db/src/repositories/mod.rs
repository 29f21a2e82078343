//! Database repositories.

mod file;
mod folder;

pub use file::FileRepository;
pub use folder::FolderRepository;
