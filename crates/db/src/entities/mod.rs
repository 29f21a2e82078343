//! Database entities.

pub mod file;
pub mod folder;

pub use file::Entity as File;
pub use folder::Entity as Folder;
