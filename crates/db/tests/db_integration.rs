//! Database integration tests.
//!
//! These tests require a running `PostgreSQL` instance.
//! Run with: `cargo test --test db_integration -- --ignored`
//!
//! Environment variables:
//!   `TEST_DB_HOST` (default: localhost)
//!   `TEST_DB_PORT` (default: 5433)
//!   `TEST_DB_USER` (default: `hospidex_test`)
//!   `TEST_DB_PASSWORD` (default: `hospidex_test`)
//!   `TEST_DB_NAME` (default: `hospidex_test`)

#![allow(clippy::unwrap_used)]

use hospidex_db::entities::{file, folder};
use hospidex_db::repositories::{FileRepository, FolderRepository};
use hospidex_db::test_utils::{TestDatabase, TestDbConfig};
use sea_orm::{DatabaseConnection, Set, SqlxPostgresConnector};
use std::sync::Arc;

/// Clone a live connection by cloning its underlying pool. `DatabaseConnection`
/// itself is not `Clone` while the `mock` feature (used by unit tests) is
/// enabled.
fn clone_conn(conn: &DatabaseConnection) -> DatabaseConnection {
    SqlxPostgresConnector::from_sqlx_postgres_pool(conn.get_postgres_connection_pool().clone())
}

fn new_folder(name: &str, parent_id: Option<i32>) -> folder::ActiveModel {
    folder::ActiveModel {
        name: Set(name.to_string()),
        parent_id: Set(parent_id),
        created_at: Set(chrono::Utc::now().into()),
        updated_at: Set(chrono::Utc::now().into()),
        ..Default::default()
    }
}

fn new_file(name: &str, folder_id: i32) -> file::ActiveModel {
    file::ActiveModel {
        name: Set(name.to_string()),
        folder_id: Set(folder_id),
        blob_url: Set(format!("/uploads/{folder_id}/{name}")),
        size: Set(1024),
        mime_type: Set("application/pdf".to_string()),
        created_at: Set(chrono::Utc::now().into()),
        updated_at: Set(chrono::Utc::now().into()),
        ..Default::default()
    }
}

#[tokio::test]
#[ignore = "requires running PostgreSQL instance"]
async fn test_database_connection() {
    let config = TestDbConfig::default();
    let result = TestDatabase::with_config(config).await;
    assert!(result.is_ok(), "Failed to connect: {:?}", result.err());
}

#[tokio::test]
#[ignore = "requires running PostgreSQL instance"]
async fn test_folder_crud_round_trip() {
    let db = TestDatabase::create_unique().await.unwrap();
    hospidex_db::migrate(db.connection()).await.unwrap();

    let repo = FolderRepository::new(Arc::new(clone_conn(&db.conn)));

    let start = chrono::Utc::now();
    let created = repo.create(new_folder("RADIOLOGY", None)).await.unwrap();
    assert_eq!(created.name, "RADIOLOGY");
    assert!(created.created_at >= chrono::DateTime::<chrono::FixedOffset>::from(start));

    // A folder fetched right after creation equals the created row
    let fetched = repo.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, created);

    repo.delete(created.id).await.unwrap();
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());

    db.drop_database().await.unwrap();
}

#[tokio::test]
#[ignore = "requires running PostgreSQL instance"]
async fn test_folder_delete_cascades_to_descendants_and_files() {
    let db = TestDatabase::create_unique().await.unwrap();
    hospidex_db::migrate(db.connection()).await.unwrap();

    let conn = Arc::new(clone_conn(&db.conn));
    let folders = FolderRepository::new(Arc::clone(&conn));
    let files = FileRepository::new(conn);

    // Fixture: root -> child -> file
    let root = folders.create(new_folder("ARCHIVE", None)).await.unwrap();
    let child = folders
        .create(new_folder("2024", Some(root.id)))
        .await
        .unwrap();
    let file = files
        .create(new_file("report.pdf", child.id))
        .await
        .unwrap();

    // A single delete of the root removes the whole subtree via the store's
    // cascade rules.
    folders.delete(root.id).await.unwrap();

    assert!(folders.find_by_id(child.id).await.unwrap().is_none());
    assert!(files.find_by_id(file.id).await.unwrap().is_none());

    db.drop_database().await.unwrap();
}

#[tokio::test]
#[ignore = "requires running PostgreSQL instance"]
async fn test_files_listed_by_name_ascending() {
    let db = TestDatabase::create_unique().await.unwrap();
    hospidex_db::migrate(db.connection()).await.unwrap();

    let conn = Arc::new(clone_conn(&db.conn));
    let folders = FolderRepository::new(Arc::clone(&conn));
    let files = FileRepository::new(conn);

    let folder = folders.create(new_folder("LAB", None)).await.unwrap();
    files.create(new_file("b.pdf", folder.id)).await.unwrap();
    files.create(new_file("a.pdf", folder.id)).await.unwrap();

    let listed = files.find_by_folder(folder.id).await.unwrap();
    let names: Vec<&str> = listed.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["a.pdf", "b.pdf"]);

    db.drop_database().await.unwrap();
}

#[test]
fn test_config_from_env() {
    let config = TestDbConfig::default();
    assert!(!config.host.is_empty());
    assert!(config.port > 0);
    assert!(!config.username.is_empty());
    assert!(!config.database.is_empty());
}
