//! Create `files` table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Files::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Files::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Files::Name).string_len(256).not_null())
                    .col(ColumnDef::new(Files::FolderId).integer().not_null())
                    .col(ColumnDef::new(Files::BlobUrl).string_len(1024).not_null())
                    .col(ColumnDef::new(Files::Size).big_integer().not_null())
                    .col(ColumnDef::new(Files::MimeType).string_len(128).not_null())
                    .col(
                        ColumnDef::new(Files::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Files::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_files_folder")
                            .from(Files::Table, Files::FolderId)
                            .to(Folders::Table, Folders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: folder_id (for listing folder contents)
        manager
            .create_index(
                Index::create()
                    .name("idx_files_folder_id")
                    .table(Files::Table)
                    .col(Files::FolderId)
                    .to_owned(),
            )
            .await?;

        // Index: name (listing is ordered by name)
        manager
            .create_index(
                Index::create()
                    .name("idx_files_name")
                    .table(Files::Table)
                    .col(Files::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Files::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Files {
    Table,
    Id,
    Name,
    FolderId,
    BlobUrl,
    Size,
    MimeType,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Folders {
    Table,
    Id,
}
