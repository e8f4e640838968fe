//! Create `stores` table.
//!
//! One row per physical store; the id is assigned by the database.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stores::Table)
                    .if_not_exists()
                    .col(pk_auto(Stores::Id))
                    .col(string(Stores::Name))
                    .col(string_null(Stores::Address))
                    .col(string_null(Stores::City))
                    .col(string_null(Stores::Phone))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Stores::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Stores { Table, Id, Name, Address, City, Phone }
