//! Migration: Create the order table.
//!
//! `customer_id` and `executor_id` reference `user.id` without a foreign key
//! constraint, so deleting a user leaves the order in place.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Order::Id).integer().not_null().primary_key())
                    .col(ColumnDef::new(Order::Name).string_len(30).not_null())
                    .col(ColumnDef::new(Order::Description).text().not_null())
                    .col(ColumnDef::new(Order::StartDate).date().not_null())
                    .col(ColumnDef::new(Order::EndDate).date().not_null())
                    .col(ColumnDef::new(Order::Address).string_len(50).not_null())
                    .col(ColumnDef::new(Order::Price).integer().not_null())
                    .col(ColumnDef::new(Order::CustomerId).integer().not_null())
                    .col(ColumnDef::new(Order::ExecutorId).integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_order_customer_id")
                    .table(Order::Table)
                    .col(Order::CustomerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_order_customer_id")
                    .table(Order::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Order {
    Table,
    Id,
    Name,
    Description,
    StartDate,
    EndDate,
    Address,
    Price,
    CustomerId,
    ExecutorId,
}
