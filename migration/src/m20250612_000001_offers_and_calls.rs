//! 初始表迁移
//!
//! - offers: 推广卡片及其点击计数
//! - call_entries: 共享的 call 队列

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建 offers 表
        manager
            .create_table(
                Table::create()
                    .table(Offers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Offers::Id)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Offers::Title).string().not_null())
                    .col(ColumnDef::new(Offers::Bonus).text().not_null())
                    .col(ColumnDef::new(Offers::Description).text().not_null())
                    .col(ColumnDef::new(Offers::Color).string().not_null())
                    .col(ColumnDef::new(Offers::Logo).text().not_null())
                    .col(ColumnDef::new(Offers::Link).text().not_null())
                    .col(ColumnDef::new(Offers::Tags).text().not_null())
                    .col(
                        ColumnDef::new(Offers::Clicks)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Offers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Offers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建 call_entries 表
        // seq 只用于同一时间戳下的插入顺序，对外不暴露
        manager
            .create_table(
                Table::create()
                    .table(CallEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CallEntries::Seq)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CallEntries::Id)
                            .string_len(64)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(CallEntries::Slot).text().not_null())
                    .col(ColumnDef::new(CallEntries::Username).text().not_null())
                    .col(
                        ColumnDef::new(CallEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 队列读取顺序索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_call_entries_order")
                    .table(CallEntries::Table)
                    .col(CallEntries::CreatedAt)
                    .col(CallEntries::Seq)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_call_entries_order").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CallEntries::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Offers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Offers {
    #[sea_orm(iden = "offers")]
    Table,
    Id,
    Title,
    Bonus,
    Description,
    Color,
    Logo,
    Link,
    Tags,
    Clicks,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CallEntries {
    #[sea_orm(iden = "call_entries")]
    Table,
    Seq,
    Id,
    Slot,
    Username,
    CreatedAt,
}
