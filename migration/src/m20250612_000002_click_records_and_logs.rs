//! 点击记录与操作日志表迁移
//!
//! 两张表都是只追加的历史记录：
//! - click_records: 每次点击一条，不随 offer 删除
//! - action_logs: call 创建审计日志

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClickRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClickRecords::Id)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClickRecords::OfferId)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClickRecords::SourceAddress)
                            .string_len(45)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ClickRecords::ClickedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_click_records_offer_id")
                    .table(ClickRecords::Table)
                    .col(ClickRecords::OfferId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ActionLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ActionLogs::Seq)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ActionLogs::Id)
                            .string_len(64)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ActionLogs::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ActionLogs::Ip).string_len(45).null())
                    .col(ColumnDef::new(ActionLogs::Slot).text().not_null())
                    .col(ColumnDef::new(ActionLogs::Username).text().not_null())
                    .col(ColumnDef::new(ActionLogs::Action).string_len(32).not_null())
                    .to_owned(),
            )
            .await?;

        // 按时间倒序读取最近日志，seq 区分同一时间戳
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_action_logs_timestamp")
                    .table(ActionLogs::Table)
                    .col(ActionLogs::Timestamp)
                    .col(ActionLogs::Seq)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_action_logs_timestamp").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ActionLogs::Table).to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_click_records_offer_id").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ClickRecords::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ClickRecords {
    #[sea_orm(iden = "click_records")]
    Table,
    Id,
    OfferId,
    SourceAddress,
    ClickedAt,
}

#[derive(DeriveIden)]
enum ActionLogs {
    #[sea_orm(iden = "action_logs")]
    Table,
    Seq,
    Id,
    Timestamp,
    Ip,
    Slot,
    Username,
    Action,
}
