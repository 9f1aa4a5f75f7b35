use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AntinukeAction::Table)
                    .if_not_exists()
                    .col(pk_auto(AntinukeAction::Id))
                    .col(string(AntinukeAction::GuildId))
                    .col(string(AntinukeAction::ExecutorId))
                    .col(string(AntinukeAction::ActionType))
                    .col(string_null(AntinukeAction::TargetId))
                    .col(timestamp_with_time_zone(AntinukeAction::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Window counts filter on (guild, executor) and a lower time bound
        manager
            .create_index(
                Index::create()
                    .name("idx_antinuke_action_lookup")
                    .table(AntinukeAction::Table)
                    .col(AntinukeAction::GuildId)
                    .col(AntinukeAction::ExecutorId)
                    .col(AntinukeAction::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AntinukeAction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AntinukeAction {
    Table,
    Id,
    GuildId,
    ExecutorId,
    ActionType,
    TargetId,
    CreatedAt,
}
