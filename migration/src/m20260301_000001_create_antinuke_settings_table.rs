use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AntinukeSettings::Table)
                    .if_not_exists()
                    .col(string(AntinukeSettings::GuildId).primary_key())
                    .col(boolean(AntinukeSettings::Enabled).default(false))
                    .col(integer(AntinukeSettings::Threshold).default(15))
                    .col(integer(AntinukeSettings::TimeWindow).default(5))
                    .col(string_null(AntinukeSettings::LogChannelId))
                    .col(string_null(AntinukeSettings::TrustedUser))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AntinukeSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AntinukeSettings {
    Table,
    GuildId,
    Enabled,
    Threshold,
    TimeWindow,
    LogChannelId,
    TrustedUser,
}
