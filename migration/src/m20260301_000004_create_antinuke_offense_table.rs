use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AntinukeOffense::Table)
                    .if_not_exists()
                    .col(pk_auto(AntinukeOffense::Id))
                    .col(string(AntinukeOffense::GuildId))
                    .col(string(AntinukeOffense::UserId))
                    .col(integer(AntinukeOffense::OffenseCount).default(0))
                    .col(timestamp_with_time_zone(AntinukeOffense::LastOffenseAt))
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_antinuke_offense_unique")
                            .col(AntinukeOffense::GuildId)
                            .col(AntinukeOffense::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AntinukeOffense::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AntinukeOffense {
    Table,
    Id,
    GuildId,
    UserId,
    OffenseCount,
    LastOffenseAt,
}
