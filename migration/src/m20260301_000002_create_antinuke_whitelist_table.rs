use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_antinuke_settings_table::AntinukeSettings;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AntinukeWhitelist::Table)
                    .if_not_exists()
                    .col(pk_auto(AntinukeWhitelist::Id))
                    .col(string(AntinukeWhitelist::GuildId))
                    .col(string(AntinukeWhitelist::Kind))
                    .col(string(AntinukeWhitelist::SubjectId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_antinuke_whitelist_guild_id")
                            .from(AntinukeWhitelist::Table, AntinukeWhitelist::GuildId)
                            .to(AntinukeSettings::Table, AntinukeSettings::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_antinuke_whitelist_unique")
                            .col(AntinukeWhitelist::GuildId)
                            .col(AntinukeWhitelist::Kind)
                            .col(AntinukeWhitelist::SubjectId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AntinukeWhitelist::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AntinukeWhitelist {
    Table,
    Id,
    GuildId,
    Kind,
    SubjectId,
}
