use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "antinuke_whitelist")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique_key = "guild_subject")]
    pub guild_id: String,
    /// Either `user` or `role`.
    #[sea_orm(unique_key = "guild_subject")]
    pub kind: String,
    #[sea_orm(unique_key = "guild_subject")]
    pub subject_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
