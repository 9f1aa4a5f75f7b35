use crate::data::antinuke::whitelist::AntinukeWhitelistRepository;
use crate::model::antinuke::whitelist::WhitelistSubject;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod add;
mod remove;
