use crate::data::antinuke::settings::AntinukeSettingsRepository;
use crate::model::antinuke::settings::{DEFAULT_THRESHOLD, DEFAULT_TIME_WINDOW};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod get_or_create;
mod save;
