use crate::data::antinuke::action::AntinukeActionRepository;
use crate::model::antinuke::action::{ActionType, RecordActionParam};
use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod count_since;
mod get_recent;
mod prune;
mod record;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

fn ban(guild_id: u64, executor_id: u64, target_id: u64) -> RecordActionParam {
    RecordActionParam {
        guild_id,
        executor_id,
        action_type: ActionType::Ban,
        target_id: Some(target_id),
    }
}
