use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::model::antinuke::action::{ActionType, RecordActionParam};
use crate::service::antinuke::{AntinukeContext, AntinukeOptions};

use mock::{GatewayCall, MockGateway};

mod mock;

const GUILD_ID: u64 = 1000;
const OWNER_ID: u64 = 2000;
const BOT_ID: u64 = 3000;
const EXECUTOR_ID: u64 = 4000;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

fn context<'a>(db: &'a DatabaseConnection, gateway: &'a MockGateway) -> AntinukeContext<'a> {
    AntinukeContext::new(db, gateway, gateway, AntinukeOptions::default())
}

fn ban_by(executor_id: u64, target_id: u64) -> RecordActionParam {
    RecordActionParam {
        guild_id: GUILD_ID,
        executor_id,
        action_type: ActionType::Ban,
        target_id: Some(target_id),
    }
}

async fn action_count(db: &DatabaseConnection) -> Result<u64, DbErr> {
    entity::prelude::AntinukeAction::find().count(db).await
}
