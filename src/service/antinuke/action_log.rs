use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::antinuke::{AntinukeActionRepository, AntinukeSettingsRepository},
    error::AppError,
    model::antinuke::action::{RecordActionParam, ThreatCheck},
};

pub struct AntinukeActionLogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AntinukeActionLogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an action and checks the executor's trailing window against the
    /// guild's threshold.
    pub async fn record_and_check(&self, param: RecordActionParam) -> Result<ThreatCheck, AppError> {
        self.record_and_check_at(param, Utc::now()).await
    }

    /// `record_and_check` with an explicit clock.
    ///
    /// Settings are read fresh on every call. When protection is disabled nothing is
    /// written and `{ exceeded: false, count: 0 }` is returned. Otherwise the record
    /// is written first and the count covers every record of the executor with
    /// `created_at >= now - time_window`, including this one.
    ///
    /// # Returns
    /// - `Ok(ThreatCheck)` - Window count and whether it reached the threshold
    /// - `Err(AppError::DbErr)` - Settings could not be read or the record not stored
    pub async fn record_and_check_at(
        &self,
        param: RecordActionParam,
        now: DateTime<Utc>,
    ) -> Result<ThreatCheck, AppError> {
        let settings = AntinukeSettingsRepository::new(self.db)
            .get_or_create(param.guild_id)
            .await?;

        if !settings.enabled {
            return Ok(ThreatCheck {
                exceeded: false,
                count: 0,
            });
        }

        let action_repo = AntinukeActionRepository::new(self.db);
        action_repo.record(param, now).await?;

        let count = action_repo
            .count_since(param.guild_id, param.executor_id, now - settings.window())
            .await?;

        Ok(ThreatCheck {
            exceeded: count >= settings.threshold.max(1) as u64,
            count,
        })
    }
}
