use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::antinuke::AntinukeActionRepository,
    error::AppError,
    model::antinuke::summary::{ActivitySummary, ExecutorActivity},
};

/// Actions reviewed by the log view.
const REVIEW_PERIOD_HOURS: i64 = 24;
/// Newest actions considered for grouping.
const MAX_SHOWN_ACTIONS: usize = 25;
const MAX_EXECUTORS: usize = 10;
const MAX_LINES_PER_EXECUTOR: usize = 5;

pub struct AntinukeActivityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AntinukeActivityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn summarize(&self, guild_id: u64) -> Result<ActivitySummary, AppError> {
        self.summarize_at(guild_id, Utc::now()).await
    }

    /// Groups the last 24 hours of a guild's actions by executor.
    ///
    /// Executors appear in order of their newest action.
    pub async fn summarize_at(
        &self,
        guild_id: u64,
        now: DateTime<Utc>,
    ) -> Result<ActivitySummary, AppError> {
        let records = AntinukeActionRepository::new(self.db)
            .get_recent(guild_id, None, now - Duration::hours(REVIEW_PERIOD_HOURS))
            .await?;

        let total = records.len();
        let mut executors: Vec<ExecutorActivity> = Vec::new();

        for record in records.into_iter().take(MAX_SHOWN_ACTIONS) {
            match executors
                .iter_mut()
                .find(|activity| activity.executor_id == record.executor_id)
            {
                Some(activity) => {
                    activity.action_count += 1;
                    if activity.actions.len() < MAX_LINES_PER_EXECUTOR {
                        activity.actions.push(record);
                    }
                }
                None => executors.push(ExecutorActivity {
                    executor_id: record.executor_id,
                    action_count: 1,
                    actions: vec![record],
                }),
            }
        }

        executors.truncate(MAX_EXECUTORS);

        Ok(ActivitySummary {
            total,
            shown: total.min(MAX_SHOWN_ACTIONS),
            executors,
        })
    }

    /// Deletes a guild's action log, or only entries older than `older_than`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of records deleted
    pub async fn clear(
        &self,
        guild_id: u64,
        older_than: Option<Duration>,
    ) -> Result<u64, AppError> {
        let cutoff = older_than.map(|age| Utc::now() - age);
        let deleted = AntinukeActionRepository::new(self.db)
            .clear_guild(guild_id, cutoff)
            .await?;

        tracing::info!("Cleared {} anti-nuke actions in guild {}", deleted, guild_id);

        Ok(deleted)
    }
}
