use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{data::antinuke::AntinukeActionRepository, error::AppError};

/// Action log entries older than this are deleted.
const RETENTION_HOURS: i64 = 24;

/// Starts the action log retention scheduler
///
/// Runs every 5 minutes and deletes anti-nuke action records older than 24 hours.
/// Threshold checks only look at the trailing window, so pruning keeps the table
/// small without affecting detection.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 */5 * * * *", move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = prune_expired_actions(&db, Utc::now()).await {
                tracing::error!("Error pruning anti-nuke actions: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Anti-nuke action retention scheduler started");

    Ok(())
}

/// Deletes action records older than the retention period relative to `now`.
///
/// # Returns
/// - `Ok(u64)`: Number of records deleted
/// - `Err(AppError)`: Database error
pub async fn prune_expired_actions(
    db: &DatabaseConnection,
    now: DateTime<Utc>,
) -> Result<u64, AppError> {
    let deleted = AntinukeActionRepository::new(db)
        .prune_older_than(now - Duration::hours(RETENTION_HOURS))
        .await?;

    if deleted > 0 {
        tracing::debug!("Pruned {} anti-nuke actions", deleted);
    }

    Ok(deleted)
}
