mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;

use crate::{config::Config, error::AppError, scheduler::action_retention};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting Gabe anti-nuke");

    action_retention::start_scheduler(db.clone()).await?;

    bot::start::start_bot(&config, db).await
}
