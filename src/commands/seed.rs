//! Seed command - Loads fixture data into an existing database.

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the seed command
pub async fn execute(config: Config) -> AppResult<()> {
    if config.is_in_memory() {
        tracing::warn!("DATABASE_URL points at an in-memory database; seeded rows end with this process");
    }

    // Schema first, so seeding works against a fresh database too
    let db = Database::connect(&config).await?;
    let report = db.seed().await?;

    println!(
        "users: {}, orders: {}, offers: {}",
        report.users, report.orders, report.offers
    );

    Ok(())
}
