use crate::config::get_config;
use crate::error::Result;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

pub async fn create_pool() -> Result<PgPool> {
    let config = get_config();
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&config.database_url())
        .await?;
    Ok(pool)
}

/// Inserts the two default users on first boot, when the table is empty.
pub async fn seed_default_users(pool: &PgPool) -> Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    if count == 0 {
        sqlx::query("INSERT INTO users (name, email) VALUES ($1, $2), ($3, $4)")
            .bind("John Doe")
            .bind("john.doe@example.com")
            .bind("Jane Smith")
            .bind("jane.smith@example.com")
            .execute(pool)
            .await?;
        info!("Default users added to database");
    }

    Ok(())
}
