// Mediahub demo data loader

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use mediahub_common::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("seed=info,mediahub=info")),
        )
        .init();

    let database_url = Config::database_url_from_env();

    let pool = mediahub_db::connect(&database_url).await.map_err(|e| {
        error!("Failed to connect to database: {}", e);
        anyhow::anyhow!("Database connection failed: {}", e)
    })?;

    mediahub_db::migrate(&pool).await?;

    let summary = mediahub_app::seed::populate(&pool).await.map_err(|e| {
        error!("Failed to seed database: {}", e);
        e
    })?;

    for user in &summary.users {
        info!(username = %user.username, role = %user.role, "Seeded account");
    }
    info!(
        password = mediahub_app::seed::SEED_PASSWORD,
        "All seeded accounts share this password"
    );

    pool.close().await;
    Ok(())
}
