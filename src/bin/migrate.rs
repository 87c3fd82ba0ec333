use catalog_schema::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    telemetry::init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config).await?;
    run_migrations(&orm).await?;
    tracing::info!("migrations applied");
    Ok(())
}
