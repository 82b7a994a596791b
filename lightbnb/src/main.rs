use clap::Parser;
use lightbnb::{Config, db, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI args
    let args = lightbnb::config::Args::parse();

    // Load configuration
    let config = Config::load(&args)?;

    // If --validate flag is set, exit successfully after config validation
    if args.validate {
        println!("Configuration is valid.");
        return Ok(());
    }

    telemetry::init_telemetry(config.log_format)?;

    tracing::debug!("{:?}", args);

    let pool = db::pool::connect(&config).await?;
    lightbnb::migrator().run(&pool).await?;
    info!("Database schema is up to date");

    pool.close().await;
    info!("Database connections closed");
    Ok(())
}
