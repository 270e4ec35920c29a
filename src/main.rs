use nhl_schedule::global::Global;
use nhl_schedule::{config, http, scraper};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::Config::load()?;

    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .parse_lossy(&config.logging.level),
        )
        .init();

    tracing::info!("starting nhl schedule api");

    let global = Global::init(config)?;

    tracing::info!("all services initialized");

    tokio::select! {
        r = http::run(global.clone()) => {
            if let Err(e) = r {
                tracing::error!("http server error: {:#}", e);
            }
        }
        r = scraper::run(global.clone()) => {
            if let Err(e) = r {
                tracing::error!("refresher error: {:#}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutting down");
        }
    }

    Ok(())
}
