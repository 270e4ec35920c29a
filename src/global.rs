use std::sync::Arc;

use anyhow::Context as _;

use crate::config::Config;
use crate::fetcher::PageFetcher;
use crate::schedule::{Schedule, StatsApi};

pub struct Global {
    pub config: Config,
    pub schedule: Schedule,
    pub started_at: std::time::Instant,
}

impl Global {
    pub fn init(config: Config) -> anyhow::Result<Arc<Self>> {
        let http_client = reqwest::Client::builder()
            .user_agent(&config.scraper.user_agent)
            .build()
            .context("http client")?;

        let fetcher = PageFetcher::new(http_client, &config.scraper);

        if let Some(dir) = &config.scraper.cache_dir {
            tracing::info!(dir = %dir.display(), rescrape = config.scraper.rescrape, "page cache enabled");
        }

        let source = StatsApi::new(&config.scraper.base_url, fetcher);
        let schedule = Schedule::new(Arc::new(source), config.scraper.days_per_call);

        Ok(Arc::new(Self {
            config,
            schedule,
            started_at: std::time::Instant::now(),
        }))
    }

    /// Build around an already constructed schedule, e.g. one backed by fixtures.
    pub fn with_schedule(config: Config, schedule: Schedule) -> Arc<Self> {
        Arc::new(Self {
            config,
            schedule,
            started_at: std::time::Instant::now(),
        })
    }
}
