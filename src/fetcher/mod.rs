use std::time::Duration;

use crate::config::ScraperConfig;
use crate::error::{Result, ScheduleError};

pub mod cache;

pub use cache::{PageCache, PageInfo};

/// Fetches raw pages over the network and keeps the ones worth keeping in
/// the page cache. What is worth keeping is up to the caller.
#[derive(Debug, Clone)]
pub struct PageFetcher {
	client: reqwest::Client,
	cache: PageCache,
	delay: Duration,
	retries: u32,
}

impl PageFetcher {
	pub fn new(client: reqwest::Client, config: &ScraperConfig) -> Self {
		Self {
			client,
			cache: PageCache::new(config.cache_dir.clone(), config.rescrape),
			delay: Duration::from_millis(config.request_delay_ms),
			retries: config.retries,
		}
	}

	pub async fn cached(&self, page: &PageInfo) -> Result<Option<String>> {
		self.cache.get(page).await
	}

	pub async fn store(&self, page: &PageInfo, body: &str) -> Result<()> {
		self.cache.put(page, body).await
	}

	/// Drop cached pages of `kind` whose name `stale` accepts.
	pub async fn invalidate(&self, kind: &str, stale: impl Fn(&str) -> bool) -> Result<usize> {
		self.cache.remove_where(kind, stale).await
	}

	/// Fetch the page from upstream, never from the cache. Nothing is written
	/// back; call [`Self::store`] once the body is known to be good.
	#[tracing::instrument(skip(self, page), fields(name = %page.name, kind = page.kind))]
	pub async fn download(&self, page: &PageInfo) -> Result<String> {
		self.fetch(&page.url).await
	}

	async fn fetch(&self, url: &str) -> Result<String> {
		let mut attempt = 0;

		loop {
			attempt += 1;

			if !self.delay.is_zero() {
				tokio::time::sleep(self.delay).await;
			}

			match self.try_fetch(url).await {
				Ok(body) => {
					tracing::debug!(url, attempt, bytes = body.len(), "fetched page");
					return Ok(body);
				}
				Err(e) if attempt <= self.retries => {
					tracing::warn!(url, attempt, error = %e, "fetch failed, retrying");
				}
				Err(e) => return Err(e),
			}
		}
	}

	async fn try_fetch(&self, url: &str) -> Result<String> {
		let http_err = |source| ScheduleError::Http {
			url: url.to_string(),
			source,
		};

		let response = self.client.get(url).send().await.map_err(http_err)?;

		let status = response.status();
		if !status.is_success() {
			return Err(ScheduleError::Upstream {
				url: url.to_string(),
				status,
			});
		}

		response.text().await.map_err(http_err)
	}
}
