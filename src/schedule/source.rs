use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::{Result, ScheduleError};
use crate::fetcher::{PageFetcher, PageInfo};
use crate::season::season_of;
use crate::util::today;

use super::types::ScheduleResponse;

const PAGE_KIND: &str = "json_schedule";

/// Somewhere raw schedule pages come from.
#[async_trait]
pub trait ScheduleSource: Send + Sync {
	/// Raw schedule for the inclusive range `from..=to`. `force` bypasses any cache.
	async fn fetch_range(&self, from: NaiveDate, to: NaiveDate, force: bool) -> Result<ScheduleResponse>;

	/// Forget any cached page overlapping `from..=to`. Returns how many were dropped.
	async fn invalidate(&self, _from: NaiveDate, _to: NaiveDate) -> Result<usize> {
		Ok(0)
	}
}

/// A page is only worth caching once it can't change anymore: the range is
/// over and every game in it is final.
pub fn is_settled(response: &ScheduleResponse, to: NaiveDate, today: NaiveDate) -> bool {
	to < today
		&& response
			.dates
			.iter()
			.flat_map(|day| &day.games)
			.all(|game| game.status.is_final())
}

/// The date range a cached page name like `2016-10-12_2016-10-20` covers.
fn page_range(name: &str) -> Option<(NaiveDate, NaiveDate)> {
	let (from, to) = name.split_once('_')?;
	let from = NaiveDate::parse_from_str(from, "%Y-%m-%d").ok()?;
	let to = NaiveDate::parse_from_str(to, "%Y-%m-%d").ok()?;
	Some((from, to))
}

fn decode(page: &PageInfo, body: &str) -> Result<ScheduleResponse> {
	serde_json::from_str(body).map_err(|source| ScheduleError::Decode {
		name: page.name.clone(),
		source,
	})
}

/// The public stats API.
#[derive(Debug, Clone)]
pub struct StatsApi {
	base_url: String,
	fetcher: PageFetcher,
}

impl StatsApi {
	pub fn new(base_url: impl Into<String>, fetcher: PageFetcher) -> Self {
		Self {
			base_url: base_url.into().trim_end_matches('/').to_string(),
			fetcher,
		}
	}

	pub fn page_info(&self, from: NaiveDate, to: NaiveDate) -> PageInfo {
		PageInfo {
			url: format!("{}/schedule?startDate={from}&endDate={to}", self.base_url),
			name: format!("{from}_{to}"),
			kind: PAGE_KIND,
			season: season_of(from),
		}
	}
}

#[async_trait]
impl ScheduleSource for StatsApi {
	async fn fetch_range(&self, from: NaiveDate, to: NaiveDate, force: bool) -> Result<ScheduleResponse> {
		let page = self.page_info(from, to);
		let today = today();

		if !force {
			if let Some(body) = self.fetcher.cached(&page).await? {
				match decode(&page, &body) {
					Ok(response) if is_settled(&response, to, today) => return Ok(response),
					Ok(_) => tracing::debug!(name = %page.name, "cached page not settled, fetching again"),
					Err(e) => tracing::warn!(name = %page.name, error = %e, "cached page unreadable, fetching again"),
				}
			}
		}

		let body = self.fetcher.download(&page).await?;
		let response = decode(&page, &body)?;

		if is_settled(&response, to, today) {
			self.fetcher.store(&page, &body).await?;
		}

		Ok(response)
	}

	async fn invalidate(&self, from: NaiveDate, to: NaiveDate) -> Result<usize> {
		self.fetcher
			.invalidate(PAGE_KIND, |name| {
				page_range(name).is_some_and(|(start, end)| start <= to && end >= from)
			})
			.await
	}
}
