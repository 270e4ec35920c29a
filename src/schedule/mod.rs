use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{Duration, NaiveDate};

use crate::error::{Result, ScheduleError};
use crate::game_id::GameId;
use crate::season::{season_end, season_of, season_start};
use crate::teams::team_code;

pub mod source;
pub mod types;


pub use source::{ScheduleSource, StatsApi};
pub use types::{ScheduleDay, ScheduleResponse, ScheduledGame, ScrapeOptions};

pub const DEFAULT_DAYS_PER_CALL: u32 = 100;

/// The league's first season.
pub const FIRST_SEASON: i32 = 1917;

/// Split the inclusive range `from..=to` into consecutive windows of at most
/// `days_per_call` days. The last window is clamped to `to`.
pub fn chunk_date_range(from: NaiveDate, to: NaiveDate, days_per_call: u32) -> Vec<(NaiveDate, NaiveDate)> {
	if to < from {
		return Vec::new();
	}

	let step = i64::from(days_per_call.max(1));
	let num_days = (to - from).num_days() + 1;

	(0..num_days)
		.step_by(step as usize)
		.map(|offset| {
			let end = (offset + step - 1).min(num_days - 1);
			(from + Duration::days(offset), from + Duration::days(end))
		})
		.collect()
}

/// Flatten raw schedule days into games, dropping the ones `options` excludes.
pub fn filter_games(days: &[ScheduleDay], options: ScrapeOptions) -> Vec<ScheduledGame> {
	days.iter()
		.flat_map(|day| day.games.iter().map(move |game| (day, game)))
		.filter(|(_, game)| game.status.is_final() || options.not_over)
		.filter(|(_, game)| game.game_pk.is_wanted(options.preseason))
		.map(|(day, game)| ScheduledGame {
			game_id: game.game_pk,
			date: day.date,
			start_time: game.game_date.naive_utc(),
			venue: game.venue.name.clone(),
			home_team: team_code(&game.teams.home.team.name),
			away_team: team_code(&game.teams.away.team.name),
			home_score: game.teams.home.score,
			away_score: game.teams.away.score,
			status: game.status.abstract_game_state.clone(),
		})
		.collect()
}

/// The range of dates to scrape so every game in `games` is covered: from the
/// start of the oldest season to the end of the newest one, or to `today` when
/// the newest season is still being played. Ids from before the league
/// existed or from beyond next season are rejected.
pub fn date_window_for_games(games: &BTreeSet<GameId>, today: NaiveDate) -> Result<(NaiveDate, NaiveDate)> {
	let (Some(oldest), Some(newest)) = (games.first(), games.last()) else {
		return Err(ScheduleError::EmptyGameList);
	};

	let current_season = season_of(today);

	for id in [oldest, newest] {
		if !(FIRST_SEASON..=current_season + 1).contains(&id.season_year()) {
			return Err(ScheduleError::InvalidGameId(id.to_string()));
		}
	}

	let from = season_start(oldest.season_year());
	let newest_season = newest.season_year();

	let to = if newest_season == current_season {
		today
	} else {
		season_end(newest_season)
	};

	Ok((from, to))
}

/// Schedule scraping on top of a [`ScheduleSource`].
#[derive(Clone)]
pub struct Schedule {
	source: Arc<dyn ScheduleSource>,
	days_per_call: u32,
}

impl Schedule {
	pub fn new(source: Arc<dyn ScheduleSource>, days_per_call: u32) -> Self {
		Self { source, days_per_call }
	}

	/// Raw schedule json for a date range, in a single call.
	pub async fn get_schedule(&self, from: NaiveDate, to: NaiveDate) -> Result<ScheduleResponse> {
		self.source.fetch_range(from, to, false).await
	}

	/// The endpoint doesn't cope with big ranges, so ask for it window by window.
	/// Returns the `dates` of each window, in order.
	#[tracing::instrument(skip(self))]
	pub async fn chunk_schedule_calls(&self, from: NaiveDate, to: NaiveDate, force: bool) -> Result<Vec<Vec<ScheduleDay>>> {
		let windows = chunk_date_range(from, to, self.days_per_call);
		let mut chunks = Vec::with_capacity(windows.len());

		for (chunk_from, chunk_to) in windows {
			let response = self.source.fetch_range(chunk_from, chunk_to, force).await?;
			chunks.push(response.dates);
		}

		tracing::debug!(chunks = chunks.len(), "fetched schedule chunks");
		Ok(chunks)
	}

	/// Every game between `from` and `to` that `options` lets through.
	#[tracing::instrument(skip(self))]
	pub async fn scrape_schedule(&self, from: NaiveDate, to: NaiveDate, options: ScrapeOptions) -> Result<Vec<ScheduledGame>> {
		let chunks = self.chunk_schedule_calls(from, to, false).await?;

		let games: Vec<ScheduledGame> = chunks
			.iter()
			.flat_map(|days| filter_games(days, options))
			.collect();

		tracing::info!(count = games.len(), "scraped schedule");
		Ok(games)
	}

	/// Drop every cached page overlapping the range, then read it again from
	/// upstream. Returns the number of games seen.
	#[tracing::instrument(skip(self))]
	pub async fn refresh(&self, from: NaiveDate, to: NaiveDate) -> Result<usize> {
		let dropped = self.source.invalidate(from, to).await?;
		tracing::debug!(dropped, "invalidated cached pages");

		let chunks = self.chunk_schedule_calls(from, to, true).await?;

		Ok(chunks.iter().flatten().map(|day| day.games.len()).sum())
	}

	/// Schedule entries for the given game ids. Ids that never show up in the
	/// schedule are silently missing from the result.
	#[tracing::instrument(skip(self, games), fields(count = games.len()))]
	pub async fn get_dates(&self, games: &[GameId], today: NaiveDate) -> Result<Vec<ScheduledGame>> {
		let wanted: BTreeSet<GameId> = games.iter().copied().collect();
		let (from, to) = date_window_for_games(&wanted, today)?;

		// Preseason ids and live games may be asked for too.
		let options = ScrapeOptions {
			preseason: true,
			not_over: true,
		};

		let schedule = self.scrape_schedule(from, to, options).await?;

		Ok(schedule
			.into_iter()
			.filter(|game| wanted.contains(&game.game_id))
			.collect())
	}
}
