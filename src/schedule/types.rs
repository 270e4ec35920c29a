use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::game_id::GameId;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleResponse {
	#[serde(default)]
	pub dates: Vec<ScheduleDay>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDay {
	pub date: NaiveDate,
	#[serde(default)]
	pub games: Vec<RawGame>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGame {
	pub game_pk: GameId,
	pub game_date: DateTime<Utc>,
	pub status: GameStatus,
	pub teams: Matchup,
	#[serde(default)]
	pub venue: Venue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatus {
	pub abstract_game_state: String,
	pub detailed_state: String,
}

impl GameStatus {
	pub fn is_final(&self) -> bool {
		self.detailed_state == "Final"
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matchup {
	pub home: Side,
	pub away: Side,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Side {
	#[serde(default)]
	pub score: Option<u32>,
	pub team: Team,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
	pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Venue {
	#[serde(default)]
	pub name: Option<String>,
}

/// One game flattened out of the raw schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledGame {
	pub game_id: GameId,
	pub date: NaiveDate,
	pub start_time: NaiveDateTime,
	pub venue: Option<String>,
	pub home_team: String,
	pub away_team: String,
	pub home_score: Option<u32>,
	pub away_score: Option<u32>,
	pub status: String,
}

/// Options for [`super::Schedule::scrape_schedule`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrapeOptions {
	/// Keep preseason games.
	pub preseason: bool,
	/// Keep games that are not final yet.
	pub not_over: bool,
}
