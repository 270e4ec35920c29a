use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Sequence numbers at or above this are regular season or later.
pub const REGULAR_SEASON_FLOOR: u32 = 20_000;
/// Sequence numbers at or above this are all-star or exhibition games.
pub const ALL_STAR_FLOOR: u32 = 40_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameType {
	Preseason,
	Regular,
	Playoffs,
	AllStar,
	Other(u8),
}

/// An NHL game id, `SSSSTTNNNN`: season start year, game type, game number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl GameId {
	pub fn season_year(&self) -> i32 {
		(self.0 / 1_000_000) as i32
	}

	pub fn game_type(&self) -> GameType {
		match (self.0 / 10_000) % 100 {
			1 => GameType::Preseason,
			2 => GameType::Regular,
			3 => GameType::Playoffs,
			4 => GameType::AllStar,
			n => GameType::Other(n as u8),
		}
	}

	/// Game type and number together, e.g. `20001` for `2016020001`.
	pub fn sequence(&self) -> u32 {
		(self.0 % 100_000) as u32
	}

	/// Whether a game counts, given whether preseason games are wanted.
	/// All-star and exhibition games never do.
	pub fn is_wanted(&self, preseason: bool) -> bool {
		let seq = self.sequence();
		(seq >= REGULAR_SEASON_FLOOR || preseason) && seq < ALL_STAR_FLOOR
	}
}

impl FromStr for GameId {
	type Err = ScheduleError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		if s.len() != 10 || !s.bytes().all(|b| b.is_ascii_digit()) {
			return Err(ScheduleError::InvalidGameId(s.to_string()));
		}

		s.parse::<u64>()
			.map(GameId)
			.map_err(|_| ScheduleError::InvalidGameId(s.to_string()))
	}
}

impl fmt::Display for GameId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<u64> for GameId {
	fn from(id: u64) -> Self {
		Self(id)
	}
}
