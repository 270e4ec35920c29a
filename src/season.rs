//! Season arithmetic.
//!
//! A season is labelled by the year it starts in, so the 2016-17 season is
//! `2016`. Anything before August belongs to the season that started the
//! previous fall.

use chrono::{Datelike, NaiveDate};

use crate::error::{Result, ScheduleError};

/// The 2019 season finished in the fall of 2020.
const BUBBLE_YEAR: i32 = 2020;

pub fn season_of(date: NaiveDate) -> i32 {
	let year = date.year();
	let cutoff_month = if year == BUBBLE_YEAR { 10 } else { 8 };

	if date.month() < cutoff_month {
		year - 1
	} else {
		year
	}
}

/// First day we ask the schedule endpoint about for a season.
pub fn season_start(season: i32) -> NaiveDate {
	NaiveDate::from_ymd_opt(season, 9, 1).unwrap_or(NaiveDate::MIN)
}

/// Last day we ask the schedule endpoint about for a season.
pub fn season_end(season: i32) -> NaiveDate {
	NaiveDate::from_ymd_opt(season + 1, 7, 1).unwrap_or(NaiveDate::MAX)
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
	NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| ScheduleError::InvalidDate(s.to_string()))
}
