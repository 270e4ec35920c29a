use thiserror::Error;

pub type Result<T, E = ScheduleError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ScheduleError {
	#[error("invalid date `{0}`, expected YYYY-MM-DD")]
	InvalidDate(String),

	#[error("invalid game id `{0}`, expected a 10 digit id like 2016020001")]
	InvalidGameId(String),

	#[error("no game ids given")]
	EmptyGameList,

	#[error("request to {url} failed")]
	Http {
		url: String,
		#[source]
		source: reqwest::Error,
	},

	#[error("{url} responded with {status}")]
	Upstream { url: String, status: reqwest::StatusCode },

	#[error("failed to decode schedule page {name}")]
	Decode {
		name: String,
		#[source]
		source: serde_json::Error,
	},

	#[error("page cache io error at {path}")]
	Io {
		path: String,
		#[source]
		source: std::io::Error,
	},
}
