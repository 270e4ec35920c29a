use std::borrow::Cow;

use axum::response::IntoResponse;
use axum::Json;
use hyper::StatusCode;

use crate::error::ScheduleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ApiErrorCode(pub u16);

impl ApiErrorCode {
	/// The requested route does not exist.
	pub const ROUTE_NOT_FOUND: Self = Self(404);
	/// A date parameter is missing or malformed.
	pub const INVALID_DATE: Self = Self(1000);
	/// The date range ends before it starts.
	pub const INVALID_RANGE: Self = Self(1001);
	/// A game id is malformed or none were given.
	pub const INVALID_GAME_ID: Self = Self(1002);
	/// The stats API could not be reached or answered with garbage.
	pub const UPSTREAM_ERROR: Self = Self(2000);
	/// The page cache could not be read or written.
	pub const CACHE_ERROR: Self = Self(2001);
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ApiError {
	#[serde(skip)]
	pub status_code: StatusCode,
	pub status: Cow<'static, str>,
	pub error_code: ApiErrorCode,
	pub error: Cow<'static, str>,
}

impl ApiError {
	pub fn new(status_code: StatusCode, error_code: ApiErrorCode, error: impl Into<Cow<'static, str>>) -> Self {
		Self {
			status_code,
			status: status_code.canonical_reason().unwrap_or("unknown").into(),
			error_code,
			error: error.into(),
		}
	}

	pub fn bad_request(error_code: ApiErrorCode, error: impl Into<Cow<'static, str>>) -> Self {
		Self::new(StatusCode::BAD_REQUEST, error_code, error)
	}

	pub fn not_found(error_code: ApiErrorCode, error: impl Into<Cow<'static, str>>) -> Self {
		Self::new(StatusCode::NOT_FOUND, error_code, error)
	}

	pub fn bad_gateway(error_code: ApiErrorCode, error: impl Into<Cow<'static, str>>) -> Self {
		Self::new(StatusCode::BAD_GATEWAY, error_code, error)
	}

	pub fn internal_server_error(error_code: ApiErrorCode, error: impl Into<Cow<'static, str>>) -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR, error_code, error)
	}
}

impl From<ScheduleError> for ApiError {
	fn from(e: ScheduleError) -> Self {
		match &e {
			ScheduleError::InvalidDate(_) => Self::bad_request(ApiErrorCode::INVALID_DATE, e.to_string()),
			ScheduleError::InvalidGameId(_) | ScheduleError::EmptyGameList => {
				Self::bad_request(ApiErrorCode::INVALID_GAME_ID, e.to_string())
			}
			ScheduleError::Http { .. } | ScheduleError::Upstream { .. } | ScheduleError::Decode { .. } => {
				tracing::error!(error = %e, "schedule upstream failed");
				Self::bad_gateway(ApiErrorCode::UPSTREAM_ERROR, "failed to fetch schedule")
			}
			ScheduleError::Io { .. } => {
				tracing::error!(error = %e, "page cache failed");
				Self::internal_server_error(ApiErrorCode::CACHE_ERROR, "page cache error")
			}
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> axum::http::Response<axum::body::Body> {
		(self.status_code, Json(self)).into_response()
	}
}
