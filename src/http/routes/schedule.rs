use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::global::Global;
use crate::http::error::{ApiError, ApiErrorCode};
use crate::schedule::{ScheduledGame, ScrapeOptions};
use crate::season::{parse_date, season_of};

pub fn routes() -> Router<Arc<Global>> {
    Router::new().route("/schedule", get(get_schedule))
}

#[derive(Debug, Deserialize)]
struct ScheduleQuery {
    from: Option<String>,
    to: Option<String>,
    #[serde(default)]
    preseason: bool,
    #[serde(default)]
    not_over: bool,
}

#[derive(serde::Serialize)]
struct ScheduleResponse {
    count: usize,
    games: Vec<ScheduledGame>,
}

/// GET /nhl/schedule?from=YYYY-MM-DD&to=YYYY-MM-DD&preseason=false&not_over=false
#[tracing::instrument(skip(global))]
async fn get_schedule(
    State(global): State<Arc<Global>>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Json<ScheduleResponse>, ApiError> {
    let (Some(from), Some(to)) = (query.from.as_deref(), query.to.as_deref()) else {
        return Err(ApiError::bad_request(
            ApiErrorCode::INVALID_DATE,
            "both `from` and `to` are required",
        ));
    };

    let from = parse_date(from)?;
    let to = parse_date(to)?;

    if to < from {
        return Err(ApiError::bad_request(
            ApiErrorCode::INVALID_RANGE,
            "`to` must not be before `from`",
        ));
    }

    let seasons = season_of(to) - season_of(from) + 1;
    if seasons > global.config.api.max_seasons as i32 {
        return Err(ApiError::bad_request(
            ApiErrorCode::INVALID_RANGE,
            format!("range spans {seasons} seasons, at most {} allowed", global.config.api.max_seasons),
        ));
    }

    let options = ScrapeOptions {
        preseason: query.preseason,
        not_over: query.not_over,
    };

    let games = global.schedule.scrape_schedule(from, to, options).await?;

    Ok(Json(ScheduleResponse {
        count: games.len(),
        games,
    }))
}
