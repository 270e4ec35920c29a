use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::error::ScheduleError;
use crate::game_id::GameId;
use crate::global::Global;
use crate::http::error::{ApiError, ApiErrorCode};
use crate::schedule::ScheduledGame;
use crate::util::today;

pub fn routes() -> Router<Arc<Global>> {
    Router::new().route("/games", get(get_games))
}

#[derive(Debug, Deserialize)]
struct GamesQuery {
    #[serde(default)]
    ids: String,
}

#[derive(serde::Serialize)]
struct GamesResponse {
    count: usize,
    games: Vec<ScheduledGame>,
}

fn parse_ids(ids: &str) -> Result<Vec<GameId>, ScheduleError> {
    let ids: Vec<GameId> = ids
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()?;

    if ids.is_empty() {
        return Err(ScheduleError::EmptyGameList);
    }

    Ok(ids)
}

/// GET /nhl/games?ids=2016020001,2016020002
///
/// Schedule entries (date, teams, score) for the given game ids.
#[tracing::instrument(skip(global))]
async fn get_games(
    State(global): State<Arc<Global>>,
    Query(query): Query<GamesQuery>,
) -> Result<Json<GamesResponse>, ApiError> {
    let ids = parse_ids(&query.ids)?;

    let oldest = ids.iter().map(GameId::season_year).min().unwrap_or_default();
    let newest = ids.iter().map(GameId::season_year).max().unwrap_or_default();
    let seasons = newest - oldest + 1;

    if seasons > global.config.api.max_seasons as i32 {
        return Err(ApiError::bad_request(
            ApiErrorCode::INVALID_GAME_ID,
            format!("ids span {seasons} seasons, at most {} allowed", global.config.api.max_seasons),
        ));
    }
    let games = global.schedule.get_dates(&ids, today()).await?;

    Ok(Json(GamesResponse {
        count: games.len(),
        games,
    }))
}
