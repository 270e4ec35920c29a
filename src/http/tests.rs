use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use chrono::NaiveDate;
use tower::ServiceExt;
use tracing_test::traced_test;

use super::app;
use crate::config::Config;
use crate::error::{Result, ScheduleError};
use crate::global::Global;
use crate::schedule::{Schedule, ScheduleResponse, ScheduleSource};

struct OneDay;

#[async_trait]
impl ScheduleSource for OneDay {
	async fn fetch_range(&self, from: NaiveDate, to: NaiveDate, _force: bool) -> Result<ScheduleResponse> {
		let day = NaiveDate::from_ymd_opt(2016, 10, 12).unwrap();
		if day < from || day > to {
			return Ok(ScheduleResponse::default());
		}

		Ok(serde_json::from_value(serde_json::json!({
			"dates": [{
				"date": "2016-10-12",
				"games": [{
					"gamePk": 2016020001,
					"gameDate": "2016-10-12T23:30:00Z",
					"status": { "abstractGameState": "Final", "detailedState": "Final" },
					"teams": {
						"home": { "score": 5, "team": { "name": "Ottawa Senators" } },
						"away": { "score": 4, "team": { "name": "Toronto Maple Leafs" } }
					},
					"venue": { "name": "Canadian Tire Centre" }
				}]
			}]
		}))
		.unwrap())
	}
}

struct Down;

#[async_trait]
impl ScheduleSource for Down {
	async fn fetch_range(&self, _from: NaiveDate, _to: NaiveDate, _force: bool) -> Result<ScheduleResponse> {
		Err(ScheduleError::Upstream {
			url: "https://statsapi.test/schedule".into(),
			status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
		})
	}
}

fn router(source: Arc<dyn ScheduleSource>) -> axum::Router {
	app(Global::with_schedule(Config::default(), Schedule::new(source, 100)))
}

async fn get(router: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
	let response = router
		.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
		.await
		.unwrap();

	let status = response.status();
	let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
	(status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
#[traced_test]
async fn schedule_returns_games() {
	let (status, body) = get(router(Arc::new(OneDay)), "/nhl/schedule?from=2016-10-01&to=2016-10-31").await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["count"], 1);
	assert_eq!(body["games"][0]["game_id"], 2016020001u64);
	assert_eq!(body["games"][0]["home_team"], "OTT");
	assert_eq!(body["games"][0]["away_team"], "TOR");
	assert_eq!(body["games"][0]["start_time"], "2016-10-12T23:30:00");
}

#[tokio::test]
async fn schedule_validates_dates() {
	let (status, body) = get(router(Arc::new(OneDay)), "/nhl/schedule?from=2016-10-01").await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["error_code"], 1000);

	let (status, body) = get(router(Arc::new(OneDay)), "/nhl/schedule?from=2016-10-31&to=2016-10-01").await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["error_code"], 1001);

	let (status, _) = get(router(Arc::new(OneDay)), "/nhl/schedule?from=yesterday&to=2016-10-01").await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn games_looks_up_ids() {
	let (status, body) = get(router(Arc::new(OneDay)), "/nhl/games?ids=2016020001,2016020999").await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["count"], 1);
	assert_eq!(body["games"][0]["date"], "2016-10-12");
	assert_eq!(body["games"][0]["venue"], "Canadian Tire Centre");
}

#[tokio::test]
async fn games_rejects_bad_ids() {
	let (status, body) = get(router(Arc::new(OneDay)), "/nhl/games?ids=").await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["error_code"], 1002);

	let (status, _) = get(router(Arc::new(OneDay)), "/nhl/games?ids=12345").await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn games_rejects_ids_outside_league_history() {
	let (status, body) = get(router(Arc::new(OneDay)), "/nhl/games?ids=0000020001").await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["error_code"], 1002);

	let (status, body) = get(router(Arc::new(OneDay)), "/nhl/games?ids=9999020001").await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["error_code"], 1002);
}

#[tokio::test]
async fn requests_spanning_too_many_seasons_are_rejected() {
	let (status, body) = get(router(Arc::new(OneDay)), "/nhl/games?ids=2000020001,2016020001").await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["error_code"], 1002);

	let (status, body) = get(router(Arc::new(OneDay)), "/nhl/schedule?from=2000-10-01&to=2016-10-01").await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["error_code"], 1001);

	let (status, _) = get(router(Arc::new(OneDay)), "/nhl/games?ids=2007020001,2016020001").await;
	assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[traced_test]
async fn upstream_failure_is_bad_gateway() {
	let (status, body) = get(router(Arc::new(Down)), "/nhl/schedule?from=2016-10-01&to=2016-10-31").await;

	assert_eq!(status, StatusCode::BAD_GATEWAY);
	assert_eq!(body["error_code"], 2000);
	assert!(logs_contain("schedule upstream failed"));
}

#[tokio::test]
async fn root_and_fallback() {
	for uri in ["/nhl", "/nhl/"] {
		let (status, body) = get(router(Arc::new(OneDay)), uri).await;
		assert_eq!(status, StatusCode::OK, "{uri}");
		assert_eq!(body["message"], "NHL Schedule API");
	}

	let (status, body) = get(router(Arc::new(OneDay)), "/nope").await;
	assert_eq!(status, StatusCode::NOT_FOUND);
	assert_eq!(body["error_code"], 404);
}
