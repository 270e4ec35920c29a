//! Local stand-in for the stats API.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Router;

use crate::config::ScraperConfig;

#[derive(Clone)]
struct Script {
	responses: Arc<Vec<(StatusCode, String)>>,
	hits: Arc<AtomicUsize>,
}

async fn answer(State(script): State<Script>) -> (StatusCode, String) {
	let hit = script.hits.fetch_add(1, Ordering::SeqCst);
	let idx = hit.min(script.responses.len() - 1);
	script.responses[idx].clone()
}

pub struct Upstream {
	pub base_url: String,
	hits: Arc<AtomicUsize>,
}

impl Upstream {
	/// Answer requests with `responses` in order, repeating the last one.
	pub async fn start(responses: Vec<(StatusCode, String)>) -> Self {
		assert!(!responses.is_empty());

		let hits = Arc::new(AtomicUsize::new(0));
		let script = Script {
			responses: Arc::new(responses),
			hits: hits.clone(),
		};

		let app = Router::new().fallback(answer).with_state(script);
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap();

		tokio::spawn(async move {
			axum::serve(listener, app).await.unwrap();
		});

		Self {
			base_url: format!("http://{addr}"),
			hits,
		}
	}

	pub fn hits(&self) -> usize {
		self.hits.load(Ordering::SeqCst)
	}

	pub fn scraper_config(&self, cache_dir: &std::path::Path) -> ScraperConfig {
		ScraperConfig {
			base_url: self.base_url.clone(),
			cache_dir: Some(cache_dir.to_path_buf()),
			request_delay_ms: 0,
			retries: 0,
			..ScraperConfig::default()
		}
	}
}

/// A schedule page with one game on 2016-10-12 in the given detailed state.
pub fn schedule_page(detailed_state: &str) -> String {
	let abstract_state = if detailed_state == "Final" { "Final" } else { "Preview" };

	serde_json::json!({
		"dates": [{
			"date": "2016-10-12",
			"games": [{
				"gamePk": 2016020001u64,
				"gameDate": "2016-10-12T23:30:00Z",
				"status": { "abstractGameState": abstract_state, "detailedState": detailed_state },
				"teams": {
					"home": { "score": 5, "team": { "name": "Ottawa Senators" } },
					"away": { "score": 4, "team": { "name": "Toronto Maple Leafs" } }
				},
				"venue": { "name": "Canadian Tire Centre" }
			}]
		}]
	})
	.to_string()
}
