use std::path::{Path, PathBuf};

use crate::error::{Result, ScheduleError};

/// Describes one page we scrape and where its cached copy lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
	pub url: String,
	pub name: String,
	pub kind: &'static str,
	pub season: i32,
}

/// On-disk cache of raw page bodies, laid out as `{dir}/{season}/{kind}/{name}.json`.
#[derive(Debug, Clone, Default)]
pub struct PageCache {
	dir: Option<PathBuf>,
	rescrape: bool,
}

impl PageCache {
	pub fn new(dir: Option<PathBuf>, rescrape: bool) -> Self {
		Self { dir, rescrape }
	}

	pub fn disabled() -> Self {
		Self::default()
	}

	pub fn is_enabled(&self) -> bool {
		self.dir.is_some()
	}

	pub fn path_for(&self, page: &PageInfo) -> Option<PathBuf> {
		self.dir.as_ref().map(|dir| {
			dir.join(page.season.to_string())
				.join(page.kind)
				.join(format!("{}.json", page.name))
		})
	}

	pub async fn get(&self, page: &PageInfo) -> Result<Option<String>> {
		if self.rescrape {
			return Ok(None);
		}

		let Some(path) = self.path_for(page) else {
			return Ok(None);
		};

		match tokio::fs::read_to_string(&path).await {
			Ok(body) => {
				tracing::debug!(path = %path.display(), "page cache hit");
				Ok(Some(body))
			}
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
			Err(e) => Err(io_error(&path, e)),
		}
	}

	pub async fn put(&self, page: &PageInfo, body: &str) -> Result<()> {
		let Some(path) = self.path_for(page) else {
			return Ok(());
		};

		if let Some(parent) = path.parent() {
			tokio::fs::create_dir_all(parent)
				.await
				.map_err(|e| io_error(parent, e))?;
		}

		tokio::fs::write(&path, body)
			.await
			.map_err(|e| io_error(&path, e))?;

		tracing::debug!(path = %path.display(), bytes = body.len(), "page cached");
		Ok(())
	}

	/// Delete every cached page of `kind`, in any season, whose name `stale`
	/// accepts. Returns how many pages were removed.
	pub async fn remove_where(&self, kind: &str, stale: impl Fn(&str) -> bool) -> Result<usize> {
		let Some(dir) = &self.dir else {
			return Ok(0);
		};

		let mut seasons = match tokio::fs::read_dir(dir).await {
			Ok(entries) => entries,
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
			Err(e) => return Err(io_error(dir, e)),
		};

		let mut removed = 0;

		while let Some(season) = seasons.next_entry().await.map_err(|e| io_error(dir, e))? {
			let kind_dir = season.path().join(kind);

			let mut pages = match tokio::fs::read_dir(&kind_dir).await {
				Ok(entries) => entries,
				Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
				Err(e) => return Err(io_error(&kind_dir, e)),
			};

			while let Some(page) = pages.next_entry().await.map_err(|e| io_error(&kind_dir, e))? {
				let path = page.path();

				if path.extension().and_then(|e| e.to_str()) != Some("json") {
					continue;
				}

				let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
					continue;
				};

				if stale(name) {
					tokio::fs::remove_file(&path)
						.await
						.map_err(|e| io_error(&path, e))?;
					tracing::debug!(path = %path.display(), "dropped cached page");
					removed += 1;
				}
			}
		}

		Ok(removed)
	}
}

fn io_error(path: &Path, source: std::io::Error) -> ScheduleError {
	ScheduleError::Io {
		path: path.display().to_string(),
		source,
	}
}
