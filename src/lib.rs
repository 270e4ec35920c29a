pub mod config;
pub mod error;
pub mod fetcher;
pub mod game_id;
pub mod global;
pub mod http;
pub mod schedule;
pub mod scraper;
pub mod season;
pub mod teams;
pub mod util;

#[cfg(test)]
mod test_util;
