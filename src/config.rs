use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_level() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
    /// Most seasons a single request may cover.
    #[serde(default = "default_max_seasons")]
    pub max_seasons: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            max_seasons: default_max_seasons(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScraperConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// The schedule endpoint chokes on long ranges, so ranges are split into
    /// windows of at most this many days.
    #[serde(default = "default_days_per_call")]
    pub days_per_call: u32,
    #[serde(default)]
    pub request_delay_ms: u64,
    #[serde(default = "default_retries")]
    pub retries: u32,
    /// Raw pages are cached here when set.
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,
    /// Ignore cached pages and fetch everything again.
    #[serde(default)]
    pub rescrape: bool,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            days_per_call: default_days_per_call(),
            request_delay_ms: 0,
            retries: default_retries(),
            cache_dir: None,
            rescrape: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_secs: default_interval_secs(),
            lookback_days: default_lookback_days(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub scraper: ScraperConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let environment = env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        let config_file = match environment.as_str() {
            "production" => "prod",
            _ => "dev",
        };

        let s = config::Config::builder()
            .add_source(File::with_name("config/default.yaml").required(false))
            .add_source(File::with_name(&format!("config/{}.yaml", config_file)).required(false))
            .add_source(File::with_name("config/local.yaml").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

fn default_level() -> String {
    "info".into()
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_max_seasons() -> u32 {
    10
}

fn default_base_url() -> String {
    "https://statsapi.web.nhl.com/api/v1".into()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".into()
}

fn default_days_per_call() -> u32 {
    crate::schedule::DEFAULT_DAYS_PER_CALL
}

fn default_retries() -> u32 {
    3
}

fn default_interval_secs() -> u64 {
    900
}

fn default_lookback_days() -> u32 {
    2
}
