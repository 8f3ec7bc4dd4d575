pub mod domain;
pub mod loader;
pub mod render;
pub mod runtime;
pub mod state;
pub mod stats;

pub mod config {
    use anyhow::ensure;
    use std::time::Duration;

    pub const DEFAULT_API_BASE_URL: &str = "http://13.53.169.204:8000/api";
    pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 5 * 60;
    pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
    pub const DEFAULT_PORT: u16 = 3000;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub api_base_url: String,
        pub recommendations_limit: Option<u32>,
        pub refresh_interval: Duration,
        pub http_timeout: Duration,
        pub sentry_dsn: Option<String>,
        pub port: u16,
    }

    impl Default for Settings {
        fn default() -> Self {
            Self {
                api_base_url: DEFAULT_API_BASE_URL.to_string(),
                recommendations_limit: None,
                refresh_interval: Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECS),
                http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
                sentry_dsn: None,
                port: DEFAULT_PORT,
            }
        }
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
            let defaults = Self::default();

            let api_base_url = lookup("RECOMMENDATIONS_API_BASE_URL")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.api_base_url);

            let recommendations_limit = lookup("RECOMMENDATIONS_LIMIT")
                .and_then(|s| s.trim().parse::<u32>().ok());
            if let Some(limit) = recommendations_limit {
                ensure!(
                    (1..=200).contains(&limit),
                    "RECOMMENDATIONS_LIMIT must be 1..=200 (got {limit})"
                );
            }

            let refresh_secs = lookup("REFRESH_INTERVAL_SECS")
                .and_then(|s| s.trim().parse::<u64>().ok())
                .unwrap_or(DEFAULT_REFRESH_INTERVAL_SECS);
            ensure!(refresh_secs > 0, "REFRESH_INTERVAL_SECS must be positive");

            let timeout_secs = lookup("HTTP_TIMEOUT_SECS")
                .and_then(|s| s.trim().parse::<u64>().ok())
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

            let port = lookup("PORT")
                .and_then(|s| s.trim().parse::<u16>().ok())
                .unwrap_or(defaults.port);

            Ok(Self {
                api_base_url,
                recommendations_limit,
                refresh_interval: Duration::from_secs(refresh_secs),
                http_timeout: Duration::from_secs(timeout_secs),
                sentry_dsn: lookup("SENTRY_DSN").filter(|s| !s.trim().is_empty()),
                port,
            })
        }
    }

}
