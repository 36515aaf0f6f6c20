use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// User, booking and tour service
    pub auth_service_url: String,
    /// Destination lookup service (also handles booking removal)
    pub destination_service_url: String,
    pub enable_logging: bool,
    pub network_timeout_seconds: u32,
    /// Max destination lookups in flight while enriching bookings
    pub enrichment_concurrency: usize,
    pub session_max_age_seconds: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth_service_url: "http://127.0.0.1:8443".to_string(),
            destination_service_url: "http://127.0.0.1:3000".to_string(),
            enable_logging: true,
            network_timeout_seconds: 30,
            enrichment_concurrency: 4,
            session_max_age_seconds: 86_400,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            auth_service_url: option_env!("AUTH_SERVICE_URL")
                .map(trim_base_url)
                .unwrap_or(defaults.auth_service_url),
            destination_service_url: option_env!("DESTINATION_SERVICE_URL")
                .map(trim_base_url)
                .unwrap_or(defaults.destination_service_url),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            network_timeout_seconds: option_env!("NETWORK_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.network_timeout_seconds),
            enrichment_concurrency: option_env!("ENRICHMENT_CONCURRENCY")
                .and_then(|v| v.parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(defaults.enrichment_concurrency),
            session_max_age_seconds: option_env!("SESSION_MAX_AGE_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.session_max_age_seconds),
        }
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

fn trim_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_urls_lose_trailing_slash() {
        assert_eq!(trim_base_url("http://localhost:3000/"), "http://localhost:3000");
        assert_eq!(trim_base_url("http://localhost:3000"), "http://localhost:3000");
    }

    #[test]
    fn log_level_follows_flag() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.enable_logging = false;
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
