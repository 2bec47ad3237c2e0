use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    /// Base URL of the booking/contact endpoint. Empty means submissions are only logged.
    pub submission_endpoint: String,
    pub submission_timeout_secs: u64,
    pub status_reset_secs: u64,
    pub carousel_interval_secs: u64,
    pub booking_delay_ms: u64,
    pub contact_delay_ms: u64,
    /// Forms untouched this long are dropped from the registry.
    pub form_idle_ttl_secs: u64,
    pub catalog_path: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: parse_var("PORT", 3000),
            submission_endpoint: env::var("SUBMISSION_ENDPOINT").unwrap_or_default(),
            submission_timeout_secs: parse_var("SUBMISSION_TIMEOUT_SECS", 10),
            status_reset_secs: parse_var("STATUS_RESET_SECS", 5),
            carousel_interval_secs: parse_var("CAROUSEL_INTERVAL_SECS", 6),
            booking_delay_ms: parse_var("BOOKING_DELAY_MS", 1500),
            contact_delay_ms: parse_var("CONTACT_DELAY_MS", 1000),
            form_idle_ttl_secs: parse_var("FORM_IDLE_TTL_SECS", 1800),
            catalog_path: env::var("CATALOG_PATH").ok().filter(|p| !p.is_empty()),
        }
    }

    pub fn status_reset(&self) -> Duration {
        Duration::from_secs(self.status_reset_secs)
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_secs(self.carousel_interval_secs.max(1))
    }

    pub fn submission_timeout(&self) -> Duration {
        Duration::from_secs(self.submission_timeout_secs)
    }

    pub fn form_idle_ttl(&self) -> Duration {
        Duration::from_secs(self.form_idle_ttl_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            submission_endpoint: String::new(),
            submission_timeout_secs: 10,
            status_reset_secs: 5,
            carousel_interval_secs: 6,
            booking_delay_ms: 1500,
            contact_delay_ms: 1000,
            form_idle_ttl_secs: 1800,
            catalog_path: None,
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
