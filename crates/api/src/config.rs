//! Process configuration, read once from the environment at startup.

use std::net::SocketAddr;
use std::time::Duration;

use shopnum_infra::external::DEFAULT_NUMBERS_BASE_URL;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Number ids are appended verbatim to this.
    pub numbers_base_url: String,
    pub upstream_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            numbers_base_url: DEFAULT_NUMBERS_BASE_URL.to_string(),
            upstream_timeout: Duration::from_millis(DEFAULT_UPSTREAM_TIMEOUT_MS),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "BIND_ADDR is not a socket address; using {DEFAULT_BIND_ADDR}");
                defaults.bind_addr
            }),
            None => defaults.bind_addr,
        };

        let numbers_base_url = lookup("NUMBERS_UPSTREAM_BASE_URL").unwrap_or_else(|| {
            tracing::info!("NUMBERS_UPSTREAM_BASE_URL not set; using {DEFAULT_NUMBERS_BASE_URL}");
            defaults.numbers_base_url.clone()
        });

        let upstream_timeout = match lookup("NUMBERS_UPSTREAM_TIMEOUT_MS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => {
                    tracing::warn!(
                        value = %raw,
                        "NUMBERS_UPSTREAM_TIMEOUT_MS must be a positive integer; using {DEFAULT_UPSTREAM_TIMEOUT_MS}"
                    );
                    defaults.upstream_timeout
                }
            },
            None => defaults.upstream_timeout,
        };

        Self {
            bind_addr,
            numbers_base_url,
            upstream_timeout,
        }
    }
}
