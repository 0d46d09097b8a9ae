use std::{env, time::Duration};

use anyhow::Result;

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
const DEFAULT_API_TIMEOUT_SECS: u64 = 10;
const DEFAULT_POLL_INTERVAL_SECS: u64 = 2;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub poller: PollerConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let service = ServiceConfig {
            base_url: env::var("ACCESS_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.into()),
            timeout: Duration::from_secs(
                env_or("ACCESS_API_TIMEOUT_SECS", DEFAULT_API_TIMEOUT_SECS)?,
            ),
        };
        let poller = PollerConfig {
            interval: Duration::from_secs(
                env_or("NOTIFICATION_POLL_SECS", DEFAULT_POLL_INTERVAL_SECS)?,
            ),
        };
        Ok(Self { service, poller })
    }
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct PollerConfig {
    pub interval: Duration,
}

fn env_or(key: &str, default: u64) -> Result<u64> {
    match env::var(key) {
        Err(_) => Ok(default),
        Ok(raw) => Ok(raw.parse()?),
    }
}
