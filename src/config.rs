use std::time::Duration;

use anyhow::{Context, Result};

use crate::constants::{
    DEFAULT_CENTER_LAT, DEFAULT_CENTER_LON, DEFAULT_LISTEN_ADDR, DEFAULT_REQUEST_TIMEOUT_SECONDS,
    DEFAULT_ZOOM, PB2002_BOUNDARIES_URL, USGS_ALL_WEEK_FEED_URL,
};

#[derive(Clone, Debug)]
pub struct Config {
    pub listen_addr: String,
    pub earthquake_feed_url: String,
    pub plates_feed_url: String,
    pub request_timeout: Duration,
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let listen_addr = env_string("QUAKE_MAP_LISTEN_ADDR", DEFAULT_LISTEN_ADDR);
        let earthquake_feed_url =
            env_string("QUAKE_MAP_EARTHQUAKE_FEED_URL", USGS_ALL_WEEK_FEED_URL);
        let plates_feed_url = env_string("QUAKE_MAP_PLATES_FEED_URL", PB2002_BOUNDARIES_URL);
        let request_timeout = Duration::from_secs(env_u64(
            "QUAKE_MAP_REQUEST_TIMEOUT_SECONDS",
            DEFAULT_REQUEST_TIMEOUT_SECONDS,
        )?);
        let center_lat = env_f64("QUAKE_MAP_CENTER_LAT", DEFAULT_CENTER_LAT)?;
        let center_lon = env_f64("QUAKE_MAP_CENTER_LON", DEFAULT_CENTER_LON)?;
        let zoom = env_u8("QUAKE_MAP_ZOOM", DEFAULT_ZOOM)?;

        Ok(Self {
            listen_addr,
            earthquake_feed_url,
            plates_feed_url,
            request_timeout,
            center_lat,
            center_lon,
            zoom,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            earthquake_feed_url: USGS_ALL_WEEK_FEED_URL.to_string(),
            plates_feed_url: PB2002_BOUNDARIES_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECONDS),
            center_lat: DEFAULT_CENTER_LAT,
            center_lon: DEFAULT_CENTER_LON,
            zoom: DEFAULT_ZOOM,
        }
    }
}

fn env_optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn env_string(name: &str, default: &str) -> String {
    env_optional(name).unwrap_or_else(|| default.to_string())
}

fn env_u64(name: &str, default: u64) -> Result<u64> {
    match env_optional(name) {
        Some(value) => value
            .parse::<u64>()
            .with_context(|| format!("Failed to parse {}={} as u64", name, value)),
        None => Ok(default),
    }
}

fn env_u8(name: &str, default: u8) -> Result<u8> {
    match env_optional(name) {
        Some(value) => value
            .parse::<u8>()
            .with_context(|| format!("Failed to parse {}={} as u8", name, value)),
        None => Ok(default),
    }
}

fn env_f64(name: &str, default: f64) -> Result<f64> {
    match env_optional(name) {
        Some(value) => {
            let parsed = value
                .parse::<f64>()
                .with_context(|| format!("Failed to parse {}={} as f64", name, value))?;
            anyhow::ensure!(parsed.is_finite(), "{}={} is not a finite number", name, value);
            Ok(parsed)
        }
        None => Ok(default),
    }
}
