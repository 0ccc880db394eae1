use std::{env, fmt::Display, str::FromStr};

use anyhow::{Result, anyhow};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Redis,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "redis" => Ok(StoreBackend::Redis),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend '{other}', expected redis or memory")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub redis_url: String,
    pub api_root: String,
    pub store_backend: StoreBackend,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self {
            port: try_load("RUST_PORT", "8001")?,
            redis_url: try_load("REDIS_URL", "redis://127.0.0.1:6379")?,
            api_root: normalize_root(&try_load::<String>("API_ROOT", "/api")?),
            store_backend: try_load("STORE_BACKEND", "redis")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8001,
            redis_url: "redis://127.0.0.1:6379".to_string(),
            api_root: "/api".to_string(),
            store_backend: StoreBackend::Memory,
        }
    }
}

/// Leading slash, no trailing slash. The bare root becomes an empty prefix.
pub fn normalize_root(root: &str) -> String {
    let trimmed = root.trim().trim_matches('/');

    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
            anyhow!("Environment misconfigured: {key}: {e}")
        })
}
