// src/config.rs
use crate::domain::selection::{DEFAULT_HIGHLIGHT_K, DEFAULT_REFERENCE_BUILDER};
use std::net::SocketAddr;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub db_path: String,
    pub schema_path: String,
    /// JSON dataset imported at startup; skipped when the file is absent.
    pub seed_path: String,
    /// Builder whose listings get highlighted next to a selection.
    pub reference_builder: String,
    pub highlight_k: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            db_path: "halifax_housing.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            seed_path: "data/listings.json".to_string(),
            reference_builder: DEFAULT_REFERENCE_BUILDER.to_string(),
            highlight_k: DEFAULT_HIGHLIGHT_K,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `HHH_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let text = |key: &str, default: String| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };

        Self {
            bind_addr: parsed(&lookup, "HHH_BIND_ADDR", defaults.bind_addr),
            max_workers: parsed(&lookup, "HHH_MAX_WORKERS", defaults.max_workers).max(1),
            db_path: text("HHH_DB_PATH", defaults.db_path),
            schema_path: text("HHH_SCHEMA_PATH", defaults.schema_path),
            seed_path: text("HHH_SEED_PATH", defaults.seed_path),
            reference_builder: text("HHH_REFERENCE_BUILDER", defaults.reference_builder),
            highlight_k: parsed(&lookup, "HHH_HIGHLIGHT_K", defaults.highlight_k),
        }
    }
}

fn parsed<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, fallback = %default, "ignoring invalid config value");
            default
        }),
    }
}
