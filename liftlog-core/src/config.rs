use anyhow::{Result, anyhow};
use std::env;

pub const DEFAULT_POOL_SIZE: u32 = 4;
pub const IN_MEMORY_URL: &str = ":memory:";

/// Where the workout store lives and how it is opened.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub database_url: String,
    pub pool_size: u32,
    /// Write the default catalog on first initialisation.
    pub seed_catalog: bool,
}

impl StoreConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            pool_size: DEFAULT_POOL_SIZE,
            seed_catalog: true,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(IN_MEMORY_URL)
    }

    /// Reads `DATABASE_URL`, `LIFTLOG_POOL_SIZE` and `LIFTLOG_SEED_CATALOG`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                anyhow!("DATABASE_URL must be specified or present in the environment")
            })?;

        let mut config = Self::new(database_url);

        if let Some(size) = lookup("LIFTLOG_POOL_SIZE") {
            config.pool_size = size
                .trim()
                .parse()
                .map_err(|e| anyhow!("invalid LIFTLOG_POOL_SIZE {:?}: {}", size, e))?;
        }

        if let Some(flag) = lookup("LIFTLOG_SEED_CATALOG") {
            config.seed_catalog = match flag.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                other => return Err(anyhow!("invalid LIFTLOG_SEED_CATALOG {:?}", other)),
            };
        }

        Ok(config)
    }

    pub fn with_pool_size(mut self, pool_size: u32) -> Self {
        self.pool_size = pool_size;
        self
    }

    pub fn with_seed_catalog(mut self, seed_catalog: bool) -> Self {
        self.seed_catalog = seed_catalog;
        self
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_url == IN_MEMORY_URL || self.database_url.starts_with("file::memory:")
    }

    /// Every pooled connection to an in-memory database would see its own
    /// empty database, so those are limited to one connection.
    pub fn effective_pool_size(&self) -> u32 {
        if self.is_in_memory() {
            1
        } else {
            self.pool_size.max(1)
        }
    }
}
