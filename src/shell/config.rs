use anyhow::{Context, bail};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CATALOG_PATH: &str = "catalog/rooms.json";
pub const DEFAULT_COMMIT_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub catalog_path: PathBuf,
    /// How many times a booking command re-reads a contended room before giving up.
    pub commit_attempts: u32,
}

impl Config {
    /// Reads `HOTEL_HOST`, `HOTEL_PORT`, `HOTEL_CATALOG_PATH` and `BOOKING_COMMIT_ATTEMPTS`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("HOTEL_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("HOTEL_PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("HOTEL_PORT is not a port: {raw}"))?,
            None => DEFAULT_PORT,
        };
        let catalog_path = lookup("HOTEL_CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH));
        let commit_attempts = match lookup("BOOKING_COMMIT_ATTEMPTS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("BOOKING_COMMIT_ATTEMPTS is not a number: {raw}"))?,
            None => DEFAULT_COMMIT_ATTEMPTS,
        };
        if commit_attempts == 0 {
            bail!("BOOKING_COMMIT_ATTEMPTS must be at least 1");
        }
        Ok(Self {
            host,
            port,
            catalog_path,
            commit_attempts,
        })
    }

    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("cannot bind to {}:{}", self.host, self.port))
    }
}
