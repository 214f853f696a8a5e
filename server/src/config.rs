//! Server configuration parsed from environment variables.
//!
//! All variables are optional. Unset or blank values take their defaults;
//! values that are present but malformed are reported as [`ConfigError`] so a
//! typo never silently falls back to a default port or address.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use client::config::{DEFAULT_REQUEST_TIMEOUT_MS, SiteConfig};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} ({reason})")]
    Invalid { var: &'static str, value: String, reason: &'static str },

    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Handed to every render as Leptos context.
    pub site: SiteConfig,
    /// Root of the static files served for non-page paths.
    pub public_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed server config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `SITE_API_BASE`: contact-intake base URL, default `http://localhost:5000`
    /// - `CONTACT_TIMEOUT_MS`: default 15000
    /// - `PUBLIC_DIR`: default `<server crate>/../public`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| invalid("PORT", raw, "expected a port number"))?,
            None => DEFAULT_PORT,
        };
        let bind_addr = match var("BIND_ADDR") {
            Some(raw) => raw.parse::<IpAddr>().map_err(|_| invalid("BIND_ADDR", raw, "expected an IP address"))?,
            None => DEFAULT_BIND_ADDR,
        };
        let timeout_ms = match var("CONTACT_TIMEOUT_MS") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(ms) if ms > 0 => ms,
                _ => return Err(invalid("CONTACT_TIMEOUT_MS", raw, "expected a positive number of milliseconds")),
            },
            None => DEFAULT_REQUEST_TIMEOUT_MS,
        };
        let site = SiteConfig::new(&var("SITE_API_BASE").unwrap_or_default(), timeout_ms);
        let public_dir = var("PUBLIC_DIR").map_or_else(default_public_dir, PathBuf::from);

        Ok(Self { bind_addr, port, site, public_dir })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn invalid(var: &'static str, value: String, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { var, value, reason }
}

fn default_public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public")
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
