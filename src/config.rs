//! Server configuration resolved from the environment.

use std::net::SocketAddr;

use crate::common::ConfigError;

/// Environment variable that overrides the Leptos `site-addr`.
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Reads the process environment, falling back to `default_addr`.
    pub fn from_env(default_addr: SocketAddr) -> Result<Self, ConfigError> {
        Self::from_lookup(default_addr, |key| std::env::var(key).ok())
    }

    /// Resolves the config from an arbitrary key lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(default_addr: SocketAddr, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = match lookup(BIND_ADDR_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            Some(value) => value
                .parse::<SocketAddr>()
                .map_err(|source| ConfigError::InvalidBindAddr { value, source })?,
            None => default_addr,
        };

        Ok(Self { bind_addr })
    }
}

/// Directories the server exposes as static files.
///
/// The wasm bundle lives under `/<pkg_dir>`. Everything else cargo-leptos copies
/// into the site root is served from `/`, registered after the Leptos routes so
/// page routes win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticMounts {
    pub pkg_prefix: String,
    pub pkg_dir: String,
    pub site_root: String,
}

impl StaticMounts {
    pub fn new(site_root: &str, pkg_dir: &str) -> Self {
        let site_root = site_root.trim_end_matches('/');
        let pkg_dir = pkg_dir.trim_matches('/');

        Self {
            pkg_prefix: format!("/{}", pkg_dir),
            pkg_dir: format!("{}/{}", site_root, pkg_dir),
            site_root: site_root.to_string(),
        }
    }
}
