//! Configuration loading.
//!
//! Values come from, in increasing precedence: built-in defaults, a YAML file
//! named by `WEBSHOP_CONFIG`, and the `WEBSHOP_BIND` /
//! `WEBSHOP_STORE_CAPACITY` environment variables.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

pub const CONFIG_FILE_VAR: &str = "WEBSHOP_CONFIG";
pub const BIND_VAR: &str = "WEBSHOP_BIND";
pub const STORE_CAPACITY_VAR: &str = "WEBSHOP_STORE_CAPACITY";

/// Runtime settings of the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShopConfig {
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,

    /// Bound of each store's request channel.
    pub store_capacity: usize,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            store_capacity: 32,
        }
    }
}

impl ShopConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {path}"))?;
        Self::from_yaml_str(&content).with_context(|| format!("parsing config file {path}"))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Builds the configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ShopConfig::load`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match lookup(CONFIG_FILE_VAR) {
            Some(path) => Self::from_yaml_file(&path)?,
            None => Self::default(),
        };

        if let Some(bind) = lookup(BIND_VAR) {
            config.bind_addr = bind
                .parse()
                .with_context(|| format!("{BIND_VAR}={bind} is not a socket address"))?;
        }
        if let Some(capacity) = lookup(STORE_CAPACITY_VAR) {
            config.store_capacity = capacity
                .parse()
                .with_context(|| format!("{STORE_CAPACITY_VAR}={capacity} is not a number"))?;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.store_capacity == 0 {
            bail!("store_capacity must be greater than zero");
        }
        Ok(())
    }
}
