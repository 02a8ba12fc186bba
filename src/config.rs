use crate::error::ConfigError;
use std::{net::SocketAddr, path::PathBuf};

pub const DEFAULT_ADDR: &str = "127.0.0.1:7878";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub static_dir: PathBuf,
    pub templates_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup("LUCISM_STATUS_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidAddress {
                value: raw_addr.clone(),
                source,
            })?;

        Ok(Self {
            addr,
            static_dir: dir_or_default(lookup("LUCISM_STATUS_STATIC_DIR"), "static"),
            templates_dir: dir_or_default(lookup("LUCISM_STATUS_TEMPLATES_DIR"), "templates"),
        })
    }
}

fn dir_or_default(value: Option<String>, name: &str) -> PathBuf {
    value
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(name))
}
