//! HTTP listener configuration.

use std::net::SocketAddr;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Port used when neither the config file nor `PORT` sets one.
pub const DEFAULT_PORT: u16 = 10000;

/// Webhook server listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
}

impl ServerConfig {
    /// Socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns an error if `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip = self
            .host
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                field: "server.host",
                reason: e.to_string(),
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_all_interfaces_on_default_port() {
        let addr = ServerConfig::default().bind_addr().unwrap();
        assert_eq!(addr.port(), 10000);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn hostname_is_rejected() {
        let config = ServerConfig {
            host: "localhost".into(),
            port: 80,
        };
        assert!(config.bind_addr().is_err());
    }
}
