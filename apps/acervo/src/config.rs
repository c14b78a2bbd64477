//! Server configuration, from flags or `ACERVO_*` environment variables.

use crate::error::CliError;
use clap::Args;
use std::net::SocketAddr;

/// Default listen host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default sustained request rate (requests per second, also the burst).
pub const DEFAULT_RATE_LIMIT: u32 = 50;

/// Options of `acervo serve`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host to bind.
    #[arg(long, env = "ACERVO_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to bind.
    #[arg(long, env = "ACERVO_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Bearer token required on classification routes. Unset disables auth.
    #[arg(long, env = "ACERVO_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Classification requests allowed per second across all clients.
    #[arg(long, env = "ACERVO_RATE_LIMIT", default_value_t = DEFAULT_RATE_LIMIT)]
    pub rate_limit: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_key: None,
            rate_limit: DEFAULT_RATE_LIMIT,
        }
    }
}

impl ServerConfig {
    /// Socket address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr, CliError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| CliError::Address(raw))
    }

    /// API key, ignoring an empty value.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_address_parses() {
        let config = ServerConfig::default();
        assert_eq!(
            config.socket_addr().ok(),
            Some(SocketAddr::from(([127, 0, 0, 1], 8080)))
        );
    }

    #[test]
    fn hostname_is_rejected() {
        let config = ServerConfig {
            host: "localhost".to_string(),
            ..ServerConfig::default()
        };
        assert!(matches!(config.socket_addr(), Err(CliError::Address(_))));
    }

    #[test]
    fn empty_api_key_disables_auth() {
        let config = ServerConfig {
            api_key: Some(String::new()),
            ..ServerConfig::default()
        };
        assert_eq!(config.api_key(), None);
    }
}
