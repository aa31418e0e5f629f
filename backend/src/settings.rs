//! Runtime configuration loaded via OrthoConfig.
//!
//! Values come from the environment (and any OrthoConfig file layer);
//! anything unset falls back to the local development defaults.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_DB_HOSTNAME: &str = "localhost";
const DEFAULT_DB_USER: &str = "vapor";
const DEFAULT_DB_NAME: &str = "vapor";
const DEFAULT_DB_PASSWORD: &str = "password";
const DEFAULT_HTTP_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Database connection settings.
///
/// `DATABASE_URL` wins over the individual parts when both are present.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DATABASE")]
pub struct DatabaseSettings {
    /// Full connection URL.
    pub url: Option<String>,
    /// Database host name.
    pub hostname: Option<String>,
    /// Database port.
    #[ortho_config(default = 5432)]
    pub port: u16,
    /// Role used to connect.
    pub user: Option<String>,
    /// Database name.
    pub db: Option<String>,
    /// Password for `user`.
    pub password: Option<String>,
    /// Maximum number of pooled connections.
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
}

impl DatabaseSettings {
    /// Return the connection URL, composing it from parts when no URL is set.
    pub fn database_url(&self) -> String {
        if let Some(url) = self.url.as_deref().filter(|url| !url.trim().is_empty()) {
            return url.to_owned();
        }
        format!(
            "postgres://{user}:{password}@{host}:{port}/{db}",
            user = self.user.as_deref().unwrap_or(DEFAULT_DB_USER),
            password = self.password.as_deref().unwrap_or(DEFAULT_DB_PASSWORD),
            host = self.hostname.as_deref().unwrap_or(DEFAULT_DB_HOSTNAME),
            port = self.port,
            db = self.db.as_deref().unwrap_or(DEFAULT_DB_NAME),
        )
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HTTP")]
pub struct HttpSettings {
    /// Interface to bind.
    pub host: Option<IpAddr>,
    /// Port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
}

impl HttpSettings {
    /// Return the socket address to bind; the host falls back to `0.0.0.0`.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host.unwrap_or(DEFAULT_HTTP_HOST), self.port)
    }
}
