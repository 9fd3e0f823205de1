//! Server settings and the assembled server configuration.

use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;
use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use roster::outbound::country_info::CountryInfoSettings;
use roster::outbound::persistence::DbPool;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_COUNTRIES_API_URL: &str = "https://restcountries.com/v3.1";
const DEFAULT_COUNTRIES_API_TIMEOUT_SECS: u64 = 10;
const DEFAULT_DB_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_RUN_MIGRATIONS: bool = true;

/// Settings loaded from CLI flags, `ROSTER_*` environment variables and
/// configuration files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ROSTER")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL. Members are kept in memory when unset.
    pub database_url: Option<String>,
    /// Apply pending migrations before serving. Defaults to `true`.
    pub run_migrations: Option<bool>,
    /// REST Countries base URL.
    pub countries_api_url: Option<String>,
    /// Whole-request timeout for country lookups.
    pub countries_api_timeout_secs: Option<u64>,
    /// Upper bound on pooled database connections.
    pub db_pool_max_size: Option<u32>,
}

/// Settings that could not be turned into a [`ServerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
    #[error("invalid countries API URL {value:?}: {source}")]
    CountriesApiUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

impl ServerSettings {
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| ConfigError::BindAddr {
            value: value.to_owned(),
            source,
        })
    }

    /// Configured database URL; blank values count as unset.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Whether pending migrations run at start-up.
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(DEFAULT_RUN_MIGRATIONS)
    }

    pub fn countries_api_url(&self) -> Result<Url, ConfigError> {
        let value = self
            .countries_api_url
            .as_deref()
            .unwrap_or(DEFAULT_COUNTRIES_API_URL);
        Url::parse(value).map_err(|source| ConfigError::CountriesApiUrl {
            value: value.to_owned(),
            source,
        })
    }

    pub fn countries_api_timeout(&self) -> Duration {
        Duration::from_secs(
            self.countries_api_timeout_secs
                .unwrap_or(DEFAULT_COUNTRIES_API_TIMEOUT_SECS),
        )
    }

    pub fn db_pool_max_size(&self) -> u32 {
        self.db_pool_max_size.unwrap_or(DEFAULT_DB_POOL_MAX_SIZE)
    }
}

/// Everything `create_server` needs, with settings already validated.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) country_info: CountryInfoSettings,
    pub(crate) db_pool: Option<DbPool>,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Validate settings into a configuration without a database pool.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unparsable bind address or API URL.
    pub fn from_settings(settings: &ServerSettings) -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: settings.bind_addr()?,
            country_info: CountryInfoSettings {
                base_url: settings.countries_api_url()?,
                timeout: settings.countries_api_timeout(),
            },
            db_pool: None,
            #[cfg(feature = "metrics")]
            prometheus: None,
        })
    }

    /// Attach a database pool so members are stored in PostgreSQL.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    #[cfg(feature = "metrics")]
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
