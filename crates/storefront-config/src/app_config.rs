//! Application configuration structures.

use crate::CacheMode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream catalog API configuration.
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Catalog caching configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Redis configuration.
    #[serde(default)]
    pub redis: RedisConfig,

    /// JWT/Security configuration.
    #[serde(default)]
    pub security: SecurityConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "storefront-catalog".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// REST server host.
    pub host: String,
    /// REST server port.
    pub port: u16,
    /// Enable CORS.
    pub cors_enabled: bool,
    /// CORS allowed origins.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_enabled: true,
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl ServerConfig {
    /// Returns the REST server address.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Upstream product catalog API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the upstream API, without the `/products` path.
    pub base_url: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://fakestoreapi.com".to_string(),
            timeout_secs: 30,
        }
    }
}

impl UpstreamConfig {
    /// Returns the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Catalog caching configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Which catalog implementation to wire.
    pub cache: CacheMode,
}

/// Redis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    /// Redis URL.
    pub url: String,
    /// Connection pool size.
    pub pool_size: usize,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            pool_size: 10,
        }
    }
}

/// Security configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Enforce the route permission table.
    pub enabled: bool,
    /// HS256 secret used to verify bearer tokens.
    pub jwt_secret: String,
    /// Expected token issuer. Empty disables the check.
    pub jwt_issuer: String,
    /// Expected token audience. Empty disables the check.
    pub jwt_audience: String,
    /// Base URL of the user service that validates `token` headers.
    pub user_service_url: String,
    /// Timeout for user-service calls in seconds.
    pub user_service_timeout_secs: u64,
    /// Route permission table. Routes not listed here are open.
    pub route_rules: Vec<RouteRuleConfig>,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            jwt_secret: "change-me-in-production".to_string(),
            jwt_issuer: String::new(),
            jwt_audience: String::new(),
            user_service_url: "http://localhost:8181".to_string(),
            user_service_timeout_secs: 10,
            route_rules: vec![RouteRuleConfig::admin_only("/products/:id")],
        }
    }
}

impl SecurityConfig {
    /// Returns the user-service timeout as a Duration.
    #[must_use]
    pub const fn user_service_timeout(&self) -> Duration {
        Duration::from_secs(self.user_service_timeout_secs)
    }
}

/// One entry of the route permission table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRuleConfig {
    /// Route template as registered with the router, e.g. `/products/:id`.
    pub path: String,
    /// HTTP methods the rule applies to. Empty means every method.
    #[serde(default)]
    pub methods: Vec<String>,
    /// Authority the bearer token must carry, e.g. `SCOPE_ADMIN`.
    pub authority: String,
}

impl RouteRuleConfig {
    /// Rule requiring `SCOPE_ADMIN` for every method on `path`.
    #[must_use]
    pub fn admin_only(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            methods: Vec::new(),
            authority: "SCOPE_ADMIN".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub log_level: String,
    /// Log format (json, pretty).
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info,storefront=debug,tower_http=debug".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

impl ObservabilityConfig {
    /// Returns true if logs should be emitted as JSON lines.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}
