//! Server startup utilities.

use storefront_config::{CacheMode, ObservabilityConfig};
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
   _____ __                  ____                 __
  / ___// /_____  ________  / __/________  ____  / /_
  \__ \/ __/ __ \/ ___/ _ \/ /_/ ___/ __ \/ __ \/ __/
 ___/ / /_/ /_/ / /  /  __/ __/ /  / /_/ / / / / /_
/____/\__/\____/_/   \___/_/ /_/   \____/_/ /_/\__/

                    Catalog Service
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(addr: &str, cache: CacheMode) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://{}/products", addr);
    info!("Health:    http://{}/health", addr);
    info!("API Docs:  http://{}/swagger-ui", addr);
    info!("Cache:     {}", cache);
    info!("{}", separator);
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. Returns false if a
/// subscriber was already installed.
pub fn init_logging(config: &ObservabilityConfig) -> bool {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if config.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
            .is_ok()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_banner_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_banner();
    }

    #[test]
    fn test_print_startup_info_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_startup_info("0.0.0.0:8080", CacheMode::Memory);
    }

    #[test]
    fn test_init_logging_twice_reports_existing_subscriber() {
        let config = ObservabilityConfig::default();
        let _ = init_logging(&config);
        assert!(!init_logging(&config));
    }
}
