use crate::config::environment::Environment;
use log::debug;
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

/// Environment variable overriding the API host, for development and testing.
pub const HOST_OVERRIDE_VAR: &str = "TJ_PORTAL_HOST";

/// Environment variable overriding the CDN base path.
pub const CDN_OVERRIDE_VAR: &str = "TJ_PORTAL_CDN";

/// Literal endpoint values per environment.
///
/// `test` and `product` currently point at the same host; that matches the
/// deployed configuration and is preserved here verbatim.
mod defaults {
    pub const DEVELOPMENT_HOST: &str = "http://localhost:10010";
    pub const DEVELOPMENT_CDN: &str = "";

    pub const TEST_HOST: &str = "https://tjxt-user-t.itheima.net/api";
    pub const TEST_CDN: &str = "";

    pub const PRODUCTION_HOST: &str = "https://tjxt-user-t.itheima.net/api";
    pub const PRODUCTION_CDN: &str = "";
}

/// Endpoint settings for one environment.
///
/// `host` prefixes API request URLs. `cdn` prefixes static-asset URLs; an
/// empty `cdn` means "no CDN override, serve assets same-origin".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub host: String,
    pub cdn: String,
}

impl EndpointConfig {
    fn new(host: &str, cdn: &str) -> Self {
        EndpointConfig {
            host: host.to_string(),
            cdn: cdn.to_string(),
        }
    }

    /// Build a full API request URL from a relative path.
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.host.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build a static-asset URL from a relative path. Falls back to a
    /// root-relative path when no CDN is configured.
    pub fn asset_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if self.cdn.is_empty() {
            format!("/{path}")
        } else {
            format!("{}/{}", self.cdn.trim_end_matches('/'), path)
        }
    }
}

impl Environment {
    /// The configured endpoints for this environment, straight from the
    /// static table. Returned by value; the table itself cannot be mutated.
    pub fn endpoints(&self) -> EndpointConfig {
        match self {
            Environment::Development => {
                EndpointConfig::new(defaults::DEVELOPMENT_HOST, defaults::DEVELOPMENT_CDN)
            }
            Environment::Test => EndpointConfig::new(defaults::TEST_HOST, defaults::TEST_CDN),
            Environment::Production => {
                EndpointConfig::new(defaults::PRODUCTION_HOST, defaults::PRODUCTION_CDN)
            }
        }
    }
}

/// The endpoints for `env`, with environment-variable overrides applied.
///
/// Overrides exist so a developer can point a build at a local gateway
/// without editing the table; trailing slashes are trimmed so URL joining
/// stays predictable.
pub fn resolved(env: Environment) -> EndpointConfig {
    let mut config = env.endpoints();

    if let Ok(host) = std::env::var(HOST_OVERRIDE_VAR) {
        debug!("API host overridden via {HOST_OVERRIDE_VAR}: {host}");
        config.host = host.trim_end_matches('/').to_string();
    }

    if let Ok(cdn) = std::env::var(CDN_OVERRIDE_VAR) {
        debug!("CDN base overridden via {CDN_OVERRIDE_VAR}: {cdn}");
        config.cdn = cdn.trim_end_matches('/').to_string();
    }

    config
}
