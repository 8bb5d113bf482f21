// Library crate for tj-portal-config
// Holds the portal client's static environment-to-endpoint table

pub mod config;
pub mod error;

pub use config::endpoints::EndpointConfig;
pub use config::environment::Environment;
pub use config::endpoints_for;
pub use error::{ConfigError, Result};
