use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown environment: {0}")]
    UnknownEnvironment(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
