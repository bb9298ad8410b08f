use thiserror::Error;

pub mod apps;
pub mod auth;
pub mod authenticators;
pub mod config;
pub mod groups;
pub mod org;
pub mod policies;
pub mod resource_sets;
pub mod roles;
pub mod trusted_origins;
pub mod users;
pub mod utils;

#[derive(Debug, Error)]
pub enum CliActionError {
    #[error("{0}")]
    JsonError(#[from] serde_json::Error),

    #[error("{0}")]
    ApiError(#[from] crate::admin_v1::ApiError),

    #[error("{0}")]
    ConfigurationError(#[from] crate::configuration::ConfigurationError),

    #[error("{0}")]
    KeyringError(#[from] crate::keyring::KeyringError),

    #[error("{0}")]
    FormattingError(#[from] crate::format::FormattingError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing required argument: {0}")]
    MissingRequiredArgument(String),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}
