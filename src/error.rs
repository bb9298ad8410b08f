//! Top level CLI error type and exit code mapping.

use thiserror::Error;

use crate::actions::CliActionError;
use crate::admin_v1::ApiError;
use crate::exit_codes::IdcliExitCode;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unsupported subcommand: {0}")]
    UnsupportedSubcommand(String),

    #[error("{0}")]
    ActionError(#[from] CliActionError),
}

impl CliError {
    /// Map the error to the process exit code.
    pub fn exit_code(&self) -> IdcliExitCode {
        match self {
            CliError::UnsupportedSubcommand(_) => IdcliExitCode::UsageError,
            CliError::ActionError(action_error) => match action_error {
                CliActionError::MissingRequiredArgument(_) => IdcliExitCode::UsageError,
                CliActionError::JsonError(_) => IdcliExitCode::DataError,
                CliActionError::FormattingError(_) => IdcliExitCode::DataError,
                CliActionError::ConfigurationError(_) => IdcliExitCode::ConfigError,
                CliActionError::UrlError(_) => IdcliExitCode::ConfigError,
                CliActionError::KeyringError(_) => IdcliExitCode::AuthError,
                CliActionError::IoError(_) => IdcliExitCode::SoftwareError,
                CliActionError::ApiError(api_error) => match api_error {
                    ApiError::MissingApiToken => IdcliExitCode::AuthError,
                    ApiError::HttpError(_) => IdcliExitCode::NetworkError,
                    ApiError::Api { status, .. } if status.as_u16() == 404 => {
                        IdcliExitCode::NotFound
                    }
                    ApiError::Api { status, .. }
                        if status.as_u16() == 401 || status.as_u16() == 403 =>
                    {
                        IdcliExitCode::AuthError
                    }
                    ApiError::Api { .. } => IdcliExitCode::ApiError,
                    ApiError::ConfigurationError(_) => IdcliExitCode::ConfigError,
                    ApiError::KeyringError(_) => IdcliExitCode::AuthError,
                },
            },
        }
    }

    /// The raw response body of an API error, when there is one.
    ///
    /// Error responses pass through to stdout unmodified so that callers
    /// can parse the server's own error document.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            CliError::ActionError(CliActionError::ApiError(ApiError::Api { body, .. })) => {
                Some(body.as_str())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn unsupported_subcommand_is_a_usage_error() {
        let error = CliError::UnsupportedSubcommand("bogus".to_string());
        assert_eq!(error.exit_code(), IdcliExitCode::UsageError);
        assert!(error.response_body().is_none());
    }

    #[test]
    fn api_errors_map_by_status() {
        let not_found = CliError::ActionError(CliActionError::ApiError(ApiError::Api {
            status: StatusCode::NOT_FOUND,
            body: "{\"errorCode\":\"E0000007\"}".to_string(),
        }));
        assert_eq!(not_found.exit_code(), IdcliExitCode::NotFound);

        let unauthorized = CliError::ActionError(CliActionError::ApiError(ApiError::Api {
            status: StatusCode::UNAUTHORIZED,
            body: String::new(),
        }));
        assert_eq!(unauthorized.exit_code(), IdcliExitCode::AuthError);

        let server_error = CliError::ActionError(CliActionError::ApiError(ApiError::Api {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: String::new(),
        }));
        assert_eq!(server_error.exit_code(), IdcliExitCode::ApiError);
    }

    #[test]
    fn api_error_body_passes_through() {
        let error = CliError::ActionError(CliActionError::ApiError(ApiError::Api {
            status: StatusCode::BAD_REQUEST,
            body: "{\"errorCode\":\"E0000001\"}".to_string(),
        }));
        assert_eq!(error.response_body(), Some("{\"errorCode\":\"E0000001\"}"));
    }

    #[test]
    fn missing_token_is_an_auth_error() {
        let error = CliError::ActionError(CliActionError::ApiError(ApiError::MissingApiToken));
        assert_eq!(error.exit_code(), IdcliExitCode::AuthError);
    }
}
