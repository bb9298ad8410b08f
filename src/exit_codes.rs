//! Custom exit codes for the idcli application
//!
//! This module defines specific exit codes for different error conditions
//! to make scripting and automation easier.

/// Custom exit codes for idcli
///
/// These codes follow the BSD sysexits.h conventions where possible:
/// - 0: Success
/// - 64-78: Standard exit codes from sysexits.h
/// - 100+: Custom application-specific codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdcliExitCode {
    /// Success (0) - Command completed successfully
    Success = 0,

    /// Command line usage error (64) - User input error
    UsageError = 64,

    /// Data format error (65) - Input data was incorrect
    DataError = 65,

    /// Addressee unknown (67) - User or resource not found
    NotFound = 67,

    /// Internal software error (70) - Unexpected application error
    SoftwareError = 70,

    /// Configuration error (78) - Application configuration issue
    ConfigError = 78,

    /// Authentication error (100) - Missing or rejected credentials
    AuthError = 100,

    /// Network error (101) - Connection or communication issues
    NetworkError = 101,

    /// API error (102) - Remote API returned an error
    ApiError = 102,
}

impl IdcliExitCode {
    /// Convert to numeric exit code
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Get descriptive message for the exit code
    pub fn message(&self) -> &'static str {
        match self {
            IdcliExitCode::Success => "Success",
            IdcliExitCode::UsageError => "Command line usage error",
            IdcliExitCode::DataError => "Data format error",
            IdcliExitCode::NotFound => "Resource not found",
            IdcliExitCode::SoftwareError => "Internal software error",
            IdcliExitCode::ConfigError => "Configuration error",
            IdcliExitCode::AuthError => "Authentication error",
            IdcliExitCode::NetworkError => "Network communication error",
            IdcliExitCode::ApiError => "Remote API error",
        }
    }
}

impl From<IdcliExitCode> for i32 {
    fn from(code: IdcliExitCode) -> Self {
        code.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_zero() {
        assert_eq!(IdcliExitCode::Success.code(), 0);
    }

    #[test]
    fn application_codes_do_not_collide_with_sysexits() {
        assert_eq!(IdcliExitCode::AuthError.code(), 100);
        assert_eq!(IdcliExitCode::NetworkError.code(), 101);
        assert_eq!(IdcliExitCode::ApiError.code(), 102);
    }

    #[test]
    fn messages_are_present() {
        assert_eq!(IdcliExitCode::ConfigError.message(), "Configuration error");
        assert_eq!(
            IdcliExitCode::UsageError.message(),
            "Command line usage error"
        );
    }
}
