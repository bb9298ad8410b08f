//! Output formatting for API responses.
//!
//! The CLI prints whatever body the server returned. The `json` format
//! re-serializes the body (optionally pretty-printed) when it parses as
//! JSON; the `raw` format passes the body through byte-for-byte.

use std::str::FromStr;
use strum::EnumIter;

pub const JSON: &str = "json";
pub const RAW: &str = "raw";

/// Error types that can occur during formatting operations
#[derive(Debug, thiserror::Error)]
pub enum FormattingError {
    /// Error when an unsupported output format is requested
    #[error("invalid output format {0}")]
    UnsupportedOutputFormat(String),

    #[error("JSON serialization error: {0}")]
    JsonSerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct OutputFormatOptions {
    pub pretty: bool,
}

impl Default for OutputFormatOptions {
    fn default() -> Self {
        OutputFormatOptions { pretty: false }
    }
}

/// Enum representing the supported output formats
#[derive(Debug, Clone, PartialEq, PartialOrd, EnumIter)]
pub enum OutputFormat {
    /// JSON (JavaScript Object Notation) format
    Json(OutputFormatOptions),
    /// Raw passthrough of the response body
    Raw,
}

impl OutputFormat {
    /// Returns a vector of all supported format names as strings
    pub fn names() -> Vec<&'static str> {
        vec![JSON, RAW]
    }

    pub fn from_string_with_options(
        format_str: &str,
        options: OutputFormatOptions,
    ) -> Result<OutputFormat, FormattingError> {
        let normalized_format = format_str.to_lowercase();
        match normalized_format.as_str() {
            JSON => Ok(OutputFormat::Json(options)),
            RAW => Ok(OutputFormat::Raw),
            _ => Err(FormattingError::UnsupportedOutputFormat(normalized_format)),
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Json(OutputFormatOptions::default())
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OutputFormat::Json(_) => write!(f, "json"),
            OutputFormat::Raw => write!(f, "raw"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FormattingError;

    fn from_str(format_str: &str) -> Result<OutputFormat, FormattingError> {
        Self::from_string_with_options(format_str, OutputFormatOptions::default())
    }
}

/// Format a response body according to the requested output format.
///
/// Bodies that do not parse as JSON are passed through verbatim even in
/// `json` mode; the contract of the CLI is to print what the server sent.
pub fn format_body(body: &str, format: &OutputFormat) -> Result<String, FormattingError> {
    match format {
        OutputFormat::Raw => Ok(body.to_string()),
        OutputFormat::Json(options) => match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => {
                if options.pretty {
                    Ok(serde_json::to_string_pretty(&value)?)
                } else {
                    Ok(serde_json::to_string(&value)?)
                }
            }
            Err(_) => Ok(body.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_format_names() {
        assert_eq!(
            OutputFormat::from_str("json").unwrap(),
            OutputFormat::Json(OutputFormatOptions::default())
        );
        assert_eq!(OutputFormat::from_str("RAW").unwrap(), OutputFormat::Raw);
    }

    #[test]
    fn rejects_unknown_format_names() {
        let result = OutputFormat::from_str("xml");
        assert!(matches!(
            result,
            Err(FormattingError::UnsupportedOutputFormat(_))
        ));
    }

    #[test]
    fn json_format_compacts_body() {
        let body = "{\n  \"id\": \"00u1\"\n}";
        let format = OutputFormat::Json(OutputFormatOptions { pretty: false });
        assert_eq!(format_body(body, &format).unwrap(), "{\"id\":\"00u1\"}");
    }

    #[test]
    fn json_format_pretty_prints_body() {
        let body = "{\"id\":\"00u1\"}";
        let format = OutputFormat::Json(OutputFormatOptions { pretty: true });
        let output = format_body(body, &format).unwrap();
        assert!(output.contains("\n"));
        assert!(output.contains("\"id\": \"00u1\""));
    }

    #[test]
    fn non_json_body_passes_through() {
        let body = "plain text error page";
        let format = OutputFormat::Json(OutputFormatOptions { pretty: true });
        assert_eq!(format_body(body, &format).unwrap(), body);
    }

    #[test]
    fn raw_format_passes_through() {
        let body = "{  \"a\" : 1 }";
        assert_eq!(format_body(body, &OutputFormat::Raw).unwrap(), body);
    }
}
