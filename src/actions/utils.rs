//! Shared helpers for the action handlers.
//!
//! Every resource command assembles its request the same way: collect query
//! parameters from flags, optionally read a raw JSON body from `--data`,
//! call the client, print the body. These helpers keep those steps uniform.

use clap::ArgMatches;
use serde_json::Value;
use std::fs;

use crate::actions::CliActionError;
use crate::admin_v1::ApiResponse;
use crate::commands::params::{PARAMETER_DATA, PARAMETER_FORMAT, PARAMETER_PRETTY};
use crate::format::{format_body, OutputFormat, OutputFormatOptions};

/// Build the output format from the `--format` and `--pretty` flags.
pub fn output_format_from_matches(matches: &ArgMatches) -> Result<OutputFormat, CliActionError> {
    let format_str = matches
        .get_one::<String>(PARAMETER_FORMAT)
        .map(|s| s.as_str())
        .unwrap_or(crate::format::JSON);
    let pretty = matches.get_flag(PARAMETER_PRETTY);

    Ok(OutputFormat::from_string_with_options(
        format_str,
        OutputFormatOptions { pretty },
    )?)
}

/// Append a string flag to the query, using the API's parameter name.
pub fn push_query(
    query: &mut Vec<(String, String)>,
    matches: &ArgMatches,
    parameter: &str,
    name: &str,
) {
    if let Some(value) = matches.get_one::<String>(parameter) {
        query.push((name.to_string(), value.to_owned()));
    }
}

/// Append a numeric flag to the query.
pub fn push_query_u32(
    query: &mut Vec<(String, String)>,
    matches: &ArgMatches,
    parameter: &str,
    name: &str,
) {
    if let Some(value) = matches.get_one::<u32>(parameter) {
        query.push((name.to_string(), value.to_string()));
    }
}

/// Append `name=true` to the query when the boolean flag is set.
///
/// Absent flags are omitted entirely so the server applies its own default.
pub fn push_flag(
    query: &mut Vec<(String, String)>,
    matches: &ArgMatches,
    parameter: &str,
    name: &str,
) {
    if matches.get_flag(parameter) {
        query.push((name.to_string(), "true".to_string()));
    }
}

/// Fetch a required path-parameter flag.
pub fn required<'a>(matches: &'a ArgMatches, parameter: &str) -> Result<&'a str, CliActionError> {
    matches
        .get_one::<String>(parameter)
        .map(|s| s.as_str())
        .ok_or_else(|| CliActionError::MissingRequiredArgument(parameter.to_string()))
}

/// Read the raw JSON request body from `--data`.
///
/// A value of the form `@path` reads the payload from a file. The payload is
/// parsed only to reject malformed JSON early; it is never validated against
/// a schema.
pub fn json_body(matches: &ArgMatches) -> Result<Value, CliActionError> {
    match optional_json_body(matches)? {
        Some(body) => Ok(body),
        None => Err(CliActionError::MissingRequiredArgument(
            PARAMETER_DATA.to_string(),
        )),
    }
}

/// Same as [`json_body`] but for operations where the body is optional.
pub fn optional_json_body(matches: &ArgMatches) -> Result<Option<Value>, CliActionError> {
    let data = match matches.get_one::<String>(PARAMETER_DATA) {
        Some(data) => data,
        None => return Ok(None),
    };

    let raw = match data.strip_prefix('@') {
        Some(path) => fs::read_to_string(path)?,
        None => data.to_owned(),
    };

    Ok(Some(serde_json::from_str(&raw)?))
}

/// Print the response body according to the requested output format.
///
/// Empty bodies (204 No Content and friends) print nothing.
pub fn print_response(
    response: &ApiResponse,
    matches: &ArgMatches,
) -> Result<(), CliActionError> {
    if response.is_empty() {
        return Ok(());
    }
    let format = output_format_from_matches(matches)?;
    println!("{}", format_body(&response.body, &format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{Arg, ArgAction, Command};
    use std::io::Write;

    fn matches_for(args: Vec<&str>) -> ArgMatches {
        Command::new("test")
            .arg(Arg::new(PARAMETER_DATA).long(PARAMETER_DATA).num_args(1))
            .arg(Arg::new(PARAMETER_FORMAT).long(PARAMETER_FORMAT).num_args(1))
            .arg(
                Arg::new(PARAMETER_PRETTY)
                    .long(PARAMETER_PRETTY)
                    .action(ArgAction::SetTrue),
            )
            .arg(Arg::new("q").long("q").num_args(1))
            .arg(
                Arg::new("limit")
                    .long("limit")
                    .num_args(1)
                    .value_parser(clap::value_parser!(u32)),
            )
            .arg(
                Arg::new("send-email")
                    .long("send-email")
                    .action(ArgAction::SetTrue),
            )
            .get_matches_from(args)
    }

    #[test]
    fn inline_json_body_parses() {
        let matches = matches_for(vec!["test", "--data", "{\"profile\":{}}"]);
        let body = json_body(&matches).unwrap();
        assert!(body.get("profile").is_some());
    }

    #[test]
    fn malformed_json_body_is_rejected() {
        let matches = matches_for(vec!["test", "--data", "{not json"]);
        assert!(matches!(
            json_body(&matches),
            Err(CliActionError::JsonError(_))
        ));
    }

    #[test]
    fn missing_body_is_rejected_when_required() {
        let matches = matches_for(vec!["test"]);
        assert!(matches!(
            json_body(&matches),
            Err(CliActionError::MissingRequiredArgument(_))
        ));
    }

    #[test]
    fn missing_body_is_none_when_optional() {
        let matches = matches_for(vec!["test"]);
        assert!(optional_json_body(&matches).unwrap().is_none());
    }

    #[test]
    fn body_reads_from_file_with_at_prefix() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"label\":\"example\"}}").unwrap();
        let data = format!("@{}", file.path().display());

        let matches = matches_for(vec!["test", "--data", &data]);
        let body = json_body(&matches).unwrap();
        assert_eq!(body["label"], "example");
    }

    #[test]
    fn query_helpers_collect_present_flags_only() {
        let matches = matches_for(vec![
            "test",
            "--q",
            "ann",
            "--limit",
            "25",
            "--send-email",
        ]);

        let mut query = Vec::new();
        push_query(&mut query, &matches, "q", "q");
        push_query_u32(&mut query, &matches, "limit", "limit");
        push_flag(&mut query, &matches, "send-email", "sendEmail");
        push_query(&mut query, &matches, PARAMETER_DATA, "never-present");

        assert_eq!(
            query,
            vec![
                ("q".to_string(), "ann".to_string()),
                ("limit".to_string(), "25".to_string()),
                ("sendEmail".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn output_format_defaults_to_json() {
        let matches = matches_for(vec!["test"]);
        let format = output_format_from_matches(&matches).unwrap();
        assert_eq!(format.to_string(), "json");
    }

    #[test]
    fn pretty_flag_is_honored() {
        let matches = matches_for(vec!["test", "--pretty"]);
        match output_format_from_matches(&matches).unwrap() {
            OutputFormat::Json(options) => assert!(options.pretty),
            other => panic!("unexpected format {:?}", other),
        }
    }
}
