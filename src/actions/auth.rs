//! Credential management action implementations.
//!
//! The API token lives in the OS keyring (or the file-backed dev store).
//! These commands never send the token anywhere and never print it.

use clap::ArgMatches;
use tracing::debug;

use crate::actions::CliActionError;
use crate::commands::params::PARAMETER_TOKEN;
use crate::keyring::{resolve_api_token, Keyring, API_TOKEN_ENV, API_TOKEN_KEY};

pub fn login(matches: &ArgMatches) -> Result<(), CliActionError> {
    let token = matches
        .get_one::<String>(PARAMETER_TOKEN)
        .expect("--token is required by clap");

    Keyring::default().put(API_TOKEN_KEY, token)?;
    debug!("API token stored");
    Ok(())
}

pub fn logout() -> Result<(), CliActionError> {
    Keyring::default().delete(API_TOKEN_KEY)?;
    debug!("API token removed");
    Ok(())
}

pub fn status() -> Result<(), CliActionError> {
    if std::env::var(API_TOKEN_ENV).map(|t| !t.is_empty()).unwrap_or(false) {
        println!("API token configured (from {})", API_TOKEN_ENV);
    } else if resolve_api_token()?.is_some() {
        println!("API token configured");
    } else {
        println!("No API token configured");
    }
    Ok(())
}
