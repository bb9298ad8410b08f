//! Authentication command definitions and dispatch.
//!
//! The API token is held in the keyring; `login` stores it, `logout`
//! removes it, and `status` reports where a token would come from.

use clap::{ArgMatches, Command};

use crate::commands::params::{
    token_parameter, COMMAND_AUTH, COMMAND_LOGIN, COMMAND_LOGOUT, COMMAND_STATUS,
};
use crate::error::CliError;

/// Create the auth command with all its subcommands.
pub fn auth_command() -> Command {
    Command::new(COMMAND_AUTH)
        .about("Manage the stored API token")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_LOGIN)
                .about("Store an API token in the keyring")
                .arg(token_parameter()),
        )
        .subcommand(Command::new(COMMAND_LOGOUT).about("Remove the API token from the keyring"))
        .subcommand(Command::new(COMMAND_STATUS).about("Report where the API token comes from"))
}

/// Execute auth subcommands based on the parsed arguments.
pub fn execute_auth_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_LOGIN, sub_matches)) => crate::actions::auth::login(sub_matches)?,
        Some((COMMAND_LOGOUT, _)) => crate::actions::auth::logout()?,
        Some((COMMAND_STATUS, _)) => crate::actions::auth::status()?,
        _ => {
            return Err(CliError::UnsupportedSubcommand(
                crate::cli::extract_subcommand_name(matches),
            ))
        }
    }
    Ok(())
}
