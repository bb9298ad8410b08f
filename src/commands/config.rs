//! Configuration command definitions and dispatch.
//!
//! All configuration subcommands are local operations.

use clap::{ArgMatches, Command};

use crate::commands::params::{
    file_parameter, output_file_parameter, url_parameter, COMMAND_CONFIG, COMMAND_EXPORT,
    COMMAND_GET, COMMAND_IMPORT, COMMAND_PATH, COMMAND_SET,
};
use crate::error::CliError;

/// Create the config command with all its subcommands.
pub fn config_command() -> Command {
    Command::new(COMMAND_CONFIG)
        .about("Manage the local configuration")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new(COMMAND_GET).about("Print the current configuration as YAML"))
        .subcommand(Command::new(COMMAND_PATH).about("Print the configuration file path"))
        .subcommand(
            Command::new(COMMAND_SET)
                .about("Set the organization base URL")
                .arg(url_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_EXPORT)
                .about("Export the configuration to a file")
                .arg(output_file_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_IMPORT)
                .about("Import the configuration from a file")
                .arg(file_parameter()),
        )
}

/// Execute config subcommands based on the parsed arguments.
pub fn execute_config_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_GET, _)) => crate::actions::config::get_configuration()?,
        Some((COMMAND_PATH, _)) => crate::actions::config::get_configuration_path()?,
        Some((COMMAND_SET, sub_matches)) => crate::actions::config::set_org(sub_matches)?,
        Some((COMMAND_EXPORT, sub_matches)) => {
            crate::actions::config::export_configuration(sub_matches)?
        }
        Some((COMMAND_IMPORT, sub_matches)) => {
            crate::actions::config::import_configuration(sub_matches)?
        }
        _ => {
            return Err(CliError::UnsupportedSubcommand(
                crate::cli::extract_subcommand_name(matches),
            ))
        }
    }
    Ok(())
}
