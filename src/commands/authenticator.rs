//! Authenticator command definitions and dispatch.
//!
//! Method operations address a method by its type (for example `otp` or
//! `push`) under a parent authenticator.

use clap::{ArgMatches, Command};

use crate::commands::params::{
    activate_parameter, authenticator_id_parameter, data_parameter, format_parameter,
    format_pretty_parameter,
    method_type_parameter, COMMAND_ACTIVATE, COMMAND_ACTIVATE_METHOD, COMMAND_AUTHENTICATOR,
    COMMAND_CREATE, COMMAND_DEACTIVATE, COMMAND_DEACTIVATE_METHOD, COMMAND_GET,
    COMMAND_GET_METHOD, COMMAND_LIST, COMMAND_LIST_METHODS, COMMAND_UPDATE, COMMAND_UPDATE_METHOD,
};
use crate::error::CliError;

/// Create the authenticator command with all its subcommands.
pub fn authenticator_command() -> Command {
    Command::new(COMMAND_AUTHENTICATOR)
        .about("Manage authenticators and authenticator methods")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List all authenticators")
                .visible_alias("ls")
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get an authenticator")
                .arg(authenticator_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_CREATE)
                .about("Create an authenticator")
                .arg(data_parameter().required(true))
                .arg(activate_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_UPDATE)
                .about("Update an authenticator")
                .arg(authenticator_id_parameter())
                .arg(data_parameter().required(true))
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_ACTIVATE)
                .about("Activate an authenticator")
                .arg(authenticator_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_DEACTIVATE)
                .about("Deactivate an authenticator")
                .arg(authenticator_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_LIST_METHODS)
                .about("List the methods of an authenticator")
                .arg(authenticator_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET_METHOD)
                .about("Get an authenticator method")
                .arg(authenticator_id_parameter())
                .arg(method_type_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_UPDATE_METHOD)
                .about("Update an authenticator method")
                .arg(authenticator_id_parameter())
                .arg(method_type_parameter())
                .arg(data_parameter().required(true))
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_ACTIVATE_METHOD)
                .about("Activate an authenticator method")
                .arg(authenticator_id_parameter())
                .arg(method_type_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_DEACTIVATE_METHOD)
                .about("Deactivate an authenticator method")
                .arg(authenticator_id_parameter())
                .arg(method_type_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
}

/// Execute authenticator subcommands based on the parsed arguments.
pub async fn execute_authenticator_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_LIST, sub_matches)) => {
            crate::actions::authenticators::list_authenticators(sub_matches).await?
        }
        Some((COMMAND_GET, sub_matches)) => {
            crate::actions::authenticators::get_authenticator(sub_matches).await?
        }
        Some((COMMAND_CREATE, sub_matches)) => {
            crate::actions::authenticators::create_authenticator(sub_matches).await?
        }
        Some((COMMAND_UPDATE, sub_matches)) => {
            crate::actions::authenticators::update_authenticator(sub_matches).await?
        }
        Some((COMMAND_ACTIVATE, sub_matches)) => {
            crate::actions::authenticators::activate_authenticator(sub_matches).await?
        }
        Some((COMMAND_DEACTIVATE, sub_matches)) => {
            crate::actions::authenticators::deactivate_authenticator(sub_matches).await?
        }
        Some((COMMAND_LIST_METHODS, sub_matches)) => {
            crate::actions::authenticators::list_authenticator_methods(sub_matches).await?
        }
        Some((COMMAND_GET_METHOD, sub_matches)) => {
            crate::actions::authenticators::get_authenticator_method(sub_matches).await?
        }
        Some((COMMAND_UPDATE_METHOD, sub_matches)) => {
            crate::actions::authenticators::update_authenticator_method(sub_matches).await?
        }
        Some((COMMAND_ACTIVATE_METHOD, sub_matches)) => {
            crate::actions::authenticators::activate_authenticator_method(sub_matches).await?
        }
        Some((COMMAND_DEACTIVATE_METHOD, sub_matches)) => {
            crate::actions::authenticators::deactivate_authenticator_method(sub_matches).await?
        }
        _ => {
            return Err(CliError::UnsupportedSubcommand(
                crate::cli::extract_subcommand_name(matches),
            ))
        }
    }
    Ok(())
}
