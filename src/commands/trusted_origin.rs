//! Trusted origin command definitions and dispatch.

use clap::{ArgMatches, Command};

use crate::commands::params::{
    after_parameter, data_parameter, filter_parameter, format_parameter,
    format_pretty_parameter, limit_parameter, q_parameter, trusted_origin_id_parameter,
    COMMAND_ACTIVATE, COMMAND_CREATE, COMMAND_DEACTIVATE, COMMAND_DELETE, COMMAND_GET,
    COMMAND_LIST, COMMAND_TRUSTED_ORIGIN, COMMAND_UPDATE,
};
use crate::error::CliError;

/// Create the trusted-origin command with all its subcommands.
pub fn trusted_origin_command() -> Command {
    Command::new(COMMAND_TRUSTED_ORIGIN)
        .about("Manage trusted origins for CORS and redirects")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List trusted origins")
                .visible_alias("ls")
                .arg(q_parameter())
                .arg(filter_parameter())
                .arg(limit_parameter())
                .arg(after_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get a trusted origin")
                .arg(trusted_origin_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_CREATE)
                .about("Create a trusted origin")
                .arg(data_parameter().required(true))
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_UPDATE)
                .about("Update a trusted origin")
                .arg(trusted_origin_id_parameter())
                .arg(data_parameter().required(true))
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_DELETE)
                .about("Delete a trusted origin")
                .visible_alias("rm")
                .arg(trusted_origin_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_ACTIVATE)
                .about("Activate a trusted origin")
                .arg(trusted_origin_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_DEACTIVATE)
                .about("Deactivate a trusted origin")
                .arg(trusted_origin_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
}

/// Execute trusted-origin subcommands based on the parsed arguments.
pub async fn execute_trusted_origin_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_LIST, sub_matches)) => {
            crate::actions::trusted_origins::list_trusted_origins(sub_matches).await?
        }
        Some((COMMAND_GET, sub_matches)) => {
            crate::actions::trusted_origins::get_trusted_origin(sub_matches).await?
        }
        Some((COMMAND_CREATE, sub_matches)) => {
            crate::actions::trusted_origins::create_trusted_origin(sub_matches).await?
        }
        Some((COMMAND_UPDATE, sub_matches)) => {
            crate::actions::trusted_origins::update_trusted_origin(sub_matches).await?
        }
        Some((COMMAND_DELETE, sub_matches)) => {
            crate::actions::trusted_origins::delete_trusted_origin(sub_matches).await?
        }
        Some((COMMAND_ACTIVATE, sub_matches)) => {
            crate::actions::trusted_origins::activate_trusted_origin(sub_matches).await?
        }
        Some((COMMAND_DEACTIVATE, sub_matches)) => {
            crate::actions::trusted_origins::deactivate_trusted_origin(sub_matches).await?
        }
        _ => {
            return Err(CliError::UnsupportedSubcommand(
                crate::cli::extract_subcommand_name(matches),
            ))
        }
    }
    Ok(())
}
