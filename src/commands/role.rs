//! Custom role command definitions and dispatch.

use clap::{ArgMatches, Command};

use crate::commands::params::{
    after_parameter, data_parameter, format_parameter, format_pretty_parameter,
    limit_parameter, permission_parameter, role_id_parameter, COMMAND_CREATE, COMMAND_DELETE,
    COMMAND_DELETE_PERMISSION, COMMAND_GET, COMMAND_GET_PERMISSION, COMMAND_LIST,
    COMMAND_LIST_PERMISSIONS, COMMAND_ROLE, COMMAND_UPDATE, COMMAND_UPSERT_PERMISSION,
};
use crate::error::CliError;

/// Create the role command with all its subcommands.
pub fn role_command() -> Command {
    Command::new(COMMAND_ROLE)
        .about("Manage custom admin roles and their permissions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List custom roles")
                .visible_alias("ls")
                .arg(limit_parameter())
                .arg(after_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get a custom role")
                .arg(role_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_CREATE)
                .about("Create a custom role")
                .arg(data_parameter().required(true))
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_UPDATE)
                .about("Update a custom role")
                .arg(role_id_parameter())
                .arg(data_parameter().required(true))
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_DELETE)
                .about("Delete a custom role")
                .visible_alias("rm")
                .arg(role_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_LIST_PERMISSIONS)
                .about("List the permissions of a custom role")
                .arg(role_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET_PERMISSION)
                .about("Get a permission of a custom role")
                .arg(role_id_parameter())
                .arg(permission_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_UPSERT_PERMISSION)
                .about("Add or update a permission of a custom role")
                .arg(role_id_parameter())
                .arg(permission_parameter())
                .arg(data_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_DELETE_PERMISSION)
                .about("Delete a permission from a custom role")
                .arg(role_id_parameter())
                .arg(permission_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
}

/// Execute role subcommands based on the parsed arguments.
pub async fn execute_role_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_LIST, sub_matches)) => {
            crate::actions::roles::list_roles(sub_matches).await?
        }
        Some((COMMAND_GET, sub_matches)) => crate::actions::roles::get_role(sub_matches).await?,
        Some((COMMAND_CREATE, sub_matches)) => {
            crate::actions::roles::create_role(sub_matches).await?
        }
        Some((COMMAND_UPDATE, sub_matches)) => {
            crate::actions::roles::update_role(sub_matches).await?
        }
        Some((COMMAND_DELETE, sub_matches)) => {
            crate::actions::roles::delete_role(sub_matches).await?
        }
        Some((COMMAND_LIST_PERMISSIONS, sub_matches)) => {
            crate::actions::roles::list_role_permissions(sub_matches).await?
        }
        Some((COMMAND_GET_PERMISSION, sub_matches)) => {
            crate::actions::roles::get_role_permission(sub_matches).await?
        }
        Some((COMMAND_UPSERT_PERMISSION, sub_matches)) => {
            crate::actions::roles::upsert_role_permission(sub_matches).await?
        }
        Some((COMMAND_DELETE_PERMISSION, sub_matches)) => {
            crate::actions::roles::delete_role_permission(sub_matches).await?
        }
        _ => {
            return Err(CliError::UnsupportedSubcommand(
                crate::cli::extract_subcommand_name(matches),
            ))
        }
    }
    Ok(())
}
