//! Resource set command definitions and dispatch.
//!
//! Bindings attach a custom role to a resource set, so binding operations
//! address a binding by role ID.

use clap::{ArgMatches, Command};

use crate::commands::params::{
    after_parameter, data_parameter, format_parameter, format_pretty_parameter, limit_parameter,
    resource_id_parameter, resource_set_id_parameter, role_id_parameter, COMMAND_ADD_RESOURCES,
    COMMAND_CREATE, COMMAND_CREATE_BINDING, COMMAND_DELETE, COMMAND_DELETE_BINDING,
    COMMAND_DELETE_RESOURCE, COMMAND_GET, COMMAND_GET_BINDING, COMMAND_LIST,
    COMMAND_LIST_BINDINGS, COMMAND_LIST_RESOURCES, COMMAND_RESOURCE_SET, COMMAND_UPDATE,
};
use crate::error::CliError;

/// Create the resource-set command with all its subcommands.
pub fn resource_set_command() -> Command {
    Command::new(COMMAND_RESOURCE_SET)
        .about("Manage resource sets, their resources, and role bindings")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List resource sets")
                .visible_alias("ls")
                .arg(limit_parameter())
                .arg(after_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get a resource set")
                .arg(resource_set_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_CREATE)
                .about("Create a resource set")
                .arg(data_parameter().required(true))
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_UPDATE)
                .about("Update a resource set")
                .arg(resource_set_id_parameter())
                .arg(data_parameter().required(true))
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_DELETE)
                .about("Delete a resource set")
                .visible_alias("rm")
                .arg(resource_set_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_LIST_RESOURCES)
                .about("List the resources of a resource set")
                .arg(resource_set_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_ADD_RESOURCES)
                .about("Add resources to a resource set")
                .arg(resource_set_id_parameter())
                .arg(data_parameter().required(true))
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_DELETE_RESOURCE)
                .about("Remove a resource from a resource set")
                .arg(resource_set_id_parameter())
                .arg(resource_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_LIST_BINDINGS)
                .about("List the role bindings of a resource set")
                .arg(resource_set_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET_BINDING)
                .about("Get a role binding of a resource set")
                .arg(resource_set_id_parameter())
                .arg(role_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_CREATE_BINDING)
                .about("Create a role binding on a resource set")
                .arg(resource_set_id_parameter())
                .arg(data_parameter().required(true))
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_DELETE_BINDING)
                .about("Delete a role binding from a resource set")
                .arg(resource_set_id_parameter())
                .arg(role_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
}

/// Execute resource-set subcommands based on the parsed arguments.
pub async fn execute_resource_set_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_LIST, sub_matches)) => {
            crate::actions::resource_sets::list_resource_sets(sub_matches).await?
        }
        Some((COMMAND_GET, sub_matches)) => {
            crate::actions::resource_sets::get_resource_set(sub_matches).await?
        }
        Some((COMMAND_CREATE, sub_matches)) => {
            crate::actions::resource_sets::create_resource_set(sub_matches).await?
        }
        Some((COMMAND_UPDATE, sub_matches)) => {
            crate::actions::resource_sets::update_resource_set(sub_matches).await?
        }
        Some((COMMAND_DELETE, sub_matches)) => {
            crate::actions::resource_sets::delete_resource_set(sub_matches).await?
        }
        Some((COMMAND_LIST_RESOURCES, sub_matches)) => {
            crate::actions::resource_sets::list_resource_set_resources(sub_matches).await?
        }
        Some((COMMAND_ADD_RESOURCES, sub_matches)) => {
            crate::actions::resource_sets::add_resource_set_resources(sub_matches).await?
        }
        Some((COMMAND_DELETE_RESOURCE, sub_matches)) => {
            crate::actions::resource_sets::delete_resource_set_resource(sub_matches).await?
        }
        Some((COMMAND_LIST_BINDINGS, sub_matches)) => {
            crate::actions::resource_sets::list_resource_set_bindings(sub_matches).await?
        }
        Some((COMMAND_GET_BINDING, sub_matches)) => {
            crate::actions::resource_sets::get_resource_set_binding(sub_matches).await?
        }
        Some((COMMAND_CREATE_BINDING, sub_matches)) => {
            crate::actions::resource_sets::create_resource_set_binding(sub_matches).await?
        }
        Some((COMMAND_DELETE_BINDING, sub_matches)) => {
            crate::actions::resource_sets::delete_resource_set_binding(sub_matches).await?
        }
        _ => {
            return Err(CliError::UnsupportedSubcommand(
                crate::cli::extract_subcommand_name(matches),
            ))
        }
    }
    Ok(())
}
