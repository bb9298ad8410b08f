//! Group command definitions and dispatch.

use clap::{ArgMatches, Command};

use crate::commands::params::{
    after_parameter, data_parameter, filter_parameter, format_parameter,
    format_pretty_parameter, group_id_parameter, limit_parameter, q_parameter, search_parameter,
    user_id_parameter, COMMAND_ADD_USER, COMMAND_CREATE, COMMAND_DELETE, COMMAND_GET,
    COMMAND_GROUP, COMMAND_LIST, COMMAND_LIST_APPS, COMMAND_LIST_USERS, COMMAND_REMOVE_USER,
    COMMAND_UPDATE,
};
use crate::error::CliError;

/// Create the group command with all its subcommands.
pub fn group_command() -> Command {
    Command::new(COMMAND_GROUP)
        .about("Manage groups")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List groups")
                .visible_alias("ls")
                .arg(q_parameter())
                .arg(filter_parameter())
                .arg(search_parameter())
                .arg(limit_parameter())
                .arg(after_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get a group")
                .arg(group_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_CREATE)
                .about("Create a group")
                .arg(data_parameter().required(true))
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_UPDATE)
                .about("Update a group's profile")
                .arg(group_id_parameter())
                .arg(data_parameter().required(true))
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_DELETE)
                .about("Delete a group")
                .visible_alias("rm")
                .arg(group_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_LIST_USERS)
                .about("List the members of a group")
                .arg(group_id_parameter())
                .arg(limit_parameter())
                .arg(after_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_ADD_USER)
                .about("Add a user to a group")
                .arg(group_id_parameter())
                .arg(user_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_REMOVE_USER)
                .about("Remove a user from a group")
                .arg(group_id_parameter())
                .arg(user_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_LIST_APPS)
                .about("List the apps assigned to a group")
                .arg(group_id_parameter())
                .arg(limit_parameter())
                .arg(after_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
}

/// Execute group subcommands based on the parsed arguments.
pub async fn execute_group_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_LIST, sub_matches)) => {
            crate::actions::groups::list_groups(sub_matches).await?
        }
        Some((COMMAND_GET, sub_matches)) => crate::actions::groups::get_group(sub_matches).await?,
        Some((COMMAND_CREATE, sub_matches)) => {
            crate::actions::groups::create_group(sub_matches).await?
        }
        Some((COMMAND_UPDATE, sub_matches)) => {
            crate::actions::groups::update_group(sub_matches).await?
        }
        Some((COMMAND_DELETE, sub_matches)) => {
            crate::actions::groups::delete_group(sub_matches).await?
        }
        Some((COMMAND_LIST_USERS, sub_matches)) => {
            crate::actions::groups::list_group_users(sub_matches).await?
        }
        Some((COMMAND_ADD_USER, sub_matches)) => {
            crate::actions::groups::add_user_to_group(sub_matches).await?
        }
        Some((COMMAND_REMOVE_USER, sub_matches)) => {
            crate::actions::groups::remove_user_from_group(sub_matches).await?
        }
        Some((COMMAND_LIST_APPS, sub_matches)) => {
            crate::actions::groups::list_group_apps(sub_matches).await?
        }
        _ => {
            return Err(CliError::UnsupportedSubcommand(
                crate::cli::extract_subcommand_name(matches),
            ))
        }
    }
    Ok(())
}
