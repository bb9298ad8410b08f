//! Application command definitions and dispatch.

use clap::{ArgMatches, Command};

use crate::commands::params::{
    activate_parameter, after_parameter, app_id_parameter, data_parameter, expand_parameter,
    filter_parameter, format_parameter, format_pretty_parameter, group_id_parameter,
    include_non_deleted_parameter, limit_parameter, q_parameter, send_email_parameter,
    user_id_parameter, COMMAND_ACTIVATE, COMMAND_APP, COMMAND_ASSIGN_GROUP, COMMAND_ASSIGN_USER,
    COMMAND_CREATE, COMMAND_DEACTIVATE, COMMAND_DELETE, COMMAND_GET, COMMAND_LIST,
    COMMAND_LIST_GROUPS, COMMAND_LIST_USERS, COMMAND_UNASSIGN_GROUP, COMMAND_UNASSIGN_USER,
    COMMAND_UPDATE,
};
use crate::error::CliError;

/// Create the app command with all its subcommands.
pub fn app_command() -> Command {
    Command::new(COMMAND_APP)
        .about("Manage applications")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List applications")
                .visible_alias("ls")
                .arg(q_parameter())
                .arg(filter_parameter())
                .arg(limit_parameter())
                .arg(after_parameter())
                .arg(expand_parameter())
                .arg(include_non_deleted_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get an application")
                .arg(app_id_parameter())
                .arg(expand_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_CREATE)
                .about("Create an application")
                .arg(data_parameter().required(true))
                .arg(activate_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_UPDATE)
                .about("Update an application")
                .arg(app_id_parameter())
                .arg(data_parameter().required(true))
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_DELETE)
                .about("Delete a deactivated application")
                .visible_alias("rm")
                .arg(app_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_ACTIVATE)
                .about("Activate an application")
                .arg(app_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_DEACTIVATE)
                .about("Deactivate an application")
                .arg(app_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_LIST_USERS)
                .about("List the users assigned to an application")
                .arg(app_id_parameter())
                .arg(q_parameter())
                .arg(limit_parameter())
                .arg(after_parameter())
                .arg(expand_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_ASSIGN_USER)
                .about("Assign a user to an application")
                .arg(app_id_parameter())
                .arg(data_parameter().required(true))
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_UNASSIGN_USER)
                .about("Unassign a user from an application")
                .arg(app_id_parameter())
                .arg(user_id_parameter())
                .arg(send_email_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_LIST_GROUPS)
                .about("List the group assignments for an application")
                .arg(app_id_parameter())
                .arg(q_parameter())
                .arg(limit_parameter())
                .arg(after_parameter())
                .arg(expand_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_ASSIGN_GROUP)
                .about("Assign a group to an application")
                .arg(app_id_parameter())
                .arg(group_id_parameter())
                .arg(data_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_UNASSIGN_GROUP)
                .about("Unassign a group from an application")
                .arg(app_id_parameter())
                .arg(group_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
}

/// Execute app subcommands based on the parsed arguments.
pub async fn execute_app_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_LIST, sub_matches)) => crate::actions::apps::list_apps(sub_matches).await?,
        Some((COMMAND_GET, sub_matches)) => crate::actions::apps::get_app(sub_matches).await?,
        Some((COMMAND_CREATE, sub_matches)) => {
            crate::actions::apps::create_app(sub_matches).await?
        }
        Some((COMMAND_UPDATE, sub_matches)) => {
            crate::actions::apps::update_app(sub_matches).await?
        }
        Some((COMMAND_DELETE, sub_matches)) => {
            crate::actions::apps::delete_app(sub_matches).await?
        }
        Some((COMMAND_ACTIVATE, sub_matches)) => {
            crate::actions::apps::activate_app(sub_matches).await?
        }
        Some((COMMAND_DEACTIVATE, sub_matches)) => {
            crate::actions::apps::deactivate_app(sub_matches).await?
        }
        Some((COMMAND_LIST_USERS, sub_matches)) => {
            crate::actions::apps::list_app_users(sub_matches).await?
        }
        Some((COMMAND_ASSIGN_USER, sub_matches)) => {
            crate::actions::apps::assign_user_to_app(sub_matches).await?
        }
        Some((COMMAND_UNASSIGN_USER, sub_matches)) => {
            crate::actions::apps::unassign_user_from_app(sub_matches).await?
        }
        Some((COMMAND_LIST_GROUPS, sub_matches)) => {
            crate::actions::apps::list_app_groups(sub_matches).await?
        }
        Some((COMMAND_ASSIGN_GROUP, sub_matches)) => {
            crate::actions::apps::assign_group_to_app(sub_matches).await?
        }
        Some((COMMAND_UNASSIGN_GROUP, sub_matches)) => {
            crate::actions::apps::unassign_group_from_app(sub_matches).await?
        }
        _ => {
            return Err(CliError::UnsupportedSubcommand(
                crate::cli::extract_subcommand_name(matches),
            ))
        }
    }
    Ok(())
}
