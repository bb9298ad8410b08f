//! User command definitions and dispatch.
//!
//! Every subcommand maps to exactly one API operation on the users
//! resource, including the lifecycle transitions.

use clap::{ArgMatches, Command};

use crate::commands::params::{
    activate_parameter, after_parameter, data_parameter, filter_parameter, format_parameter,
    format_pretty_parameter, limit_parameter, q_parameter, search_parameter, send_email_parameter,
    sort_by_parameter, sort_order_parameter, user_id_parameter, COMMAND_ACTIVATE, COMMAND_CREATE,
    COMMAND_DEACTIVATE, COMMAND_DELETE, COMMAND_EXPIRE_PASSWORD, COMMAND_GET,
    COMMAND_LIST, COMMAND_LIST_APP_LINKS, COMMAND_LIST_GROUPS, COMMAND_RESET_FACTORS,
    COMMAND_RESET_PASSWORD, COMMAND_SUSPEND, COMMAND_UNLOCK, COMMAND_UNSUSPEND, COMMAND_UPDATE,
    COMMAND_USER,
};
use crate::error::CliError;

/// Create the user command with all its subcommands.
pub fn user_command() -> Command {
    Command::new(COMMAND_USER)
        .about("Manage users")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List users")
                .visible_alias("ls")
                .arg(q_parameter())
                .arg(filter_parameter())
                .arg(search_parameter())
                .arg(limit_parameter())
                .arg(after_parameter())
                .arg(sort_by_parameter())
                .arg(sort_order_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get a user")
                .arg(user_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_CREATE)
                .about("Create a user")
                .arg(data_parameter().required(true))
                .arg(activate_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_UPDATE)
                .about("Update a user's profile")
                .arg(user_id_parameter())
                .arg(data_parameter().required(true))
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_DELETE)
                .about("Delete a deactivated user")
                .visible_alias("rm")
                .arg(user_id_parameter())
                .arg(send_email_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_ACTIVATE)
                .about("Activate a user")
                .arg(user_id_parameter())
                .arg(send_email_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_DEACTIVATE)
                .about("Deactivate a user")
                .arg(user_id_parameter())
                .arg(send_email_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_SUSPEND)
                .about("Suspend a user")
                .arg(user_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_UNSUSPEND)
                .about("Return a suspended user to active")
                .arg(user_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_UNLOCK)
                .about("Unlock a locked-out user")
                .arg(user_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_EXPIRE_PASSWORD)
                .about("Expire a user's password")
                .arg(user_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_RESET_PASSWORD)
                .about("Start the password reset flow for a user")
                .arg(user_id_parameter())
                .arg(send_email_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_RESET_FACTORS)
                .about("Reset all enrolled factors for a user")
                .arg(user_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_LIST_GROUPS)
                .about("List the groups a user belongs to")
                .arg(user_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_LIST_APP_LINKS)
                .about("List the app links assigned to a user")
                .arg(user_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
}

/// Execute user subcommands based on the parsed arguments.
pub async fn execute_user_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_LIST, sub_matches)) => {
            crate::actions::users::list_users(sub_matches).await?
        }
        Some((COMMAND_GET, sub_matches)) => crate::actions::users::get_user(sub_matches).await?,
        Some((COMMAND_CREATE, sub_matches)) => {
            crate::actions::users::create_user(sub_matches).await?
        }
        Some((COMMAND_UPDATE, sub_matches)) => {
            crate::actions::users::update_user(sub_matches).await?
        }
        Some((COMMAND_DELETE, sub_matches)) => {
            crate::actions::users::delete_user(sub_matches).await?
        }
        Some((COMMAND_ACTIVATE, sub_matches)) => {
            crate::actions::users::activate_user(sub_matches).await?
        }
        Some((COMMAND_DEACTIVATE, sub_matches)) => {
            crate::actions::users::deactivate_user(sub_matches).await?
        }
        Some((COMMAND_SUSPEND, sub_matches)) => {
            crate::actions::users::suspend_user(sub_matches).await?
        }
        Some((COMMAND_UNSUSPEND, sub_matches)) => {
            crate::actions::users::unsuspend_user(sub_matches).await?
        }
        Some((COMMAND_UNLOCK, sub_matches)) => {
            crate::actions::users::unlock_user(sub_matches).await?
        }
        Some((COMMAND_EXPIRE_PASSWORD, sub_matches)) => {
            crate::actions::users::expire_user_password(sub_matches).await?
        }
        Some((COMMAND_RESET_PASSWORD, sub_matches)) => {
            crate::actions::users::reset_user_password(sub_matches).await?
        }
        Some((COMMAND_RESET_FACTORS, sub_matches)) => {
            crate::actions::users::reset_user_factors(sub_matches).await?
        }
        Some((COMMAND_LIST_GROUPS, sub_matches)) => {
            crate::actions::users::list_user_groups(sub_matches).await?
        }
        Some((COMMAND_LIST_APP_LINKS, sub_matches)) => {
            crate::actions::users::list_user_app_links(sub_matches).await?
        }
        _ => {
            return Err(CliError::UnsupportedSubcommand(
                crate::cli::extract_subcommand_name(matches),
            ))
        }
    }
    Ok(())
}
