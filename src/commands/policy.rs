//! Policy command definitions and dispatch.
//!
//! Covers both policies and their rules; rule operations take the parent
//! policy ID alongside the rule ID.

use clap::{ArgMatches, Command};

use crate::commands::params::{
    activate_parameter, data_parameter, expand_parameter, format_parameter,
    format_pretty_parameter, policy_id_parameter, policy_type_parameter, rule_id_parameter,
    status_parameter, COMMAND_ACTIVATE, COMMAND_ACTIVATE_RULE, COMMAND_CREATE,
    COMMAND_CREATE_RULE, COMMAND_DEACTIVATE, COMMAND_DEACTIVATE_RULE, COMMAND_DELETE,
    COMMAND_DELETE_RULE, COMMAND_GET, COMMAND_GET_RULE, COMMAND_LIST, COMMAND_LIST_RULES,
    COMMAND_POLICY, COMMAND_UPDATE, COMMAND_UPDATE_RULE,
};
use crate::error::CliError;

/// Create the policy command with all its subcommands.
pub fn policy_command() -> Command {
    Command::new(COMMAND_POLICY)
        .about("Manage policies and policy rules")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List policies of a given type")
                .visible_alias("ls")
                .arg(policy_type_parameter())
                .arg(status_parameter())
                .arg(expand_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get a policy")
                .arg(policy_id_parameter())
                .arg(expand_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_CREATE)
                .about("Create a policy")
                .arg(data_parameter().required(true))
                .arg(activate_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_UPDATE)
                .about("Update a policy")
                .arg(policy_id_parameter())
                .arg(data_parameter().required(true))
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_DELETE)
                .about("Delete a policy")
                .visible_alias("rm")
                .arg(policy_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_ACTIVATE)
                .about("Activate a policy")
                .arg(policy_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_DEACTIVATE)
                .about("Deactivate a policy")
                .arg(policy_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_LIST_RULES)
                .about("List the rules of a policy")
                .arg(policy_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET_RULE)
                .about("Get a policy rule")
                .arg(policy_id_parameter())
                .arg(rule_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_CREATE_RULE)
                .about("Create a policy rule")
                .arg(policy_id_parameter())
                .arg(data_parameter().required(true))
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_UPDATE_RULE)
                .about("Update a policy rule")
                .arg(policy_id_parameter())
                .arg(rule_id_parameter())
                .arg(data_parameter().required(true))
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_DELETE_RULE)
                .about("Delete a policy rule")
                .arg(policy_id_parameter())
                .arg(rule_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_ACTIVATE_RULE)
                .about("Activate a policy rule")
                .arg(policy_id_parameter())
                .arg(rule_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_DEACTIVATE_RULE)
                .about("Deactivate a policy rule")
                .arg(policy_id_parameter())
                .arg(rule_id_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
}

/// Execute policy subcommands based on the parsed arguments.
pub async fn execute_policy_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_LIST, sub_matches)) => {
            crate::actions::policies::list_policies(sub_matches).await?
        }
        Some((COMMAND_GET, sub_matches)) => {
            crate::actions::policies::get_policy(sub_matches).await?
        }
        Some((COMMAND_CREATE, sub_matches)) => {
            crate::actions::policies::create_policy(sub_matches).await?
        }
        Some((COMMAND_UPDATE, sub_matches)) => {
            crate::actions::policies::update_policy(sub_matches).await?
        }
        Some((COMMAND_DELETE, sub_matches)) => {
            crate::actions::policies::delete_policy(sub_matches).await?
        }
        Some((COMMAND_ACTIVATE, sub_matches)) => {
            crate::actions::policies::activate_policy(sub_matches).await?
        }
        Some((COMMAND_DEACTIVATE, sub_matches)) => {
            crate::actions::policies::deactivate_policy(sub_matches).await?
        }
        Some((COMMAND_LIST_RULES, sub_matches)) => {
            crate::actions::policies::list_policy_rules(sub_matches).await?
        }
        Some((COMMAND_GET_RULE, sub_matches)) => {
            crate::actions::policies::get_policy_rule(sub_matches).await?
        }
        Some((COMMAND_CREATE_RULE, sub_matches)) => {
            crate::actions::policies::create_policy_rule(sub_matches).await?
        }
        Some((COMMAND_UPDATE_RULE, sub_matches)) => {
            crate::actions::policies::update_policy_rule(sub_matches).await?
        }
        Some((COMMAND_DELETE_RULE, sub_matches)) => {
            crate::actions::policies::delete_policy_rule(sub_matches).await?
        }
        Some((COMMAND_ACTIVATE_RULE, sub_matches)) => {
            crate::actions::policies::activate_policy_rule(sub_matches).await?
        }
        Some((COMMAND_DEACTIVATE_RULE, sub_matches)) => {
            crate::actions::policies::deactivate_policy_rule(sub_matches).await?
        }
        _ => {
            return Err(CliError::UnsupportedSubcommand(
                crate::cli::extract_subcommand_name(matches),
            ))
        }
    }
    Ok(())
}
