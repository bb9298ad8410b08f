//! Top level command dispatch.

use clap::ArgMatches;
use tracing::trace;

use crate::commands;
use crate::commands::params::{
    COMMAND_APP, COMMAND_AUTH, COMMAND_AUTHENTICATOR, COMMAND_CONFIG, COMMAND_GROUP, COMMAND_ORG,
    COMMAND_POLICY, COMMAND_RESOURCE_SET, COMMAND_ROLE, COMMAND_TRUSTED_ORIGIN, COMMAND_USER,
};
use crate::error::CliError;

/// The name of the invoked subcommand, for error reporting.
pub fn extract_subcommand_name(matches: &ArgMatches) -> String {
    matches
        .subcommand_name()
        .unwrap_or("<none>")
        .to_string()
}

/// Dispatch the parsed arguments to the matching resource executor.
pub async fn execute_command(matches: &ArgMatches) -> Result<(), CliError> {
    trace!("Executing command...");

    match matches.subcommand() {
        Some((COMMAND_USER, sub_matches)) => commands::execute_user_command(sub_matches).await,
        Some((COMMAND_GROUP, sub_matches)) => commands::execute_group_command(sub_matches).await,
        Some((COMMAND_APP, sub_matches)) => commands::execute_app_command(sub_matches).await,
        Some((COMMAND_POLICY, sub_matches)) => commands::execute_policy_command(sub_matches).await,
        Some((COMMAND_AUTHENTICATOR, sub_matches)) => {
            commands::execute_authenticator_command(sub_matches).await
        }
        Some((COMMAND_ROLE, sub_matches)) => commands::execute_role_command(sub_matches).await,
        Some((COMMAND_RESOURCE_SET, sub_matches)) => {
            commands::execute_resource_set_command(sub_matches).await
        }
        Some((COMMAND_TRUSTED_ORIGIN, sub_matches)) => {
            commands::execute_trusted_origin_command(sub_matches).await
        }
        Some((COMMAND_ORG, sub_matches)) => commands::execute_org_command(sub_matches).await,
        Some((COMMAND_CONFIG, sub_matches)) => commands::execute_config_command(sub_matches),
        Some((COMMAND_AUTH, sub_matches)) => commands::execute_auth_command(sub_matches),
        _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
            matches,
        ))),
    }
}
