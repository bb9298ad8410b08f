//! Command line interface definition.
//!
//! Each resource group lives in its own module holding both the clap
//! `Command` constructor and the matching executor. Shared argument
//! constructors and name constants live in [`params`].

use clap::{ArgMatches, Command};

pub mod app;
pub mod auth;
pub mod authenticator;
pub mod config;
pub mod group;
pub mod org;
pub mod params;
pub mod policy;
pub mod resource_set;
pub mod role;
pub mod trusted_origin;
pub mod user;

pub use app::{app_command, execute_app_command};
pub use auth::{auth_command, execute_auth_command};
pub use authenticator::{authenticator_command, execute_authenticator_command};
pub use config::{config_command, execute_config_command};
pub use group::{execute_group_command, group_command};
pub use org::{execute_org_command, org_command};
pub use policy::{execute_policy_command, policy_command};
pub use resource_set::{execute_resource_set_command, resource_set_command};
pub use role::{execute_role_command, role_command};
pub use trusted_origin::{execute_trusted_origin_command, trusted_origin_command};
pub use user::{execute_user_command, user_command};

/// Assemble the full command tree.
pub fn create_full_command() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .propagate_version(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(user_command())
        .subcommand(group_command())
        .subcommand(app_command())
        .subcommand(policy_command())
        .subcommand(authenticator_command())
        .subcommand(role_command())
        .subcommand(resource_set_command())
        .subcommand(trusted_origin_command())
        .subcommand(org_command())
        .subcommand(config_command())
        .subcommand(auth_command())
}

/// Parse the process arguments against the full command tree.
pub fn create_cli_commands() -> ArgMatches {
    create_full_command().get_matches()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::params::{
        COMMAND_APP, COMMAND_AUTH, COMMAND_AUTHENTICATOR, COMMAND_CONFIG, COMMAND_GROUP,
        COMMAND_ORG, COMMAND_POLICY, COMMAND_RESOURCE_SET, COMMAND_ROLE, COMMAND_TRUSTED_ORIGIN,
        COMMAND_USER,
    };

    #[test]
    fn full_command_is_well_formed() {
        create_full_command().debug_assert();
    }

    #[test]
    fn full_command_has_all_resource_groups() {
        let command = create_full_command();
        let names: Vec<&str> = command
            .get_subcommands()
            .map(|subcommand| subcommand.get_name())
            .collect();

        for expected in [
            COMMAND_USER,
            COMMAND_GROUP,
            COMMAND_APP,
            COMMAND_POLICY,
            COMMAND_AUTHENTICATOR,
            COMMAND_ROLE,
            COMMAND_RESOURCE_SET,
            COMMAND_TRUSTED_ORIGIN,
            COMMAND_ORG,
            COMMAND_CONFIG,
            COMMAND_AUTH,
        ] {
            assert!(names.contains(&expected), "missing subcommand {}", expected);
        }
    }

    #[test]
    fn user_list_accepts_filter_arguments() {
        let matches = create_full_command()
            .try_get_matches_from([
                "idcli", "user", "list", "--limit", "10", "--filter", "status eq \"ACTIVE\"",
            ])
            .unwrap();

        let (name, sub_matches) = matches.subcommand().unwrap();
        assert_eq!(name, COMMAND_USER);
        let (operation, _) = sub_matches.subcommand().unwrap();
        assert_eq!(operation, "list");
    }

    #[test]
    fn user_create_requires_data() {
        let result = create_full_command().try_get_matches_from(["idcli", "user", "create"]);
        assert!(result.is_err());
    }
}
