//! Shared command parameters for all CLI commands.
//!
//! This module defines the command and parameter names used across the
//! command tree, plus the common argument constructors. Keeping them in one
//! place keeps a hundred-odd subcommands uniform.

use crate::format::OutputFormat;
use clap::{Arg, ArgAction};
use std::path::PathBuf;
use url::Url;

// Resource groups
pub const COMMAND_USER: &str = "user";
pub const COMMAND_GROUP: &str = "group";
pub const COMMAND_APP: &str = "app";
pub const COMMAND_POLICY: &str = "policy";
pub const COMMAND_AUTHENTICATOR: &str = "authenticator";
pub const COMMAND_ROLE: &str = "role";
pub const COMMAND_RESOURCE_SET: &str = "resource-set";
pub const COMMAND_TRUSTED_ORIGIN: &str = "trusted-origin";
pub const COMMAND_ORG: &str = "org";
pub const COMMAND_CONFIG: &str = "config";
pub const COMMAND_AUTH: &str = "auth";

// CRUD operations
pub const COMMAND_LIST: &str = "list";
pub const COMMAND_GET: &str = "get";
pub const COMMAND_CREATE: &str = "create";
pub const COMMAND_UPDATE: &str = "update";
pub const COMMAND_DELETE: &str = "delete";

// Lifecycle operations
pub const COMMAND_ACTIVATE: &str = "activate";
pub const COMMAND_DEACTIVATE: &str = "deactivate";
pub const COMMAND_SUSPEND: &str = "suspend";
pub const COMMAND_UNSUSPEND: &str = "unsuspend";
pub const COMMAND_UNLOCK: &str = "unlock";
pub const COMMAND_EXPIRE_PASSWORD: &str = "expire-password";
pub const COMMAND_RESET_PASSWORD: &str = "reset-password";
pub const COMMAND_RESET_FACTORS: &str = "reset-factors";

// Relation operations
pub const COMMAND_LIST_GROUPS: &str = "list-groups";
pub const COMMAND_LIST_APP_LINKS: &str = "list-app-links";
pub const COMMAND_LIST_USERS: &str = "list-users";
pub const COMMAND_ADD_USER: &str = "add-user";
pub const COMMAND_REMOVE_USER: &str = "remove-user";
pub const COMMAND_LIST_APPS: &str = "list-apps";
pub const COMMAND_ASSIGN_USER: &str = "assign-user";
pub const COMMAND_UNASSIGN_USER: &str = "unassign-user";
pub const COMMAND_ASSIGN_GROUP: &str = "assign-group";
pub const COMMAND_UNASSIGN_GROUP: &str = "unassign-group";

// Policy rule operations
pub const COMMAND_LIST_RULES: &str = "list-rules";
pub const COMMAND_GET_RULE: &str = "get-rule";
pub const COMMAND_CREATE_RULE: &str = "create-rule";
pub const COMMAND_UPDATE_RULE: &str = "update-rule";
pub const COMMAND_DELETE_RULE: &str = "delete-rule";
pub const COMMAND_ACTIVATE_RULE: &str = "activate-rule";
pub const COMMAND_DEACTIVATE_RULE: &str = "deactivate-rule";

// Authenticator method operations
pub const COMMAND_LIST_METHODS: &str = "list-methods";
pub const COMMAND_GET_METHOD: &str = "get-method";
pub const COMMAND_UPDATE_METHOD: &str = "update-method";
pub const COMMAND_ACTIVATE_METHOD: &str = "activate-method";
pub const COMMAND_DEACTIVATE_METHOD: &str = "deactivate-method";

// Role permission operations
pub const COMMAND_LIST_PERMISSIONS: &str = "list-permissions";
pub const COMMAND_GET_PERMISSION: &str = "get-permission";
pub const COMMAND_UPSERT_PERMISSION: &str = "upsert-permission";
pub const COMMAND_DELETE_PERMISSION: &str = "delete-permission";

// Resource-set operations
pub const COMMAND_LIST_RESOURCES: &str = "list-resources";
pub const COMMAND_ADD_RESOURCES: &str = "add-resources";
pub const COMMAND_DELETE_RESOURCE: &str = "delete-resource";
pub const COMMAND_LIST_BINDINGS: &str = "list-bindings";
pub const COMMAND_GET_BINDING: &str = "get-binding";
pub const COMMAND_CREATE_BINDING: &str = "create-binding";
pub const COMMAND_DELETE_BINDING: &str = "delete-binding";

// Org operations
pub const COMMAND_LIST_CONTACTS: &str = "list-contacts";
pub const COMMAND_GET_CONTACT: &str = "get-contact";

// Config commands
pub const COMMAND_SET: &str = "set";
pub const COMMAND_EXPORT: &str = "export";
pub const COMMAND_IMPORT: &str = "import";
pub const COMMAND_PATH: &str = "path";

// Auth commands
pub const COMMAND_LOGIN: &str = "login";
pub const COMMAND_LOGOUT: &str = "logout";
pub const COMMAND_STATUS: &str = "status";

// Parameter names
pub const PARAMETER_DATA: &str = "data";
pub const PARAMETER_FORMAT: &str = "format";
pub const PARAMETER_PRETTY: &str = "pretty";
pub const PARAMETER_USER_ID: &str = "user-id";
pub const PARAMETER_GROUP_ID: &str = "group-id";
pub const PARAMETER_APP_ID: &str = "app-id";
pub const PARAMETER_POLICY_ID: &str = "policy-id";
pub const PARAMETER_RULE_ID: &str = "rule-id";
pub const PARAMETER_AUTHENTICATOR_ID: &str = "authenticator-id";
pub const PARAMETER_METHOD_TYPE: &str = "method-type";
pub const PARAMETER_ROLE_ID: &str = "role-id";
pub const PARAMETER_PERMISSION: &str = "permission";
pub const PARAMETER_RESOURCE_SET_ID: &str = "resource-set-id";
pub const PARAMETER_RESOURCE_ID: &str = "resource-id";
pub const PARAMETER_TRUSTED_ORIGIN_ID: &str = "trusted-origin-id";
pub const PARAMETER_CONTACT_TYPE: &str = "contact-type";
pub const PARAMETER_QUERY: &str = "q";
pub const PARAMETER_FILTER: &str = "filter";
pub const PARAMETER_SEARCH: &str = "search";
pub const PARAMETER_LIMIT: &str = "limit";
pub const PARAMETER_AFTER: &str = "after";
pub const PARAMETER_SORT_BY: &str = "sort-by";
pub const PARAMETER_SORT_ORDER: &str = "sort-order";
pub const PARAMETER_EXPAND: &str = "expand";
pub const PARAMETER_STATUS: &str = "status";
pub const PARAMETER_TYPE: &str = "type";
pub const PARAMETER_SEND_EMAIL: &str = "send-email";
pub const PARAMETER_ACTIVATE: &str = "activate";
pub const PARAMETER_INCLUDE_NON_DELETED: &str = "include-non-deleted";
pub const PARAMETER_URL: &str = "url";
pub const PARAMETER_TOKEN: &str = "token";
pub const PARAMETER_OUTPUT: &str = "output";
pub const PARAMETER_FILE: &str = "file";

/// Create the global format parameter.
pub fn format_parameter() -> Arg {
    Arg::new(PARAMETER_FORMAT)
        .short('f')
        .long(PARAMETER_FORMAT)
        .num_args(1)
        .required(false)
        .env("IDCLI_FORMAT")
        .default_value("json")
        .help("Output data format")
        .value_parser(OutputFormat::names())
}

/// Create the pretty-print flag.
pub fn format_pretty_parameter() -> Arg {
    Arg::new(PARAMETER_PRETTY)
        .long(PARAMETER_PRETTY)
        .action(ArgAction::SetTrue)
        .required(false)
        .help("Pretty-print JSON output")
}

/// Create the raw JSON request body parameter.
pub fn data_parameter() -> Arg {
    Arg::new(PARAMETER_DATA)
        .short('d')
        .long(PARAMETER_DATA)
        .num_args(1)
        .required(false)
        .help("Raw JSON request body; use @<path> to read it from a file")
}

fn id_parameter(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).num_args(1).required(true).help(help)
}

pub fn user_id_parameter() -> Arg {
    id_parameter(PARAMETER_USER_ID, "User ID or login")
}

pub fn group_id_parameter() -> Arg {
    id_parameter(PARAMETER_GROUP_ID, "Group ID")
}

pub fn app_id_parameter() -> Arg {
    id_parameter(PARAMETER_APP_ID, "Application ID")
}

pub fn policy_id_parameter() -> Arg {
    id_parameter(PARAMETER_POLICY_ID, "Policy ID")
}

pub fn rule_id_parameter() -> Arg {
    id_parameter(PARAMETER_RULE_ID, "Policy rule ID")
}

pub fn authenticator_id_parameter() -> Arg {
    id_parameter(PARAMETER_AUTHENTICATOR_ID, "Authenticator ID")
}

pub fn method_type_parameter() -> Arg {
    id_parameter(
        PARAMETER_METHOD_TYPE,
        "Authenticator method type (e.g. totp, push, sms)",
    )
}

pub fn role_id_parameter() -> Arg {
    id_parameter(PARAMETER_ROLE_ID, "Role ID or label")
}

pub fn permission_parameter() -> Arg {
    id_parameter(
        PARAMETER_PERMISSION,
        "Permission type (e.g. okta.users.read)",
    )
}

pub fn resource_set_id_parameter() -> Arg {
    id_parameter(PARAMETER_RESOURCE_SET_ID, "Resource set ID")
}

pub fn resource_id_parameter() -> Arg {
    id_parameter(PARAMETER_RESOURCE_ID, "Resource ID within the resource set")
}

pub fn trusted_origin_id_parameter() -> Arg {
    id_parameter(PARAMETER_TRUSTED_ORIGIN_ID, "Trusted origin ID")
}

pub fn contact_type_parameter() -> Arg {
    id_parameter(PARAMETER_CONTACT_TYPE, "Contact type (e.g. BILLING, TECHNICAL)")
}

/// Create the free-text search query parameter.
pub fn q_parameter() -> Arg {
    Arg::new(PARAMETER_QUERY)
        .short('q')
        .long(PARAMETER_QUERY)
        .num_args(1)
        .required(false)
        .help("Free-text search query")
}

pub fn filter_parameter() -> Arg {
    Arg::new(PARAMETER_FILTER)
        .long(PARAMETER_FILTER)
        .num_args(1)
        .required(false)
        .help("Filter expression")
}

pub fn search_parameter() -> Arg {
    Arg::new(PARAMETER_SEARCH)
        .long(PARAMETER_SEARCH)
        .num_args(1)
        .required(false)
        .help("Search expression")
}

pub fn limit_parameter() -> Arg {
    Arg::new(PARAMETER_LIMIT)
        .long(PARAMETER_LIMIT)
        .num_args(1)
        .required(false)
        .value_parser(clap::value_parser!(u32))
        .help("Maximum number of results per page")
}

pub fn after_parameter() -> Arg {
    Arg::new(PARAMETER_AFTER)
        .long(PARAMETER_AFTER)
        .num_args(1)
        .required(false)
        .help("Pagination cursor from a previous response")
}

pub fn sort_by_parameter() -> Arg {
    Arg::new(PARAMETER_SORT_BY)
        .long(PARAMETER_SORT_BY)
        .num_args(1)
        .required(false)
        .help("Attribute to sort results by")
}

pub fn sort_order_parameter() -> Arg {
    Arg::new(PARAMETER_SORT_ORDER)
        .long(PARAMETER_SORT_ORDER)
        .num_args(1)
        .required(false)
        .value_parser(["asc", "desc"])
        .help("Sort order")
}

pub fn expand_parameter() -> Arg {
    Arg::new(PARAMETER_EXPAND)
        .long(PARAMETER_EXPAND)
        .num_args(1)
        .required(false)
        .help("Embed related resources in the response")
}

pub fn status_parameter() -> Arg {
    Arg::new(PARAMETER_STATUS)
        .long(PARAMETER_STATUS)
        .num_args(1)
        .required(false)
        .help("Filter by status")
}

/// Create the policy type parameter (required by the list endpoint).
pub fn policy_type_parameter() -> Arg {
    Arg::new(PARAMETER_TYPE)
        .long(PARAMETER_TYPE)
        .num_args(1)
        .required(true)
        .help("Policy type (e.g. OKTA_SIGN_ON, PASSWORD, MFA_ENROLL)")
}

pub fn send_email_parameter() -> Arg {
    Arg::new(PARAMETER_SEND_EMAIL)
        .long(PARAMETER_SEND_EMAIL)
        .action(ArgAction::SetTrue)
        .required(false)
        .help("Send a notification email for this operation")
}

pub fn activate_parameter() -> Arg {
    Arg::new(PARAMETER_ACTIVATE)
        .long(PARAMETER_ACTIVATE)
        .action(ArgAction::SetTrue)
        .required(false)
        .help("Activate the resource immediately after creation")
}

pub fn include_non_deleted_parameter() -> Arg {
    Arg::new(PARAMETER_INCLUDE_NON_DELETED)
        .long(PARAMETER_INCLUDE_NON_DELETED)
        .action(ArgAction::SetTrue)
        .required(false)
        .help("Include non-deleted apps in the listing")
}

/// Create the org base URL parameter.
pub fn url_parameter() -> Arg {
    Arg::new(PARAMETER_URL)
        .long(PARAMETER_URL)
        .num_args(1)
        .required(true)
        .value_parser(clap::value_parser!(Url))
        .help("Organization base URL (e.g. https://example.oktapreview.com)")
}

/// Create the API token parameter.
pub fn token_parameter() -> Arg {
    Arg::new(PARAMETER_TOKEN)
        .long(PARAMETER_TOKEN)
        .num_args(1)
        .required(true)
        .help("API token for the organization")
}

/// Create the global output file parameter.
pub fn output_file_parameter() -> Arg {
    Arg::new(PARAMETER_OUTPUT)
        .short('o')
        .long(PARAMETER_OUTPUT)
        .num_args(1)
        .required(true)
        .help("Output file path")
        .value_parser(clap::value_parser!(PathBuf))
}

/// Create the global input file parameter.
pub fn file_parameter() -> Arg {
    Arg::new(PARAMETER_FILE)
        .long(PARAMETER_FILE)
        .num_args(1)
        .required(true)
        .help("Input file path")
        .value_parser(clap::value_parser!(PathBuf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parameter_accepts_known_formats() {
        let cmd = clap::Command::new("test").arg(format_parameter());
        let matches = cmd.get_matches_from(vec!["test", "--format", "raw"]);
        assert_eq!(
            matches.get_one::<String>(PARAMETER_FORMAT).unwrap(),
            "raw"
        );
    }

    #[test]
    fn format_parameter_rejects_unknown_formats() {
        let cmd = clap::Command::new("test").arg(format_parameter());
        let result = cmd.try_get_matches_from(vec!["test", "--format", "yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn id_parameters_are_required() {
        let cmd = clap::Command::new("test").arg(user_id_parameter());
        assert!(cmd.clone().try_get_matches_from(vec!["test"]).is_err());
        assert!(cmd
            .try_get_matches_from(vec!["test", "--user-id", "00u1ero7vZFVEIYLWPBN"])
            .is_ok());
    }

    #[test]
    fn limit_parameter_requires_a_number() {
        let cmd = clap::Command::new("test").arg(limit_parameter());
        assert!(cmd
            .clone()
            .try_get_matches_from(vec!["test", "--limit", "many"])
            .is_err());
        let matches = cmd.try_get_matches_from(vec!["test", "--limit", "25"]).unwrap();
        assert_eq!(matches.get_one::<u32>(PARAMETER_LIMIT), Some(&25));
    }

    #[test]
    fn url_parameter_requires_a_valid_url() {
        let cmd = clap::Command::new("test").arg(url_parameter());
        assert!(cmd
            .clone()
            .try_get_matches_from(vec!["test", "--url", "not a url"])
            .is_err());
        assert!(cmd
            .try_get_matches_from(vec!["test", "--url", "https://example.identity.test"])
            .is_ok());
    }
}
