//! Org settings command definitions and dispatch.

use clap::{ArgMatches, Command};

use crate::commands::params::{
    contact_type_parameter, data_parameter, format_parameter, format_pretty_parameter,
    COMMAND_GET, COMMAND_GET_CONTACT, COMMAND_LIST_CONTACTS, COMMAND_ORG, COMMAND_UPDATE,
};
use crate::error::CliError;

/// Create the org command with all its subcommands.
pub fn org_command() -> Command {
    Command::new(COMMAND_ORG)
        .about("Manage org settings and contacts")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get the org settings")
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_UPDATE)
                .about("Update the org settings")
                .arg(data_parameter().required(true))
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_LIST_CONTACTS)
                .about("List the org contact types")
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET_CONTACT)
                .about("Get the org contact user for a contact type")
                .arg(contact_type_parameter())
                .arg(format_parameter())
                .arg(format_pretty_parameter()),
        )
}

/// Execute org subcommands based on the parsed arguments.
pub async fn execute_org_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_GET, sub_matches)) => crate::actions::org::get_org(sub_matches).await?,
        Some((COMMAND_UPDATE, sub_matches)) => crate::actions::org::update_org(sub_matches).await?,
        Some((COMMAND_LIST_CONTACTS, sub_matches)) => {
            crate::actions::org::list_org_contacts(sub_matches).await?
        }
        Some((COMMAND_GET_CONTACT, sub_matches)) => {
            crate::actions::org::get_org_contact(sub_matches).await?
        }
        _ => {
            return Err(CliError::UnsupportedSubcommand(
                crate::cli::extract_subcommand_name(matches),
            ))
        }
    }
    Ok(())
}
