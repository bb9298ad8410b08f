//! Org settings action implementations.

use clap::ArgMatches;

use crate::actions::{utils, CliActionError};
use crate::admin_v1::AdminApiClient;
use crate::commands::params::PARAMETER_CONTACT_TYPE;

pub async fn get_org(matches: &ArgMatches) -> Result<(), CliActionError> {
    let client = AdminApiClient::try_default()?;
    let response = client.get_org().await?;
    utils::print_response(&response, matches)
}

pub async fn update_org(matches: &ArgMatches) -> Result<(), CliActionError> {
    let body = utils::json_body(matches)?;

    let client = AdminApiClient::try_default()?;
    let response = client.update_org(&body).await?;
    utils::print_response(&response, matches)
}

pub async fn list_org_contacts(matches: &ArgMatches) -> Result<(), CliActionError> {
    let client = AdminApiClient::try_default()?;
    let response = client.list_org_contacts().await?;
    utils::print_response(&response, matches)
}

pub async fn get_org_contact(matches: &ArgMatches) -> Result<(), CliActionError> {
    let contact_type = utils::required(matches, PARAMETER_CONTACT_TYPE)?;

    let client = AdminApiClient::try_default()?;
    let response = client.get_org_contact(contact_type).await?;
    utils::print_response(&response, matches)
}
