//! Authenticator and authenticator method action implementations.

use clap::ArgMatches;

use crate::actions::{utils, CliActionError};
use crate::admin_v1::AdminApiClient;
use crate::commands::params::{
    PARAMETER_ACTIVATE, PARAMETER_AUTHENTICATOR_ID, PARAMETER_METHOD_TYPE,
};

pub async fn list_authenticators(matches: &ArgMatches) -> Result<(), CliActionError> {
    let client = AdminApiClient::try_default()?;
    let response = client.list_authenticators().await?;
    utils::print_response(&response, matches)
}

pub async fn get_authenticator(matches: &ArgMatches) -> Result<(), CliActionError> {
    let authenticator_id = utils::required(matches, PARAMETER_AUTHENTICATOR_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.get_authenticator(authenticator_id).await?;
    utils::print_response(&response, matches)
}

pub async fn create_authenticator(matches: &ArgMatches) -> Result<(), CliActionError> {
    let body = utils::json_body(matches)?;
    let mut query = Vec::new();
    utils::push_flag(&mut query, matches, PARAMETER_ACTIVATE, "activate");

    let client = AdminApiClient::try_default()?;
    let response = client.create_authenticator(&query, &body).await?;
    utils::print_response(&response, matches)
}

pub async fn update_authenticator(matches: &ArgMatches) -> Result<(), CliActionError> {
    let authenticator_id = utils::required(matches, PARAMETER_AUTHENTICATOR_ID)?;
    let body = utils::json_body(matches)?;

    let client = AdminApiClient::try_default()?;
    let response = client
        .update_authenticator(authenticator_id, &body)
        .await?;
    utils::print_response(&response, matches)
}

pub async fn activate_authenticator(matches: &ArgMatches) -> Result<(), CliActionError> {
    let authenticator_id = utils::required(matches, PARAMETER_AUTHENTICATOR_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.activate_authenticator(authenticator_id).await?;
    utils::print_response(&response, matches)
}

pub async fn deactivate_authenticator(matches: &ArgMatches) -> Result<(), CliActionError> {
    let authenticator_id = utils::required(matches, PARAMETER_AUTHENTICATOR_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.deactivate_authenticator(authenticator_id).await?;
    utils::print_response(&response, matches)
}

pub async fn list_authenticator_methods(matches: &ArgMatches) -> Result<(), CliActionError> {
    let authenticator_id = utils::required(matches, PARAMETER_AUTHENTICATOR_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.list_authenticator_methods(authenticator_id).await?;
    utils::print_response(&response, matches)
}

pub async fn get_authenticator_method(matches: &ArgMatches) -> Result<(), CliActionError> {
    let authenticator_id = utils::required(matches, PARAMETER_AUTHENTICATOR_ID)?;
    let method_type = utils::required(matches, PARAMETER_METHOD_TYPE)?;

    let client = AdminApiClient::try_default()?;
    let response = client
        .get_authenticator_method(authenticator_id, method_type)
        .await?;
    utils::print_response(&response, matches)
}

pub async fn update_authenticator_method(matches: &ArgMatches) -> Result<(), CliActionError> {
    let authenticator_id = utils::required(matches, PARAMETER_AUTHENTICATOR_ID)?;
    let method_type = utils::required(matches, PARAMETER_METHOD_TYPE)?;
    let body = utils::json_body(matches)?;

    let client = AdminApiClient::try_default()?;
    let response = client
        .update_authenticator_method(authenticator_id, method_type, &body)
        .await?;
    utils::print_response(&response, matches)
}

pub async fn activate_authenticator_method(matches: &ArgMatches) -> Result<(), CliActionError> {
    let authenticator_id = utils::required(matches, PARAMETER_AUTHENTICATOR_ID)?;
    let method_type = utils::required(matches, PARAMETER_METHOD_TYPE)?;

    let client = AdminApiClient::try_default()?;
    let response = client
        .activate_authenticator_method(authenticator_id, method_type)
        .await?;
    utils::print_response(&response, matches)
}

pub async fn deactivate_authenticator_method(matches: &ArgMatches) -> Result<(), CliActionError> {
    let authenticator_id = utils::required(matches, PARAMETER_AUTHENTICATOR_ID)?;
    let method_type = utils::required(matches, PARAMETER_METHOD_TYPE)?;

    let client = AdminApiClient::try_default()?;
    let response = client
        .deactivate_authenticator_method(authenticator_id, method_type)
        .await?;
    utils::print_response(&response, matches)
}
