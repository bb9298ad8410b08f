//! Resource set, resource, and binding action implementations.

use clap::ArgMatches;

use crate::actions::{utils, CliActionError};
use crate::admin_v1::AdminApiClient;
use crate::commands::params::{
    PARAMETER_AFTER, PARAMETER_LIMIT, PARAMETER_RESOURCE_ID, PARAMETER_RESOURCE_SET_ID,
    PARAMETER_ROLE_ID,
};

pub async fn list_resource_sets(matches: &ArgMatches) -> Result<(), CliActionError> {
    let mut query = Vec::new();
    utils::push_query_u32(&mut query, matches, PARAMETER_LIMIT, "limit");
    utils::push_query(&mut query, matches, PARAMETER_AFTER, "after");

    let client = AdminApiClient::try_default()?;
    let response = client.list_resource_sets(&query).await?;
    utils::print_response(&response, matches)
}

pub async fn get_resource_set(matches: &ArgMatches) -> Result<(), CliActionError> {
    let resource_set_id = utils::required(matches, PARAMETER_RESOURCE_SET_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.get_resource_set(resource_set_id).await?;
    utils::print_response(&response, matches)
}

pub async fn create_resource_set(matches: &ArgMatches) -> Result<(), CliActionError> {
    let body = utils::json_body(matches)?;

    let client = AdminApiClient::try_default()?;
    let response = client.create_resource_set(&body).await?;
    utils::print_response(&response, matches)
}

pub async fn update_resource_set(matches: &ArgMatches) -> Result<(), CliActionError> {
    let resource_set_id = utils::required(matches, PARAMETER_RESOURCE_SET_ID)?;
    let body = utils::json_body(matches)?;

    let client = AdminApiClient::try_default()?;
    let response = client.update_resource_set(resource_set_id, &body).await?;
    utils::print_response(&response, matches)
}

pub async fn delete_resource_set(matches: &ArgMatches) -> Result<(), CliActionError> {
    let resource_set_id = utils::required(matches, PARAMETER_RESOURCE_SET_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.delete_resource_set(resource_set_id).await?;
    utils::print_response(&response, matches)
}

pub async fn list_resource_set_resources(matches: &ArgMatches) -> Result<(), CliActionError> {
    let resource_set_id = utils::required(matches, PARAMETER_RESOURCE_SET_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.list_resource_set_resources(resource_set_id).await?;
    utils::print_response(&response, matches)
}

pub async fn add_resource_set_resources(matches: &ArgMatches) -> Result<(), CliActionError> {
    let resource_set_id = utils::required(matches, PARAMETER_RESOURCE_SET_ID)?;
    let body = utils::json_body(matches)?;

    let client = AdminApiClient::try_default()?;
    let response = client
        .add_resource_set_resources(resource_set_id, &body)
        .await?;
    utils::print_response(&response, matches)
}

pub async fn delete_resource_set_resource(matches: &ArgMatches) -> Result<(), CliActionError> {
    let resource_set_id = utils::required(matches, PARAMETER_RESOURCE_SET_ID)?;
    let resource_id = utils::required(matches, PARAMETER_RESOURCE_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client
        .delete_resource_set_resource(resource_set_id, resource_id)
        .await?;
    utils::print_response(&response, matches)
}

pub async fn list_resource_set_bindings(matches: &ArgMatches) -> Result<(), CliActionError> {
    let resource_set_id = utils::required(matches, PARAMETER_RESOURCE_SET_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.list_resource_set_bindings(resource_set_id).await?;
    utils::print_response(&response, matches)
}

pub async fn get_resource_set_binding(matches: &ArgMatches) -> Result<(), CliActionError> {
    let resource_set_id = utils::required(matches, PARAMETER_RESOURCE_SET_ID)?;
    let role_id = utils::required(matches, PARAMETER_ROLE_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client
        .get_resource_set_binding(resource_set_id, role_id)
        .await?;
    utils::print_response(&response, matches)
}

pub async fn create_resource_set_binding(matches: &ArgMatches) -> Result<(), CliActionError> {
    let resource_set_id = utils::required(matches, PARAMETER_RESOURCE_SET_ID)?;
    let body = utils::json_body(matches)?;

    let client = AdminApiClient::try_default()?;
    let response = client
        .create_resource_set_binding(resource_set_id, &body)
        .await?;
    utils::print_response(&response, matches)
}

pub async fn delete_resource_set_binding(matches: &ArgMatches) -> Result<(), CliActionError> {
    let resource_set_id = utils::required(matches, PARAMETER_RESOURCE_SET_ID)?;
    let role_id = utils::required(matches, PARAMETER_ROLE_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client
        .delete_resource_set_binding(resource_set_id, role_id)
        .await?;
    utils::print_response(&response, matches)
}
