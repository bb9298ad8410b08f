//! Role and role permission action implementations.

use clap::ArgMatches;

use crate::actions::{utils, CliActionError};
use crate::admin_v1::AdminApiClient;
use crate::commands::params::{
    PARAMETER_AFTER, PARAMETER_LIMIT, PARAMETER_PERMISSION, PARAMETER_ROLE_ID,
};

pub async fn list_roles(matches: &ArgMatches) -> Result<(), CliActionError> {
    let mut query = Vec::new();
    utils::push_query_u32(&mut query, matches, PARAMETER_LIMIT, "limit");
    utils::push_query(&mut query, matches, PARAMETER_AFTER, "after");

    let client = AdminApiClient::try_default()?;
    let response = client.list_roles(&query).await?;
    utils::print_response(&response, matches)
}

pub async fn get_role(matches: &ArgMatches) -> Result<(), CliActionError> {
    let role_id = utils::required(matches, PARAMETER_ROLE_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.get_role(role_id).await?;
    utils::print_response(&response, matches)
}

pub async fn create_role(matches: &ArgMatches) -> Result<(), CliActionError> {
    let body = utils::json_body(matches)?;

    let client = AdminApiClient::try_default()?;
    let response = client.create_role(&body).await?;
    utils::print_response(&response, matches)
}

pub async fn update_role(matches: &ArgMatches) -> Result<(), CliActionError> {
    let role_id = utils::required(matches, PARAMETER_ROLE_ID)?;
    let body = utils::json_body(matches)?;

    let client = AdminApiClient::try_default()?;
    let response = client.update_role(role_id, &body).await?;
    utils::print_response(&response, matches)
}

pub async fn delete_role(matches: &ArgMatches) -> Result<(), CliActionError> {
    let role_id = utils::required(matches, PARAMETER_ROLE_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.delete_role(role_id).await?;
    utils::print_response(&response, matches)
}

pub async fn list_role_permissions(matches: &ArgMatches) -> Result<(), CliActionError> {
    let role_id = utils::required(matches, PARAMETER_ROLE_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.list_role_permissions(role_id).await?;
    utils::print_response(&response, matches)
}

pub async fn get_role_permission(matches: &ArgMatches) -> Result<(), CliActionError> {
    let role_id = utils::required(matches, PARAMETER_ROLE_ID)?;
    let permission = utils::required(matches, PARAMETER_PERMISSION)?;

    let client = AdminApiClient::try_default()?;
    let response = client.get_role_permission(role_id, permission).await?;
    utils::print_response(&response, matches)
}

pub async fn upsert_role_permission(matches: &ArgMatches) -> Result<(), CliActionError> {
    let role_id = utils::required(matches, PARAMETER_ROLE_ID)?;
    let permission = utils::required(matches, PARAMETER_PERMISSION)?;
    let body = utils::optional_json_body(matches)?;

    let client = AdminApiClient::try_default()?;
    let response = client
        .upsert_role_permission(role_id, permission, body.as_ref())
        .await?;
    utils::print_response(&response, matches)
}

pub async fn delete_role_permission(matches: &ArgMatches) -> Result<(), CliActionError> {
    let role_id = utils::required(matches, PARAMETER_ROLE_ID)?;
    let permission = utils::required(matches, PARAMETER_PERMISSION)?;

    let client = AdminApiClient::try_default()?;
    let response = client.delete_role_permission(role_id, permission).await?;
    utils::print_response(&response, matches)
}
