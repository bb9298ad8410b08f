//! Trusted origin action implementations.

use clap::ArgMatches;

use crate::actions::{utils, CliActionError};
use crate::admin_v1::AdminApiClient;
use crate::commands::params::{
    PARAMETER_AFTER, PARAMETER_FILTER, PARAMETER_LIMIT, PARAMETER_QUERY,
    PARAMETER_TRUSTED_ORIGIN_ID,
};

pub async fn list_trusted_origins(matches: &ArgMatches) -> Result<(), CliActionError> {
    let mut query = Vec::new();
    utils::push_query(&mut query, matches, PARAMETER_QUERY, "q");
    utils::push_query(&mut query, matches, PARAMETER_FILTER, "filter");
    utils::push_query_u32(&mut query, matches, PARAMETER_LIMIT, "limit");
    utils::push_query(&mut query, matches, PARAMETER_AFTER, "after");

    let client = AdminApiClient::try_default()?;
    let response = client.list_trusted_origins(&query).await?;
    utils::print_response(&response, matches)
}

pub async fn get_trusted_origin(matches: &ArgMatches) -> Result<(), CliActionError> {
    let trusted_origin_id = utils::required(matches, PARAMETER_TRUSTED_ORIGIN_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.get_trusted_origin(trusted_origin_id).await?;
    utils::print_response(&response, matches)
}

pub async fn create_trusted_origin(matches: &ArgMatches) -> Result<(), CliActionError> {
    let body = utils::json_body(matches)?;

    let client = AdminApiClient::try_default()?;
    let response = client.create_trusted_origin(&body).await?;
    utils::print_response(&response, matches)
}

pub async fn update_trusted_origin(matches: &ArgMatches) -> Result<(), CliActionError> {
    let trusted_origin_id = utils::required(matches, PARAMETER_TRUSTED_ORIGIN_ID)?;
    let body = utils::json_body(matches)?;

    let client = AdminApiClient::try_default()?;
    let response = client
        .update_trusted_origin(trusted_origin_id, &body)
        .await?;
    utils::print_response(&response, matches)
}

pub async fn delete_trusted_origin(matches: &ArgMatches) -> Result<(), CliActionError> {
    let trusted_origin_id = utils::required(matches, PARAMETER_TRUSTED_ORIGIN_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.delete_trusted_origin(trusted_origin_id).await?;
    utils::print_response(&response, matches)
}

pub async fn activate_trusted_origin(matches: &ArgMatches) -> Result<(), CliActionError> {
    let trusted_origin_id = utils::required(matches, PARAMETER_TRUSTED_ORIGIN_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.activate_trusted_origin(trusted_origin_id).await?;
    utils::print_response(&response, matches)
}

pub async fn deactivate_trusted_origin(matches: &ArgMatches) -> Result<(), CliActionError> {
    let trusted_origin_id = utils::required(matches, PARAMETER_TRUSTED_ORIGIN_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.deactivate_trusted_origin(trusted_origin_id).await?;
    utils::print_response(&response, matches)
}
