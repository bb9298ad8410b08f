//! Group action implementations.

use clap::ArgMatches;

use crate::actions::{utils, CliActionError};
use crate::admin_v1::AdminApiClient;
use crate::commands::params::{
    PARAMETER_AFTER, PARAMETER_FILTER, PARAMETER_GROUP_ID, PARAMETER_LIMIT, PARAMETER_QUERY,
    PARAMETER_SEARCH, PARAMETER_USER_ID,
};

pub async fn list_groups(matches: &ArgMatches) -> Result<(), CliActionError> {
    let mut query = Vec::new();
    utils::push_query(&mut query, matches, PARAMETER_QUERY, "q");
    utils::push_query(&mut query, matches, PARAMETER_FILTER, "filter");
    utils::push_query(&mut query, matches, PARAMETER_SEARCH, "search");
    utils::push_query_u32(&mut query, matches, PARAMETER_LIMIT, "limit");
    utils::push_query(&mut query, matches, PARAMETER_AFTER, "after");

    let client = AdminApiClient::try_default()?;
    let response = client.list_groups(&query).await?;
    utils::print_response(&response, matches)
}

pub async fn get_group(matches: &ArgMatches) -> Result<(), CliActionError> {
    let group_id = utils::required(matches, PARAMETER_GROUP_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.get_group(group_id).await?;
    utils::print_response(&response, matches)
}

pub async fn create_group(matches: &ArgMatches) -> Result<(), CliActionError> {
    let body = utils::json_body(matches)?;

    let client = AdminApiClient::try_default()?;
    let response = client.create_group(&body).await?;
    utils::print_response(&response, matches)
}

pub async fn update_group(matches: &ArgMatches) -> Result<(), CliActionError> {
    let group_id = utils::required(matches, PARAMETER_GROUP_ID)?;
    let body = utils::json_body(matches)?;

    let client = AdminApiClient::try_default()?;
    let response = client.update_group(group_id, &body).await?;
    utils::print_response(&response, matches)
}

pub async fn delete_group(matches: &ArgMatches) -> Result<(), CliActionError> {
    let group_id = utils::required(matches, PARAMETER_GROUP_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.delete_group(group_id).await?;
    utils::print_response(&response, matches)
}

pub async fn list_group_users(matches: &ArgMatches) -> Result<(), CliActionError> {
    let group_id = utils::required(matches, PARAMETER_GROUP_ID)?;
    let mut query = Vec::new();
    utils::push_query_u32(&mut query, matches, PARAMETER_LIMIT, "limit");
    utils::push_query(&mut query, matches, PARAMETER_AFTER, "after");

    let client = AdminApiClient::try_default()?;
    let response = client.list_group_users(group_id, &query).await?;
    utils::print_response(&response, matches)
}

pub async fn add_user_to_group(matches: &ArgMatches) -> Result<(), CliActionError> {
    let group_id = utils::required(matches, PARAMETER_GROUP_ID)?;
    let user_id = utils::required(matches, PARAMETER_USER_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.add_user_to_group(group_id, user_id).await?;
    utils::print_response(&response, matches)
}

pub async fn remove_user_from_group(matches: &ArgMatches) -> Result<(), CliActionError> {
    let group_id = utils::required(matches, PARAMETER_GROUP_ID)?;
    let user_id = utils::required(matches, PARAMETER_USER_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.remove_user_from_group(group_id, user_id).await?;
    utils::print_response(&response, matches)
}

pub async fn list_group_apps(matches: &ArgMatches) -> Result<(), CliActionError> {
    let group_id = utils::required(matches, PARAMETER_GROUP_ID)?;
    let mut query = Vec::new();
    utils::push_query_u32(&mut query, matches, PARAMETER_LIMIT, "limit");
    utils::push_query(&mut query, matches, PARAMETER_AFTER, "after");

    let client = AdminApiClient::try_default()?;
    let response = client.list_group_apps(group_id, &query).await?;
    utils::print_response(&response, matches)
}
