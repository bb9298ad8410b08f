//! Application action implementations.

use clap::ArgMatches;

use crate::actions::{utils, CliActionError};
use crate::admin_v1::AdminApiClient;
use crate::commands::params::{
    PARAMETER_ACTIVATE, PARAMETER_AFTER, PARAMETER_APP_ID, PARAMETER_EXPAND, PARAMETER_FILTER,
    PARAMETER_GROUP_ID, PARAMETER_INCLUDE_NON_DELETED, PARAMETER_LIMIT, PARAMETER_QUERY,
    PARAMETER_SEND_EMAIL, PARAMETER_USER_ID,
};

pub async fn list_apps(matches: &ArgMatches) -> Result<(), CliActionError> {
    let mut query = Vec::new();
    utils::push_query(&mut query, matches, PARAMETER_QUERY, "q");
    utils::push_query(&mut query, matches, PARAMETER_FILTER, "filter");
    utils::push_query_u32(&mut query, matches, PARAMETER_LIMIT, "limit");
    utils::push_query(&mut query, matches, PARAMETER_AFTER, "after");
    utils::push_query(&mut query, matches, PARAMETER_EXPAND, "expand");
    utils::push_flag(
        &mut query,
        matches,
        PARAMETER_INCLUDE_NON_DELETED,
        "includeNonDeleted",
    );

    let client = AdminApiClient::try_default()?;
    let response = client.list_apps(&query).await?;
    utils::print_response(&response, matches)
}

pub async fn get_app(matches: &ArgMatches) -> Result<(), CliActionError> {
    let app_id = utils::required(matches, PARAMETER_APP_ID)?;
    let mut query = Vec::new();
    utils::push_query(&mut query, matches, PARAMETER_EXPAND, "expand");

    let client = AdminApiClient::try_default()?;
    let response = client.get_app(app_id, &query).await?;
    utils::print_response(&response, matches)
}

pub async fn create_app(matches: &ArgMatches) -> Result<(), CliActionError> {
    let body = utils::json_body(matches)?;
    let mut query = Vec::new();
    utils::push_flag(&mut query, matches, PARAMETER_ACTIVATE, "activate");

    let client = AdminApiClient::try_default()?;
    let response = client.create_app(&query, &body).await?;
    utils::print_response(&response, matches)
}

pub async fn update_app(matches: &ArgMatches) -> Result<(), CliActionError> {
    let app_id = utils::required(matches, PARAMETER_APP_ID)?;
    let body = utils::json_body(matches)?;

    let client = AdminApiClient::try_default()?;
    let response = client.update_app(app_id, &body).await?;
    utils::print_response(&response, matches)
}

pub async fn delete_app(matches: &ArgMatches) -> Result<(), CliActionError> {
    let app_id = utils::required(matches, PARAMETER_APP_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.delete_app(app_id).await?;
    utils::print_response(&response, matches)
}

pub async fn activate_app(matches: &ArgMatches) -> Result<(), CliActionError> {
    let app_id = utils::required(matches, PARAMETER_APP_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.activate_app(app_id).await?;
    utils::print_response(&response, matches)
}

pub async fn deactivate_app(matches: &ArgMatches) -> Result<(), CliActionError> {
    let app_id = utils::required(matches, PARAMETER_APP_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.deactivate_app(app_id).await?;
    utils::print_response(&response, matches)
}

pub async fn list_app_users(matches: &ArgMatches) -> Result<(), CliActionError> {
    let app_id = utils::required(matches, PARAMETER_APP_ID)?;
    let mut query = Vec::new();
    utils::push_query(&mut query, matches, PARAMETER_QUERY, "q");
    utils::push_query_u32(&mut query, matches, PARAMETER_LIMIT, "limit");
    utils::push_query(&mut query, matches, PARAMETER_AFTER, "after");
    utils::push_query(&mut query, matches, PARAMETER_EXPAND, "expand");

    let client = AdminApiClient::try_default()?;
    let response = client.list_app_users(app_id, &query).await?;
    utils::print_response(&response, matches)
}

pub async fn assign_user_to_app(matches: &ArgMatches) -> Result<(), CliActionError> {
    let app_id = utils::required(matches, PARAMETER_APP_ID)?;
    let body = utils::json_body(matches)?;

    let client = AdminApiClient::try_default()?;
    let response = client.assign_user_to_app(app_id, &body).await?;
    utils::print_response(&response, matches)
}

pub async fn unassign_user_from_app(matches: &ArgMatches) -> Result<(), CliActionError> {
    let app_id = utils::required(matches, PARAMETER_APP_ID)?;
    let user_id = utils::required(matches, PARAMETER_USER_ID)?;
    let mut query = Vec::new();
    utils::push_flag(&mut query, matches, PARAMETER_SEND_EMAIL, "sendEmail");

    let client = AdminApiClient::try_default()?;
    let response = client
        .unassign_user_from_app(app_id, user_id, &query)
        .await?;
    utils::print_response(&response, matches)
}

pub async fn list_app_groups(matches: &ArgMatches) -> Result<(), CliActionError> {
    let app_id = utils::required(matches, PARAMETER_APP_ID)?;
    let mut query = Vec::new();
    utils::push_query(&mut query, matches, PARAMETER_QUERY, "q");
    utils::push_query_u32(&mut query, matches, PARAMETER_LIMIT, "limit");
    utils::push_query(&mut query, matches, PARAMETER_AFTER, "after");
    utils::push_query(&mut query, matches, PARAMETER_EXPAND, "expand");

    let client = AdminApiClient::try_default()?;
    let response = client.list_app_groups(app_id, &query).await?;
    utils::print_response(&response, matches)
}

pub async fn assign_group_to_app(matches: &ArgMatches) -> Result<(), CliActionError> {
    let app_id = utils::required(matches, PARAMETER_APP_ID)?;
    let group_id = utils::required(matches, PARAMETER_GROUP_ID)?;
    let body = utils::optional_json_body(matches)?;

    let client = AdminApiClient::try_default()?;
    let response = client
        .assign_group_to_app(app_id, group_id, body.as_ref())
        .await?;
    utils::print_response(&response, matches)
}

pub async fn unassign_group_from_app(matches: &ArgMatches) -> Result<(), CliActionError> {
    let app_id = utils::required(matches, PARAMETER_APP_ID)?;
    let group_id = utils::required(matches, PARAMETER_GROUP_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.unassign_group_from_app(app_id, group_id).await?;
    utils::print_response(&response, matches)
}
