//! User action implementations.
//!
//! Each function binds one CLI subcommand to one API operation: collect the
//! flags, call the client method, print the response body.

use clap::ArgMatches;

use crate::actions::{utils, CliActionError};
use crate::admin_v1::AdminApiClient;
use crate::commands::params::{
    PARAMETER_ACTIVATE, PARAMETER_AFTER, PARAMETER_FILTER, PARAMETER_LIMIT, PARAMETER_QUERY,
    PARAMETER_SEARCH, PARAMETER_SEND_EMAIL, PARAMETER_SORT_BY, PARAMETER_SORT_ORDER,
    PARAMETER_USER_ID,
};

pub async fn list_users(matches: &ArgMatches) -> Result<(), CliActionError> {
    let mut query = Vec::new();
    utils::push_query(&mut query, matches, PARAMETER_QUERY, "q");
    utils::push_query(&mut query, matches, PARAMETER_FILTER, "filter");
    utils::push_query(&mut query, matches, PARAMETER_SEARCH, "search");
    utils::push_query_u32(&mut query, matches, PARAMETER_LIMIT, "limit");
    utils::push_query(&mut query, matches, PARAMETER_AFTER, "after");
    utils::push_query(&mut query, matches, PARAMETER_SORT_BY, "sortBy");
    utils::push_query(&mut query, matches, PARAMETER_SORT_ORDER, "sortOrder");

    let client = AdminApiClient::try_default()?;
    let response = client.list_users(&query).await?;
    utils::print_response(&response, matches)
}

pub async fn get_user(matches: &ArgMatches) -> Result<(), CliActionError> {
    let user_id = utils::required(matches, PARAMETER_USER_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.get_user(user_id).await?;
    utils::print_response(&response, matches)
}

pub async fn create_user(matches: &ArgMatches) -> Result<(), CliActionError> {
    let body = utils::json_body(matches)?;
    let mut query = Vec::new();
    utils::push_flag(&mut query, matches, PARAMETER_ACTIVATE, "activate");

    let client = AdminApiClient::try_default()?;
    let response = client.create_user(&query, &body).await?;
    utils::print_response(&response, matches)
}

pub async fn update_user(matches: &ArgMatches) -> Result<(), CliActionError> {
    let user_id = utils::required(matches, PARAMETER_USER_ID)?;
    let body = utils::json_body(matches)?;

    let client = AdminApiClient::try_default()?;
    let response = client.update_user(user_id, &body).await?;
    utils::print_response(&response, matches)
}

pub async fn delete_user(matches: &ArgMatches) -> Result<(), CliActionError> {
    let user_id = utils::required(matches, PARAMETER_USER_ID)?;
    let mut query = Vec::new();
    utils::push_flag(&mut query, matches, PARAMETER_SEND_EMAIL, "sendEmail");

    let client = AdminApiClient::try_default()?;
    let response = client.delete_user(user_id, &query).await?;
    utils::print_response(&response, matches)
}

pub async fn activate_user(matches: &ArgMatches) -> Result<(), CliActionError> {
    let user_id = utils::required(matches, PARAMETER_USER_ID)?;
    let mut query = Vec::new();
    utils::push_flag(&mut query, matches, PARAMETER_SEND_EMAIL, "sendEmail");

    let client = AdminApiClient::try_default()?;
    let response = client.activate_user(user_id, &query).await?;
    utils::print_response(&response, matches)
}

pub async fn deactivate_user(matches: &ArgMatches) -> Result<(), CliActionError> {
    let user_id = utils::required(matches, PARAMETER_USER_ID)?;
    let mut query = Vec::new();
    utils::push_flag(&mut query, matches, PARAMETER_SEND_EMAIL, "sendEmail");

    let client = AdminApiClient::try_default()?;
    let response = client.deactivate_user(user_id, &query).await?;
    utils::print_response(&response, matches)
}

pub async fn suspend_user(matches: &ArgMatches) -> Result<(), CliActionError> {
    let user_id = utils::required(matches, PARAMETER_USER_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.suspend_user(user_id).await?;
    utils::print_response(&response, matches)
}

pub async fn unsuspend_user(matches: &ArgMatches) -> Result<(), CliActionError> {
    let user_id = utils::required(matches, PARAMETER_USER_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.unsuspend_user(user_id).await?;
    utils::print_response(&response, matches)
}

pub async fn unlock_user(matches: &ArgMatches) -> Result<(), CliActionError> {
    let user_id = utils::required(matches, PARAMETER_USER_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.unlock_user(user_id).await?;
    utils::print_response(&response, matches)
}

pub async fn expire_user_password(matches: &ArgMatches) -> Result<(), CliActionError> {
    let user_id = utils::required(matches, PARAMETER_USER_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.expire_user_password(user_id).await?;
    utils::print_response(&response, matches)
}

pub async fn reset_user_password(matches: &ArgMatches) -> Result<(), CliActionError> {
    let user_id = utils::required(matches, PARAMETER_USER_ID)?;
    let mut query = Vec::new();
    utils::push_flag(&mut query, matches, PARAMETER_SEND_EMAIL, "sendEmail");

    let client = AdminApiClient::try_default()?;
    let response = client.reset_user_password(user_id, &query).await?;
    utils::print_response(&response, matches)
}

pub async fn reset_user_factors(matches: &ArgMatches) -> Result<(), CliActionError> {
    let user_id = utils::required(matches, PARAMETER_USER_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.reset_user_factors(user_id).await?;
    utils::print_response(&response, matches)
}

pub async fn list_user_groups(matches: &ArgMatches) -> Result<(), CliActionError> {
    let user_id = utils::required(matches, PARAMETER_USER_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.list_user_groups(user_id).await?;
    utils::print_response(&response, matches)
}

pub async fn list_user_app_links(matches: &ArgMatches) -> Result<(), CliActionError> {
    let user_id = utils::required(matches, PARAMETER_USER_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.list_user_app_links(user_id).await?;
    utils::print_response(&response, matches)
}
