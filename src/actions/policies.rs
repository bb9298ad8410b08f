//! Policy and policy rule action implementations.

use clap::ArgMatches;

use crate::actions::{utils, CliActionError};
use crate::admin_v1::AdminApiClient;
use crate::commands::params::{
    PARAMETER_ACTIVATE, PARAMETER_EXPAND, PARAMETER_POLICY_ID, PARAMETER_RULE_ID,
    PARAMETER_STATUS, PARAMETER_TYPE,
};

pub async fn list_policies(matches: &ArgMatches) -> Result<(), CliActionError> {
    let mut query = Vec::new();
    utils::push_query(&mut query, matches, PARAMETER_TYPE, "type");
    utils::push_query(&mut query, matches, PARAMETER_STATUS, "status");
    utils::push_query(&mut query, matches, PARAMETER_EXPAND, "expand");

    let client = AdminApiClient::try_default()?;
    let response = client.list_policies(&query).await?;
    utils::print_response(&response, matches)
}

pub async fn get_policy(matches: &ArgMatches) -> Result<(), CliActionError> {
    let policy_id = utils::required(matches, PARAMETER_POLICY_ID)?;
    let mut query = Vec::new();
    utils::push_query(&mut query, matches, PARAMETER_EXPAND, "expand");

    let client = AdminApiClient::try_default()?;
    let response = client.get_policy(policy_id, &query).await?;
    utils::print_response(&response, matches)
}

pub async fn create_policy(matches: &ArgMatches) -> Result<(), CliActionError> {
    let body = utils::json_body(matches)?;
    let mut query = Vec::new();
    utils::push_flag(&mut query, matches, PARAMETER_ACTIVATE, "activate");

    let client = AdminApiClient::try_default()?;
    let response = client.create_policy(&query, &body).await?;
    utils::print_response(&response, matches)
}

pub async fn update_policy(matches: &ArgMatches) -> Result<(), CliActionError> {
    let policy_id = utils::required(matches, PARAMETER_POLICY_ID)?;
    let body = utils::json_body(matches)?;

    let client = AdminApiClient::try_default()?;
    let response = client.update_policy(policy_id, &body).await?;
    utils::print_response(&response, matches)
}

pub async fn delete_policy(matches: &ArgMatches) -> Result<(), CliActionError> {
    let policy_id = utils::required(matches, PARAMETER_POLICY_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.delete_policy(policy_id).await?;
    utils::print_response(&response, matches)
}

pub async fn activate_policy(matches: &ArgMatches) -> Result<(), CliActionError> {
    let policy_id = utils::required(matches, PARAMETER_POLICY_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.activate_policy(policy_id).await?;
    utils::print_response(&response, matches)
}

pub async fn deactivate_policy(matches: &ArgMatches) -> Result<(), CliActionError> {
    let policy_id = utils::required(matches, PARAMETER_POLICY_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.deactivate_policy(policy_id).await?;
    utils::print_response(&response, matches)
}

pub async fn list_policy_rules(matches: &ArgMatches) -> Result<(), CliActionError> {
    let policy_id = utils::required(matches, PARAMETER_POLICY_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.list_policy_rules(policy_id).await?;
    utils::print_response(&response, matches)
}

pub async fn get_policy_rule(matches: &ArgMatches) -> Result<(), CliActionError> {
    let policy_id = utils::required(matches, PARAMETER_POLICY_ID)?;
    let rule_id = utils::required(matches, PARAMETER_RULE_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.get_policy_rule(policy_id, rule_id).await?;
    utils::print_response(&response, matches)
}

pub async fn create_policy_rule(matches: &ArgMatches) -> Result<(), CliActionError> {
    let policy_id = utils::required(matches, PARAMETER_POLICY_ID)?;
    let body = utils::json_body(matches)?;

    let client = AdminApiClient::try_default()?;
    let response = client.create_policy_rule(policy_id, &body).await?;
    utils::print_response(&response, matches)
}

pub async fn update_policy_rule(matches: &ArgMatches) -> Result<(), CliActionError> {
    let policy_id = utils::required(matches, PARAMETER_POLICY_ID)?;
    let rule_id = utils::required(matches, PARAMETER_RULE_ID)?;
    let body = utils::json_body(matches)?;

    let client = AdminApiClient::try_default()?;
    let response = client.update_policy_rule(policy_id, rule_id, &body).await?;
    utils::print_response(&response, matches)
}

pub async fn delete_policy_rule(matches: &ArgMatches) -> Result<(), CliActionError> {
    let policy_id = utils::required(matches, PARAMETER_POLICY_ID)?;
    let rule_id = utils::required(matches, PARAMETER_RULE_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.delete_policy_rule(policy_id, rule_id).await?;
    utils::print_response(&response, matches)
}

pub async fn activate_policy_rule(matches: &ArgMatches) -> Result<(), CliActionError> {
    let policy_id = utils::required(matches, PARAMETER_POLICY_ID)?;
    let rule_id = utils::required(matches, PARAMETER_RULE_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.activate_policy_rule(policy_id, rule_id).await?;
    utils::print_response(&response, matches)
}

pub async fn deactivate_policy_rule(matches: &ArgMatches) -> Result<(), CliActionError> {
    let policy_id = utils::required(matches, PARAMETER_POLICY_ID)?;
    let rule_id = utils::required(matches, PARAMETER_RULE_ID)?;

    let client = AdminApiClient::try_default()?;
    let response = client.deactivate_policy_rule(policy_id, rule_id).await?;
    utils::print_response(&response, matches)
}
