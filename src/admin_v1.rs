//! Client for the v1 administration API.
//!
//! One method per HTTP operation, grouped by resource. Every method is a
//! thin binding: it interpolates path parameters, forwards query parameters
//! and the optional JSON body, and returns the raw response. All payloads
//! are opaque `serde_json::Value`s; nothing here validates them.

use reqwest::StatusCode;
use serde_json::Value;

use crate::configuration::Configuration;
use crate::http_utils::{HttpClient, HttpRequestConfig};
use crate::keyring;

/// Error emitted by the administration API client
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("API request failed with status {status}")]
    Api { status: StatusCode, body: String },
    #[error(transparent)]
    ConfigurationError(#[from] crate::configuration::ConfigurationError),
    #[error(transparent)]
    KeyringError(#[from] crate::keyring::KeyringError),
    #[error("no API token configured; run 'idcli auth login --token <token>' first")]
    MissingApiToken,
}

/// A successful response: the status and the body exactly as received.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    /// True for responses without a printable body (e.g. 204 No Content).
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}

type ApiResult = Result<ApiResponse, ApiError>;

pub struct AdminApiClient {
    http: HttpClient,
    token: String,
}

impl AdminApiClient {
    pub fn new(http: HttpClient, token: String) -> Self {
        Self { http, token }
    }

    /// Build a client from the default configuration and credential store.
    pub fn try_default() -> Result<Self, ApiError> {
        let configuration = Configuration::load_or_create_default()?;
        let base_url = configuration.get_api_base_url()?;
        let token = keyring::resolve_api_token()?.ok_or(ApiError::MissingApiToken)?;
        let http = HttpClient::new(HttpRequestConfig::new(base_url))?;
        Ok(Self::new(http, token))
    }

    fn token(&self) -> &str {
        &self.token
    }

    // -- Users ------------------------------------------------------------

    pub async fn list_users(&self, query: &[(String, String)]) -> ApiResult {
        self.http.get("/api/v1/users", query, self.token()).await
    }

    pub async fn get_user(&self, user_id: &str) -> ApiResult {
        self.http
            .get(&format!("/api/v1/users/{}", user_id), &[], self.token())
            .await
    }

    pub async fn create_user(&self, query: &[(String, String)], body: &Value) -> ApiResult {
        self.http
            .post("/api/v1/users", query, Some(body), self.token())
            .await
    }

    pub async fn update_user(&self, user_id: &str, body: &Value) -> ApiResult {
        self.http
            .post(
                &format!("/api/v1/users/{}", user_id),
                &[],
                Some(body),
                self.token(),
            )
            .await
    }

    pub async fn delete_user(&self, user_id: &str, query: &[(String, String)]) -> ApiResult {
        self.http
            .delete(&format!("/api/v1/users/{}", user_id), query, self.token())
            .await
    }

    pub async fn activate_user(&self, user_id: &str, query: &[(String, String)]) -> ApiResult {
        self.http
            .post(
                &format!("/api/v1/users/{}/lifecycle/activate", user_id),
                query,
                None,
                self.token(),
            )
            .await
    }

    pub async fn deactivate_user(&self, user_id: &str, query: &[(String, String)]) -> ApiResult {
        self.http
            .post(
                &format!("/api/v1/users/{}/lifecycle/deactivate", user_id),
                query,
                None,
                self.token(),
            )
            .await
    }

    pub async fn suspend_user(&self, user_id: &str) -> ApiResult {
        self.http
            .post(
                &format!("/api/v1/users/{}/lifecycle/suspend", user_id),
                &[],
                None,
                self.token(),
            )
            .await
    }

    pub async fn unsuspend_user(&self, user_id: &str) -> ApiResult {
        self.http
            .post(
                &format!("/api/v1/users/{}/lifecycle/unsuspend", user_id),
                &[],
                None,
                self.token(),
            )
            .await
    }

    pub async fn unlock_user(&self, user_id: &str) -> ApiResult {
        self.http
            .post(
                &format!("/api/v1/users/{}/lifecycle/unlock", user_id),
                &[],
                None,
                self.token(),
            )
            .await
    }

    pub async fn expire_user_password(&self, user_id: &str) -> ApiResult {
        self.http
            .post(
                &format!("/api/v1/users/{}/lifecycle/expire_password", user_id),
                &[],
                None,
                self.token(),
            )
            .await
    }

    pub async fn reset_user_password(
        &self,
        user_id: &str,
        query: &[(String, String)],
    ) -> ApiResult {
        self.http
            .post(
                &format!("/api/v1/users/{}/lifecycle/reset_password", user_id),
                query,
                None,
                self.token(),
            )
            .await
    }

    pub async fn reset_user_factors(&self, user_id: &str) -> ApiResult {
        self.http
            .post(
                &format!("/api/v1/users/{}/lifecycle/reset_factors", user_id),
                &[],
                None,
                self.token(),
            )
            .await
    }

    pub async fn list_user_groups(&self, user_id: &str) -> ApiResult {
        self.http
            .get(
                &format!("/api/v1/users/{}/groups", user_id),
                &[],
                self.token(),
            )
            .await
    }

    pub async fn list_user_app_links(&self, user_id: &str) -> ApiResult {
        self.http
            .get(
                &format!("/api/v1/users/{}/appLinks", user_id),
                &[],
                self.token(),
            )
            .await
    }

    // -- Groups -----------------------------------------------------------

    pub async fn list_groups(&self, query: &[(String, String)]) -> ApiResult {
        self.http.get("/api/v1/groups", query, self.token()).await
    }

    pub async fn get_group(&self, group_id: &str) -> ApiResult {
        self.http
            .get(&format!("/api/v1/groups/{}", group_id), &[], self.token())
            .await
    }

    pub async fn create_group(&self, body: &Value) -> ApiResult {
        self.http
            .post("/api/v1/groups", &[], Some(body), self.token())
            .await
    }

    pub async fn update_group(&self, group_id: &str, body: &Value) -> ApiResult {
        self.http
            .put(
                &format!("/api/v1/groups/{}", group_id),
                &[],
                Some(body),
                self.token(),
            )
            .await
    }

    pub async fn delete_group(&self, group_id: &str) -> ApiResult {
        self.http
            .delete(&format!("/api/v1/groups/{}", group_id), &[], self.token())
            .await
    }

    pub async fn list_group_users(&self, group_id: &str, query: &[(String, String)]) -> ApiResult {
        self.http
            .get(
                &format!("/api/v1/groups/{}/users", group_id),
                query,
                self.token(),
            )
            .await
    }

    pub async fn add_user_to_group(&self, group_id: &str, user_id: &str) -> ApiResult {
        self.http
            .put(
                &format!("/api/v1/groups/{}/users/{}", group_id, user_id),
                &[],
                None,
                self.token(),
            )
            .await
    }

    pub async fn remove_user_from_group(&self, group_id: &str, user_id: &str) -> ApiResult {
        self.http
            .delete(
                &format!("/api/v1/groups/{}/users/{}", group_id, user_id),
                &[],
                self.token(),
            )
            .await
    }

    pub async fn list_group_apps(&self, group_id: &str, query: &[(String, String)]) -> ApiResult {
        self.http
            .get(
                &format!("/api/v1/groups/{}/apps", group_id),
                query,
                self.token(),
            )
            .await
    }

    // -- Applications -----------------------------------------------------

    pub async fn list_apps(&self, query: &[(String, String)]) -> ApiResult {
        self.http.get("/api/v1/apps", query, self.token()).await
    }

    pub async fn get_app(&self, app_id: &str, query: &[(String, String)]) -> ApiResult {
        self.http
            .get(&format!("/api/v1/apps/{}", app_id), query, self.token())
            .await
    }

    pub async fn create_app(&self, query: &[(String, String)], body: &Value) -> ApiResult {
        self.http
            .post("/api/v1/apps", query, Some(body), self.token())
            .await
    }

    pub async fn update_app(&self, app_id: &str, body: &Value) -> ApiResult {
        self.http
            .put(
                &format!("/api/v1/apps/{}", app_id),
                &[],
                Some(body),
                self.token(),
            )
            .await
    }

    pub async fn delete_app(&self, app_id: &str) -> ApiResult {
        self.http
            .delete(&format!("/api/v1/apps/{}", app_id), &[], self.token())
            .await
    }

    pub async fn activate_app(&self, app_id: &str) -> ApiResult {
        self.http
            .post(
                &format!("/api/v1/apps/{}/lifecycle/activate", app_id),
                &[],
                None,
                self.token(),
            )
            .await
    }

    pub async fn deactivate_app(&self, app_id: &str) -> ApiResult {
        self.http
            .post(
                &format!("/api/v1/apps/{}/lifecycle/deactivate", app_id),
                &[],
                None,
                self.token(),
            )
            .await
    }

    pub async fn list_app_users(&self, app_id: &str, query: &[(String, String)]) -> ApiResult {
        self.http
            .get(
                &format!("/api/v1/apps/{}/users", app_id),
                query,
                self.token(),
            )
            .await
    }

    pub async fn assign_user_to_app(&self, app_id: &str, body: &Value) -> ApiResult {
        self.http
            .post(
                &format!("/api/v1/apps/{}/users", app_id),
                &[],
                Some(body),
                self.token(),
            )
            .await
    }

    pub async fn unassign_user_from_app(
        &self,
        app_id: &str,
        user_id: &str,
        query: &[(String, String)],
    ) -> ApiResult {
        self.http
            .delete(
                &format!("/api/v1/apps/{}/users/{}", app_id, user_id),
                query,
                self.token(),
            )
            .await
    }

    pub async fn list_app_groups(&self, app_id: &str, query: &[(String, String)]) -> ApiResult {
        self.http
            .get(
                &format!("/api/v1/apps/{}/groups", app_id),
                query,
                self.token(),
            )
            .await
    }

    pub async fn assign_group_to_app(
        &self,
        app_id: &str,
        group_id: &str,
        body: Option<&Value>,
    ) -> ApiResult {
        self.http
            .put(
                &format!("/api/v1/apps/{}/groups/{}", app_id, group_id),
                &[],
                body,
                self.token(),
            )
            .await
    }

    pub async fn unassign_group_from_app(&self, app_id: &str, group_id: &str) -> ApiResult {
        self.http
            .delete(
                &format!("/api/v1/apps/{}/groups/{}", app_id, group_id),
                &[],
                self.token(),
            )
            .await
    }

    // -- Policies ---------------------------------------------------------

    pub async fn list_policies(&self, query: &[(String, String)]) -> ApiResult {
        self.http.get("/api/v1/policies", query, self.token()).await
    }

    pub async fn get_policy(&self, policy_id: &str, query: &[(String, String)]) -> ApiResult {
        self.http
            .get(
                &format!("/api/v1/policies/{}", policy_id),
                query,
                self.token(),
            )
            .await
    }

    pub async fn create_policy(&self, query: &[(String, String)], body: &Value) -> ApiResult {
        self.http
            .post("/api/v1/policies", query, Some(body), self.token())
            .await
    }

    pub async fn update_policy(&self, policy_id: &str, body: &Value) -> ApiResult {
        self.http
            .put(
                &format!("/api/v1/policies/{}", policy_id),
                &[],
                Some(body),
                self.token(),
            )
            .await
    }

    pub async fn delete_policy(&self, policy_id: &str) -> ApiResult {
        self.http
            .delete(
                &format!("/api/v1/policies/{}", policy_id),
                &[],
                self.token(),
            )
            .await
    }

    pub async fn activate_policy(&self, policy_id: &str) -> ApiResult {
        self.http
            .post(
                &format!("/api/v1/policies/{}/lifecycle/activate", policy_id),
                &[],
                None,
                self.token(),
            )
            .await
    }

    pub async fn deactivate_policy(&self, policy_id: &str) -> ApiResult {
        self.http
            .post(
                &format!("/api/v1/policies/{}/lifecycle/deactivate", policy_id),
                &[],
                None,
                self.token(),
            )
            .await
    }

    pub async fn list_policy_rules(&self, policy_id: &str) -> ApiResult {
        self.http
            .get(
                &format!("/api/v1/policies/{}/rules", policy_id),
                &[],
                self.token(),
            )
            .await
    }

    pub async fn get_policy_rule(&self, policy_id: &str, rule_id: &str) -> ApiResult {
        self.http
            .get(
                &format!("/api/v1/policies/{}/rules/{}", policy_id, rule_id),
                &[],
                self.token(),
            )
            .await
    }

    pub async fn create_policy_rule(&self, policy_id: &str, body: &Value) -> ApiResult {
        self.http
            .post(
                &format!("/api/v1/policies/{}/rules", policy_id),
                &[],
                Some(body),
                self.token(),
            )
            .await
    }

    pub async fn update_policy_rule(
        &self,
        policy_id: &str,
        rule_id: &str,
        body: &Value,
    ) -> ApiResult {
        self.http
            .put(
                &format!("/api/v1/policies/{}/rules/{}", policy_id, rule_id),
                &[],
                Some(body),
                self.token(),
            )
            .await
    }

    pub async fn delete_policy_rule(&self, policy_id: &str, rule_id: &str) -> ApiResult {
        self.http
            .delete(
                &format!("/api/v1/policies/{}/rules/{}", policy_id, rule_id),
                &[],
                self.token(),
            )
            .await
    }

    pub async fn activate_policy_rule(&self, policy_id: &str, rule_id: &str) -> ApiResult {
        self.http
            .post(
                &format!(
                    "/api/v1/policies/{}/rules/{}/lifecycle/activate",
                    policy_id, rule_id
                ),
                &[],
                None,
                self.token(),
            )
            .await
    }

    pub async fn deactivate_policy_rule(&self, policy_id: &str, rule_id: &str) -> ApiResult {
        self.http
            .post(
                &format!(
                    "/api/v1/policies/{}/rules/{}/lifecycle/deactivate",
                    policy_id, rule_id
                ),
                &[],
                None,
                self.token(),
            )
            .await
    }

    // -- Authenticators ---------------------------------------------------

    pub async fn list_authenticators(&self) -> ApiResult {
        self.http
            .get("/api/v1/authenticators", &[], self.token())
            .await
    }

    pub async fn get_authenticator(&self, authenticator_id: &str) -> ApiResult {
        self.http
            .get(
                &format!("/api/v1/authenticators/{}", authenticator_id),
                &[],
                self.token(),
            )
            .await
    }

    pub async fn create_authenticator(
        &self,
        query: &[(String, String)],
        body: &Value,
    ) -> ApiResult {
        self.http
            .post("/api/v1/authenticators", query, Some(body), self.token())
            .await
    }

    pub async fn update_authenticator(&self, authenticator_id: &str, body: &Value) -> ApiResult {
        self.http
            .put(
                &format!("/api/v1/authenticators/{}", authenticator_id),
                &[],
                Some(body),
                self.token(),
            )
            .await
    }

    pub async fn activate_authenticator(&self, authenticator_id: &str) -> ApiResult {
        self.http
            .post(
                &format!(
                    "/api/v1/authenticators/{}/lifecycle/activate",
                    authenticator_id
                ),
                &[],
                None,
                self.token(),
            )
            .await
    }

    pub async fn deactivate_authenticator(&self, authenticator_id: &str) -> ApiResult {
        self.http
            .post(
                &format!(
                    "/api/v1/authenticators/{}/lifecycle/deactivate",
                    authenticator_id
                ),
                &[],
                None,
                self.token(),
            )
            .await
    }

    pub async fn list_authenticator_methods(&self, authenticator_id: &str) -> ApiResult {
        self.http
            .get(
                &format!("/api/v1/authenticators/{}/methods", authenticator_id),
                &[],
                self.token(),
            )
            .await
    }

    pub async fn get_authenticator_method(
        &self,
        authenticator_id: &str,
        method_type: &str,
    ) -> ApiResult {
        self.http
            .get(
                &format!(
                    "/api/v1/authenticators/{}/methods/{}",
                    authenticator_id, method_type
                ),
                &[],
                self.token(),
            )
            .await
    }

    pub async fn update_authenticator_method(
        &self,
        authenticator_id: &str,
        method_type: &str,
        body: &Value,
    ) -> ApiResult {
        self.http
            .put(
                &format!(
                    "/api/v1/authenticators/{}/methods/{}",
                    authenticator_id, method_type
                ),
                &[],
                Some(body),
                self.token(),
            )
            .await
    }

    pub async fn activate_authenticator_method(
        &self,
        authenticator_id: &str,
        method_type: &str,
    ) -> ApiResult {
        self.http
            .post(
                &format!(
                    "/api/v1/authenticators/{}/methods/{}/lifecycle/activate",
                    authenticator_id, method_type
                ),
                &[],
                None,
                self.token(),
            )
            .await
    }

    pub async fn deactivate_authenticator_method(
        &self,
        authenticator_id: &str,
        method_type: &str,
    ) -> ApiResult {
        self.http
            .post(
                &format!(
                    "/api/v1/authenticators/{}/methods/{}/lifecycle/deactivate",
                    authenticator_id, method_type
                ),
                &[],
                None,
                self.token(),
            )
            .await
    }

    // -- Roles ------------------------------------------------------------

    pub async fn list_roles(&self, query: &[(String, String)]) -> ApiResult {
        self.http
            .get("/api/v1/iam/roles", query, self.token())
            .await
    }

    pub async fn get_role(&self, role_id: &str) -> ApiResult {
        self.http
            .get(&format!("/api/v1/iam/roles/{}", role_id), &[], self.token())
            .await
    }

    pub async fn create_role(&self, body: &Value) -> ApiResult {
        self.http
            .post("/api/v1/iam/roles", &[], Some(body), self.token())
            .await
    }

    pub async fn update_role(&self, role_id: &str, body: &Value) -> ApiResult {
        self.http
            .put(
                &format!("/api/v1/iam/roles/{}", role_id),
                &[],
                Some(body),
                self.token(),
            )
            .await
    }

    pub async fn delete_role(&self, role_id: &str) -> ApiResult {
        self.http
            .delete(&format!("/api/v1/iam/roles/{}", role_id), &[], self.token())
            .await
    }

    pub async fn list_role_permissions(&self, role_id: &str) -> ApiResult {
        self.http
            .get(
                &format!("/api/v1/iam/roles/{}/permissions", role_id),
                &[],
                self.token(),
            )
            .await
    }

    pub async fn get_role_permission(&self, role_id: &str, permission: &str) -> ApiResult {
        self.http
            .get(
                &format!("/api/v1/iam/roles/{}/permissions/{}", role_id, permission),
                &[],
                self.token(),
            )
            .await
    }

    pub async fn upsert_role_permission(
        &self,
        role_id: &str,
        permission: &str,
        body: Option<&Value>,
    ) -> ApiResult {
        self.http
            .post(
                &format!("/api/v1/iam/roles/{}/permissions/{}", role_id, permission),
                &[],
                body,
                self.token(),
            )
            .await
    }

    pub async fn delete_role_permission(&self, role_id: &str, permission: &str) -> ApiResult {
        self.http
            .delete(
                &format!("/api/v1/iam/roles/{}/permissions/{}", role_id, permission),
                &[],
                self.token(),
            )
            .await
    }

    // -- Resource sets ----------------------------------------------------

    pub async fn list_resource_sets(&self, query: &[(String, String)]) -> ApiResult {
        self.http
            .get("/api/v1/iam/resource-sets", query, self.token())
            .await
    }

    pub async fn get_resource_set(&self, resource_set_id: &str) -> ApiResult {
        self.http
            .get(
                &format!("/api/v1/iam/resource-sets/{}", resource_set_id),
                &[],
                self.token(),
            )
            .await
    }

    pub async fn create_resource_set(&self, body: &Value) -> ApiResult {
        self.http
            .post("/api/v1/iam/resource-sets", &[], Some(body), self.token())
            .await
    }

    pub async fn update_resource_set(&self, resource_set_id: &str, body: &Value) -> ApiResult {
        self.http
            .put(
                &format!("/api/v1/iam/resource-sets/{}", resource_set_id),
                &[],
                Some(body),
                self.token(),
            )
            .await
    }

    pub async fn delete_resource_set(&self, resource_set_id: &str) -> ApiResult {
        self.http
            .delete(
                &format!("/api/v1/iam/resource-sets/{}", resource_set_id),
                &[],
                self.token(),
            )
            .await
    }

    pub async fn list_resource_set_resources(&self, resource_set_id: &str) -> ApiResult {
        self.http
            .get(
                &format!("/api/v1/iam/resource-sets/{}/resources", resource_set_id),
                &[],
                self.token(),
            )
            .await
    }

    pub async fn add_resource_set_resources(
        &self,
        resource_set_id: &str,
        body: &Value,
    ) -> ApiResult {
        self.http
            .patch(
                &format!("/api/v1/iam/resource-sets/{}/resources", resource_set_id),
                &[],
                Some(body),
                self.token(),
            )
            .await
    }

    pub async fn delete_resource_set_resource(
        &self,
        resource_set_id: &str,
        resource_id: &str,
    ) -> ApiResult {
        self.http
            .delete(
                &format!(
                    "/api/v1/iam/resource-sets/{}/resources/{}",
                    resource_set_id, resource_id
                ),
                &[],
                self.token(),
            )
            .await
    }

    pub async fn list_resource_set_bindings(&self, resource_set_id: &str) -> ApiResult {
        self.http
            .get(
                &format!("/api/v1/iam/resource-sets/{}/bindings", resource_set_id),
                &[],
                self.token(),
            )
            .await
    }

    pub async fn get_resource_set_binding(
        &self,
        resource_set_id: &str,
        role_id: &str,
    ) -> ApiResult {
        self.http
            .get(
                &format!(
                    "/api/v1/iam/resource-sets/{}/bindings/{}",
                    resource_set_id, role_id
                ),
                &[],
                self.token(),
            )
            .await
    }

    pub async fn create_resource_set_binding(
        &self,
        resource_set_id: &str,
        body: &Value,
    ) -> ApiResult {
        self.http
            .post(
                &format!("/api/v1/iam/resource-sets/{}/bindings", resource_set_id),
                &[],
                Some(body),
                self.token(),
            )
            .await
    }

    pub async fn delete_resource_set_binding(
        &self,
        resource_set_id: &str,
        role_id: &str,
    ) -> ApiResult {
        self.http
            .delete(
                &format!(
                    "/api/v1/iam/resource-sets/{}/bindings/{}",
                    resource_set_id, role_id
                ),
                &[],
                self.token(),
            )
            .await
    }

    // -- Trusted origins --------------------------------------------------

    pub async fn list_trusted_origins(&self, query: &[(String, String)]) -> ApiResult {
        self.http
            .get("/api/v1/trustedOrigins", query, self.token())
            .await
    }

    pub async fn get_trusted_origin(&self, trusted_origin_id: &str) -> ApiResult {
        self.http
            .get(
                &format!("/api/v1/trustedOrigins/{}", trusted_origin_id),
                &[],
                self.token(),
            )
            .await
    }

    pub async fn create_trusted_origin(&self, body: &Value) -> ApiResult {
        self.http
            .post("/api/v1/trustedOrigins", &[], Some(body), self.token())
            .await
    }

    pub async fn update_trusted_origin(&self, trusted_origin_id: &str, body: &Value) -> ApiResult {
        self.http
            .put(
                &format!("/api/v1/trustedOrigins/{}", trusted_origin_id),
                &[],
                Some(body),
                self.token(),
            )
            .await
    }

    pub async fn delete_trusted_origin(&self, trusted_origin_id: &str) -> ApiResult {
        self.http
            .delete(
                &format!("/api/v1/trustedOrigins/{}", trusted_origin_id),
                &[],
                self.token(),
            )
            .await
    }

    pub async fn activate_trusted_origin(&self, trusted_origin_id: &str) -> ApiResult {
        self.http
            .post(
                &format!(
                    "/api/v1/trustedOrigins/{}/lifecycle/activate",
                    trusted_origin_id
                ),
                &[],
                None,
                self.token(),
            )
            .await
    }

    pub async fn deactivate_trusted_origin(&self, trusted_origin_id: &str) -> ApiResult {
        self.http
            .post(
                &format!(
                    "/api/v1/trustedOrigins/{}/lifecycle/deactivate",
                    trusted_origin_id
                ),
                &[],
                None,
                self.token(),
            )
            .await
    }

    // -- Org --------------------------------------------------------------

    pub async fn get_org(&self) -> ApiResult {
        self.http.get("/api/v1/org", &[], self.token()).await
    }

    pub async fn update_org(&self, body: &Value) -> ApiResult {
        self.http
            .put("/api/v1/org", &[], Some(body), self.token())
            .await
    }

    pub async fn list_org_contacts(&self) -> ApiResult {
        self.http
            .get("/api/v1/org/contacts", &[], self.token())
            .await
    }

    pub async fn get_org_contact(&self, contact_type: &str) -> ApiResult {
        self.http
            .get(
                &format!("/api/v1/org/contacts/{}", contact_type),
                &[],
                self.token(),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_is_reported_empty() {
        let response = ApiResponse {
            status: StatusCode::NO_CONTENT,
            body: String::new(),
        };
        assert!(response.is_empty());

        let response = ApiResponse {
            status: StatusCode::OK,
            body: "{}".to_string(),
        };
        assert!(!response.is_empty());
    }

    #[test]
    fn api_error_displays_status() {
        let error = ApiError::Api {
            status: StatusCode::NOT_FOUND,
            body: "{\"errorCode\":\"E0000007\"}".to_string(),
        };
        assert!(error.to_string().contains("404"));
    }
}
