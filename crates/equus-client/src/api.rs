//! API client for EquusID back-office operations
//!
//! Hands out one [`HttpResource`] per entity and provides typed methods for
//! the endpoints that do not fit the CRUD pattern.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::ClientConfig;
use crate::constants::{OWNER_LOOKUP_SIZE, api_path, messages};
use crate::credential::CredentialProvider;
use crate::error::{ClientError, Result};
use crate::http::EquusHttpClient;
use crate::model::{
    EditUser, EquineMinInfo, HealthBookInfo, ListQuery, MinUserInfo, Page, StableInfo, StableType,
    TravelInfo, UserInfo,
};
use crate::resource::{
    BreedResource, EquineResource, HealthBookResource, HttpResource, RecordId, ResourceEndpoints,
    StableResource, TravelResource, UserResource,
};

/// Data returned by a successful login
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginData {
    pub token: String,
    pub user: Option<serde_json::Value>,
}

/// API client wrapper providing typed access to the EquusID back office
pub struct EquusApiClient {
    http_client: Arc<EquusHttpClient>,
}

impl EquusApiClient {
    /// Create a new API client with the given HTTP client
    pub fn new(http_client: EquusHttpClient) -> Self {
        Self {
            http_client: Arc::new(http_client),
        }
    }

    pub fn from_config(
        config: ClientConfig,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self> {
        Ok(Self::new(EquusHttpClient::new(config, credentials)?))
    }

    /// Get the underlying HTTP client
    pub fn http_client(&self) -> &Arc<EquusHttpClient> {
        &self.http_client
    }

    // ============== Session ==============

    /// Log in and store the issued token in the credential provider
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginData> {
        #[derive(Serialize)]
        struct Body<'a> {
            email: &'a str,
            password: &'a str,
        }

        let data: LoginData = self
            .http_client
            .post_json(
                api_path::ADMIN_LOGIN,
                &Body { email, password },
                messages::LOGIN_FAILED,
            )
            .await?;

        if data.token.is_empty() {
            return Err(ClientError::request(None, messages::LOGIN_FAILED));
        }

        self.http_client.credentials().store(data.token.clone());
        info!("Logged in as {}", email);
        Ok(data)
    }

    pub fn logout(&self) {
        self.http_client.credentials().clear();
        info!("Logged out");
    }

    pub fn is_authenticated(&self) -> bool {
        self.http_client.credentials().has_session()
    }

    // ============== Resources ==============

    pub fn users(&self) -> UserResource {
        HttpResource::new(self.http_client.clone(), ResourceEndpoints::users())
    }

    pub fn equines(&self) -> EquineResource {
        HttpResource::new(self.http_client.clone(), ResourceEndpoints::equines())
    }

    pub fn health_books(&self) -> HealthBookResource {
        HttpResource::new(self.http_client.clone(), ResourceEndpoints::health_books())
    }

    pub fn stables(&self) -> StableResource {
        HttpResource::new(self.http_client.clone(), ResourceEndpoints::stables())
    }

    pub fn travels(&self) -> TravelResource {
        HttpResource::new(self.http_client.clone(), ResourceEndpoints::travels())
    }

    pub fn breeds(&self) -> BreedResource {
        HttpResource::new(self.http_client.clone(), ResourceEndpoints::breeds())
    }

    // ============== User APIs ==============

    /// Update the account of the logged-in administrator
    pub async fn update_account_info(&self, user: &EditUser) -> Result<UserInfo> {
        self.http_client
            .patch_json(
                api_path::USER_UPDATE_ACCOUNT_INFO,
                user,
                messages::UPDATE_FAILED,
            )
            .await
    }

    /// Users with the owner profile, used by the travel form's first step
    pub async fn owners(&self) -> Result<Vec<UserInfo>> {
        let query = ListQuery::new(0, OWNER_LOOKUP_SIZE);
        let page: Page<UserInfo> = self
            .http_client
            .get_with_query(api_path::USER_LIST, &query.to_pairs(), messages::LIST_FAILED)
            .await?;
        Ok(page.content.into_iter().filter(UserInfo::is_owner).collect())
    }

    // ============== Equine APIs ==============

    /// Equines of one owner, used by the travel form's second step
    pub async fn equines_by_owner(&self, owner_id: RecordId) -> Result<Vec<EquineMinInfo>> {
        self.http_client
            .get(
                &format!("{}/{}", api_path::EQUINE_LIST_BY_OWNER, owner_id),
                messages::LIST_FAILED,
            )
            .await
    }

    pub async fn equines_by_stable(&self, stable_id: RecordId) -> Result<Vec<EquineMinInfo>> {
        self.http_client
            .get(
                &format!("{}/{}", api_path::STABLE_EQUINES, stable_id),
                messages::LIST_FAILED,
            )
            .await
    }

    // ============== Health Book APIs ==============

    /// Full health book with extractions and vaccines
    pub async fn health_book_detail(&self, id: RecordId) -> Result<HealthBookInfo> {
        self.http_client
            .get(
                &format!("{}/get/{}", api_path::HEALTH_BOOK, id),
                messages::GET_FAILED,
            )
            .await
    }

    // ============== Stable APIs ==============

    pub async fn stable_types(&self) -> Result<Vec<StableType>> {
        self.http_client
            .get(api_path::STABLE_TYPES, messages::LIST_FAILED)
            .await
    }

    pub async fn search_stables(
        &self,
        renspa: Option<&str>,
        alias: Option<&str>,
    ) -> Result<Vec<StableInfo>> {
        #[derive(Serialize)]
        struct Query<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            renspa: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            alias: Option<&'a str>,
        }

        self.http_client
            .get_with_query(
                api_path::STABLE_SEARCH,
                &Query { renspa, alias },
                messages::LIST_FAILED,
            )
            .await
    }

    pub async fn stable_managers(&self, stable_id: RecordId) -> Result<Vec<MinUserInfo>> {
        self.http_client
            .get(
                &format!("{}/{}", api_path::STABLE_MANAGERS, stable_id),
                messages::LIST_FAILED,
            )
            .await
    }

    pub async fn assign_managers(
        &self,
        stable_id: RecordId,
        manager_ids: &[RecordId],
    ) -> Result<bool> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'a> {
            managers_to_add_ids: &'a [RecordId],
        }

        self.http_client
            .patch_json(
                &format!("{}/{}", api_path::STABLE_ASSIGN_MANAGERS, stable_id),
                &Body {
                    managers_to_add_ids: manager_ids,
                },
                messages::ACTION_FAILED,
            )
            .await
    }

    pub async fn remove_manager(&self, stable_id: RecordId, manager_id: RecordId) -> Result<bool> {
        self.http_client
            .patch_json(
                &format!(
                    "{}/{}/{}",
                    api_path::STABLE_REMOVE_MANAGERS,
                    stable_id,
                    manager_id
                ),
                &serde_json::json!({}),
                messages::ACTION_FAILED,
            )
            .await
    }

    pub async fn change_owner(&self, stable_id: RecordId, new_owner_id: RecordId) -> Result<bool> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body {
            stable_id: RecordId,
            new_owner_id: RecordId,
        }

        self.http_client
            .patch_json(
                api_path::STABLE_CHANGE_OWNER,
                &Body {
                    stable_id,
                    new_owner_id,
                },
                messages::ACTION_FAILED,
            )
            .await
    }

    // ============== Travel APIs ==============

    pub async fn confirm_destination(&self, travel_id: RecordId) -> Result<TravelInfo> {
        self.http_client
            .patch_json(
                &format!("{}/{}", api_path::TRAVEL_CONFIRM_DESTINATION, travel_id),
                &serde_json::json!({}),
                messages::ACTION_FAILED,
            )
            .await
    }

    pub async fn mark_done(&self, travel_id: RecordId) -> Result<TravelInfo> {
        self.http_client
            .patch_json(
                &format!("{}/{}", api_path::TRAVEL_MARK_DONE, travel_id),
                &serde_json::json!({}),
                messages::ACTION_FAILED,
            )
            .await
    }

    pub async fn cancel_travel(&self, travel_id: RecordId) -> Result<bool> {
        self.http_client
            .delete(
                &format!("{}/{}", api_path::TRAVEL_CANCEL, travel_id),
                messages::ACTION_FAILED,
            )
            .await
    }
}
