//! Generic CRUD access to one backend resource
//!
//! [`ResourceClient`] is the seam the console controllers are written
//! against. [`HttpResource`] implements it over [`EquusHttpClient`] using a
//! [`ResourceEndpoints`] table, so adding a resource means adding endpoint
//! data rather than code.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::constants::{api_path, messages};
use crate::error::Result;
use crate::http::EquusHttpClient;
use crate::model::{
    AddEquine, AddHealthBook, AddStable, AddTravel, AddUser, BreedBiotypeInfo, BreedForm,
    EditTravel, EditUser, EquineInfo, HealthBookMinInfo, ListQuery, Page, StableInfo, TravelInfo,
    UserInfo,
};

/// Backend record identifier
pub type RecordId = i64;

/// CRUD operations of one resource
#[async_trait]
pub trait ResourceClient: Send + Sync {
    type Entity: Send + Sync;
    type Create: Send + Sync;
    type Update: Send + Sync;

    /// Short name used in log lines
    fn resource_name(&self) -> &str {
        "resource"
    }

    async fn list(&self, query: &ListQuery) -> Result<Page<Self::Entity>>;

    async fn get(&self, id: RecordId) -> Result<Self::Entity>;

    async fn create(&self, dto: &Self::Create) -> Result<Self::Entity>;

    async fn update(&self, id: RecordId, dto: &Self::Update) -> Result<Self::Entity>;

    async fn remove(&self, id: RecordId) -> Result<bool>;
}

/// HTTP verb used by a resource's edit endpoint
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateMethod {
    Patch,
    Put,
}

/// Shape of a resource's list response
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListShape {
    /// Server returns a `Page`
    Paged,
    /// Server returns a plain array, paged locally
    Unpaged,
}

/// Path templates of one resource. `{id}` is replaced with the record id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceEndpoints {
    pub name: &'static str,
    pub list: String,
    pub get: String,
    pub create: String,
    pub update: String,
    pub remove: String,
    pub update_method: UpdateMethod,
    pub list_shape: ListShape,
}

impl ResourceEndpoints {
    /// `{base}/list`, `{base}/get/{id}`, `{base}/add`, PATCH `{base}/edit/{id}`,
    /// `{base}/remove/{id}`
    pub fn standard(name: &'static str, base: &str) -> Self {
        Self {
            name,
            list: format!("{}/list", base),
            get: format!("{}/get/{{id}}", base),
            create: format!("{}/add", base),
            update: format!("{}/edit/{{id}}", base),
            remove: format!("{}/remove/{{id}}", base),
            update_method: UpdateMethod::Patch,
            list_shape: ListShape::Paged,
        }
    }

    /// Collection-style endpoints: one path for list/create, `{base}/{id}` for the rest
    pub fn rest(name: &'static str, base: &str) -> Self {
        Self {
            name,
            list: base.to_string(),
            get: format!("{}/{{id}}", base),
            create: base.to_string(),
            update: format!("{}/{{id}}", base),
            remove: format!("{}/{{id}}", base),
            update_method: UpdateMethod::Put,
            list_shape: ListShape::Unpaged,
        }
    }

    pub fn with_remove(mut self, template: &str) -> Self {
        self.remove = template.to_string();
        self
    }

    pub fn with_update_method(mut self, method: UpdateMethod) -> Self {
        self.update_method = method;
        self
    }

    pub fn with_list_shape(mut self, shape: ListShape) -> Self {
        self.list_shape = shape;
        self
    }

    pub fn users() -> Self {
        Self::standard("user", api_path::USER).with_remove("/equusid/user/delete/{id}")
    }

    /// The write paths follow the stable resource's pattern and are unconfirmed
    /// against the backend.
    pub fn equines() -> Self {
        Self::standard("equine", api_path::EQUINE)
    }

    /// Only `list` and `get` are known to exist; the write paths follow the
    /// stable resource's pattern.
    pub fn health_books() -> Self {
        Self::standard("health-book", api_path::HEALTH_BOOK)
    }

    pub fn stables() -> Self {
        Self::standard("stable", api_path::STABLE)
    }

    pub fn travels() -> Self {
        Self::standard("travel", api_path::TRAVEL).with_remove("/equusid/travel/delete/{id}")
    }

    pub fn breeds() -> Self {
        Self::rest("breed", api_path::BREED_BIOTYPE)
    }
}

pub(crate) fn fill_id(template: &str, id: RecordId) -> String {
    template.replace("{id}", &id.to_string())
}

/// [`ResourceClient`] backed by the HTTP client
pub struct HttpResource<E, C, U> {
    http_client: Arc<EquusHttpClient>,
    endpoints: ResourceEndpoints,
    _types: PhantomData<fn() -> (E, C, U)>,
}

impl<E, C, U> HttpResource<E, C, U> {
    pub fn new(http_client: Arc<EquusHttpClient>, endpoints: ResourceEndpoints) -> Self {
        Self {
            http_client,
            endpoints,
            _types: PhantomData,
        }
    }

    pub fn endpoints(&self) -> &ResourceEndpoints {
        &self.endpoints
    }
}

#[async_trait]
impl<E, C, U> ResourceClient for HttpResource<E, C, U>
where
    E: DeserializeOwned + Send + Sync,
    C: Serialize + Send + Sync,
    U: Serialize + Send + Sync,
{
    type Entity = E;
    type Create = C;
    type Update = U;

    fn resource_name(&self) -> &str {
        self.endpoints.name
    }

    async fn list(&self, query: &ListQuery) -> Result<Page<E>> {
        debug!(
            "Listing {} page={} size={}",
            self.endpoints.name, query.page, query.size
        );

        match self.endpoints.list_shape {
            ListShape::Paged => {
                self.http_client
                    .get_with_query(&self.endpoints.list, &query.to_pairs(), messages::LIST_FAILED)
                    .await
            }
            ListShape::Unpaged => {
                let items: Vec<E> = if query.filters.is_empty() {
                    self.http_client
                        .get(&self.endpoints.list, messages::LIST_FAILED)
                        .await?
                } else {
                    self.http_client
                        .get_with_query(&self.endpoints.list, &query.filters, messages::LIST_FAILED)
                        .await?
                };
                Ok(Page::from_all(items, query.page, query.size))
            }
        }
    }

    async fn get(&self, id: RecordId) -> Result<E> {
        self.http_client
            .get(&fill_id(&self.endpoints.get, id), messages::GET_FAILED)
            .await
    }

    async fn create(&self, dto: &C) -> Result<E> {
        self.http_client
            .post_json(&self.endpoints.create, dto, messages::CREATE_FAILED)
            .await
    }

    async fn update(&self, id: RecordId, dto: &U) -> Result<E> {
        let path = fill_id(&self.endpoints.update, id);
        match self.endpoints.update_method {
            UpdateMethod::Patch => {
                self.http_client
                    .patch_json(&path, dto, messages::UPDATE_FAILED)
                    .await
            }
            UpdateMethod::Put => {
                self.http_client
                    .put_json(&path, dto, messages::UPDATE_FAILED)
                    .await
            }
        }
    }

    async fn remove(&self, id: RecordId) -> Result<bool> {
        self.http_client
            .delete(&fill_id(&self.endpoints.remove, id), messages::REMOVE_FAILED)
            .await
    }
}

pub type UserResource = HttpResource<UserInfo, AddUser, EditUser>;
pub type EquineResource = HttpResource<EquineInfo, AddEquine, AddEquine>;
pub type HealthBookResource = HttpResource<HealthBookMinInfo, AddHealthBook, AddHealthBook>;
pub type StableResource = HttpResource<StableInfo, AddStable, AddStable>;
pub type TravelResource = HttpResource<TravelInfo, AddTravel, EditTravel>;
pub type BreedResource = HttpResource<BreedBiotypeInfo, BreedForm, BreedForm>;
