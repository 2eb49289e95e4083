//! Equus Client - REST client for the EquusID back office
//!
//! This crate provides:
//! - HTTP client with bearer authentication and `{success, data, error}` envelope unwrapping
//! - Injected credential provider so the session token is not global state
//! - Generic `ResourceClient` trait with an HTTP implementation driven by endpoint tables
//! - Typed API facade for login and the non-CRUD endpoints
//! - Model types for every resource (users, equines, health books, stables, travels, breeds)

pub mod api;
pub mod config;
pub mod constants;
pub mod credential;
pub mod error;
pub mod http;
pub mod model;
pub mod resource;

pub use api::{EquusApiClient, LoginData};
pub use config::ClientConfig;
pub use credential::{CredentialProvider, SessionStore};
pub use error::{ClientError, Result};
pub use http::EquusHttpClient;
pub use model::*;
pub use resource::{
    BreedResource, EquineResource, HealthBookResource, HttpResource, ListShape, RecordId,
    ResourceClient, ResourceEndpoints, StableResource, TravelResource, UpdateMethod, UserResource,
};
