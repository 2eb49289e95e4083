//! Controllers preconfigured for each management screen
//!
//! Every list screen of the back office is the same controller with a
//! different resource and a different set of searchable columns.

use equus_client::{
    BreedBiotypeInfo, BreedResource, EquineInfo, EquineResource, EquusApiClient,
    HealthBookMinInfo, HealthBookResource, StableInfo, StableResource, TravelFilters, TravelInfo,
    TravelResource, UserInfo, UserResource,
};

use crate::config::ControllerConfig;
use crate::controller::PaginatedController;
use crate::error::Result;
use crate::filter::LocalFilter;

pub type UserController = PaginatedController<UserResource>;
pub type EquineController = PaginatedController<EquineResource>;
pub type HealthBookController = PaginatedController<HealthBookResource>;
pub type StableController = PaginatedController<StableResource>;
pub type TravelController = PaginatedController<TravelResource>;
pub type BreedController = PaginatedController<BreedResource>;

// ============== Search fields ==============

pub fn user_fields() -> LocalFilter<UserInfo> {
    LocalFilter::new()
        .field("name", |u: &UserInfo| Some(u.name.as_str()))
        .field("lastName", |u: &UserInfo| Some(u.last_name.as_str()))
        .field("email", |u: &UserInfo| Some(u.email.as_str()))
}

pub fn equine_fields() -> LocalFilter<EquineInfo> {
    LocalFilter::new()
        .field("name", |e: &EquineInfo| Some(e.name.as_str()))
        .field("chip", |e: &EquineInfo| Some(e.chip.as_str()))
        .field("ownerName", |e: &EquineInfo| Some(e.owner_name.as_str()))
}

pub fn health_book_fields() -> LocalFilter<HealthBookMinInfo> {
    LocalFilter::new()
        .field("identification", |h: &HealthBookMinInfo| {
            Some(h.identification.as_str())
        })
        .field("equineName", |h: &HealthBookMinInfo| {
            Some(h.equine_name.as_str())
        })
        .field("state", |h: &HealthBookMinInfo| Some(h.state.as_str()))
}

pub fn stable_fields() -> LocalFilter<StableInfo> {
    LocalFilter::new()
        .field("name", |s: &StableInfo| Some(s.name.as_str()))
        .field("alias", |s: &StableInfo| Some(s.alias.as_str()))
        .field("renspa", |s: &StableInfo| Some(s.renspa.as_str()))
}

pub fn travel_fields() -> LocalFilter<TravelInfo> {
    LocalFilter::new()
        .field("reference", |t: &TravelInfo| Some(t.reference.as_str()))
        .field("origin", |t: &TravelInfo| {
            Some(t.origin.stable_name.as_str())
        })
        .field("destination", |t: &TravelInfo| {
            Some(t.destination.stable_name.as_str())
        })
        .field("motivo", |t: &TravelInfo| t.motivo.as_deref())
}

pub fn breed_fields() -> LocalFilter<BreedBiotypeInfo> {
    LocalFilter::new().field("name", |b: &BreedBiotypeInfo| Some(b.name.as_str()))
}

// ============== Controllers ==============

pub fn users(api: &EquusApiClient, config: ControllerConfig) -> UserController {
    PaginatedController::new(api.users(), user_fields(), config)
}

pub fn equines(api: &EquusApiClient, config: ControllerConfig) -> EquineController {
    PaginatedController::new(api.equines(), equine_fields(), config)
}

pub fn health_books(api: &EquusApiClient, config: ControllerConfig) -> HealthBookController {
    PaginatedController::new(api.health_books(), health_book_fields(), config)
}

pub fn stables(api: &EquusApiClient, config: ControllerConfig) -> StableController {
    PaginatedController::new(api.stables(), stable_fields(), config)
}

/// Travel list with its server-side filters applied from the first load
pub fn travels(
    api: &EquusApiClient,
    config: ControllerConfig,
    filters: &TravelFilters,
) -> Result<TravelController> {
    PaginatedController::new(api.travels(), travel_fields(), config).with_filters(filters)
}

pub fn breeds(api: &EquusApiClient, config: ControllerConfig) -> BreedController {
    PaginatedController::new(api.breeds(), breed_fields(), config)
}
