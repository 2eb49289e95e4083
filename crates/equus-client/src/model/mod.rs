// Model types for EquusID API requests and responses

pub mod breed;
pub mod common;
pub mod equine;
pub mod health_book;
pub mod stable;
pub mod travel;
pub mod user;

pub use breed::{BreedBiotypeInfo, BreedForm};
pub use common::{ApiErrorBody, ApiResponse, ListQuery, Page};
pub use equine::{AddEquine, EquineInfo, EquineMinInfo};
pub use health_book::{
    AddHealthBook, BloodExtractionInfo, HealthBookInfo, HealthBookMinInfo, VaccineApplicationInfo,
};
pub use stable::{AddStable, StableInfo, StableType, StableTypeRef};
pub use travel::{
    AddLocation, AddTravel, BadgeTone, EditTravel, LocationInfo, TravelEquine, TravelFilters,
    TravelInfo, TravelStatus,
};
pub use user::{AddUser, EditUser, MinUserInfo, PROFILE_OWNER, UserInfo};
