//! Equus Console - list screen logic for the EquusID back office
//!
//! This crate provides:
//! - `PaginatedController`: server pagination, CRUD pass-throughs and refetch
//! - `LocalFilter`: client-side search over the loaded page
//! - Screen presets wiring each resource to its searchable fields

pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod screens;
pub mod state;

pub use config::{ControllerConfig, EmptyPagePolicy, PAGE_SIZES, ResponseOrdering};
pub use controller::PaginatedController;
pub use error::{ConsoleError, Result};
pub use filter::{FieldAccessor, LocalFilter};
pub use state::{ControllerState, item_range};
