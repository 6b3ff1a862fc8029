//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod calculate;
pub mod health;
pub mod plans;

pub use calculate::calculate;
pub use health::health;
pub use plans::{create_plan, delete_plan, get_plan, list_plans, quote_plan, update_plan};
