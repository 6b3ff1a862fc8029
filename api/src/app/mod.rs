//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod plan_service;
pub mod quote;

pub use plan_service::PlanService;
pub use quote::quote_loan;
