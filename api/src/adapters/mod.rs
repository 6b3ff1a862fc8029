//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod offline;
pub mod postgres;

pub use offline::OfflinePlanRepository;
pub use postgres::PostgresPlanRepository;
