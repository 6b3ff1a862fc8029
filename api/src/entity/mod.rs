//! SeaORM entities
//!
//! Table definitions for the PostgreSQL adapters.

pub mod plans;
