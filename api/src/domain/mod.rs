//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `amortization`: The loan payment and schedule engine
//! - `entities`: Domain models representing core business concepts
//! - `ports`: Trait definitions for external dependencies

pub mod amortization;
pub mod entities;
pub mod ports;
