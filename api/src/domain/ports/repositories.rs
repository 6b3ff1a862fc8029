//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{NewPlan, Plan, PlanId};
use crate::error::DomainError;

/// Repository for saved loan plans
///
/// Create, update and delete must each be atomic for a single plan id.
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// List every saved plan, oldest first
    async fn list(&self) -> Result<Vec<Plan>, DomainError>;

    /// Find a plan by ID
    async fn find_by_id(&self, id: &PlanId) -> Result<Option<Plan>, DomainError>;

    /// Create a new plan
    async fn create(&self, plan: &NewPlan) -> Result<Plan, DomainError>;

    /// Replace name and form data. Returns `None` if the plan does not exist.
    async fn update(&self, id: &PlanId, plan: &NewPlan) -> Result<Option<Plan>, DomainError>;

    /// Delete a plan. Returns `false` if the plan does not exist.
    async fn delete(&self, id: &PlanId) -> Result<bool, DomainError>;

    /// Check that the backing store is reachable
    async fn ping(&self) -> Result<(), DomainError>;
}
