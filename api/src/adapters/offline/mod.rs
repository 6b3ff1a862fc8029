//! Offline adapter
//!
//! Stand-in plan store used when no database is configured. Calculations
//! keep working; every plan operation reports the store as unavailable.

use async_trait::async_trait;

use crate::domain::entities::{NewPlan, Plan, PlanId};
use crate::domain::ports::PlanRepository;
use crate::error::DomainError;

const OFFLINE_REASON: &str = "DATABASE_URL is not set";

fn unavailable() -> DomainError {
    DomainError::Unavailable(OFFLINE_REASON.to_string())
}

/// Plan repository that has no backing store
pub struct OfflinePlanRepository;

#[async_trait]
impl PlanRepository for OfflinePlanRepository {
    async fn list(&self) -> Result<Vec<Plan>, DomainError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: &PlanId) -> Result<Option<Plan>, DomainError> {
        Err(unavailable())
    }

    async fn create(&self, _plan: &NewPlan) -> Result<Plan, DomainError> {
        Err(unavailable())
    }

    async fn update(&self, _id: &PlanId, _plan: &NewPlan) -> Result<Option<Plan>, DomainError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: &PlanId) -> Result<bool, DomainError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Err(unavailable())
    }
}
