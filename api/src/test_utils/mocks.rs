//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{NewPlan, Plan, PlanId};
use crate::domain::ports::PlanRepository;
use crate::error::DomainError;

// ============================================================================
// In-Memory Plan Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryPlanRepository {
    plans: Arc<RwLock<HashMap<PlanId, Plan>>>,
}

impl InMemoryPlanRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a plan for testing
    pub fn with_plan(self, plan: Plan) -> Self {
        self.plans.write().unwrap().insert(plan.id, plan);
        self
    }
}

#[async_trait]
impl PlanRepository for InMemoryPlanRepository {
    async fn list(&self) -> Result<Vec<Plan>, DomainError> {
        let plans = self.plans.read().unwrap();
        let mut all: Vec<Plan> = plans.values().cloned().collect();
        all.sort_by_key(|p| p.created_at);
        Ok(all)
    }

    async fn find_by_id(&self, id: &PlanId) -> Result<Option<Plan>, DomainError> {
        let plans = self.plans.read().unwrap();
        Ok(plans.get(id).cloned())
    }

    async fn create(&self, new_plan: &NewPlan) -> Result<Plan, DomainError> {
        let now = Utc::now();
        let plan = Plan {
            id: PlanId::new(),
            name: new_plan.name.clone(),
            form_data: new_plan.form_data.clone(),
            created_at: now,
            updated_at: now,
        };

        let mut plans = self.plans.write().unwrap();
        plans.insert(plan.id, plan.clone());
        Ok(plan)
    }

    async fn update(&self, id: &PlanId, new_plan: &NewPlan) -> Result<Option<Plan>, DomainError> {
        let mut plans = self.plans.write().unwrap();
        Ok(plans.get_mut(id).map(|plan| {
            plan.name = new_plan.name.clone();
            plan.form_data = new_plan.form_data.clone();
            plan.updated_at = Utc::now();
            plan.clone()
        }))
    }

    async fn delete(&self, id: &PlanId) -> Result<bool, DomainError> {
        let mut plans = self.plans.write().unwrap();
        Ok(plans.remove(id).is_some())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
