//! Plan service
//!
//! Handles saving, loading and quoting named loan scenarios.

use std::sync::Arc;

use crate::app::quote::quote_loan;
use crate::domain::entities::{LoanFormValues, LoanQuote, NewPlan, Plan, PlanId};
use crate::domain::ports::PlanRepository;
use crate::error::{AppError, DomainError};

/// Longest accepted plan name, in characters
pub const MAX_PLAN_NAME_LEN: usize = 100;

/// Service for managing saved plans
pub struct PlanService<PR>
where
    PR: PlanRepository + ?Sized,
{
    plans: Arc<PR>,
}

impl<PR> PlanService<PR>
where
    PR: PlanRepository + ?Sized,
{
    pub fn new(plans: Arc<PR>) -> Self {
        Self { plans }
    }

    /// List all saved plans
    pub async fn list(&self) -> Result<Vec<Plan>, AppError> {
        Ok(self.plans.list().await?)
    }

    /// Get a plan, failing with not-found if it does not exist
    pub async fn get(&self, id: &PlanId) -> Result<Plan, AppError> {
        self.plans
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Plan {} not found", id)))
    }

    /// Save a new plan
    pub async fn create(&self, name: &str, form_data: LoanFormValues) -> Result<Plan, AppError> {
        let new_plan = prepare(name, form_data)?;
        let plan = self.plans.create(&new_plan).await?;

        tracing::info!(plan_id = %plan.id, name = %plan.name, "Plan created");
        Ok(plan)
    }

    /// Overwrite name and form data of an existing plan
    pub async fn update(
        &self,
        id: &PlanId,
        name: &str,
        form_data: LoanFormValues,
    ) -> Result<Plan, AppError> {
        let new_plan = prepare(name, form_data)?;
        let plan = self
            .plans
            .update(id, &new_plan)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Plan {} not found", id)))?;

        tracing::info!(plan_id = %plan.id, "Plan updated");
        Ok(plan)
    }

    /// Delete a plan
    pub async fn delete(&self, id: &PlanId) -> Result<(), AppError> {
        if !self.plans.delete(id).await? {
            return Err(AppError::NotFound(format!("Plan {} not found", id)));
        }

        tracing::info!(plan_id = %id, "Plan deleted");
        Ok(())
    }

    /// Calculate the quote for a saved plan's form data
    pub async fn quote(&self, id: &PlanId) -> Result<LoanQuote, AppError> {
        let plan = self.get(id).await?;
        quote_loan(&plan.form_data)
    }

    /// Whether the plan store answers
    pub async fn is_available(&self) -> bool {
        match self.plans.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(error = %e, "Plan store ping failed");
                false
            }
        }
    }
}

/// Validate a name and form and build the record to store
fn prepare(name: &str, form_data: LoanFormValues) -> Result<NewPlan, AppError> {
    let name = name.trim();
    if name.is_empty() || name.chars().count() > MAX_PLAN_NAME_LEN {
        return Err(AppError::Domain(DomainError::Validation(format!(
            "Plan name must be between 1 and {} characters",
            MAX_PLAN_NAME_LEN
        ))));
    }

    form_data.validate()?;

    Ok(NewPlan {
        name: name.to_string(),
        form_data,
    })
}
