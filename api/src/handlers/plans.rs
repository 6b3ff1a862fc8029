//! Plan handlers
//!
//! Endpoints for saving, loading and quoting named loan scenarios.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::Response,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::entities::{LoanFormValues, Plan, PlanId};
use crate::error::AppError;
use crate::AppState;

use super::calculate::{quote_response, QuoteQuery};

/// Request body for creating or replacing a plan
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub name: Option<String>,
    pub form_data: Option<LoanFormValues>,
}

impl PlanRequest {
    fn into_parts(self) -> Result<(String, LoanFormValues), AppError> {
        match (self.name, self.form_data) {
            (Some(name), Some(form_data)) => Ok((name, form_data)),
            _ => Err(AppError::BadRequest("Missing name or formData".to_string())),
        }
    }
}

/// GET /plans
///
/// List saved plans, oldest first.
pub async fn list_plans(State(state): State<AppState>) -> Result<Json<Vec<Plan>>, AppError> {
    let plans = state.plan_service.list().await?;
    Ok(Json(plans))
}

/// POST /plans
pub async fn create_plan(
    State(state): State<AppState>,
    Json(req): Json<PlanRequest>,
) -> Result<(StatusCode, Json<Plan>), AppError> {
    let (name, form_data) = req.into_parts()?;
    let plan = state.plan_service.create(&name, form_data).await?;
    Ok((StatusCode::CREATED, Json(plan)))
}

/// GET /plans/:id
pub async fn get_plan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Plan>, AppError> {
    let plan = state.plan_service.get(&PlanId::from(id)).await?;
    Ok(Json(plan))
}

/// PUT /plans/:id
///
/// Replace the name and form data of a saved plan.
pub async fn update_plan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<PlanRequest>,
) -> Result<Json<Plan>, AppError> {
    let (name, form_data) = req.into_parts()?;
    let plan = state
        .plan_service
        .update(&PlanId::from(id), &name, form_data)
        .await?;
    Ok(Json(plan))
}

/// DELETE /plans/:id
pub async fn delete_plan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.plan_service.delete(&PlanId::from(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /plans/:id/quote
///
/// Calculate the quote for a saved plan. Same content negotiation as
/// `POST /calculate`.
pub async fn quote_plan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<QuoteQuery>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let quote = state.plan_service.quote(&PlanId::from(id)).await?;
    Ok(quote_response(quote, &query, &headers, state.config.default_locale))
}
