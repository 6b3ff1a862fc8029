//! PostgreSQL adapter for PlanRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::entities::{LoanFormValues, NewPlan, Plan, PlanId};
use crate::domain::ports::PlanRepository;
use crate::entity::plans;
use crate::error::DomainError;

/// PostgreSQL implementation of PlanRepository
pub struct PostgresPlanRepository {
    db: DatabaseConnection,
}

impl PostgresPlanRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn encode_form(form: &LoanFormValues) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(form).map_err(|e| DomainError::Internal(e.to_string()))
}

#[async_trait]
impl PlanRepository for PostgresPlanRepository {
    async fn list(&self) -> Result<Vec<Plan>, DomainError> {
        let results = plans::Entity::find()
            .order_by_asc(plans::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(Plan::try_from).collect()
    }

    async fn find_by_id(&self, id: &PlanId) -> Result<Option<Plan>, DomainError> {
        let result = plans::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Plan::try_from).transpose()
    }

    async fn create(&self, plan: &NewPlan) -> Result<Plan, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = plans::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(plan.name.clone()),
            form_data: Set(encode_form(&plan.form_data)?),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Plan::try_from(result)
    }

    async fn update(&self, id: &PlanId, plan: &NewPlan) -> Result<Option<Plan>, DomainError> {
        let now = Utc::now().fixed_offset();

        // Single UPDATE ... RETURNING; a missing row surfaces as RecordNotUpdated
        let result = plans::ActiveModel {
            id: Set(id.0),
            name: Set(plan.name.clone()),
            form_data: Set(encode_form(&plan.form_data)?),
            updated_at: Set(now),
            ..Default::default()
        }
        .update(&self.db)
        .await;

        match result {
            Ok(model) => Plan::try_from(model).map(Some),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(DomainError::Database(e.to_string())),
        }
    }

    async fn delete(&self, id: &PlanId) -> Result<bool, DomainError> {
        let result = plans::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.db
            .ping()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }
}

/// Convert SeaORM model to domain entity
impl TryFrom<plans::Model> for Plan {
    type Error = DomainError;

    fn try_from(model: plans::Model) -> Result<Self, Self::Error> {
        let form_data: LoanFormValues = serde_json::from_value(model.form_data).map_err(|e| {
            DomainError::Internal(format!("Plan {} has malformed form data: {}", model.id, e))
        })?;

        Ok(Plan {
            id: PlanId(model.id),
            name: model.name,
            form_data,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        })
    }
}

/// Create the `plans` table from the entity definition if it is missing
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = sea_orm::Schema::new(backend);
    let mut statement = schema.create_table_from_entity(plans::Entity);
    statement.if_not_exists();

    db.execute(backend.build(&statement)).await?;
    Ok(())
}
