use chrono::{NaiveDate, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_plan::{entities::MealPlanRecord, ports::MealPlanRepository},
};
use crate::entity::meal_plans::{
    ActiveModel as MealPlanActiveModel, Column as MealPlanColumn, Entity as MealPlanEntity,
};
use crate::infrastructure::meal_plan::mappers::to_json;

#[derive(Debug, Clone)]
pub struct PostgresMealPlanRepository {
    pub db: DatabaseConnection,
}

impl PostgresMealPlanRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl MealPlanRepository for PostgresMealPlanRepository {
    async fn create(&self, record: MealPlanRecord) -> Result<MealPlanRecord, CoreError> {
        let model = MealPlanEntity::insert(MealPlanActiveModel {
            id: Set(record.id),
            user_key: Set(record.user_key),
            email: Set(record.email),
            plan_date: Set(record.date),
            plan: Set(to_json(&record.plan)?),
            profile: Set(to_json(&record.profile)?),
            notes: Set(record.notes),
            created_at: Set(record.created_at.naive_utc()),
            updated_at: Set(record.updated_at.naive_utc()),
        })
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to create meal plan: {}", e);
            CoreError::InternalServerError
        })?;

        MealPlanRecord::try_from(model)
    }

    async fn list_since(
        &self,
        user_key: String,
        since: NaiveDate,
    ) -> Result<Vec<MealPlanRecord>, CoreError> {
        MealPlanEntity::find()
            .filter(MealPlanColumn::UserKey.eq(user_key))
            .filter(MealPlanColumn::PlanDate.gte(since))
            .order_by_desc(MealPlanColumn::PlanDate)
            .order_by_desc(MealPlanColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch meal plan history: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(MealPlanRecord::try_from)
            .collect()
    }

    async fn update_notes(
        &self,
        user_key: String,
        id: Uuid,
        notes: Option<String>,
    ) -> Result<MealPlanRecord, CoreError> {
        let existing = MealPlanEntity::find()
            .filter(MealPlanColumn::Id.eq(id))
            .filter(MealPlanColumn::UserKey.eq(user_key))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch meal plan {}: {}", id, e);
                CoreError::InternalServerError
            })?
            .ok_or(CoreError::NotFound)?;

        let mut active = existing.into_active_model();
        active.notes = Set(notes);
        active.updated_at = Set(Utc::now().naive_utc());

        let updated = active.update(&self.db).await.map_err(|e| {
            error!("Failed to update meal plan notes: {}", e);
            CoreError::InternalServerError
        })?;

        MealPlanRecord::try_from(updated)
    }

    async fn delete(&self, user_key: String, id: Uuid) -> Result<(), CoreError> {
        let result = MealPlanEntity::delete_many()
            .filter(MealPlanColumn::Id.eq(id))
            .filter(MealPlanColumn::UserKey.eq(user_key))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete meal plan: {}", e);
                CoreError::InternalServerError
            })?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}
