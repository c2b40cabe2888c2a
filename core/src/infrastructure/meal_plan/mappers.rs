use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError, meal_plan::entities::MealPlanRecord,
};
use crate::entity::meal_plans::Model as MealPlanModel;

impl TryFrom<MealPlanModel> for MealPlanRecord {
    type Error = CoreError;

    fn try_from(model: MealPlanModel) -> Result<Self, Self::Error> {
        let plan = serde_json::from_value(model.plan).map_err(|e| {
            error!("Stored meal plan {} is not decodable: {}", model.id, e);
            CoreError::InternalServerError
        })?;
        let profile = serde_json::from_value(model.profile).map_err(|e| {
            error!("Stored profile for meal plan {} is not decodable: {}", model.id, e);
            CoreError::InternalServerError
        })?;

        Ok(MealPlanRecord {
            id: model.id,
            user_key: model.user_key,
            email: model.email,
            date: model.plan_date,
            plan,
            profile,
            notes: model.notes,
            created_at: model.created_at.and_utc(),
            updated_at: model.updated_at.and_utc(),
        })
    }
}

pub fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, CoreError> {
    serde_json::to_value(value).map_err(|e| {
        error!("Failed to serialize meal plan column: {}", e);
        CoreError::InternalServerError
    })
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use serde_json::json;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_undecodable_plan_is_internal_error() {
        let now = Utc::now().naive_utc();
        let model = MealPlanModel {
            id: Uuid::new_v4(),
            user_key: "a-b-c".to_string(),
            email: "a@b.c".to_string(),
            plan_date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            plan: json!({"not": "a plan"}),
            profile: json!({}),
            notes: None,
            created_at: now,
            updated_at: now,
        };

        assert!(matches!(
            MealPlanRecord::try_from(model),
            Err(CoreError::InternalServerError)
        ));
    }
}
