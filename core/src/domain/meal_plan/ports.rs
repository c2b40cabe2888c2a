use std::future::Future;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_plan::{
        entities::{GeneratedMealPlan, MealPlanRecord, SaveOutcome},
        value_objects::{
            DeleteMealPlanInput, GetMealPlanHistoryInput, SaveMealPlanInput,
            UpdateMealPlanNotesInput, UserProfile,
        },
    },
};

/// Repository trait for persisted meal plans, keyed by normalized email
#[cfg_attr(test, mockall::automock)]
pub trait MealPlanRepository: Send + Sync {
    fn create(
        &self,
        record: MealPlanRecord,
    ) -> impl Future<Output = Result<MealPlanRecord, CoreError>> + Send;

    /// Records with `date >= since`, newest first.
    fn list_since(
        &self,
        user_key: String,
        since: NaiveDate,
    ) -> impl Future<Output = Result<Vec<MealPlanRecord>, CoreError>> + Send;

    fn update_notes(
        &self,
        user_key: String,
        id: Uuid,
        notes: Option<String>,
    ) -> impl Future<Output = Result<MealPlanRecord, CoreError>> + Send;

    fn delete(&self, user_key: String, id: Uuid)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait MealPlanService: Send + Sync {
    fn generate_meal_plan(
        &self,
        profile: UserProfile,
    ) -> impl Future<Output = Result<GeneratedMealPlan, CoreError>> + Send;

    /// Best effort: storage failures come back as an unsaved outcome.
    fn save_meal_plan(
        &self,
        plan: GeneratedMealPlan,
        input: SaveMealPlanInput,
    ) -> impl Future<Output = SaveOutcome> + Send;

    fn get_meal_plan_history(
        &self,
        input: GetMealPlanHistoryInput,
    ) -> impl Future<Output = Result<Vec<MealPlanRecord>, CoreError>> + Send;

    fn update_meal_plan_notes(
        &self,
        input: UpdateMealPlanNotesInput,
    ) -> impl Future<Output = Result<MealPlanRecord, CoreError>> + Send;

    fn delete_meal_plan(
        &self,
        input: DeleteMealPlanInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
