use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    wellness::{
        entities::{HabitPlan, MoodPlan, StressAnalysis},
        value_objects::{HabitPlanInput, MoodPlanInput, StressAnalysisInput},
    },
};

/// Single-shot completions decoded into typed wellness documents.
#[cfg_attr(test, mockall::automock)]
pub trait WellnessService: Send + Sync {
    fn generate_habit_plan(
        &self,
        input: HabitPlanInput,
    ) -> impl Future<Output = Result<HabitPlan, CoreError>> + Send;

    fn generate_mood_plan(
        &self,
        input: MoodPlanInput,
    ) -> impl Future<Output = Result<MoodPlan, CoreError>> + Send;

    fn analyze_stress(
        &self,
        input: StressAnalysisInput,
    ) -> impl Future<Output = Result<StressAnalysis, CoreError>> + Send;
}
