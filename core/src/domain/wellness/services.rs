use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    embedding::ports::EmbeddingClient,
    llm::{ports::LLMClient, response::decode_json, value_objects::CompletionRequest},
    meal_plan::ports::MealPlanRepository,
    wellness::{
        entities::{HabitPlan, MoodPlan, StressAnalysis},
        ports::WellnessService,
        prompts::{
            HABIT_SYSTEM_PROMPT, MOOD_SYSTEM_PROMPT, STRESS_SYSTEM_PROMPT, habit_plan_prompt,
            mood_plan_prompt, stress_analysis_prompt,
        },
        value_objects::{HabitPlanInput, MoodPlanInput, StressAnalysisInput},
    },
};

impl<EC, LLM, MP> WellnessService for Service<EC, LLM, MP>
where
    EC: EmbeddingClient,
    LLM: LLMClient,
    MP: MealPlanRepository,
{
    async fn generate_habit_plan(&self, input: HabitPlanInput) -> Result<HabitPlan, CoreError> {
        let request = CompletionRequest::new(HABIT_SYSTEM_PROMPT, habit_plan_prompt(&input));
        let raw = self.llm_client.complete(request).await?;
        let plan: HabitPlan = decode_json(&raw)?;

        info!("Habit plan generated with {} entries", plan.schedule.len());
        Ok(plan)
    }

    async fn generate_mood_plan(&self, input: MoodPlanInput) -> Result<MoodPlan, CoreError> {
        let request = CompletionRequest::new(MOOD_SYSTEM_PROMPT, mood_plan_prompt(&input));
        let raw = self.llm_client.complete(request).await?;

        decode_json(&raw)
    }

    async fn analyze_stress(
        &self,
        input: StressAnalysisInput,
    ) -> Result<StressAnalysis, CoreError> {
        let request =
            CompletionRequest::new(STRESS_SYSTEM_PROMPT, stress_analysis_prompt(&input));
        let raw = self.llm_client.complete(request).await?;
        let analysis: StressAnalysis = decode_json(&raw)?;

        if !(0.0..=100.0).contains(&analysis.burnout_score) {
            return Err(CoreError::MalformedResponse(format!(
                "burnoutScore out of range: {}",
                analysis.burnout_score
            )));
        }

        info!(
            "Stress analysis: score {}, level {}",
            analysis.burnout_score, analysis.stress_level
        );
        Ok(analysis)
    }
}
