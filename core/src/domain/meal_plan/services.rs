use chrono::{Duration, Utc};
use tracing::{error, info, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    embedding::ports::EmbeddingClient,
    llm::{ports::LLMClient, response::extract_json, value_objects::CompletionRequest},
    meal_plan::{
        calories::calculate_target_calories,
        entities::{GeneratedMealPlan, MealPlanRecord, ProfileSnapshot, SaveOutcome},
        ports::{MealPlanRepository, MealPlanService},
        prompt::{
            MEAL_PLAN_MAX_TOKENS, MEAL_PLAN_SYSTEM_PROMPT, MEAL_PLAN_TEMPERATURE,
            build_meal_plan_prompt, random_focus_cuisine,
        },
        retrieval::{candidate_criteria, split_by_slot},
        schema::parse_meal_plan,
        validator::validate_meal_plan,
        value_objects::{
            DeleteMealPlanInput, GetMealPlanHistoryInput, SaveMealPlanInput,
            UpdateMealPlanNotesInput, UserProfile, normalize_email,
        },
    },
    recipe::filter::search_recipes,
};

impl<EC, LLM, MP> MealPlanService for Service<EC, LLM, MP>
where
    EC: EmbeddingClient,
    LLM: LLMClient,
    MP: MealPlanRepository,
{
    async fn generate_meal_plan(&self, profile: UserProfile) -> Result<GeneratedMealPlan, CoreError> {
        // 1. Calorie target
        let target_calories = calculate_target_calories(&profile);

        // 2. Retrieve candidates and split them per slot
        let candidates = search_recipes(self.catalog.recipes(), &candidate_criteria(&profile));
        let rag_sources = split_by_slot(&candidates);
        info!(
            "Generating meal plan: {} kcal target, {} candidates, {} slot suggestions",
            target_calories,
            candidates.len(),
            rag_sources.total()
        );

        // 3. Prompt the model
        let prompt = build_meal_plan_prompt(
            &profile,
            target_calories,
            &rag_sources,
            random_focus_cuisine(),
        );
        let request = CompletionRequest::new(MEAL_PLAN_SYSTEM_PROMPT, prompt)
            .with_temperature(MEAL_PLAN_TEMPERATURE)
            .with_max_tokens(MEAL_PLAN_MAX_TOKENS);

        let raw = self.llm_client.complete(request).await.map_err(|e| {
            error!("Meal plan completion failed: {}", e);
            e
        })?;

        // 4. Extract, decode and validate
        let value = extract_json(&raw)?;
        let plan = parse_meal_plan(&value)?;
        validate_meal_plan(&plan, &profile.constraints())?;

        Ok(GeneratedMealPlan {
            plan,
            target_calories,
            rag_sources,
            timestamp: Utc::now(),
        })
    }

    async fn save_meal_plan(&self, plan: GeneratedMealPlan, input: SaveMealPlanInput) -> SaveOutcome {
        let record = MealPlanRecord::new(
            input.email,
            plan,
            ProfileSnapshot::from(&input.profile),
            input.notes,
        );

        match self.meal_plan_repository.create(record).await {
            Ok(record) => {
                info!("Meal plan saved at {}", record.path());
                SaveOutcome::saved(&record)
            }
            Err(e) => {
                warn!("Meal plan could not be saved: {}", e);
                SaveOutcome::failed(e.to_string())
            }
        }
    }

    async fn get_meal_plan_history(
        &self,
        input: GetMealPlanHistoryInput,
    ) -> Result<Vec<MealPlanRecord>, CoreError> {
        let since = Utc::now().date_naive() - Duration::days(i64::from(input.days));

        self.meal_plan_repository
            .list_since(normalize_email(&input.email), since)
            .await
    }

    async fn update_meal_plan_notes(
        &self,
        input: UpdateMealPlanNotesInput,
    ) -> Result<MealPlanRecord, CoreError> {
        self.meal_plan_repository
            .update_notes(normalize_email(&input.email), input.doc_id, input.notes)
            .await
    }

    async fn delete_meal_plan(&self, input: DeleteMealPlanInput) -> Result<(), CoreError> {
        self.meal_plan_repository
            .delete(normalize_email(&input.email), input.doc_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::{
            entities::app_errors::ViolationKind,
            services::tests::{InMemoryMealPlanRepository, ScriptedLLMClient, test_service},
        },
        llm::value_objects::ChatRole,
    };

    const VEGETARIAN_PLAN: &str = r#"Here is your plan:
```json
{
  "breakfast": [{"item": "Paneer Tikka", "quantity": "150g", "calories": 220, "protein_g": 12, "carbs_g": 8, "fats_g": 14}],
  "lunch": [{"item": "Rajma Chawal", "quantity": "1 bowl", "calories": 420, "protein_g": 14, "carbs_g": 60, "fats_g": 9}],
  "snacks": [{"item": "Sprouts Salad", "quantity": "1 cup", "calories": 160, "protein_g": 9, "carbs_g": 20, "fats_g": 3}],
  "dinner": [{"item": "Dal Tadka", "quantity": "1 bowl", "calories": 350, "protein_g": 15, "carbs_g": 40, "fats_g": 10}],
  "summary": "Balanced vegetarian day"
}
```"#;

    fn vegetarian_profile() -> UserProfile {
        UserProfile {
            is_vegetarian: true,
            email: "jane.doe@example.com".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_generate_meal_plan_returns_plan_with_sources() {
        let llm = ScriptedLLMClient::answering(VEGETARIAN_PLAN);
        let service = test_service(llm.clone(), InMemoryMealPlanRepository::default());

        let generated = service.generate_meal_plan(vegetarian_profile()).await.unwrap();

        assert_eq!(generated.target_calories, 2635);
        assert_eq!(generated.plan.summary, "Balanced vegetarian day");
        assert_eq!(generated.plan.total_calories, 1150.0);
        assert!(generated.rag_sources.total() > 0);
        assert!(
            generated
                .rag_sources
                .breakfast
                .iter()
                .chain(&generated.rag_sources.lunch)
                .all(|r| r.vegetarian)
        );

        let request = llm.last_request().unwrap();
        assert_eq!(request.temperature, Some(1.0));
        assert_eq!(request.max_tokens, Some(1500));
        assert_eq!(request.messages[0].role, ChatRole::System);
        assert!(request.messages[1].content.contains("Paneer Tikka"));
        assert!(!request.messages[1].content.contains("Chicken Curry"));
    }

    #[tokio::test]
    async fn test_generate_meal_plan_rejects_refusal() {
        let service = test_service(
            ScriptedLLMClient::answering("Sorry, I cannot comply."),
            InMemoryMealPlanRepository::default(),
        );

        let result = service.generate_meal_plan(vegetarian_profile()).await;
        assert!(matches!(result, Err(CoreError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_generate_meal_plan_rejects_meat_for_vegetarian() {
        let answer = VEGETARIAN_PLAN.replace("Dal Tadka", "Grilled Chicken");
        let service = test_service(
            ScriptedLLMClient::answering(answer),
            InMemoryMealPlanRepository::default(),
        );

        match service.generate_meal_plan(vegetarian_profile()).await {
            Err(CoreError::ConstraintViolation { kind, item, matched }) => {
                assert_eq!(kind, ViolationKind::NonVegetarian);
                assert_eq!(item, "Grilled Chicken");
                assert_eq!(matched, "chicken");
            }
            other => panic!("expected a constraint violation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generate_meal_plan_propagates_upstream_failure() {
        let service = test_service(
            ScriptedLLMClient::failing(),
            InMemoryMealPlanRepository::default(),
        );

        let result = service.generate_meal_plan(vegetarian_profile()).await;
        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn test_save_then_history_update_and_delete() {
        let repository = InMemoryMealPlanRepository::default();
        let service = test_service(
            ScriptedLLMClient::answering(VEGETARIAN_PLAN),
            repository.clone(),
        );
        let profile = vegetarian_profile();
        let generated = service.generate_meal_plan(profile.clone()).await.unwrap();

        let outcome = service
            .save_meal_plan(
                generated,
                SaveMealPlanInput {
                    email: profile.email.clone(),
                    profile: profile.clone(),
                    notes: None,
                },
            )
            .await;
        assert!(outcome.saved);
        let doc_id = outcome.doc_id.unwrap();
        assert_eq!(
            outcome.path.unwrap(),
            format!("users/jane-doe-example-com/meal_history/{}", doc_id)
        );

        let history = service
            .get_meal_plan_history(GetMealPlanHistoryInput {
                email: profile.email.clone(),
                days: 30,
            })
            .await
            .unwrap();
        assert_eq!(history.len(), 1);
        assert!(history[0].profile.is_vegetarian);

        let updated = service
            .update_meal_plan_notes(UpdateMealPlanNotesInput {
                email: profile.email.clone(),
                doc_id,
                notes: Some("too spicy".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(updated.notes.as_deref(), Some("too spicy"));

        service
            .delete_meal_plan(DeleteMealPlanInput {
                email: profile.email.clone(),
                doc_id,
            })
            .await
            .unwrap();
        let missing = service
            .delete_meal_plan(DeleteMealPlanInput {
                email: profile.email,
                doc_id,
            })
            .await;
        assert!(matches!(missing, Err(CoreError::NotFound)));
    }

    #[tokio::test]
    async fn test_failed_save_is_soft() {
        let service = test_service(
            ScriptedLLMClient::answering(VEGETARIAN_PLAN),
            InMemoryMealPlanRepository::broken(),
        );
        let profile = vegetarian_profile();
        let generated = service.generate_meal_plan(profile.clone()).await.unwrap();

        let outcome = service
            .save_meal_plan(
                generated,
                SaveMealPlanInput {
                    email: profile.email.clone(),
                    profile,
                    notes: None,
                },
            )
            .await;

        assert!(!outcome.saved);
        assert!(outcome.doc_id.is_none());
        assert_eq!(outcome.error.as_deref(), Some("Internal server error"));
    }
}
