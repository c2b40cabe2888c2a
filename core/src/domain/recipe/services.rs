use tracing::debug;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    embedding::ports::EmbeddingClient,
    llm::ports::LLMClient,
    meal_plan::ports::MealPlanRepository,
    recipe::{
        entities::Recipe,
        filter,
        ports::RecipeService,
        value_objects::{RecipeCriteria, RetrievalOptions, ScoredRecipe},
    },
    vector_index::entities::IndexStatus,
};

impl<EC, LLM, MP> RecipeService for Service<EC, LLM, MP>
where
    EC: EmbeddingClient,
    LLM: LLMClient,
    MP: MealPlanRepository,
{
    async fn search_recipes(&self, criteria: RecipeCriteria) -> Result<Vec<Recipe>, CoreError> {
        let recipes = filter::search_recipes(self.catalog.recipes(), &criteria);
        debug!("Criteria search matched {} recipes", recipes.len());
        Ok(recipes)
    }

    async fn retrieve_relevant_recipes(
        &self,
        query: String,
        options: RetrievalOptions,
    ) -> Result<Vec<ScoredRecipe>, CoreError> {
        self.vector_index()
            .await
            .query(&self.embedding_provider, &query, &options)
            .await
    }

    async fn get_recipe(&self, recipe_id: String) -> Result<Recipe, CoreError> {
        self.vector_index()
            .await
            .lookup(&recipe_id)
            .cloned()
            .ok_or(CoreError::RecipeNotFound(recipe_id))
    }

    async fn get_similar_recipes(
        &self,
        recipe_id: String,
        top_k: usize,
    ) -> Result<Vec<ScoredRecipe>, CoreError> {
        self.vector_index().await.query_similar_to(&recipe_id, top_k)
    }

    async fn index_status(&self) -> IndexStatus {
        match self.vector_index.get() {
            Some(index) => index.status(),
            None => IndexStatus {
                ready: false,
                records: 0,
                strategy: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::services::tests::{InMemoryMealPlanRepository, ScriptedLLMClient, test_service},
        embedding::entities::EmbeddingStrategy,
    };

    fn service() -> crate::domain::common::services::tests::TestService {
        test_service(
            ScriptedLLMClient::answering("{}"),
            InMemoryMealPlanRepository::default(),
        )
    }

    #[tokio::test]
    async fn test_search_recipes_filters_catalog() {
        let criteria = RecipeCriteria {
            vegetarian: Some(true),
            calorie_range: crate::domain::recipe::value_objects::CalorieRange {
                min: 150,
                max: 300,
            },
            ..Default::default()
        };

        let found = service().search_recipes(criteria).await.unwrap();
        let ids: Vec<&str> = found.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r4"]);
    }

    #[tokio::test]
    async fn test_retrieve_relevant_recipes_ranks_by_query() {
        let results = service()
            .retrieve_relevant_recipes("paneer tikka".to_string(), RetrievalOptions::default())
            .await
            .unwrap();

        assert_eq!(results[0].recipe.id, "r1");
        assert!(
            results
                .windows(2)
                .all(|w| w[0].similarity >= w[1].similarity || w[1].similarity.is_nan())
        );
    }

    #[tokio::test]
    async fn test_get_recipe_and_unknown_id() {
        let service = service();
        assert_eq!(service.get_recipe("r3".to_string()).await.unwrap().name, "Rajma Chawal");
        assert!(matches!(
            service.get_recipe("r99".to_string()).await,
            Err(CoreError::RecipeNotFound(id)) if id == "r99"
        ));
    }

    #[tokio::test]
    async fn test_get_similar_recipes_excludes_anchor() {
        let similar = service()
            .get_similar_recipes("r1".to_string(), 2)
            .await
            .unwrap();

        assert_eq!(similar.len(), 2);
        assert!(similar.iter().all(|s| s.recipe.id != "r1"));
    }

    #[tokio::test]
    async fn test_index_status_after_first_use() {
        let service = service();
        assert!(!service.index_status().await.ready);

        service.vector_index().await;
        let status = service.index_status().await;
        assert!(status.ready);
        assert_eq!(status.records, 4);
        assert_eq!(status.strategy, Some(EmbeddingStrategy::LocalHash));
    }
}
