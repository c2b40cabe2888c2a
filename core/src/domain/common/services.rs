use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::domain::{
    embedding::{ports::EmbeddingClient, services::EmbeddingProvider},
    llm::ports::LLMClient,
    meal_plan::ports::MealPlanRepository,
    recipe::catalog::RecipeCatalog,
    vector_index::index::VectorIndex,
};

/// Application service implementing every domain service trait.
///
/// Cloning is cheap; the vector index is shared and built at most once.
pub struct Service<EC, LLM, MP>
where
    EC: EmbeddingClient,
    LLM: LLMClient,
    MP: MealPlanRepository,
{
    pub(crate) catalog: RecipeCatalog,
    pub(crate) embedding_provider: Arc<EmbeddingProvider<EC>>,
    pub(crate) vector_index: Arc<OnceCell<VectorIndex>>,
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) meal_plan_repository: Arc<MP>,
}

impl<EC, LLM, MP> Clone for Service<EC, LLM, MP>
where
    EC: EmbeddingClient,
    LLM: LLMClient,
    MP: MealPlanRepository,
{
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog.clone(),
            embedding_provider: Arc::clone(&self.embedding_provider),
            vector_index: Arc::clone(&self.vector_index),
            llm_client: Arc::clone(&self.llm_client),
            meal_plan_repository: Arc::clone(&self.meal_plan_repository),
        }
    }
}

impl<EC, LLM, MP> Service<EC, LLM, MP>
where
    EC: EmbeddingClient,
    LLM: LLMClient,
    MP: MealPlanRepository,
{
    pub fn new(
        catalog: RecipeCatalog,
        embedding_provider: EmbeddingProvider<EC>,
        llm_client: LLM,
        meal_plan_repository: MP,
    ) -> Self {
        Self {
            catalog,
            embedding_provider: Arc::new(embedding_provider),
            vector_index: Arc::new(OnceCell::new()),
            llm_client: Arc::new(llm_client),
            meal_plan_repository: Arc::new(meal_plan_repository),
        }
    }

    /// The vector index, built on first use. Concurrent callers share one build.
    pub async fn vector_index(&self) -> &VectorIndex {
        self.vector_index
            .get_or_init(|| VectorIndex::build(&self.catalog, &self.embedding_provider))
            .await
    }

    pub fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        common::entities::app_errors::CoreError,
        embedding::services::tests::FakeEmbeddingClient,
        llm::value_objects::CompletionRequest,
        meal_plan::entities::MealPlanRecord,
        recipe::entities::Recipe,
    };

    /// Completion client that replays one canned answer and records requests.
    #[derive(Clone)]
    pub struct ScriptedLLMClient {
        pub answer: Result<String, CoreError>,
        pub requests: Arc<Mutex<Vec<CompletionRequest>>>,
    }

    impl ScriptedLLMClient {
        pub fn answering(answer: impl Into<String>) -> Self {
            Self {
                answer: Ok(answer.into()),
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn failing() -> Self {
            Self {
                answer: Err(CoreError::ExternalServiceError("HTTP 503".to_string())),
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn last_request(&self) -> Option<CompletionRequest> {
            self.requests.lock().unwrap().last().cloned()
        }
    }

    impl LLMClient for ScriptedLLMClient {
        async fn complete(&self, request: CompletionRequest) -> Result<String, CoreError> {
            self.requests.lock().unwrap().push(request);
            self.answer.clone()
        }
    }

    #[derive(Clone, Default)]
    pub struct InMemoryMealPlanRepository {
        pub records: Arc<Mutex<Vec<MealPlanRecord>>>,
        pub broken: bool,
        pub writes: Arc<AtomicUsize>,
    }

    impl InMemoryMealPlanRepository {
        pub fn broken() -> Self {
            Self {
                broken: true,
                ..Default::default()
            }
        }

        fn check(&self) -> Result<(), CoreError> {
            if self.broken {
                return Err(CoreError::InternalServerError);
            }
            Ok(())
        }
    }

    impl MealPlanRepository for InMemoryMealPlanRepository {
        async fn create(&self, record: MealPlanRecord) -> Result<MealPlanRecord, CoreError> {
            self.check()?;
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.records.lock().unwrap().push(record.clone());
            Ok(record)
        }

        async fn list_since(
            &self,
            user_key: String,
            since: NaiveDate,
        ) -> Result<Vec<MealPlanRecord>, CoreError> {
            self.check()?;
            let mut found: Vec<MealPlanRecord> = self
                .records
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.user_key == user_key && r.date >= since)
                .cloned()
                .collect();
            found.sort_by(|a, b| b.date.cmp(&a.date));
            Ok(found)
        }

        async fn update_notes(
            &self,
            user_key: String,
            id: Uuid,
            notes: Option<String>,
        ) -> Result<MealPlanRecord, CoreError> {
            self.check()?;
            let mut records = self.records.lock().unwrap();
            let record = records
                .iter_mut()
                .find(|r| r.user_key == user_key && r.id == id)
                .ok_or(CoreError::NotFound)?;
            record.notes = notes;
            Ok(record.clone())
        }

        async fn delete(&self, user_key: String, id: Uuid) -> Result<(), CoreError> {
            self.check()?;
            let mut records = self.records.lock().unwrap();
            let before = records.len();
            records.retain(|r| !(r.user_key == user_key && r.id == id));
            if records.len() == before {
                return Err(CoreError::NotFound);
            }
            Ok(())
        }
    }

    pub type TestService =
        Service<FakeEmbeddingClient, ScriptedLLMClient, InMemoryMealPlanRepository>;

    pub fn recipe(id: &str, name: &str, vegetarian: bool, calories: u32, protein: f64) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: name.to_string(),
            cuisine: "Indian".to_string(),
            description: format!("{} with spices", name),
            ingredients: Vec::new(),
            vegetarian,
            calories,
            protein,
            carbs: 20.0,
            fats: 8.0,
            allergies: Vec::new(),
        }
    }

    pub fn sample_catalog() -> RecipeCatalog {
        RecipeCatalog::new(vec![
            recipe("r1", "Paneer Tikka", true, 220, 12.0),
            recipe("r2", "Chicken Curry", false, 380, 28.0),
            recipe("r3", "Rajma Chawal", true, 420, 14.0),
            recipe("r4", "Sprouts Salad", true, 160, 9.0),
        ])
        .unwrap()
    }

    pub fn test_service(
        llm: ScriptedLLMClient,
        repository: InMemoryMealPlanRepository,
    ) -> TestService {
        Service::new(
            sample_catalog(),
            EmbeddingProvider::local_only(),
            llm,
            repository,
        )
    }

    #[tokio::test]
    async fn test_vector_index_is_built_once_and_shared() {
        let service = test_service(
            ScriptedLLMClient::answering("{}"),
            InMemoryMealPlanRepository::default(),
        );
        let clone = service.clone();

        let (a, b) = tokio::join!(service.vector_index(), clone.vector_index());
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.len(), 4);
    }
}
