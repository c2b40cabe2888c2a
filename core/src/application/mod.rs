use tracing::info;

use crate::{
    domain::{
        common::{FerrisfitConfig, entities::app_errors::CoreError, services::Service},
        embedding::services::EmbeddingProvider,
    },
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        embedding::openai_client::OpenAIEmbeddingClient,
        llm::groq_client::GroqLLMClient,
        meal_plan::repositories::meal_plan_repository::PostgresMealPlanRepository,
        recipe::loader::load_catalog,
    },
};

pub type FerrisfitService =
    Service<OpenAIEmbeddingClient, GroqLLMClient, PostgresMealPlanRepository>;

/// Wires the adapters together and builds the vector index before returning.
pub async fn create_service(config: FerrisfitConfig) -> Result<FerrisfitService, CoreError> {
    let postgres = Postgres::new(PostgresConfig::from(&config.database)).await?;
    let catalog = load_catalog(&config.catalog)?;

    let embedding_provider = match OpenAIEmbeddingClient::from_config(&config.embedding) {
        Some(client) => EmbeddingProvider::new(client),
        None => {
            info!("No embedding API key configured, using local hashing only");
            EmbeddingProvider::local_only()
        }
    };

    let service = Service::new(
        catalog,
        embedding_provider,
        GroqLLMClient::from_config(&config.llm),
        PostgresMealPlanRepository::new(postgres.get_db()),
    );

    let index = service.vector_index().await;
    info!(
        "Service ready: {} recipes indexed ({:?})",
        index.len(),
        index.strategy()
    );

    Ok(service)
}
