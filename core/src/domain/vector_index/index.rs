use std::collections::HashMap;

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    embedding::{
        entities::{EmbeddingOutcome, EmbeddingStrategy},
        fallback::hash_embedding,
        ports::EmbeddingClient,
        services::EmbeddingProvider,
        similarity::cosine_similarity,
    },
    recipe::{
        catalog::RecipeCatalog,
        entities::Recipe,
        value_objects::{RetrievalOptions, ScoredRecipe},
    },
    vector_index::entities::{EmbeddingRecord, IndexStatus},
};

/// In-memory embedding index over the recipe catalog.
///
/// Every query is a full scan followed by a stable sort, which is fine for a
/// corpus of a few dozen entries. All records share one [`EmbeddingStrategy`].
#[derive(Debug, Clone)]
pub struct VectorIndex {
    records: Vec<EmbeddingRecord>,
    positions: HashMap<String, usize>,
    strategy: EmbeddingStrategy,
}

impl VectorIndex {
    /// Embeds every catalog entry. The result is always fully populated.
    ///
    /// If any entry falls back to local hashing, or the provider returns
    /// vectors of differing dimensionality, the whole index is re-embedded
    /// with local hashing so that no two embedding spaces are mixed.
    pub async fn build<EC>(catalog: &RecipeCatalog, provider: &EmbeddingProvider<EC>) -> Self
    where
        EC: EmbeddingClient,
    {
        info!("Building vector index for {} recipes", catalog.len());

        let texts: Vec<String> = catalog.recipes().iter().map(Recipe::embedding_text).collect();

        if provider.has_external_client() {
            let outcomes = join_all(texts.iter().map(|text| provider.embed(text))).await;

            if let Some(strategy) = uniform_external_strategy(&outcomes) {
                let vectors = outcomes.into_iter().map(EmbeddingOutcome::into_vector).collect();
                let index = Self::assemble(catalog, texts, vectors, strategy);
                info!(
                    "Vector index ready with {} recipes ({:?})",
                    index.len(),
                    index.strategy
                );
                return index;
            }

            warn!("External embeddings incomplete or inconsistent, pinning index to local hashing");
        }

        let vectors = texts.iter().map(|text| hash_embedding(text)).collect();
        let index = Self::assemble(catalog, texts, vectors, EmbeddingStrategy::LocalHash);
        info!("Vector index ready with {} recipes (local hashing)", index.len());
        index
    }

    fn assemble(
        catalog: &RecipeCatalog,
        texts: Vec<String>,
        vectors: Vec<Vec<f32>>,
        strategy: EmbeddingStrategy,
    ) -> Self {
        let records: Vec<EmbeddingRecord> = catalog
            .recipes()
            .iter()
            .zip(texts)
            .zip(vectors)
            .map(|((recipe, source_text), vector)| EmbeddingRecord {
                recipe: recipe.clone(),
                vector,
                source_text,
            })
            .collect();

        let positions = records
            .iter()
            .enumerate()
            .map(|(position, record)| (record.recipe.id.clone(), position))
            .collect();

        Self {
            records,
            positions,
            strategy,
        }
    }

    pub fn strategy(&self) -> &EmbeddingStrategy {
        &self.strategy
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn status(&self) -> IndexStatus {
        IndexStatus {
            ready: true,
            records: self.len(),
            strategy: Some(self.strategy.clone()),
        }
    }

    pub fn record(&self, recipe_id: &str) -> Option<&EmbeddingRecord> {
        self.positions.get(recipe_id).map(|&p| &self.records[p])
    }

    pub fn lookup(&self, recipe_id: &str) -> Option<&Recipe> {
        self.record(recipe_id).map(|r| &r.recipe)
    }

    /// Embeds `text` in this index's space.
    async fn embed_query<EC>(
        &self,
        provider: &EmbeddingProvider<EC>,
        text: &str,
    ) -> Result<Vec<f32>, CoreError>
    where
        EC: EmbeddingClient,
    {
        match &self.strategy {
            EmbeddingStrategy::LocalHash => Ok(hash_embedding(text)),
            EmbeddingStrategy::External { dimensions, .. } => match provider.embed(text).await {
                EmbeddingOutcome::External { vector, .. } if vector.len() == *dimensions => {
                    Ok(vector)
                }
                EmbeddingOutcome::External { vector, .. } => {
                    Err(CoreError::EmbeddingUnavailable(format!(
                        "query embedding has {} dimensions, index expects {}",
                        vector.len(),
                        dimensions
                    )))
                }
                EmbeddingOutcome::LocalFallback { .. } => Err(CoreError::EmbeddingUnavailable(
                    "embedding endpoint unavailable for an externally embedded index".to_string(),
                )),
            },
        }
    }

    /// Ranks the (pre-filtered) catalog by similarity to `text`.
    pub async fn query<EC>(
        &self,
        provider: &EmbeddingProvider<EC>,
        text: &str,
        options: &RetrievalOptions,
    ) -> Result<Vec<ScoredRecipe>, CoreError>
    where
        EC: EmbeddingClient,
    {
        let query_vector = self.embed_query(provider, text).await?;
        let results = self.rank(&query_vector, options.top_k, |record| {
            options.admits(&record.recipe)
        });

        debug!("Vector query returned {} recipes", results.len());
        Ok(results)
    }

    /// Ranks the catalog by similarity to an existing entry, excluding it.
    pub fn query_similar_to(
        &self,
        recipe_id: &str,
        top_k: usize,
    ) -> Result<Vec<ScoredRecipe>, CoreError> {
        let anchor = self
            .record(recipe_id)
            .ok_or_else(|| CoreError::RecipeNotFound(recipe_id.to_string()))?;

        Ok(self.rank(&anchor.vector, top_k, |record| {
            record.recipe.id != recipe_id
        }))
    }

    fn rank<F>(&self, query_vector: &[f32], top_k: usize, admit: F) -> Vec<ScoredRecipe>
    where
        F: Fn(&EmbeddingRecord) -> bool,
    {
        let mut scored: Vec<ScoredRecipe> = self
            .records
            .iter()
            .filter(|record| admit(record))
            .map(|record| ScoredRecipe {
                recipe: record.recipe.clone(),
                similarity: cosine_similarity(query_vector, &record.vector),
            })
            .collect();

        // NaN ranks last; the sort is stable so ties keep corpus order.
        scored.sort_by(|a, b| sort_key(b.similarity).total_cmp(&sort_key(a.similarity)));
        scored.truncate(top_k);
        scored
    }
}

fn sort_key(score: f32) -> f32 {
    if score.is_nan() {
        f32::NEG_INFINITY
    } else {
        score
    }
}

fn uniform_external_strategy(outcomes: &[EmbeddingOutcome]) -> Option<EmbeddingStrategy> {
    let mut strategy: Option<EmbeddingStrategy> = None;

    for outcome in outcomes {
        let EmbeddingOutcome::External { vector, model } = outcome else {
            return None;
        };

        match &strategy {
            None => {
                strategy = Some(EmbeddingStrategy::External {
                    model: model.clone(),
                    dimensions: vector.len(),
                })
            }
            Some(EmbeddingStrategy::External { model: m, dimensions }) => {
                if m != model || *dimensions != vector.len() {
                    return None;
                }
            }
            Some(EmbeddingStrategy::LocalHash) => return None,
        }
    }

    strategy
}
