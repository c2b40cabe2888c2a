use std::path::Path;

use tracing::{error, info};

use crate::domain::{
    common::{CatalogConfig, entities::app_errors::CoreError},
    recipe::catalog::RecipeCatalog,
};

const BUILTIN_RECIPES: &str = include_str!("recipes.json");

pub fn builtin_catalog() -> Result<RecipeCatalog, CoreError> {
    RecipeCatalog::from_json(BUILTIN_RECIPES)
}

pub fn load_catalog_file(path: &Path) -> Result<RecipeCatalog, CoreError> {
    let json = std::fs::read_to_string(path).map_err(|e| {
        error!("Failed to read recipe catalog {}: {}", path.display(), e);
        CoreError::InvalidCatalog(format!("cannot read {}: {}", path.display(), e))
    })?;

    RecipeCatalog::from_json(&json)
}

/// The configured catalog file, or the built-in corpus.
pub fn load_catalog(config: &CatalogConfig) -> Result<RecipeCatalog, CoreError> {
    let catalog = match &config.recipes_path {
        Some(path) => load_catalog_file(path)?,
        None => builtin_catalog()?,
    };

    info!("Loaded {} recipes", catalog.len());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = builtin_catalog().unwrap();
        assert!(catalog.len() >= 20);
        assert_eq!(catalog.get("r1").unwrap().name, "Paneer Tikka");
        assert!(catalog.recipes().iter().any(|r| !r.vegetarian));
    }

    #[test]
    fn test_missing_file_is_invalid_catalog() {
        let config = CatalogConfig {
            recipes_path: Some(PathBuf::from("/nonexistent/recipes.json")),
        };
        assert!(matches!(
            load_catalog(&config),
            Err(CoreError::InvalidCatalog(_))
        ));
    }
}
