use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub vegetarian: bool,
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    #[serde(default)]
    pub allergies: Vec<String>,
}

impl Recipe {
    /// Text fed to the embedding provider for this recipe.
    pub fn embedding_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name,
            self.cuisine,
            self.description,
            self.ingredients.join(" ")
        )
    }

    /// Case-insensitive substring match of `allergen` against the allergen tags.
    pub fn has_allergen(&self, allergen: &str) -> bool {
        let allergen = allergen.to_lowercase();
        self.allergies
            .iter()
            .any(|tag| tag.to_lowercase().contains(&allergen))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dal() -> Recipe {
        Recipe {
            id: "r1".to_string(),
            name: "Dal Tadka".to_string(),
            cuisine: "Indian".to_string(),
            description: "Yellow lentils".to_string(),
            ingredients: vec!["lentils".to_string(), "ghee".to_string()],
            vegetarian: true,
            calories: 320,
            protein: 14.0,
            carbs: 40.0,
            fats: 9.0,
            allergies: vec!["Dairy".to_string()],
        }
    }

    #[test]
    fn test_embedding_text_joins_fields() {
        assert_eq!(
            dal().embedding_text(),
            "Dal Tadka Indian Yellow lentils lentils ghee"
        );
    }

    #[test]
    fn test_has_allergen_is_case_insensitive_substring() {
        let recipe = dal();
        assert!(recipe.has_allergen("dairy"));
        assert!(recipe.has_allergen("DAI"));
        assert!(!recipe.has_allergen("gluten"));
    }
}
