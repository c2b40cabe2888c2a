use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::recipe::entities::Recipe;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snacks,
    Dinner,
}

impl MealSlot {
    /// Slots in the order items are flattened and validated.
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Snacks,
        MealSlot::Dinner,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Snacks => "snacks",
            MealSlot::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealItem {
    #[serde(rename = "item")]
    pub name: String,
    pub quantity: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealPlan {
    pub breakfast: Vec<MealItem>,
    pub lunch: Vec<MealItem>,
    pub snacks: Vec<MealItem>,
    pub dinner: Vec<MealItem>,
    pub total_calories: f64,
    pub total_protein_g: f64,
    pub total_carbs_g: f64,
    pub total_fats_g: f64,
    pub summary: String,
}

impl MealPlan {
    pub fn slot(&self, slot: MealSlot) -> &[MealItem] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Snacks => &self.snacks,
            MealSlot::Dinner => &self.dinner,
        }
    }

    /// All items, breakfast through dinner.
    pub fn items(&self) -> impl Iterator<Item = &MealItem> {
        MealSlot::ALL.into_iter().flat_map(|slot| self.slot(slot))
    }
}

/// Recipes offered to the model, per slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeContext {
    pub breakfast: Vec<Recipe>,
    pub lunch: Vec<Recipe>,
    pub dinner: Vec<Recipe>,
    pub snacks: Vec<Recipe>,
}

impl RecipeContext {
    pub fn slot(&self, slot: MealSlot) -> &[Recipe] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Snacks => &self.snacks,
            MealSlot::Dinner => &self.dinner,
        }
    }

    pub fn total(&self) -> usize {
        self.breakfast.len() + self.lunch.len() + self.dinner.len() + self.snacks.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedMealPlan {
    pub plan: MealPlan,
    pub target_calories: u32,
    pub rag_sources: RecipeContext,
    pub timestamp: DateTime<Utc>,
}
