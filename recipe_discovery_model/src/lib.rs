use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
pub use serde_json;

/// The six recipes shipped with the browser, as a JSON array of [`Recipe`]s.
pub const SAMPLE_RECIPES_JSON: &str = include_str!("../data/sample_recipes.json");

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub cuisine: String,
    pub rating: Option<f64>,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    pub total_time: Option<u32>,
    pub description: String,
    pub serves: String,
    #[serde(default)]
    pub nutrients: Nutrients,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[serde(transparent)]
pub struct RecipeId(pub String);

impl Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        RecipeId(id.to_owned())
    }
}

/// Nutrition facts per serving. Every value is optional; an absent value is
/// unknown, not zero.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Nutrients {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_content: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_content: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbohydrate_content: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber_content: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sodium_content: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sugar_content: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturated_fat_content: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cholesterol_content: Option<f64>,
}

impl Nutrients {
    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein_content,
            Nutrient::Fat => self.fat_content,
            Nutrient::Carbohydrates => self.carbohydrate_content,
            Nutrient::Fiber => self.fiber_content,
            Nutrient::Sodium => self.sodium_content,
            Nutrient::Sugar => self.sugar_content,
            Nutrient::SaturatedFat => self.saturated_fat_content,
            Nutrient::Cholesterol => self.cholesterol_content,
        }
    }

    /// Present values in display order.
    pub fn present(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        Nutrient::ALL
            .iter()
            .filter_map(move |nutrient| self.get(*nutrient).map(|value| (*nutrient, value)))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Nutrient {
    Calories,
    Protein,
    Fat,
    Carbohydrates,
    Fiber,
    Sodium,
    Sugar,
    SaturatedFat,
    Cholesterol,
}

impl Nutrient {
    pub const ALL: [Nutrient; 9] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Fat,
        Nutrient::Carbohydrates,
        Nutrient::Fiber,
        Nutrient::Sodium,
        Nutrient::Sugar,
        Nutrient::SaturatedFat,
        Nutrient::Cholesterol,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories",
            Nutrient::Protein => "Protein",
            Nutrient::Fat => "Fat",
            Nutrient::Carbohydrates => "Carbohydrates",
            Nutrient::Fiber => "Fiber",
            Nutrient::Sodium => "Sodium",
            Nutrient::Sugar => "Sugar",
            Nutrient::SaturatedFat => "Saturated Fat",
            Nutrient::Cholesterol => "Cholesterol",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::Calories => "cal",
            Nutrient::Sodium | Nutrient::Cholesterol => "mg",
            _ => "g",
        }
    }
}
