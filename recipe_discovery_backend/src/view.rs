//! Presentation-ready records derived from recipes and pages.

use crate::pagination::Page;
use itertools::Itertools;
use recipe_discovery_model::{Nutrient, Recipe, RecipeId};
use std::fmt::{self, Display};

pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_RESULTS_TITLE: &str = "No recipes found";
pub const NO_RESULTS_HINT: &str = "Try adjusting your filters to see more results.";

pub fn format_minutes(minutes: Option<u32>) -> String {
    minutes.map_or_else(|| NOT_AVAILABLE.to_string(), |minutes| format!("{minutes} min"))
}

pub fn format_rating(rating: Option<f64>) -> String {
    rating.map_or_else(|| "No rating".to_string(), |rating| format!("{rating:.1}"))
}

/// Formats a quantity with thousands separators and at most three decimals,
/// e.g. `1250.0` as `1,250` and `2.5` as `2.5`.
pub fn format_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let digits = rounded.abs().to_string();
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits.as_str(), None),
    };
    let grouped = whole
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| String::from_utf8_lossy(chunk))
        .join(",");
    let sign = if rounded < 0.0 { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

/// One row of the results table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRow {
    pub id: RecipeId,
    pub title: String,
    pub cuisine: String,
    pub rating: String,
    pub total_time: String,
    pub serves: String,
}

impl From<&Recipe> for RecipeRow {
    fn from(recipe: &Recipe) -> Self {
        RecipeRow {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            cuisine: recipe.cuisine.clone(),
            rating: format_rating(recipe.rating),
            total_time: format_minutes(recipe.total_time),
            serves: recipe.serves.clone(),
        }
    }
}

/// The "Showing 1-6 of 6 recipes" line above the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultsSummary {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

impl<T> From<&Page<T>> for ResultsSummary {
    fn from(page: &Page<T>) -> Self {
        ResultsSummary {
            first: page.start_index + 1,
            last: page.end_index,
            total: page.total,
        }
    }
}

impl Display for ResultsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total == 0 {
            write!(f, "Showing 0 of 0 recipes")
        } else {
            write!(
                f,
                "Showing {}-{} of {} recipes",
                self.first, self.last, self.total
            )
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutritionFact {
    pub label: &'static str,
    pub value: String,
    pub unit: &'static str,
}

/// Everything the detail drawer shows for one recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetail {
    pub id: RecipeId,
    pub title: String,
    pub cuisine: String,
    pub description: String,
    pub total_time: String,
    pub prep_time: String,
    pub cook_time: String,
    pub serves: String,
    /// Only the nutrients the recipe reports, in display order.
    pub nutrition: Vec<NutritionFact>,
    pub rating: Option<String>,
}

impl From<&Recipe> for RecipeDetail {
    fn from(recipe: &Recipe) -> Self {
        let nutrition = recipe
            .nutrients
            .present()
            .map(|(nutrient, value): (Nutrient, f64)| NutritionFact {
                label: nutrient.label(),
                value: format_number(value),
                unit: nutrient.unit(),
            })
            .collect();
        RecipeDetail {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            cuisine: recipe.cuisine.clone(),
            description: recipe.description.clone(),
            total_time: format_minutes(recipe.total_time),
            prep_time: format_minutes(recipe.prep_time),
            cook_time: format_minutes(recipe.cook_time),
            serves: recipe.serves.clone(),
            nutrition,
            rating: recipe.rating.map(|rating| format!("{rating:.1} out of 5 stars")),
        }
    }
}

impl Display for RecipeDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} [{}]", self.title, self.cuisine)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        writeln!(f, "Total Time: {}", self.total_time)?;
        writeln!(f, "Serves: {}", self.serves)?;
        writeln!(f)?;
        writeln!(f, "Cooking Details")?;
        writeln!(f, "  Prep Time: {}", self.prep_time)?;
        writeln!(f, "  Cook Time: {}", self.cook_time)?;
        writeln!(f, "  Total Time: {}", self.total_time)?;
        if !self.nutrition.is_empty() {
            writeln!(f)?;
            writeln!(f, "Nutrition Facts")?;
            for fact in &self.nutrition {
                writeln!(f, "  {}: {} {}", fact.label, fact.value, fact.unit)?;
            }
        }
        if let Some(rating) = &self.rating {
            writeln!(f)?;
            writeln!(f, "Recipe Rating: {rating}")?;
        }
        Ok(())
    }
}
