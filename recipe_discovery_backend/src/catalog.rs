use itertools::Itertools;
use recipe_discovery_model::Recipe;

/// Distinct cuisine labels in first-seen order. Labels are compared exactly,
/// so `"Thai"` and `"thai"` are listed separately.
pub fn distinct_cuisines<'a, I>(recipes: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    recipes
        .into_iter()
        .map(|recipe| recipe.cuisine.as_str())
        .unique()
        .collect()
}
