use recipe_discovery_model::{serde_json, Recipe, RecipeId, SAMPLE_RECIPES_JSON};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error as ThisError;
use tracing::info;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Failed to read recipes from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to decode recipes: Serde Error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Duplicate recipe id {0}")]
    DuplicateId(RecipeId),
}
type Result<T> = std::result::Result<T, Error>;

/// The immutable source of truth that every derived view is computed from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecipeCollection {
    recipes: Vec<Recipe>,
}

impl RecipeCollection {
    pub fn new(recipes: Vec<Recipe>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(recipes.len());
        if let Some(duplicate) = recipes.iter().find(|recipe| !seen.insert(&recipe.id)) {
            return Err(Error::DuplicateId(duplicate.id.clone()));
        }
        Ok(RecipeCollection { recipes })
    }

    /// The bundled six-recipe sample.
    pub fn sample() -> Result<Self> {
        Self::from_json_str(SAMPLE_RECIPES_JSON)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::new(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let collection = Self::from_json_str(&json)?;
        info!(
            "loaded {} recipes from {}",
            collection.len(),
            path.display()
        );
        Ok(collection)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| &recipe.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }
}

impl<'a> IntoIterator for &'a RecipeCollection {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
