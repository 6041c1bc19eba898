use crate::catalog::distinct_cuisines;
use crate::collection::RecipeCollection;
use crate::filter::FilterCriteria;
use crate::pagination::{page_count, paginate, Page, PageSize};
use recipe_discovery_model::{Recipe, RecipeId};
use thiserror::Error as ThisError;
use tracing::debug;

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum Error {
    #[error("No recipe with id {0}")]
    UnknownRecipe(RecipeId),
}
type Result<T> = std::result::Result<T, Error>;

/// Browsing state over an immutable recipe collection.
///
/// Every mutation recomputes the filtered view eagerly, so reads never
/// observe stale results. Changing the criteria returns to the first page;
/// changing only the page size keeps the current page, clamped on read.
#[derive(Debug, Clone)]
pub struct RecipeBrowser {
    source: RecipeCollection,
    criteria: FilterCriteria,
    /// Indices into `source` of the recipes passing `criteria`.
    filtered: Vec<usize>,
    page: usize,
    page_size: PageSize,
    selected: Option<RecipeId>,
}

impl RecipeBrowser {
    pub fn new(source: RecipeCollection, page_size: PageSize) -> Self {
        let mut browser = RecipeBrowser {
            source,
            criteria: FilterCriteria::default(),
            filtered: vec![],
            page: 1,
            page_size,
            selected: None,
        };
        browser.recompute();
        browser
    }

    fn recompute(&mut self) {
        let matcher = self.criteria.matcher();
        self.filtered = self
            .source
            .iter()
            .enumerate()
            .filter(|(_, recipe)| matcher.matches(recipe))
            .map(|(index, _)| index)
            .collect();
        debug!(
            "recomputed filtered view: {} of {} recipes",
            self.filtered.len(),
            self.source.len()
        );
    }

    pub fn source(&self) -> &RecipeCollection {
        &self.source
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.page = 1;
        self.recompute();
    }

    pub fn update_criteria<F>(&mut self, update: F)
    where
        F: FnOnce(&mut FilterCriteria),
    {
        update(&mut self.criteria);
        self.page = 1;
        self.recompute();
    }

    pub fn clear_filters(&mut self) {
        self.set_criteria(FilterCriteria::default());
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
    }

    pub fn total_pages(&self) -> usize {
        page_count(self.filtered.len(), self.page_size)
    }

    /// The current page number after clamping to the available pages.
    pub fn page(&self) -> usize {
        self.page.clamp(1, self.total_pages().max(1))
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages().max(1));
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page() + 1);
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.page().saturating_sub(1));
    }

    pub fn filtered(&self) -> Vec<&Recipe> {
        let recipes = self.source.recipes();
        self.filtered.iter().map(|index| &recipes[*index]).collect()
    }

    pub fn current_page(&self) -> Page<&Recipe> {
        paginate(&self.filtered(), self.page, self.page_size)
    }

    /// Cuisine options, drawn from the whole collection.
    pub fn cuisines(&self) -> Vec<&str> {
        distinct_cuisines(&self.source)
    }

    pub fn select(&mut self, id: &RecipeId) -> Result<&Recipe> {
        let recipe = self
            .source
            .get(id)
            .ok_or_else(|| Error::UnknownRecipe(id.clone()))?;
        self.selected = Some(recipe.id.clone());
        Ok(recipe)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Recipe> {
        self.selected.as_ref().and_then(|id| self.source.get(id))
    }
}
