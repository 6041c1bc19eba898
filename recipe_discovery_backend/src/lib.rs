pub mod app_config;
pub mod browser;
pub mod catalog;
pub mod collection;
pub mod filter;
pub mod pagination;
pub mod view;

pub use browser::RecipeBrowser;
pub use collection::RecipeCollection;
pub use filter::{filter, EncodedFilters, FilterCriteria, Threshold};
pub use pagination::{paginate, Page, PageSize};
