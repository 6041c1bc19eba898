use config::{Config, ConfigError, File, FileFormat};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::pagination::{self, PageSize};
use thiserror::Error as ThisError;
use tracing::info;

pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";
pub const DATA_PATH_ENV: &str = "RECIPE_DISCOVERY_DATA_PATH";
pub const PAGE_SIZE_ENV: &str = "RECIPE_DISCOVERY_PAGE_SIZE";

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Config Error {0}")]
    Config(#[from] ConfigError),
    #[error("Page size from {PAGE_SIZE_ENV}: {0}")]
    PageSize(#[from] pagination::Error),
}
type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON file holding the recipe collection. The bundled sample is used
    /// when unset.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowseConfig {
    #[serde(default)]
    pub page_size: PageSize,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub browse: BrowseConfig,
}

impl AppConfig {
    /// Loads `path_str` if it exists, then applies environment overrides.
    pub fn load(path_str: &str) -> Result<Self> {
        Self::load_with(path_str, |key| std::env::var(key).ok())
    }

    /// Like [`AppConfig::load`], reading overrides through `lookup`.
    pub fn load_with<F>(path_str: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut conf = Config::default();
        conf.merge(File::new(path_str, FileFormat::Toml).required(false))?;
        let mut app_config: AppConfig = conf.try_into()?;
        app_config.apply_overrides(lookup)?;
        Ok(app_config)
    }

    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let mut conf = Config::default();
        conf.merge(File::from_str(toml, FileFormat::Toml))?;
        Ok(conf.try_into()?)
    }

    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(DATA_PATH_ENV) {
            info!("data path from env: {path}");
            self.data.path = Some(PathBuf::from(path));
        } else {
            info!("data path from file");
        }
        if let Some(page_size) = lookup(PAGE_SIZE_ENV) {
            info!("page size from env: {page_size}");
            self.browse.page_size = page_size.parse()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_config_uses_defaults() {
        let conf = AppConfig::from_toml_str("").unwrap();
        assert_eq!(conf, AppConfig::default());
        assert_eq!(conf.browse.page_size, PageSize::Fifteen);
    }

    #[test]
    fn reads_sections() {
        let conf = AppConfig::from_toml_str(
            r#"
[data]
path = "data/recipes.json"

[browse]
page_size = 25
"#,
        )
        .unwrap();
        assert_eq!(conf.data.path, Some(PathBuf::from("data/recipes.json")));
        assert_eq!(conf.browse.page_size, PageSize::TwentyFive);
    }

    #[test]
    fn rejects_unsupported_page_size() {
        assert!(AppConfig::from_toml_str("[browse]\npage_size = 20\n").is_err());
    }

    #[test]
    fn env_overrides_file() {
        let env = HashMap::from([
            (DATA_PATH_ENV, "/tmp/recipes.json"),
            (PAGE_SIZE_ENV, "50"),
        ]);
        let mut conf = AppConfig::default();
        conf.apply_overrides(|key| env.get(key).map(|value| value.to_string()))
            .unwrap();
        assert_eq!(conf.data.path, Some(PathBuf::from("/tmp/recipes.json")));
        assert_eq!(conf.browse.page_size, PageSize::Fifty);
    }

    #[test]
    fn bad_env_page_size_is_an_error() {
        let mut conf = AppConfig::default();
        let err = conf
            .apply_overrides(|key| (key == PAGE_SIZE_ENV).then(|| "12".to_string()))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::PageSize(pagination::Error::Unsupported(12))
        ));
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let conf = AppConfig::load_with("config/does-not-exist.toml", |_| None).unwrap();
        assert_eq!(conf, AppConfig::default());
    }
}
