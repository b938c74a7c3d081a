//! Configuration loading.
//!
//! Settings come from an optional TOML file (explicit path, or
//! `<config dir>/bookconnect/config.toml`) and are then overridden by command-line flags.

use crate::error::{BookError, Result};
use crate::pagination::{Paginator, DEFAULT_PAGE_SIZE};
use crate::ui::ThemeName;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings as written in the config file; every field is optional.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub page_size: Option<usize>,
    pub theme: Option<ThemeName>,
    pub catalog: Option<PathBuf>,
}

impl ConfigFile {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| BookError::config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            BookError::file_error(format!("Failed to read config {}", path.display()), e)
        })?;
        Self::from_toml_str(&contents)
    }

    /// Load the explicit file, or the default file when it exists, or nothing
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::load(&path),
                _ => Ok(Self::default()),
            },
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("bookconnect").join("config.toml"))
}

/// Values given on the command line; they win over the config file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Overrides {
    pub page_size: Option<usize>,
    pub theme: Option<ThemeName>,
    pub catalog: Option<PathBuf>,
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub page_size: usize,
    pub theme: ThemeName,
    pub catalog: Option<PathBuf>,
}

impl Config {
    /// Merge file and flags; an unset theme falls back to `detected`
    pub fn resolve(file: ConfigFile, overrides: Overrides, detected: ThemeName) -> Result<Self> {
        let config = Self {
            page_size: overrides
                .page_size
                .or(file.page_size)
                .unwrap_or(DEFAULT_PAGE_SIZE),
            theme: overrides.theme.or(file.theme).unwrap_or(detected),
            catalog: overrides.catalog.or(file.catalog),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(BookError::config("page_size must be a positive integer"));
        }
        Ok(())
    }

    pub fn paginator(&self) -> Result<Paginator> {
        Paginator::with_page_size(self.page_size)
    }

    /// Catalog path, required for every mode of operation
    pub fn catalog_path(&self) -> Result<&Path> {
        self.catalog.as_deref().ok_or_else(|| {
            BookError::invalid_argument("no catalog given on the command line or in the config file")
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            theme: ThemeName::default(),
            catalog: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_config_file() {
        let file = ConfigFile::from_toml_str(
            r#"
            page_size = 12
            theme = "night"
            catalog = "/srv/books.json"
            "#,
        )
        .unwrap();
        assert_eq!(file.page_size, Some(12));
        assert_eq!(file.theme, Some(ThemeName::Night));
        assert_eq!(file.catalog, Some(PathBuf::from("/srv/books.json")));
    }

    #[test]
    fn test_unknown_key_is_config_error() {
        let err = ConfigFile::from_toml_str("colour = \"blue\"").unwrap_err();
        assert!(matches!(err, BookError::ConfigError { .. }));
    }

    #[test]
    fn test_overrides_win() {
        let file = ConfigFile {
            page_size: Some(12),
            theme: Some(ThemeName::Night),
            catalog: Some(PathBuf::from("a.json")),
        };
        let overrides = Overrides {
            page_size: Some(3),
            theme: None,
            catalog: Some(PathBuf::from("b.json")),
        };
        let config = Config::resolve(file, overrides, ThemeName::Day).unwrap();
        assert_eq!(config.page_size, 3);
        assert_eq!(config.theme, ThemeName::Night);
        assert_eq!(config.catalog_path().unwrap(), Path::new("b.json"));
    }

    #[test]
    fn test_defaults_and_detection() {
        let config =
            Config::resolve(ConfigFile::default(), Overrides::default(), ThemeName::Night).unwrap();
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.theme, ThemeName::Night);
        assert!(config.catalog_path().is_err());
        assert_eq!(config.paginator().unwrap().page_size(), 6);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let overrides = Overrides {
            page_size: Some(0),
            ..Overrides::default()
        };
        let err = Config::resolve(ConfigFile::default(), overrides, ThemeName::Day).unwrap_err();
        assert!(matches!(err, BookError::ConfigError { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(b"page_size = 8\n").unwrap();
        file.flush().unwrap();

        let loaded = ConfigFile::discover(Some(file.path())).unwrap();
        assert_eq!(loaded.page_size, Some(8));

        let missing = ConfigFile::load(Path::new("/no/such/config.toml")).unwrap_err();
        assert!(matches!(missing, BookError::FileError { .. }));
    }
}
