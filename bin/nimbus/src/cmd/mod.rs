//! CLI command implementations.

pub mod check;
pub mod search;

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use nimbus_core::Config;
use nimbus_search::RecordStore;

/// Load the site config, falling back to defaults when the file is absent.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::info!(?path, "config file not found, using defaults");
        return Ok(Config::default());
    }

    Config::load_with_env(path).wrap_err_with(|| format!("loading {}", path.display()))
}

/// Load the catalog named by `catalog`, or the config's catalog, or the
/// built-in records.
///
/// `catalog` comes from the command line and is used as given. A relative
/// `search.catalog` is resolved against the directory of `config_path`.
pub fn load_store(
    config: &Config,
    config_path: &Path,
    catalog: Option<&Path>,
) -> Result<RecordStore> {
    let configured = config
        .search
        .catalog
        .as_deref()
        .map(|path| relative_to_config(config_path, path));

    match catalog.map(Path::to_path_buf).or(configured) {
        Some(path) => {
            RecordStore::load(&path).wrap_err_with(|| format!("loading catalog {}", path.display()))
        }
        None => Ok(RecordStore::builtin()),
    }
}

fn relative_to_config(config_path: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    config_path
        .parent()
        .map_or_else(|| path.to_path_buf(), |dir| dir.join(path))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_relative_to_config() {
        assert_eq!(
            relative_to_config(Path::new("site/nimbus.toml"), Path::new("catalog.json")),
            PathBuf::from("site/catalog.json")
        );
        assert_eq!(
            relative_to_config(Path::new("nimbus.toml"), Path::new("catalog.json")),
            PathBuf::from("catalog.json")
        );
        assert_eq!(
            relative_to_config(Path::new("site/nimbus.toml"), Path::new("/srv/catalog.json")),
            PathBuf::from("/srv/catalog.json")
        );
    }

    #[test]
    fn test_configured_catalog_resolves_next_to_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("catalog.json"),
            r#"[{"title": "Tooltip", "description": "Hover hints", "category": "Components", "target": "/components/tooltip"}]"#,
        )
        .unwrap();

        let config_path = dir.path().join("nimbus.toml");
        fs::write(
            &config_path,
            "[site]\ntitle = \"Docs\"\n\n[search]\ncatalog = \"catalog.json\"\n",
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        let store = load_store(&config, &config_path, None).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.find_by_target("/components/tooltip").is_some());
    }

    #[test]
    fn test_missing_configured_catalog_is_an_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("nimbus.toml");
        let mut config = Config::default();
        config.search.catalog = Some(PathBuf::from("missing.json"));

        let err = load_store(&config, &config_path, None).unwrap_err();
        assert!(format!("{err:#}").contains("missing.json"));
    }
}
