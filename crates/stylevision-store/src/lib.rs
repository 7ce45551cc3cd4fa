mod catalog;
mod local;

pub use catalog::{render_csv, CsvCatalog, ProductCatalog};
pub use local::LocalStore;

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("store error: {0}")]
    Internal(String),
}

/// A store for opaque blobs keyed by string paths.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write (create or overwrite) an object.
    async fn put(&self, key: &str, data: Bytes) -> Result<(), StoreError>;

    /// Read an object. Returns `StoreError::NotFound` if absent.
    async fn get(&self, key: &str) -> Result<Bytes, StoreError>;

    /// Read an object, returning `None` if it does not exist.
    async fn get_opt(&self, key: &str) -> Result<Option<Bytes>, StoreError> {
        match self.get(key).await {
            Ok(data) => Ok(Some(data)),
            Err(StoreError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Check if an object exists.
    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        match self.get(key).await {
            Ok(_) => Ok(true),
            Err(StoreError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

// -- Key helpers --

pub fn product_image_key(p_id: &str) -> String {
    format!("{p_id}.jpg")
}

// -- Configuration --

/// Where images and the product catalog live.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Base directory. Defaults to `$XDG_DATA_HOME/stylevision`.
    pub data_dir: Option<PathBuf>,
    /// Image directory. Defaults to `<data_dir>/img`.
    pub image_dir: Option<PathBuf>,
    /// Catalog file. Defaults to `<data_dir>/ecommerce/final_output.csv`.
    pub csv_path: Option<PathBuf>,
}

impl StoreConfig {
    pub fn with_data_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(dir.into()),
            ..Default::default()
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }

    pub fn image_dir(&self) -> PathBuf {
        self.image_dir
            .clone()
            .unwrap_or_else(|| self.data_dir().join("img"))
    }

    pub fn csv_path(&self) -> PathBuf {
        self.csv_path
            .clone()
            .unwrap_or_else(|| self.data_dir().join("ecommerce").join("final_output.csv"))
    }
}

fn default_data_dir() -> PathBuf {
    let base = if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg)
    } else if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local/share")
    } else {
        PathBuf::from(".")
    };
    base.join("stylevision")
}

// -- Factories --

/// Create the image store from configuration.
pub fn create_store(config: &StoreConfig) -> Arc<dyn ObjectStore> {
    Arc::new(LocalStore::new(config.image_dir()))
}

/// Open (and initialise if needed) the product catalog.
pub fn create_catalog(config: &StoreConfig) -> Result<Arc<dyn ProductCatalog>, StoreError> {
    Ok(Arc::new(CsvCatalog::open(config.csv_path())?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_key_is_id_dot_jpg() {
        assert_eq!(product_image_key("25_00000001"), "25_00000001.jpg");
    }

    #[test]
    fn config_derives_paths_from_data_dir() {
        let config = StoreConfig::with_data_dir("/srv/stylevision");
        assert_eq!(config.image_dir(), PathBuf::from("/srv/stylevision/img"));
        assert_eq!(
            config.csv_path(),
            PathBuf::from("/srv/stylevision/ecommerce/final_output.csv")
        );
    }

    #[test]
    fn explicit_paths_override_data_dir() {
        let config = StoreConfig {
            data_dir: Some("/srv/stylevision".into()),
            image_dir: Some("/mnt/images".into()),
            csv_path: Some("/tmp/out.csv".into()),
        };
        assert_eq!(config.image_dir(), PathBuf::from("/mnt/images"));
        assert_eq!(config.csv_path(), PathBuf::from("/tmp/out.csv"));
    }

    #[test]
    fn default_data_dir_ends_with_crate_name() {
        let config = StoreConfig::default();
        assert!(config.data_dir().ends_with("stylevision"));
    }

    #[test]
    fn factories_create_store_and_catalog() {
        let tmp = tempfile::tempdir().unwrap();
        let config = StoreConfig::with_data_dir(tmp.path());
        let _store = create_store(&config);
        let catalog = create_catalog(&config).unwrap();
        assert!(catalog.list().unwrap().is_empty());
        assert!(config.csv_path().exists());
    }
}
