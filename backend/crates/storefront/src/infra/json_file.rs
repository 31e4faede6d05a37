//! JSON File Catalog
//!
//! The catalog is a single hand-edited JSON array. It is read from disk on
//! every call so edits show up without a restart.

use crate::domain::entities::Vehicle;
use crate::domain::repository::CatalogRepository;
use crate::error::{CatalogReadError, StorefrontError, StorefrontResult};
use kernel::VehicleId;
use std::path::{Path, PathBuf};

/// File-backed catalog repository
#[derive(Debug, Clone)]
pub struct JsonCatalogStore {
    path: PathBuf,
}

impl JsonCatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Vec<Vehicle>, CatalogReadError> {
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl CatalogRepository for JsonCatalogStore {
    async fn load_all(&self) -> StorefrontResult<Vec<Vehicle>> {
        self.read()
            .await
            .map_err(|source| StorefrontError::DataUnavailable {
                path: self.path.display().to_string(),
                source,
            })
    }

    async fn find_by_id(&self, id: VehicleId) -> StorefrontResult<Vehicle> {
        self.load_all()
            .await?
            .into_iter()
            .find(|vehicle| vehicle.id == id)
            .ok_or(StorefrontError::VehicleNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn catalog_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_all_keeps_file_order() {
        let file = catalog_file(r#"[{"id": 5, "title": "B"}, {"id": 2, "title": "A"}]"#);
        let store = JsonCatalogStore::new(file.path());

        let vehicles = store.load_all().await.unwrap();
        let ids: Vec<i64> = vehicles.iter().map(|v| v.id.as_i64()).collect();
        assert_eq!(ids, vec![5, 2]);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let file = catalog_file(r#"[{"id": 1, "title": "A"}, {"id": 3, "title": "C"}]"#);
        let store = JsonCatalogStore::new(file.path());

        let vehicle = store.find_by_id(VehicleId::new(3)).await.unwrap();
        assert_eq!(vehicle.title, "C");

        let missing = store.find_by_id(VehicleId::new(99)).await;
        assert!(matches!(missing, Err(StorefrontError::VehicleNotFound(id)) if id.as_i64() == 99));
    }

    #[tokio::test]
    async fn test_edits_are_visible_without_restart() {
        let file = catalog_file(r#"[{"id": 1}]"#);
        let store = JsonCatalogStore::new(file.path());
        assert_eq!(store.load_all().await.unwrap().len(), 1);

        std::fs::write(file.path(), r#"[{"id": 1}, {"id": 2}]"#).unwrap();
        assert_eq!(store.load_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_file_is_data_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonCatalogStore::new(dir.path().join("vehicles.json"));

        let result = store.load_all().await;
        assert!(matches!(
            result,
            Err(StorefrontError::DataUnavailable {
                source: CatalogReadError::Io(_),
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_data_unavailable() {
        let file = catalog_file("[{\"id\": 1,");
        let store = JsonCatalogStore::new(file.path());

        let result = store.find_by_id(VehicleId::new(1)).await;
        assert!(matches!(
            result,
            Err(StorefrontError::DataUnavailable {
                source: CatalogReadError::Parse(_),
                ..
            })
        ));
    }
}
