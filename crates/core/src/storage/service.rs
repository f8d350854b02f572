//! Snapshot storage implementation using Apache OpenDAL.

use opendal::{EntryMode, ErrorKind, Operator, services};
use tracing::debug;

use asset_manager_shared::config::StorageProvider;

use super::error::StorageError;

/// Read access to snapshot objects in a bucket or directory.
pub struct SnapshotStorage {
    operator: Operator,
    provider_name: &'static str,
}

impl SnapshotStorage {
    /// Create storage from provider configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage provider cannot be initialized.
    pub fn from_provider(provider: &StorageProvider) -> Result<Self, StorageError> {
        let operator = Self::create_operator(provider)?;
        Ok(Self {
            operator,
            provider_name: provider.name(),
        })
    }

    /// Create OpenDAL operator from provider config.
    fn create_operator(provider: &StorageProvider) -> Result<Operator, StorageError> {
        match provider {
            StorageProvider::S3 {
                bucket,
                region,
                endpoint,
                access_key_id,
                secret_access_key,
            } => {
                let mut builder = services::S3::default().bucket(bucket).region(region);
                if !endpoint.is_empty() {
                    builder = builder.endpoint(endpoint);
                }
                if !access_key_id.is_empty() {
                    builder = builder
                        .access_key_id(access_key_id)
                        .secret_access_key(secret_access_key);
                }

                Operator::new(builder)
                    .map_err(|e| StorageError::configuration(e.to_string()))?
                    .finish()
                    .pipe(Ok)
            }
            StorageProvider::LocalFs { root } => {
                let builder = services::Fs::default().root(
                    root.to_str()
                        .ok_or_else(|| StorageError::configuration("invalid path"))?,
                );

                Operator::new(builder)
                    .map_err(|e| StorageError::configuration(e.to_string()))?
                    .finish()
                    .pipe(Ok)
            }
        }
    }

    /// Lists the names of all objects at the storage root, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing fails.
    pub async fn list_names(&self) -> Result<Vec<String>, StorageError> {
        let entries = self.operator.list("/").await?;

        let mut names: Vec<String> = entries
            .into_iter()
            .filter(|entry| entry.metadata().mode() == EntryMode::FILE)
            .map(|entry| entry.name().to_string())
            .collect();
        names.sort();

        debug!(
            provider = self.provider_name,
            count = names.len(),
            "Listed snapshot objects"
        );
        Ok(names)
    }

    /// Reads an object as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns an error if the object is missing, unreadable, or not UTF-8.
    pub async fn read_to_string(&self, key: &str) -> Result<String, StorageError> {
        let buffer = match self.operator.read(key).await {
            Ok(buffer) => buffer,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::not_found(key));
            }
            Err(e) => return Err(e.into()),
        };

        String::from_utf8(buffer.to_vec()).map_err(|_| StorageError::InvalidUtf8 {
            key: key.to_string(),
        })
    }

    /// Get the storage provider name.
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider_name
    }
}

/// Extension trait for pipe operator.
trait Pipe: Sized {
    fn pipe<F, R>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }
}

impl<T> Pipe for T {}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_in(dir: &tempfile::TempDir) -> SnapshotStorage {
        SnapshotStorage::from_provider(&StorageProvider::local_fs(dir.path()))
            .expect("should create storage")
    }

    #[tokio::test]
    async fn test_list_names_sorted_files_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("summaries_2024_01_02.csv"), "a").unwrap();
        std::fs::write(dir.path().join("summaries_2023.csv"), "b").unwrap();
        std::fs::create_dir(dir.path().join("archive")).unwrap();

        let storage = storage_in(&dir);
        assert_eq!(storage.provider_name(), "local");
        assert_eq!(
            storage.list_names().await.unwrap(),
            vec!["summaries_2023.csv", "summaries_2024_01_02.csv"]
        );
    }

    #[tokio::test]
    async fn test_read_to_string() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.csv"), "Description,Amount\n").unwrap();

        let storage = storage_in(&dir);
        assert_eq!(
            storage.read_to_string("notes.csv").await.unwrap(),
            "Description,Amount\n"
        );
    }

    #[tokio::test]
    async fn test_read_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);
        let err = storage.read_to_string("missing.csv").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound { ref key } if key == "missing.csv"));
    }

    #[tokio::test]
    async fn test_read_binary_is_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("blob.csv"), [0xff, 0xfe, 0x00]).unwrap();
        let err = storage_in(&dir).read_to_string("blob.csv").await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidUtf8 { .. }));
    }
}
