use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::modules::store::application::ports::outgoing::{KeyValueError, KeyValueStore};

/// Key space persisted as a single JSON object on disk.
///
/// Reads are served from memory. Every write rewrites the file through a
/// sibling temp file and a rename, so a batch lands on disk as a unit.
#[derive(Debug)]
pub struct JsonFileKeyValueStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl JsonFileKeyValueStore {
    /// Open `path`, starting empty when the file is missing or unreadable.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, KeyValueError> {
        let path = path.as_ref().to_path_buf();

        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(map) => map,
                Err(e) => {
                    warn!(
                        "Data file {} is malformed, starting empty: {}",
                        path.display(),
                        e
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("Data file {} not found, starting empty", path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(KeyValueError::Io(e.to_string())),
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), KeyValueError> {
        let body = serde_json::to_string_pretty(entries)
            .map_err(|e| KeyValueError::Serialization(e.to_string()))?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, body)
            .await
            .map_err(|e| KeyValueError::Io(e.to_string()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| KeyValueError::Io(e.to_string()))
    }
}

#[async_trait]
impl KeyValueStore for JsonFileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set_many(&self, entries: Vec<(String, String)>) -> Result<(), KeyValueError> {
        let mut guard = self.entries.write().await;
        let mut next = guard.clone();
        next.extend(entries);

        self.persist(&next).await?;
        *guard = next;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), KeyValueError> {
        let mut guard = self.entries.write().await;
        if !guard.contains_key(key) {
            return Ok(());
        }
        let mut next = guard.clone();
        next.remove(key);

        self.persist(&next).await?;
        *guard = next;
        Ok(())
    }

    async fn ping(&self) -> Result<(), KeyValueError> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => tokio::fs::metadata(dir)
                .await
                .map(|_| ())
                .map_err(|e| KeyValueError::Io(e.to_string())),
            _ => Ok(()),
        }
    }
}
