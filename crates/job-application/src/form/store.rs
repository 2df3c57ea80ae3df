use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::domain::Application;

/// Persistence boundary holding the single application document.
///
/// Saves overwrite the whole document; the last writer wins.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read the stored document, falling back to a blank application when
    /// nothing has been saved yet.
    async fn load(&self) -> Result<Application, StoreError>;

    async fn save(&self, document: &Application) -> Result<(), StoreError>;
}

/// Failure raised while reading or writing the application document.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("stored document at {} is malformed: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize application: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("document store unavailable: {0}")]
    Unavailable(String),
}

/// Stores the application as a pretty-printed JSON file.
///
/// The file is opened, read or written, and closed on every call.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn load(&self) -> Result<Application, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved application, using blank form");
                return Ok(Application::default());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    async fn save(&self, document: &Application) -> Result<(), StoreError> {
        let payload = serde_json::to_string_pretty(document).map_err(StoreError::Serialize)?;
        tokio::fs::write(&self.path, payload)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })
    }
}
