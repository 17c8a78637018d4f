use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::entities::{GuestCollection, GuestRecord};
use crate::domain::ports::GuestStore;

// Guest store backed by a single JSON document on disk.
//
// Every call goes to the file: nothing is cached and writes are not locked,
// so concurrent writers race and the last save wins.
#[derive(Clone, Debug)]
pub struct JsonFileGuestStore {
    path: Arc<PathBuf>,
}

impl JsonFileGuestStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl GuestStore for JsonFileGuestStore {
    async fn load(&self) -> GuestCollection {
        let bytes = match tokio::fs::read(self.path.as_path()).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "guests file not found, starting empty");
                return GuestCollection::new();
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "failed to read guests file");
                return GuestCollection::new();
            }
        };

        // Entries are decoded one by one so a single unreadable entry
        // cannot empty the whole collection.
        let entries: IndexMap<String, Value> = match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "guests file is not a json object");
                return GuestCollection::new();
            }
        };

        entries
            .into_iter()
            .filter_map(|(guest_id, entry)| match serde_json::from_value::<GuestRecord>(entry) {
                Ok(guest) => Some((guest_id, guest)),
                Err(err) => {
                    warn!(guest_id = %guest_id, error = %err, "skipping unreadable guest entry");
                    None
                }
            })
            .collect()
    }

    async fn save(&self, guests: &GuestCollection) -> Result<(), String> {
        let bytes = serde_json::to_vec(guests).map_err(|err| err.to_string())?;
        tokio::fs::write(self.path.as_path(), bytes)
            .await
            .map_err(|err| format!("write {}: {err}", self.path.display()))
    }
}
