use serde_json::{Map, Value};
use tokio::sync::RwLock;

use super::store::{merge_patch, patch_from_object, SettingsStore};
use crate::error::DayTintResult;
use crate::models::settings::{SettingsKey, SettingsPatch};

/// Settings held in process memory, stored in the same JSON shape as on disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<Map<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store from a raw JSON object, e.g. data written by another host.
    pub fn from_object(entries: Map<String, Value>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    pub async fn snapshot(&self) -> Map<String, Value> {
        self.entries.read().await.clone()
    }
}

impl SettingsStore for MemoryStore {
    async fn get(&self, keys: &[SettingsKey]) -> DayTintResult<SettingsPatch> {
        let entries = self.entries.read().await;
        Ok(patch_from_object(&entries, keys))
    }

    async fn set(&self, patch: SettingsPatch) -> DayTintResult<()> {
        let mut entries = self.entries.write().await;
        merge_patch(&mut entries, patch)
    }
}
