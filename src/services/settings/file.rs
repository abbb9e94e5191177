use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tokio::fs;
use tokio::sync::Mutex;

use super::store::{merge_patch, patch_from_object, SettingsStore};
use crate::error::{DayTintError, DayTintResult};
use crate::models::settings::{SettingsKey, SettingsPatch};

/// Settings persisted as one pretty-printed JSON object on disk.
///
/// A missing file reads as an empty document. Writes are read-modify-write and
/// serialized within this process only.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_object(&self) -> DayTintResult<Map<String, Value>> {
        let exists = fs::try_exists(&self.path)
            .await
            .map_err(|err| self.file_error(err))?;
        if !exists {
            return Ok(Map::new());
        }

        let data = fs::read_to_string(&self.path)
            .await
            .map_err(|err| self.file_error(err))?;
        if data.trim().is_empty() {
            return Ok(Map::new());
        }

        let document: Value =
            serde_json::from_str(&data).map_err(|source| DayTintError::SettingsParse {
                path: self.path.clone(),
                source,
            })?;
        match document {
            Value::Object(entries) => Ok(entries),
            _ => Err(DayTintError::MalformedDocument(self.path.clone())),
        }
    }

    async fn write_object(&self, entries: &Map<String, Value>) -> DayTintResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|err| self.file_error(err))?;
            }
        }

        let data = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, data)
            .await
            .map_err(|err| self.file_error(err))?;
        Ok(())
    }

    fn file_error(&self, source: std::io::Error) -> DayTintError {
        DayTintError::SettingsFile {
            path: self.path.clone(),
            source,
        }
    }
}

impl SettingsStore for JsonFileStore {
    async fn get(&self, keys: &[SettingsKey]) -> DayTintResult<SettingsPatch> {
        let entries = self.read_object().await?;
        Ok(patch_from_object(&entries, keys))
    }

    async fn set(&self, patch: SettingsPatch) -> DayTintResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_object().await?;
        merge_patch(&mut entries, patch)?;
        self.write_object(&entries).await?;
        log::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}
