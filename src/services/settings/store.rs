use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::DayTintResult;
use crate::models::settings::{SettingsDocument, SettingsKey, SettingsPatch};

/// Asynchronous key/value store holding the settings document.
///
/// `get` returns only the requested keys that are present. `set` overwrites the
/// keys carried by the patch and leaves the rest alone; concurrent writers are
/// not coordinated, the last one wins.
#[allow(async_fn_in_trait)]
pub trait SettingsStore {
    async fn get(&self, keys: &[SettingsKey]) -> DayTintResult<SettingsPatch>;

    async fn set(&self, patch: SettingsPatch) -> DayTintResult<()>;
}

/// Read the requested keys and default every missing one.
pub async fn load_document<S: SettingsStore>(
    store: &S,
    keys: &[SettingsKey],
) -> DayTintResult<SettingsDocument> {
    let patch = store.get(keys).await?;
    Ok(SettingsDocument::from_patch(patch))
}

/// Pick `keys` out of a stored JSON object. A value that does not decode is
/// logged and treated as absent so the other keys still load.
pub(super) fn patch_from_object(object: &Map<String, Value>, keys: &[SettingsKey]) -> SettingsPatch {
    let mut patch = SettingsPatch::default();

    for key in keys {
        match key {
            SettingsKey::DayColors => patch.day_colors = decode_key(object, *key),
            SettingsKey::CalendarColors => patch.calendar_colors = decode_key(object, *key),
            SettingsKey::CalendarEvents => patch.calendar_events = decode_key(object, *key),
            SettingsKey::LoadedCalendars => patch.loaded_calendars = decode_key(object, *key),
        }
    }

    patch
}

fn decode_key<T: DeserializeOwned>(object: &Map<String, Value>, key: SettingsKey) -> Option<T> {
    let value = object.get(key.as_str())?;
    match serde_json::from_value(value.clone()) {
        Ok(decoded) => Some(decoded),
        Err(err) => {
            log::warn!("Ignoring unreadable settings key '{}': {}", key, err);
            None
        }
    }
}

/// Write every key present in `patch` into the stored object.
pub(super) fn merge_patch(object: &mut Map<String, Value>, patch: SettingsPatch) -> DayTintResult<()> {
    if let Value::Object(entries) = serde_json::to_value(patch)? {
        object.extend(entries);
    }
    Ok(())
}
