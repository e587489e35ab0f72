//! Process-wide configuration store.
//!
//! The whole `config.toml` is parsed once at startup and kept as a raw table.
//! Each crate pulls its own typed section out of it with [`get`], so a section
//! that is missing or malformed never prevents the others from loading.

use std::fs;
use std::path::Path;
use std::sync::RwLock;

use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use serde::Serialize;
use toml::{Table, Value};

static GLOBAL_CONFIG: OnceCell<RwLock<Table>> = OnceCell::new();

/// Loads `path` into the global store. A missing file means "all defaults".
pub fn init<P: AsRef<Path>>(path: P) -> anyhow::Result<()> {
    let path = path.as_ref();

    let content = if path.exists() {
        log::info!("Loading config from {:?}", path);
        fs::read_to_string(path)?
    } else {
        log::warn!("Config file not found at {:?}, using defaults.", path);
        String::new()
    };

    init_from_str(&content)
}

/// Same as [`init`] but from an in-memory document.
pub fn init_from_str(content: &str) -> anyhow::Result<()> {
    let table: Table = toml::from_str(content).unwrap_or_else(|e| {
        log::error!("Config syntax error: {}, using empty config.", e);
        Table::new()
    });

    GLOBAL_CONFIG
        .set(RwLock::new(table))
        .map_err(|_| anyhow::anyhow!("Config already initialized"))?;

    Ok(())
}

pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}

/// Typed view of the `[key]` section, or `T::default()` when the store was
/// never initialized, the section is absent, or it does not deserialize.
pub fn get<T: DeserializeOwned + Serialize + Default>(key: &str) -> T {
    let Some(store) = GLOBAL_CONFIG.get() else {
        log::debug!("Config not initialized, section '[{}]' uses defaults.", key);
        return T::default();
    };

    let read_guard = match store.read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };

    match read_guard.get(key) {
        Some(value) => section_from_value(key, value.clone()),
        None => T::default(),
    }
}

/// Deserializes one config section laid over `T::default()`, so nested
/// tables only need the keys they change. Falls back to defaults on mismatch.
pub fn section_from_value<T: DeserializeOwned + Serialize + Default>(key: &str, value: Value) -> T {
    layer_over(&T::default(), value).unwrap_or_else(|e| {
        log::warn!("Config section '[{}]' mismatch: {}. Using default.", key, e);
        T::default()
    })
}

/// Lays `overlay` key-by-key over `base` and deserializes the result. Tables
/// merge recursively; any other value replaces what `base` had.
pub fn layer_over<T: DeserializeOwned + Serialize>(base: &T, overlay: Value) -> anyhow::Result<T> {
    let mut merged = Value::try_from(base)?;
    merge_into(&mut merged, overlay);
    Ok(merged.try_into()?)
}

fn merge_into(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base), Value::Table(overlay)) => {
            for (k, v) in overlay {
                match base.get_mut(&k) {
                    Some(existing) => merge_into(existing, v),
                    None => {
                        base.insert(k, v);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
