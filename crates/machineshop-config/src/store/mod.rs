//! The configuration store: a nested JSON mapping with path access,
//! persistence and per-category projections.
//!
//! A store is loaded once from a JSON file (or synthesized from the built-in
//! defaults) and then read through its accessors. Loading and saving never
//! fail: errors are logged and downgraded to the defaults or to `false`.
//! The `try_*` variants surface the underlying [`ConfigError`].

mod merge;
mod path;
mod typed;

#[cfg(test)]
mod tests;

pub use path::split_dotted;

use crate::ConfigError;
use crate::defaults::{DEFAULT_SLICER_PATH, default_config};
use log::{debug, error, info};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Default config filename, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";
/// Pricing mode reported when the config does not name one.
pub const DEFAULT_PRICING_MODE: &str = "custom";

pub const APPLICATION_KEY: &str = "application";
pub const SLICER_KEY: &str = "slicer";
pub const MATERIALS_KEY: &str = "materials";
pub const PRINT_QUALITY_KEY: &str = "print_quality";
pub const INFILL_OPTIONS_KEY: &str = "infill_options";
pub const PRICING_KEY: &str = "pricing";
pub const PRINTERS_KEY: &str = "printers";
pub const POST_PROCESSING_KEY: &str = "post_processing";
pub const FILE_SETTINGS_KEY: &str = "file_settings";

static EMPTY_CATEGORY: LazyLock<Map<String, Value>> = LazyLock::new(Map::new);

/// Where the active mapping of a [`ConfigStore`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed verbatim from the config file.
    File,
    /// Built-in defaults; the config file did not exist.
    Defaults,
    /// Built-in defaults after the config file failed to load.
    DefaultsAfterError(String),
    /// Supplied directly by the caller.
    Memory,
}

/// Nested configuration mapping bound to a file path.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    data: Value,
    source: ConfigSource,
}

impl ConfigStore {
    /// Load the store from `path`, falling back to the built-in defaults.
    ///
    /// A missing file yields the defaults silently. A file that cannot be
    /// read or parsed is reported once through `log::error!` and also yields
    /// the defaults.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(store) => store,
            Err(err) => {
                error!("error loading config file (path={}): {err}", path.display());
                Self {
                    path: path.to_path_buf(),
                    data: Value::Object(default_config()),
                    source: ConfigSource::DefaultsAfterError(err.to_string()),
                }
            }
        }
    }

    /// Load the store from `path`, returning read and parse failures.
    ///
    /// A missing file is not an error and yields the defaults. The parsed
    /// mapping is used as-is, without merging in defaults.
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("config file missing; using defaults (path={})", path.display());
            return Ok(Self::with_defaults(path));
        }

        debug!("loading config from path: {}", path.display());
        let contents = fs::read_to_string(path).map_err(ConfigError::ReadFailed)?;
        let data: Value = serde_json::from_str(&contents)?;
        if !data.is_object() {
            return Err(ConfigError::InvalidRoot);
        }
        info!(
            "config loaded (path={}, sections={})",
            path.display(),
            data.as_object().map_or(0, Map::len)
        );
        Ok(Self {
            path: path.to_path_buf(),
            data,
            source: ConfigSource::File,
        })
    }

    /// Build a store over the built-in defaults without touching the filesystem.
    pub fn with_defaults(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            data: Value::Object(default_config()),
            source: ConfigSource::Defaults,
        }
    }

    /// Wrap an explicit mapping; `save` writes it to `path`.
    pub fn from_map(path: impl AsRef<Path>, map: Map<String, Value>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            data: Value::Object(map),
            source: ConfigSource::Memory,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    /// The whole active mapping.
    pub fn as_map(&self) -> &Map<String, Value> {
        self.data.as_object().unwrap_or(&EMPTY_CATEGORY)
    }

    /// Look up a nested value; `None` when any key on the path is missing or
    /// an intermediate value is not an object. The empty path is the root.
    pub fn get(&self, keys: &[&str]) -> Option<&Value> {
        path::lookup(&self.data, keys)
    }

    /// Like [`ConfigStore::get`], returning `default` for a missing path.
    pub fn get_or(&self, keys: &[&str], default: Value) -> Value {
        self.get(keys).cloned().unwrap_or(default)
    }

    /// Look up a dotted path such as `"materials.pla.name"`.
    pub fn get_dotted(&self, dotted: &str) -> Option<&Value> {
        self.get(&split_dotted(dotted))
    }

    /// Assign `value` at `keys`, creating missing intermediate objects.
    ///
    /// The prior value, if any, is replaced regardless of its type. Fails
    /// without mutating the store when `keys` is empty or an existing
    /// intermediate value is not an object.
    pub fn set(&mut self, value: impl Into<Value>, keys: &[&str]) -> Result<(), ConfigError> {
        path::assign(&mut self.data, keys, value.into())
    }

    /// Dotted-path form of [`ConfigStore::set`].
    pub fn set_dotted(&mut self, value: impl Into<Value>, dotted: &str) -> Result<(), ConfigError> {
        self.set(value, &split_dotted(dotted))
    }

    /// Write the mapping to the store's path; logs and returns `false` on failure.
    pub fn save(&self) -> bool {
        match self.try_save() {
            Ok(()) => true,
            Err(err) => {
                error!("error saving config (path={}): {err}", self.path.display());
                false
            }
        }
    }

    /// Write the mapping to the store's path as pretty-printed JSON.
    pub fn try_save(&self) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(&self.data).map_err(ConfigError::EncodeFailed)?;
        fs::write(&self.path, contents).map_err(ConfigError::WriteFailed)?;
        debug!("config saved (path={})", self.path.display());
        Ok(())
    }

    /// Fill keys missing from the active mapping with the built-in defaults.
    ///
    /// Existing values are never overwritten. Returns the number of keys added.
    pub fn merge_defaults(&mut self) -> usize {
        let defaults = Value::Object(default_config());
        let inserted = merge::fill_missing(&mut self.data, &defaults);
        debug!("merged defaults into config (inserted={inserted})");
        inserted
    }

    pub fn materials(&self) -> &Map<String, Value> {
        self.category(MATERIALS_KEY)
    }

    pub fn material(&self, key: &str) -> Option<&Value> {
        self.materials().get(key)
    }

    pub fn print_qualities(&self) -> &Map<String, Value> {
        self.category(PRINT_QUALITY_KEY)
    }

    pub fn pricing_config(&self) -> &Map<String, Value> {
        self.category(PRICING_KEY)
    }

    /// `pricing.pricing_mode`, or `"custom"` when absent or not a string.
    pub fn pricing_mode(&self) -> &str {
        self.pricing_config()
            .get("pricing_mode")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_PRICING_MODE)
    }

    /// `slicer.path`, or [`DEFAULT_SLICER_PATH`] when absent or not a string.
    pub fn slicer_path(&self) -> &str {
        self.category(SLICER_KEY)
            .get("path")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_SLICER_PATH)
    }

    pub fn printers(&self) -> &Map<String, Value> {
        self.category(PRINTERS_KEY)
    }

    /// Printers whose `enabled` flag is `true` or absent.
    pub fn enabled_printers(&self) -> Map<String, Value> {
        enabled_entries(self.printers())
    }

    pub fn printer(&self, key: &str) -> Option<&Value> {
        self.printers().get(key)
    }

    pub fn post_processing_options(&self) -> &Map<String, Value> {
        self.category(POST_PROCESSING_KEY)
    }

    /// Post-processing options whose `enabled` flag is `true` or absent.
    pub fn enabled_post_processing(&self) -> Map<String, Value> {
        enabled_entries(self.post_processing_options())
    }

    pub fn post_processing(&self, key: &str) -> Option<&Value> {
        self.post_processing_options().get(key)
    }

    pub fn infill_options(&self) -> &Map<String, Value> {
        self.category(INFILL_OPTIONS_KEY)
    }

    pub fn file_settings(&self) -> &Map<String, Value> {
        self.category(FILE_SETTINGS_KEY)
    }

    pub fn application(&self) -> &Map<String, Value> {
        self.category(APPLICATION_KEY)
    }

    /// Top-level object under `key`; empty when absent or not an object.
    fn category(&self, key: &str) -> &Map<String, Value> {
        self.as_map()
            .get(key)
            .and_then(Value::as_object)
            .unwrap_or(&EMPTY_CATEGORY)
    }
}

/// Keep object entries whose `enabled` field is `true` or missing.
fn enabled_entries(entries: &Map<String, Value>) -> Map<String, Value> {
    entries
        .iter()
        .filter(|(_, entry)| is_enabled(entry))
        .map(|(key, entry)| (key.clone(), entry.clone()))
        .collect()
}

pub(crate) fn is_enabled(entry: &Value) -> bool {
    match entry.as_object() {
        Some(map) => match map.get("enabled") {
            None => true,
            Some(flag) => flag.as_bool() == Some(true),
        },
        None => false,
    }
}
