//! Typed views decoded on demand from the raw mapping.

use super::{
    APPLICATION_KEY, ConfigStore, FILE_SETTINGS_KEY, INFILL_OPTIONS_KEY, MATERIALS_KEY,
    POST_PROCESSING_KEY, PRICING_KEY, PRINT_QUALITY_KEY, PRINTERS_KEY, SLICER_KEY, is_enabled,
    path::join_keys,
};
use crate::ConfigError;
use crate::model::{
    ApplicationInfo, FileSettings, InfillOptions, Material, PostProcessingOption, PricingConfig,
    PrintQuality, Printer, SlicerConfig,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

impl ConfigStore {
    /// Decode the value at `keys` into `T`; `Ok(None)` when the path is missing.
    pub fn get_as<T: DeserializeOwned>(&self, keys: &[&str]) -> Result<Option<T>, ConfigError> {
        self.get(keys)
            .map(|value| decode(&join_keys(keys), value))
            .transpose()
    }

    pub fn typed_material(&self, key: &str) -> Result<Option<Material>, ConfigError> {
        self.get_as(&[MATERIALS_KEY, key])
    }

    /// All materials in configured order.
    pub fn typed_materials(&self) -> Result<Vec<(String, Material)>, ConfigError> {
        decode_entries(MATERIALS_KEY, self.materials().iter())
    }

    pub fn typed_printer(&self, key: &str) -> Result<Option<Printer>, ConfigError> {
        self.get_as(&[PRINTERS_KEY, key])
    }

    pub fn typed_printers(&self) -> Result<Vec<(String, Printer)>, ConfigError> {
        decode_entries(PRINTERS_KEY, self.printers().iter())
    }

    pub fn typed_enabled_printers(&self) -> Result<Vec<(String, Printer)>, ConfigError> {
        decode_entries(
            PRINTERS_KEY,
            self.printers().iter().filter(|(_, entry)| is_enabled(entry)),
        )
    }

    pub fn typed_print_qualities(&self) -> Result<Vec<(String, PrintQuality)>, ConfigError> {
        decode_entries(PRINT_QUALITY_KEY, self.print_qualities().iter())
    }

    pub fn typed_post_processing(
        &self,
        key: &str,
    ) -> Result<Option<PostProcessingOption>, ConfigError> {
        self.get_as(&[POST_PROCESSING_KEY, key])
    }

    pub fn typed_post_processing_options(
        &self,
    ) -> Result<Vec<(String, PostProcessingOption)>, ConfigError> {
        decode_entries(POST_PROCESSING_KEY, self.post_processing_options().iter())
    }

    pub fn typed_enabled_post_processing(
        &self,
    ) -> Result<Vec<(String, PostProcessingOption)>, ConfigError> {
        decode_entries(
            POST_PROCESSING_KEY,
            self.post_processing_options()
                .iter()
                .filter(|(_, entry)| is_enabled(entry)),
        )
    }

    pub fn typed_pricing(&self) -> Result<Option<PricingConfig>, ConfigError> {
        self.get_as(&[PRICING_KEY])
    }

    pub fn typed_infill(&self) -> Result<Option<InfillOptions>, ConfigError> {
        self.get_as(&[INFILL_OPTIONS_KEY])
    }

    pub fn typed_file_settings(&self) -> Result<Option<FileSettings>, ConfigError> {
        self.get_as(&[FILE_SETTINGS_KEY])
    }

    pub fn typed_application(&self) -> Result<Option<ApplicationInfo>, ConfigError> {
        self.get_as(&[APPLICATION_KEY])
    }

    pub fn typed_slicer(&self) -> Result<Option<SlicerConfig>, ConfigError> {
        self.get_as(&[SLICER_KEY])
    }
}

fn decode<T: DeserializeOwned>(path: &str, value: &Value) -> Result<T, ConfigError> {
    T::deserialize(value).map_err(|source| ConfigError::Decode {
        path: path.to_string(),
        source,
    })
}

fn decode_entries<'a, T, I>(category: &str, entries: I) -> Result<Vec<(String, T)>, ConfigError>
where
    T: DeserializeOwned,
    I: Iterator<Item = (&'a String, &'a Value)>,
{
    entries
        .map(|(key, value)| {
            let entry = decode(&format!("{category}.{key}"), value)?;
            Ok((key.clone(), entry))
        })
        .collect()
}

