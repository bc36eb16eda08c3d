//! Configuration store for the Machine Shop 3D-printing quote engine.
//!
//! Holds materials, printer profiles, print-quality presets, pricing,
//! infill and post-processing options as a nested JSON mapping, loaded from a
//! file or synthesized from built-in defaults, with path-based access and
//! typed per-category views.

mod defaults;
mod error;
mod model;
mod shared;
mod store;

/// Built-in default dataset and slicer fallbacks.
pub use defaults::{DEFAULT_SLICER_PATH, SLICER_PATH_ENV, default_config};
/// Public error type returned by the strict store APIs.
pub use error::ConfigError;
/// Typed records for each config category.
pub use model::*;
/// Lock-protected handle for sharing a store.
pub use shared::SharedConfigStore;
/// The store itself plus its path helpers and well-known keys.
pub use store::{
    APPLICATION_KEY, ConfigSource, ConfigStore, DEFAULT_CONFIG_FILE, DEFAULT_PRICING_MODE,
    FILE_SETTINGS_KEY, INFILL_OPTIONS_KEY, MATERIALS_KEY, POST_PROCESSING_KEY, PRICING_KEY,
    PRINT_QUALITY_KEY, PRINTERS_KEY, SLICER_KEY, split_dotted,
};
