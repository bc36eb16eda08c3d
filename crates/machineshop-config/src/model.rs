//! Typed records for the quote configuration categories.
//!
//! The store keeps the raw JSON mapping as the source of truth; these types
//! are deserialized from it on demand by the typed views.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Printing process a material or printer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessType {
    /// Filament-based fused deposition modeling.
    Fdm,
    /// Resin-based photopolymer printing (DLP/SLA/MSLA).
    Dlp,
}

impl fmt::Display for ProcessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessType::Fdm => f.pad("fdm"),
            ProcessType::Dlp => f.pad("dlp"),
        }
    }
}

/// Entry under `materials.<key>`, tagged by its `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Material {
    Fdm(FdmMaterial),
    Dlp(DlpMaterial),
}

impl Material {
    pub fn name(&self) -> &str {
        match self {
            Material::Fdm(material) => &material.name,
            Material::Dlp(material) => &material.name,
        }
    }

    pub fn process(&self) -> ProcessType {
        match self {
            Material::Fdm(_) => ProcessType::Fdm,
            Material::Dlp(_) => ProcessType::Dlp,
        }
    }

    pub fn colors(&self) -> &[String] {
        match self {
            Material::Fdm(material) => &material.colors,
            Material::Dlp(material) => &material.colors,
        }
    }

    /// Precomputed price of one gram (FDM) or one millilitre (DLP).
    pub fn unit_price(&self) -> f64 {
        match self {
            Material::Fdm(material) => material.per_gram_price,
            Material::Dlp(material) => material.per_ml_price,
        }
    }
}

/// Filament material priced per kilogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FdmMaterial {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub density_g_cm3: f64,
    pub price_per_kg: f64,
    pub per_gram_price: f64,
    pub bed_temp: u32,
    pub extruder_temp: u32,
    pub perimeter_speed: f64,
    pub infill_speed: f64,
    pub solid_infill_speed: f64,
    #[serde(default)]
    pub colors: Vec<String>,
}

/// Resin material priced per litre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DlpMaterial {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub density_g_ml: f64,
    pub price_per_liter: f64,
    pub per_ml_price: f64,
    pub exposure_time_s: f64,
    pub bottom_exposure_s: f64,
    pub lift_speed_mm_s: f64,
    #[serde(default)]
    pub colors: Vec<String>,
}

/// Entry under `printers.<key>`, tagged by its `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Printer {
    Fdm(FdmPrinter),
    Dlp(DlpPrinter),
}

impl Printer {
    pub fn name(&self) -> &str {
        match self {
            Printer::Fdm(printer) => &printer.name,
            Printer::Dlp(printer) => &printer.name,
        }
    }

    pub fn process(&self) -> ProcessType {
        match self {
            Printer::Fdm(_) => ProcessType::Fdm,
            Printer::Dlp(_) => ProcessType::Dlp,
        }
    }

    /// Factor applied to the base cost when quoting on this printer.
    pub fn markup_multiplier(&self) -> f64 {
        match self {
            Printer::Fdm(printer) => printer.markup_multiplier,
            Printer::Dlp(printer) => printer.markup_multiplier,
        }
    }

    pub fn is_enabled(&self) -> bool {
        match self {
            Printer::Fdm(printer) => printer.enabled,
            Printer::Dlp(printer) => printer.enabled,
        }
    }

    /// Build envelope in millimetres as `[x, y, z]`.
    pub fn build_volume_mm(&self) -> [u32; 3] {
        match self {
            Printer::Fdm(printer) => printer.bed_size_mm,
            Printer::Dlp(printer) => printer.build_volume_mm,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FdmPrinter {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub bed_size_mm: [u32; 3],
    pub nozzle_diameter_mm: f64,
    pub max_print_speed_mm_s: f64,
    pub markup_multiplier: f64,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DlpPrinter {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub build_volume_mm: [u32; 3],
    pub xy_resolution_um: u32,
    /// Supported layer height range in microns as `[min, max]`.
    pub layer_height_um: [u32; 2],
    pub markup_multiplier: f64,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

/// Entry under `print_quality.<key>`; applies to every material and printer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintQuality {
    pub name: String,
    pub layer_height: f64,
    #[serde(default)]
    pub description: String,
}

/// Entry under `post_processing.<key>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostProcessingOption {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

/// How a quote derives its price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingMode {
    /// Machine time, electricity, depreciation and overheads.
    #[default]
    Custom,
    /// Flat per-gram (or per-millilitre) material price.
    PerGram,
}

impl PricingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingMode::Custom => "custom",
            PricingMode::PerGram => "per_gram",
        }
    }
}

/// The `pricing` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default)]
    pub pricing_mode: PricingMode,
    pub base_cost: f64,
    pub electricity_rate_per_kwh: f64,
    pub printer_power_watts: f64,
    pub depreciation_per_hour: f64,
    pub other_costs_per_print: f64,
    pub gst_rate: f64,
    pub currency: String,
    pub currency_symbol: String,
}

/// The `infill_options` block, percentages in `0..=100`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfillOptions {
    pub min_percentage: u32,
    pub max_percentage: u32,
    pub default_percentage: u32,
    #[serde(default)]
    pub recommended: BTreeMap<String, u32>,
}

impl InfillOptions {
    /// Clamp a requested infill percentage into the configured range.
    pub fn clamp(&self, percentage: u32) -> u32 {
        percentage.clamp(self.min_percentage, self.max_percentage.max(self.min_percentage))
    }
}

/// The `file_settings` block governing uploads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSettings {
    pub max_file_size_mb: u64,
    #[serde(default)]
    pub allowed_extensions: Vec<String>,
    pub upload_timeout_seconds: u64,
}

impl FileSettings {
    /// Case-insensitive check against `allowed_extensions`, with or without a leading dot.
    pub fn allows_extension(&self, extension: &str) -> bool {
        let extension = extension.trim_start_matches('.');
        self.allowed_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(extension))
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb.saturating_mul(1024 * 1024)
    }
}

/// The `application` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationInfo {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: String,
}

/// The `slicer` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlicerConfig {
    pub path: String,
    #[serde(default = "default_slicer_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_enabled() -> bool {
    true
}

fn default_slicer_timeout_seconds() -> u64 {
    300
}
