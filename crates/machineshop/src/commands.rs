//! Subcommand implementations. Output goes to the supplied writer.

use anyhow::{Context, bail};
use log::{debug, warn};
use machineshop_config::{ConfigSource, ConfigStore, Material, Printer, default_config};
use serde_json::Value;
use std::io::Write;
use std::path::Path;

pub fn init(path: &Path, force: bool, out: &mut impl Write) -> anyhow::Result<()> {
    if path.exists() && !force {
        bail!(
            "config file {} already exists (use --force to overwrite)",
            path.display()
        );
    }
    let store = ConfigStore::from_map(path, default_config());
    store
        .try_save()
        .with_context(|| format!("failed to write {}", path.display()))?;
    writeln!(out, "wrote defaults to {}", path.display())?;
    Ok(())
}

/// Print the value at `key`; returns `false` when nothing is configured there.
pub fn get(path: &Path, key: &str, out: &mut impl Write) -> anyhow::Result<bool> {
    let store = load(path);
    match store.get_dotted(key) {
        Some(value) => {
            writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
            Ok(true)
        }
        None => {
            debug!("no value at {key}");
            Ok(false)
        }
    }
}

pub fn set(path: &Path, key: &str, raw: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let mut store = load_for_update(path)?;
    let value = parse_value(raw);
    store
        .set_dotted(value.clone(), key)
        .with_context(|| format!("failed to set {key}"))?;
    store
        .try_save()
        .with_context(|| format!("failed to write {}", path.display()))?;
    writeln!(out, "{key} = {value}")?;
    Ok(())
}

pub fn merge_defaults(path: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let mut store = load_for_update(path)?;
    let inserted = store.merge_defaults();
    store
        .try_save()
        .with_context(|| format!("failed to write {}", path.display()))?;
    writeln!(out, "added {inserted} missing keys")?;
    Ok(())
}

pub fn materials(path: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let store = load(path);
    let materials = store.typed_materials().context("invalid materials")?;
    for (key, material) in materials {
        let unit = match material {
            Material::Fdm(_) => "g",
            Material::Dlp(_) => "ml",
        };
        writeln!(
            out,
            "{key:<16} {:<4} {:>8.2}/{unit:<3} {} [{}]",
            material.process(),
            material.unit_price(),
            material.name(),
            material.colors().join(", ")
        )?;
    }
    Ok(())
}

pub fn printers(path: &Path, enabled_only: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let store = load(path);
    let printers = if enabled_only {
        store.typed_enabled_printers()
    } else {
        store.typed_printers()
    }
    .context("invalid printers")?;
    for (key, printer) in printers {
        let [x, y, z] = printer.build_volume_mm();
        let detail = match &printer {
            Printer::Fdm(fdm) => format!("nozzle {}mm", fdm.nozzle_diameter_mm),
            Printer::Dlp(dlp) => format!("xy {}um", dlp.xy_resolution_um),
        };
        writeln!(
            out,
            "{key:<16} {:<4} {x}x{y}x{z}mm {detail:<14} x{:<5} {}{}",
            printer.process(),
            printer.markup_multiplier(),
            printer.name(),
            if printer.is_enabled() { "" } else { " (disabled)" }
        )?;
    }
    Ok(())
}

pub fn post_processing(
    path: &Path,
    enabled_only: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let store = load(path);
    let options = if enabled_only {
        store.typed_enabled_post_processing()
    } else {
        store.typed_post_processing_options()
    }
    .context("invalid post_processing")?;
    let symbol = currency_symbol(&store);
    for (key, option) in options {
        writeln!(
            out,
            "{key:<12} {symbol}{:<8} {}{}",
            option.price,
            option.name,
            if option.enabled { "" } else { " (disabled)" }
        )?;
    }
    Ok(())
}

pub fn qualities(path: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let store = load(path);
    for (key, quality) in store.typed_print_qualities().context("invalid print_quality")? {
        writeln!(
            out,
            "{key:<12} {:<5} {} - {}",
            quality.layer_height, quality.name, quality.description
        )?;
    }
    Ok(())
}

pub fn pricing(path: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let store = load(path);
    match store.typed_pricing() {
        Ok(Some(pricing)) => {
            writeln!(out, "mode: {}", pricing.pricing_mode.as_str())?;
            let symbol = &pricing.currency_symbol;
            writeln!(out, "currency: {} ({symbol})", pricing.currency)?;
            writeln!(out, "base cost: {symbol}{}", pricing.base_cost)?;
            writeln!(
                out,
                "electricity: {symbol}{}/kWh at {}W",
                pricing.electricity_rate_per_kwh, pricing.printer_power_watts
            )?;
            writeln!(out, "depreciation: {symbol}{}/h", pricing.depreciation_per_hour)?;
            writeln!(out, "other costs: {symbol}{}/print", pricing.other_costs_per_print)?;
            writeln!(out, "gst: {}%", pricing.gst_rate * 100.0)?;
        }
        Ok(None) => {
            writeln!(out, "mode: {}", store.pricing_mode())?;
            writeln!(out, "no pricing block configured")?;
        }
        Err(err) => {
            warn!("pricing block does not match the expected shape: {err}");
            writeln!(out, "mode: {}", store.pricing_mode())?;
            let raw = Value::Object(store.pricing_config().clone());
            writeln!(out, "{}", serde_json::to_string_pretty(&raw)?)?;
        }
    }
    Ok(())
}

/// Read-only commands tolerate a broken file and show the defaults.
///
/// The load failure itself is already reported by `ConfigStore::load`.
fn load(path: &Path) -> ConfigStore {
    let store = ConfigStore::load(path);
    if let ConfigSource::DefaultsAfterError(reason) = store.source() {
        debug!("showing built-in defaults: {reason}");
    }
    store
}

/// Commands that save must not replace a broken file with the defaults.
fn load_for_update(path: &Path) -> anyhow::Result<ConfigStore> {
    ConfigStore::try_load(path).with_context(|| format!("failed to load {}", path.display()))
}

/// Parse a command-line value as JSON, falling back to a plain string.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn currency_symbol(store: &ConfigStore) -> &str {
    store
        .pricing_config()
        .get("currency_symbol")
        .and_then(Value::as_str)
        .unwrap_or("")
}
