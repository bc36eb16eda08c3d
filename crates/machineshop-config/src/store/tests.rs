//! Tests for loading, path access and persistence of the config store.

use super::*;
use crate::model::{Material, PricingMode, ProcessType};
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write");
    path
}

fn default_store() -> ConfigStore {
    ConfigStore::with_defaults("unused.json")
}

#[test]
fn missing_file_yields_defaults() {
    let temp = TempDir::new().expect("tmp");
    let store = ConfigStore::load(temp.path().join("absent.json"));

    assert_eq!(store.source(), &ConfigSource::Defaults);
    let defaults = default_config();
    // The slicer path depends on the environment; compare everything else.
    for (key, value) in &defaults {
        if key != SLICER_KEY {
            assert_eq!(store.as_map().get(key), Some(value), "section {key}");
        }
    }
    assert_eq!(store.as_map().len(), 9);
}

#[test]
fn invalid_json_falls_back_to_defaults() {
    let temp = TempDir::new().expect("tmp");
    let path = write_config(&temp, "config.json", "{ \"pricing\": ");

    let store = ConfigStore::load(&path);

    assert!(matches!(store.source(), ConfigSource::DefaultsAfterError(_)));
    assert_eq!(store.as_map(), &default_config());
    assert_eq!(store.path(), path.as_path());
}

#[test]
fn try_load_surfaces_parse_errors() {
    let temp = TempDir::new().expect("tmp");
    let path = write_config(&temp, "config.json", "not json");

    let err = ConfigStore::try_load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseFailed(_)));
    assert!(err.to_string().contains("parse"));
}

#[test]
fn non_object_root_falls_back_to_defaults() {
    let temp = TempDir::new().expect("tmp");
    let path = write_config(&temp, "config.json", "[1, 2, 3]");

    assert!(matches!(
        ConfigStore::try_load(&path),
        Err(ConfigError::InvalidRoot)
    ));
    let store = ConfigStore::load(&path);
    assert!(matches!(store.source(), ConfigSource::DefaultsAfterError(_)));
    assert_eq!(store.printers().len(), 6);
}

#[test]
fn unreadable_path_falls_back_to_defaults() {
    let temp = TempDir::new().expect("tmp");

    let store = ConfigStore::load(temp.path());

    match store.source() {
        ConfigSource::DefaultsAfterError(reason) => assert!(reason.contains("read")),
        other => panic!("unexpected source: {other:?}"),
    }
    assert_eq!(store.print_qualities().len(), 4);
}

#[test]
fn parsed_file_is_used_without_merging_defaults() {
    let temp = TempDir::new().expect("tmp");
    let path = write_config(
        &temp,
        "config.json",
        r#"{ "pricing": { "pricing_mode": "per_gram", "currency": "USD" } }"#,
    );

    let store = ConfigStore::load(&path);

    assert_eq!(store.source(), &ConfigSource::File);
    assert_eq!(store.pricing_mode(), "per_gram");
    assert!(store.materials().is_empty());
    assert!(store.printers().is_empty());
    assert_eq!(store.material("pla"), None);
    assert_eq!(store.slicer_path(), DEFAULT_SLICER_PATH);
}

#[test]
fn get_returns_default_literals() {
    let store = default_store();

    assert_eq!(
        store.get(&["materials", "pla", "name"]),
        Some(&json!("PLA (Polylactic Acid)"))
    );
    assert_eq!(store.get(&["materials", "pla", "price_per_kg"]), Some(&json!(800)));
    assert_eq!(store.get(&["materials", "pla", "per_gram_price"]), Some(&json!(1.0)));
    assert_eq!(
        store.get(&["materials", "tough_resin", "lift_speed_mm_s"]),
        Some(&json!(2.5))
    );
    assert_eq!(
        store.get(&["printers", "elegoo_mars", "layer_height_um"]),
        Some(&json!([10, 100]))
    );
    assert_eq!(store.get(&["pricing", "gst_rate"]), Some(&json!(0.18)));
    assert_eq!(store.get(&["pricing", "currency_symbol"]), Some(&json!("₹")));
    assert_eq!(
        store.get(&["infill_options", "recommended", "structural"]),
        Some(&json!(80))
    );
    assert_eq!(
        store.get(&["file_settings", "allowed_extensions"]),
        Some(&json!(["stl"]))
    );
    assert_eq!(store.get(&["slicer", "timeout_seconds"]), Some(&json!(300)));
}

#[test]
fn empty_path_returns_root() {
    let store = default_store();
    assert_eq!(store.get(&[]), Some(&store.data));
}

#[test]
fn missing_paths_resolve_to_caller_default() {
    let store = default_store();
    let fallback = json!({ "fallback": true });

    assert_eq!(store.get(&["nope"]), None);
    assert_eq!(store.get(&["materials", "pla", "nope", "deeper"]), None);
    assert_eq!(store.get(&["materials", "pla", "name", "not_an_object"]), None);
    assert_eq!(store.get(&["materials", "pla", "colors", "0"]), None);

    assert_eq!(store.get_or(&["nope"], fallback.clone()), fallback);
    assert_eq!(
        store.get_or(&["a", "b", "c", "d"], fallback.clone()),
        fallback
    );
    assert_eq!(store.get_or(&["pricing", "currency"], fallback), json!("INR"));
}

#[test]
fn set_then_get_reads_back_value() {
    let mut store = default_store();

    store
        .set(json!(1.5), &["printers", "bambu_x1", "markup_multiplier"])
        .expect("set existing");
    store
        .set("brand new", &["quotes", "footer", "text"])
        .expect("set new");

    assert_eq!(
        store.get(&["printers", "bambu_x1", "markup_multiplier"]),
        Some(&json!(1.5))
    );
    assert_eq!(
        store.get(&["quotes", "footer", "text"]),
        Some(&json!("brand new"))
    );
}

#[test]
fn set_replaces_value_of_any_type() {
    let mut store = default_store();
    store
        .set(json!({ "custom": 1 }), &["materials", "pla", "colors"])
        .expect("set");
    assert_eq!(
        store.get(&["materials", "pla", "colors", "custom"]),
        Some(&json!(1))
    );
}

#[test]
fn set_through_non_object_fails_without_mutation() {
    let mut store = default_store();
    let before = store.as_map().clone();

    let err = store
        .set(json!(1), &["materials", "pla", "name", "first"])
        .unwrap_err();

    match err {
        ConfigError::NotAnObject { path } => assert_eq!(path, "materials.pla.name"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(store.as_map(), &before);
}

#[test]
fn set_with_empty_path_is_rejected() {
    let mut store = default_store();
    assert!(matches!(
        store.set(json!(1), &[]),
        Err(ConfigError::EmptyPath)
    ));
}

#[test]
fn dotted_paths_match_key_slices() {
    let mut store = default_store();

    assert_eq!(
        store.get_dotted("print_quality.fine.layer_height"),
        store.get(&["print_quality", "fine", "layer_height"])
    );
    store
        .set_dotted(json!(25), "infill_options.default_percentage")
        .expect("set");
    assert_eq!(
        store.get(&["infill_options", "default_percentage"]),
        Some(&json!(25))
    );
    assert_eq!(split_dotted(""), Vec::<&str>::new());
    assert_eq!(split_dotted("a..b"), vec!["a", "", "b"]);
}

#[test]
fn save_and_reload_round_trips() {
    let temp = TempDir::new().expect("tmp");
    let path = temp.path().join("config.json");
    let mut store = ConfigStore::with_defaults(&path);
    store
        .set(json!(false), &["printers", "ender3_v2", "enabled"])
        .expect("set");
    store
        .set(json!({ "name": "Vapor smoothing", "price": 950.5 }), &[
            "post_processing",
            "vapor",
        ])
        .expect("set");
    store
        .set(json!([[1, 2], [3.25]]), &["scratch", "nested", "lists"])
        .expect("set");

    assert!(store.save());
    let reloaded = ConfigStore::load(&path);

    assert_eq!(reloaded.source(), &ConfigSource::File);
    assert_eq!(reloaded.as_map(), store.as_map());
    let keys: Vec<_> = reloaded.as_map().keys().take(3).cloned().collect();
    assert_eq!(keys, vec!["application", "slicer", "materials"]);
}

#[test]
fn saved_file_is_readable_utf8() {
    let temp = TempDir::new().expect("tmp");
    let path = temp.path().join("config.json");
    let store = ConfigStore::with_defaults(&path);

    store.try_save().expect("save");
    let contents = fs::read_to_string(&path).expect("read");

    assert!(contents.contains("\"currency_symbol\": \"₹\""));
    assert!(contents.starts_with("{\n  \"application\""));
}

#[test]
fn save_failure_returns_false() {
    let temp = TempDir::new().expect("tmp");
    let store = ConfigStore::with_defaults(temp.path().join("missing_dir").join("config.json"));

    assert!(!store.save());
    assert!(matches!(store.try_save(), Err(ConfigError::WriteFailed(_))));
}

#[test]
fn enabled_filters_keep_true_or_absent() {
    let mut store = default_store();
    store
        .set(json!(false), &["printers", "ender3_v2", "enabled"])
        .expect("set");
    store
        .set(json!("yes"), &["printers", "creality_halot", "enabled"])
        .expect("set");
    store
        .as_object_mut(PRINTERS_KEY, "bambu_x1")
        .remove("enabled");
    store
        .set(json!(false), &["post_processing", "painting", "enabled"])
        .expect("set");

    let enabled: Vec<_> = store.enabled_printers().keys().cloned().collect();
    assert_eq!(
        enabled,
        vec!["prusa_mk3s", "bambu_x1", "elegoo_mars", "anycubic_photon"]
    );
    assert_eq!(store.printers().len(), 6);

    let enabled: Vec<_> = store.enabled_post_processing().keys().cloned().collect();
    assert_eq!(enabled, vec!["sanding", "polishing", "threading"]);
    assert_eq!(store.post_processing_options().len(), 4);
}

#[test]
fn single_entry_accessors() {
    let store = default_store();

    assert_eq!(
        store.printer("prusa_mk3s").and_then(|p| p.get("markup_multiplier")),
        Some(&json!(1.3))
    );
    assert_eq!(
        store.post_processing("threading").and_then(|p| p.get("price")),
        Some(&json!(300))
    );
    assert_eq!(
        store.material("nylon").and_then(|m| m.get("extruder_temp")),
        Some(&json!(250))
    );
    assert_eq!(store.printer("makerbot"), None);
    assert_eq!(store.post_processing("plating"), None);
}

#[test]
fn pricing_mode_and_slicer_path_fallbacks() {
    let mut store = ConfigStore::from_map("unused.json", Map::new());
    assert_eq!(store.pricing_mode(), "custom");
    assert_eq!(store.slicer_path(), "prusa-slicer");
    assert!(store.pricing_config().is_empty());

    store.set(json!(3), &["pricing", "pricing_mode"]).expect("set");
    assert_eq!(store.pricing_mode(), "custom");

    store
        .set("/opt/prusa/prusa-slicer", &["slicer", "path"])
        .expect("set");
    assert_eq!(store.slicer_path(), "/opt/prusa/prusa-slicer");
}

#[test]
fn mis_shaped_categories_project_to_empty() {
    let mut map = Map::new();
    map.insert("materials".to_string(), json!(["pla", "abs"]));
    map.insert("printers".to_string(), json!("none"));
    let store = ConfigStore::from_map("unused.json", map);

    assert!(store.materials().is_empty());
    assert!(store.printers().is_empty());
    assert!(store.enabled_printers().is_empty());
    assert_eq!(store.material("pla"), None);
    assert!(store.typed_materials().expect("typed").is_empty());
}

#[test]
fn every_default_entry_decodes() {
    let store = default_store();

    let materials = store.typed_materials().expect("materials");
    assert_eq!(materials.len(), 8);
    let resins = materials
        .iter()
        .filter(|(_, material)| material.process() == ProcessType::Dlp)
        .count();
    assert_eq!(resins, 3);

    assert_eq!(store.typed_printers().expect("printers").len(), 6);
    assert_eq!(store.typed_print_qualities().expect("qualities").len(), 4);
    assert_eq!(
        store
            .typed_post_processing_options()
            .expect("post processing")
            .len(),
        4
    );
    assert!(store.typed_application().expect("app").is_some());
    assert!(store.typed_slicer().expect("slicer").is_some());
}

#[test]
fn typed_views_expose_domain_values() {
    let store = default_store();

    let Some(Material::Dlp(resin)) = store.typed_material("standard_resin").expect("decode")
    else {
        panic!("standard_resin should be a dlp material");
    };
    assert_eq!(resin.per_ml_price, 25.0);
    assert_eq!(resin.colors, vec!["Grey", "White", "Black", "Clear"]);

    let printer = store.typed_printer("bambu_x1").expect("decode").expect("printer");
    assert_eq!(printer.process(), ProcessType::Fdm);
    assert_eq!(printer.build_volume_mm(), [256, 256, 256]);
    assert!(printer.is_enabled());

    let pricing = store.typed_pricing().expect("decode").expect("pricing");
    assert_eq!(pricing.pricing_mode, PricingMode::Custom);
    assert_eq!(pricing.currency, "INR");
    assert_eq!(pricing.gst_rate, 0.18);

    let infill = store.typed_infill().expect("decode").expect("infill");
    assert_eq!(infill.clamp(1), 5);
    assert_eq!(infill.clamp(150), 100);
    assert_eq!(infill.recommended.get("functional"), Some(&40));

    let files = store.typed_file_settings().expect("decode").expect("files");
    assert!(files.allows_extension("STL"));
    assert!(files.allows_extension(".stl"));
    assert!(!files.allows_extension("obj"));
    assert_eq!(files.max_file_size_bytes(), 100 * 1024 * 1024);
}

#[test]
fn typed_enabled_views_respect_flags() {
    let mut store = default_store();
    store
        .set(json!(false), &["printers", "elegoo_mars", "enabled"])
        .expect("set");
    store
        .set(json!(false), &["post_processing", "sanding", "enabled"])
        .expect("set");

    let printers = store.typed_enabled_printers().expect("printers");
    assert_eq!(printers.len(), 5);
    assert!(printers.iter().all(|(key, _)| key != "elegoo_mars"));

    let options = store.typed_enabled_post_processing().expect("options");
    assert_eq!(options.len(), 3);
    let sanding = store
        .typed_post_processing("sanding")
        .expect("decode")
        .expect("sanding");
    assert!(!sanding.enabled);
}

#[test]
fn typed_views_report_shape_mismatches() {
    let mut store = default_store();
    store
        .set(json!("hot"), &["materials", "abs", "bed_temp"])
        .expect("set");

    let err = store.typed_materials().unwrap_err();
    match err {
        ConfigError::Decode { path, .. } => assert_eq!(path, "materials.abs"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(store.typed_material("pla").expect("pla").is_some());
    assert_eq!(store.typed_material("unknown").expect("lookup"), None);
}

#[test]
fn merge_defaults_fills_gaps_only() {
    let temp = TempDir::new().expect("tmp");
    let path = write_config(
        &temp,
        "config.json",
        r#"{ "pricing": { "currency": "USD", "currency_symbol": "$" },
             "printers": { "prusa_mk3s": { "markup_multiplier": 2.0 } } }"#,
    );
    let mut store = ConfigStore::load(&path);

    let inserted = store.merge_defaults();

    assert!(inserted > 0);
    assert_eq!(store.get(&["pricing", "currency"]), Some(&json!("USD")));
    assert_eq!(store.get(&["pricing", "gst_rate"]), Some(&json!(0.18)));
    assert_eq!(
        store.get(&["printers", "prusa_mk3s", "markup_multiplier"]),
        Some(&json!(2.0))
    );
    assert_eq!(
        store.get(&["printers", "prusa_mk3s", "name"]),
        Some(&json!("Prusa i3 MK3S+"))
    );
    assert_eq!(store.materials().len(), 8);
    assert_eq!(store.merge_defaults(), 0);
}

impl ConfigStore {
    /// Mutable access to one entry object, for tests that remove keys.
    fn as_object_mut(&mut self, category: &str, key: &str) -> &mut Map<String, Value> {
        self.data
            .get_mut(category)
            .and_then(|entries| entries.get_mut(key))
            .and_then(Value::as_object_mut)
            .expect("entry object")
    }
}
