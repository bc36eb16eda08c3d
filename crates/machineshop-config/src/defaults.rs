//! Built-in default dataset used when no config file is present.
//!
//! Integer literals stay integers and float literals stay floats so the
//! values compare equal to what a hand-written config file would contain.

use serde_json::{Map, Value, json};

/// Slicer executable used when neither the config nor the environment names one.
pub const DEFAULT_SLICER_PATH: &str = "prusa-slicer";

/// Environment variable overriding the default slicer executable.
pub const SLICER_PATH_ENV: &str = "PRUSA_SLICER_PATH";

/// Build the full default mapping.
///
/// The slicer path is read from [`SLICER_PATH_ENV`] once per call.
pub fn default_config() -> Map<String, Value> {
    let mut config = Map::new();
    config.insert("application".to_string(), application());
    config.insert("slicer".to_string(), slicer(default_slicer_path()));
    config.insert("materials".to_string(), materials());
    config.insert("print_quality".to_string(), print_quality());
    config.insert("infill_options".to_string(), infill_options());
    config.insert("pricing".to_string(), pricing());
    config.insert("printers".to_string(), printers());
    config.insert("post_processing".to_string(), post_processing());
    config.insert("file_settings".to_string(), file_settings());
    config
}

fn default_slicer_path() -> String {
    std::env::var(SLICER_PATH_ENV).unwrap_or_else(|_| DEFAULT_SLICER_PATH.to_string())
}

fn application() -> Value {
    json!({
        "name": "Machine Shop Suite",
        "version": "1.0.0",
        "description": "3D Printing Quote Engine"
    })
}

fn slicer(path: String) -> Value {
    json!({
        "path": path,
        "timeout_seconds": 300
    })
}

fn materials() -> Value {
    let mut materials = Map::new();
    materials.insert(
        "pla".to_string(),
        json!({
            "name": "PLA (Polylactic Acid)",
            "type": "fdm",
            "description": "Easy to print, biodegradable, good for prototypes",
            "density_g_cm3": 1.24,
            "price_per_kg": 800,
            "per_gram_price": 1.0,
            "bed_temp": 55,
            "extruder_temp": 215,
            "perimeter_speed": 100,
            "infill_speed": 180,
            "solid_infill_speed": 160,
            "colors": ["White", "Black", "Red", "Blue", "Green", "Yellow", "Orange", "Gray"]
        }),
    );
    materials.insert(
        "abs".to_string(),
        json!({
            "name": "ABS (Acrylonitrile Butadiene Styrene)",
            "type": "fdm",
            "description": "Strong and durable, heat resistant, good for functional parts",
            "density_g_cm3": 1.04,
            "price_per_kg": 1000,
            "per_gram_price": 1.2,
            "bed_temp": 90,
            "extruder_temp": 245,
            "perimeter_speed": 80,
            "infill_speed": 160,
            "solid_infill_speed": 140,
            "colors": ["White", "Black", "Red", "Blue", "Natural"]
        }),
    );
    materials.insert(
        "petg".to_string(),
        json!({
            "name": "PETG (Polyethylene Terephthalate Glycol)",
            "type": "fdm",
            "description": "Strong, flexible, chemical resistant, food-safe option",
            "density_g_cm3": 1.27,
            "price_per_kg": 1000,
            "per_gram_price": 1.2,
            "bed_temp": 70,
            "extruder_temp": 240,
            "perimeter_speed": 70,
            "infill_speed": 150,
            "solid_infill_speed": 120,
            "colors": ["Clear", "White", "Black", "Blue", "Red"]
        }),
    );
    materials.insert(
        "tpu".to_string(),
        json!({
            "name": "TPU (Thermoplastic Polyurethane)",
            "type": "fdm",
            "description": "Flexible and elastic, excellent for grips and cushioning",
            "density_g_cm3": 1.21,
            "price_per_kg": 1500,
            "per_gram_price": 2.0,
            "bed_temp": 60,
            "extruder_temp": 230,
            "perimeter_speed": 30,
            "infill_speed": 40,
            "solid_infill_speed": 35,
            "colors": ["Black", "White", "Red", "Blue", "Clear"]
        }),
    );
    materials.insert(
        "nylon".to_string(),
        json!({
            "name": "Nylon (Polyamide)",
            "type": "fdm",
            "description": "Very strong and durable, excellent layer adhesion",
            "density_g_cm3": 1.14,
            "price_per_kg": 1800,
            "per_gram_price": 2.5,
            "bed_temp": 80,
            "extruder_temp": 250,
            "perimeter_speed": 60,
            "infill_speed": 100,
            "solid_infill_speed": 80,
            "colors": ["Natural", "Black", "White"]
        }),
    );
    materials.insert(
        "standard_resin".to_string(),
        json!({
            "name": "Standard Resin",
            "type": "dlp",
            "description": "General purpose photopolymer resin for detailed prints",
            "density_g_ml": 1.1,
            "price_per_liter": 25000,
            "per_ml_price": 25.0,
            "exposure_time_s": 8,
            "bottom_exposure_s": 60,
            "lift_speed_mm_s": 3,
            "colors": ["Grey", "White", "Black", "Clear"]
        }),
    );
    materials.insert(
        "tough_resin".to_string(),
        json!({
            "name": "Tough Resin",
            "type": "dlp",
            "description": "High-strength resin for functional parts",
            "density_g_ml": 1.15,
            "price_per_liter": 35000,
            "per_ml_price": 35.0,
            "exposure_time_s": 10,
            "bottom_exposure_s": 70,
            "lift_speed_mm_s": 2.5,
            "colors": ["Grey", "Black"]
        }),
    );
    materials.insert(
        "flexible_resin".to_string(),
        json!({
            "name": "Flexible Resin",
            "type": "dlp",
            "description": "Rubber-like elastomer for flexible parts",
            "density_g_ml": 1.08,
            "price_per_liter": 40000,
            "per_ml_price": 40.0,
            "exposure_time_s": 12,
            "bottom_exposure_s": 80,
            "lift_speed_mm_s": 2,
            "colors": ["Black", "Clear"]
        }),
    );
    Value::Object(materials)
}

fn print_quality() -> Value {
    json!({
        "draft": {
            "name": "Draft (Fast)",
            "layer_height": 0.3,
            "description": "Fastest print, visible layers, good for prototypes"
        },
        "standard": {
            "name": "Standard (Balanced)",
            "layer_height": 0.2,
            "description": "Good balance of speed and quality"
        },
        "fine": {
            "name": "Fine (Detailed)",
            "layer_height": 0.15,
            "description": "Higher detail, longer print time"
        },
        "ultra_fine": {
            "name": "Ultra Fine (Maximum Detail)",
            "layer_height": 0.1,
            "description": "Best quality, slowest print, minimal layer lines"
        }
    })
}

fn infill_options() -> Value {
    json!({
        "min_percentage": 5,
        "max_percentage": 100,
        "default_percentage": 20,
        "recommended": {
            "prototype": 10,
            "standard": 20,
            "functional": 40,
            "structural": 80,
            "solid": 100
        }
    })
}

fn pricing() -> Value {
    json!({
        "pricing_mode": "custom",
        "base_cost": 150,
        "electricity_rate_per_kwh": 7,
        "printer_power_watts": 1000,
        "depreciation_per_hour": 50,
        "other_costs_per_print": 20,
        "gst_rate": 0.18,
        "currency": "INR",
        "currency_symbol": "₹"
    })
}

fn printers() -> Value {
    let mut printers = Map::new();
    printers.insert(
        "prusa_mk3s".to_string(),
        json!({
            "name": "Prusa i3 MK3S+",
            "type": "fdm",
            "description": "Original Prusa i3 MK3S+ FDM printer",
            "bed_size_mm": [250, 210, 210],
            "nozzle_diameter_mm": 0.4,
            "max_print_speed_mm_s": 200,
            "markup_multiplier": 1.3,
            "enabled": true
        }),
    );
    printers.insert(
        "ender3_v2".to_string(),
        json!({
            "name": "Creality Ender 3 V2",
            "type": "fdm",
            "description": "Creality Ender 3 V2 budget FDM printer",
            "bed_size_mm": [220, 220, 250],
            "nozzle_diameter_mm": 0.4,
            "max_print_speed_mm_s": 180,
            "markup_multiplier": 1.25,
            "enabled": true
        }),
    );
    printers.insert(
        "bambu_x1".to_string(),
        json!({
            "name": "Bambu Lab X1 Carbon",
            "type": "fdm",
            "description": "Bambu Lab X1 Carbon high-speed printer",
            "bed_size_mm": [256, 256, 256],
            "nozzle_diameter_mm": 0.4,
            "max_print_speed_mm_s": 500,
            "markup_multiplier": 1.4,
            "enabled": true
        }),
    );
    printers.insert(
        "elegoo_mars".to_string(),
        json!({
            "name": "Elegoo Mars 3 Pro",
            "type": "dlp",
            "description": "High-resolution MSLA 3D printer",
            "build_volume_mm": [143, 89, 175],
            "xy_resolution_um": 35,
            "layer_height_um": [10, 100],
            "markup_multiplier": 1.35,
            "enabled": true
        }),
    );
    printers.insert(
        "anycubic_photon".to_string(),
        json!({
            "name": "Anycubic Photon Mono X",
            "type": "dlp",
            "description": "Large format resin printer with 4K LCD",
            "build_volume_mm": [192, 120, 245],
            "xy_resolution_um": 50,
            "layer_height_um": [10, 150],
            "markup_multiplier": 1.4,
            "enabled": true
        }),
    );
    printers.insert(
        "creality_halot".to_string(),
        json!({
            "name": "Creality Halot-One Plus",
            "type": "dlp",
            "description": "Budget-friendly resin printer",
            "build_volume_mm": [172, 102, 160],
            "xy_resolution_um": 50,
            "layer_height_um": [10, 100],
            "markup_multiplier": 1.25,
            "enabled": true
        }),
    );
    Value::Object(printers)
}

fn post_processing() -> Value {
    json!({
        "sanding": {
            "name": "Sanding & Smoothing",
            "description": "Manual sanding for smooth surface finish",
            "price": 500,
            "enabled": true
        },
        "painting": {
            "name": "Painting",
            "description": "Professional spray painting with primer and topcoat",
            "price": 1500,
            "enabled": true
        },
        "polishing": {
            "name": "Polishing",
            "description": "High-gloss polishing for aesthetic finish",
            "price": 800,
            "enabled": true
        },
        "threading": {
            "name": "Threading/Tapping",
            "description": "Adding threads to holes for screws/bolts",
            "price": 300,
            "enabled": true
        }
    })
}

fn file_settings() -> Value {
    json!({
        "max_file_size_mb": 100,
        "allowed_extensions": ["stl"],
        "upload_timeout_seconds": 300
    })
}
