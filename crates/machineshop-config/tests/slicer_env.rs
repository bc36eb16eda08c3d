//! Slicer path override through the environment.
//!
//! Kept in its own test binary: it mutates the process environment.

use machineshop_config::{ConfigStore, SLICER_PATH_ENV, default_config};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn environment_overrides_default_slicer_path() {
    // SAFETY: this is the only test in this binary, so no other thread reads
    // the environment concurrently.
    unsafe { std::env::remove_var(SLICER_PATH_ENV) };
    assert_eq!(default_config()["slicer"]["path"], json!("prusa-slicer"));

    unsafe { std::env::set_var(SLICER_PATH_ENV, "/opt/PrusaSlicer/prusa-slicer") };
    let store = ConfigStore::with_defaults("unused.json");
    assert_eq!(store.slicer_path(), "/opt/PrusaSlicer/prusa-slicer");

    unsafe { std::env::remove_var(SLICER_PATH_ENV) };
    // Read once at construction: existing stores keep the captured value.
    assert_eq!(store.slicer_path(), "/opt/PrusaSlicer/prusa-slicer");
}
