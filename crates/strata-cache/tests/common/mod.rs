#![allow(dead_code)]
use std::fs;
use std::path::Path;
use std::sync::Once;

use strata_core::Configuration;

/// Installs a test subscriber honoring RUST_LOG. Safe to call from
/// every test; only the first call wins.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Writes an XML fixture for `key` under `basedir`, creating any
/// intermediate directories the key addresses.
pub fn write_document(basedir: &Path, key: &str, xml: &str) {
    let path = basedir.join(format!("{key}.xml"));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture directories");
    }
    fs::write(path, xml).expect("write fixture document");
}

/// Builds a configuration wiring a single file source at `basedir`.
pub fn single_file_source(basedir: &Path) -> Configuration {
    let mut config = Configuration::new();
    config.insert("source.main.class", "file");
    config.insert("source.main.basedir", basedir.display().to_string());
    config
}
