//! File-level loading: catalog, missions and config from a data directory.

use std::fs;

use exo_catalog::{CatalogError, ExoConfig, load_catalog, load_missions};
use exo_core::FilterPolicy;

const PLANETS: &str = r#"[
    {"pl_name": "Proxima Cen b", "hostname": "Proxima Cen", "pl_rade": 1.08,
     "pl_eqt": 234, "pl_insol": 0.65, "sy_dist": 1.30},
    {"hostname": "Nameless"},
    {"pl_name": "KELT-9 b", "pl_rade": 21.2, "pl_eqt": 4050, "sy_dist": 206.8},
    {"pl_name": "Proxima Cen b", "pl_rade": 99.0}
]"#;

const MISSIONS: &str = r#"[
    {"id": "kepler", "name": "Kepler", "year": 2009, "blurb": "Transit survey."},
    {"id": "jwst", "name": "JWST", "year": 2021, "blurb": "Infrared observatory."}
]"#;

#[test]
fn load_from_configured_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("data")).unwrap();
    fs::write(dir.path().join("data/planets.json"), PLANETS).unwrap();
    fs::write(dir.path().join("missions.json"), MISSIONS).unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "catalog = \"data/planets.json\"\ndefault_filter = \"closest\"\n",
    )
    .unwrap();

    let config = ExoConfig::load_from(dir.path()).unwrap();
    assert_eq!(config.default_filter, FilterPolicy::Closest);

    let catalog = load_catalog(&config.catalog_path()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get("Proxima Cen b").unwrap().radius(), Some(1.08));

    let closest = catalog.select(config.default_filter);
    assert_eq!(closest[0].name, "Proxima Cen b");

    let missions = load_missions(&config.missions_path()).unwrap();
    assert_eq!(missions[0].name, "JWST");
    assert_eq!(missions[1].name, "Kepler");
}

#[test]
fn missing_catalog_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_catalog(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
    assert!(err.to_string().starts_with("I/O error"));
}

#[test]
fn broken_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "page_size = [").unwrap();
    let err = ExoConfig::load_from(dir.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Config(_)));
}
