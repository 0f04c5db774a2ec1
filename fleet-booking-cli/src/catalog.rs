//! Catalog snapshot loading

use crate::config::CatalogConfig;
use crate::Result;
use anyhow::Context;
use fleet_booking_core::catalog::CatalogSnapshot;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Load the configured catalog, falling back to the built-in sample
pub fn load_catalog(config: &CatalogConfig) -> Result<Arc<CatalogSnapshot>> {
    let snapshot = match config.path.as_deref() {
        Some(path) => load_catalog_file(path)?,
        None => {
            info!("No catalog path configured, using the built-in sample catalog");
            CatalogSnapshot::sample()
        }
    };

    info!(
        workshops = snapshot.workshops.len(),
        services = snapshot.services.len(),
        "Catalog loaded"
    );
    Ok(snapshot.into_shared())
}

/// Read a catalog file in any format the `config` crate understands
pub fn load_catalog_file<P: AsRef<Path>>(path: P) -> Result<CatalogSnapshot> {
    let path = path.as_ref();
    let snapshot: CatalogSnapshot = config::Config::builder()
        .add_source(config::File::from(path).required(true))
        .build()
        .and_then(|settings| settings.try_deserialize())
        .with_context(|| format!("Failed to read catalog from {}", path.display()))?;

    snapshot.validate()?;
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::fs;

    const CATALOG_TOML: &str = r#"
[[workshops]]
id = "ws_north"
name = "North Garage"
location = "North"
rating = 4.4
cost_multiplier = 1.1
services = ["oil_change"]

[workshops.availability]
monday = ["08:00", "09:00"]
friday = ["15:00"]

[[services]]
id = "oil_change"
name = "Oil Change"
duration_hours = 1
base_cost = 50.0
"#;

    #[test]
    fn test_sample_catalog_when_unset() {
        let catalog = load_catalog(&CatalogConfig::default()).unwrap();
        assert_eq!(catalog.workshops.len(), 3);
        assert_eq!(catalog.services.len(), 4);
    }

    #[test]
    fn test_load_toml_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        fs::write(&path, CATALOG_TOML).unwrap();

        let catalog = load_catalog(&CatalogConfig {
            path: Some(path.to_string_lossy().into_owned()),
        })
        .unwrap();

        let workshop = catalog.workshops.get("ws_north").unwrap();
        assert_eq!(workshop.cost_multiplier, 1.1);
        assert!(workshop.supports("oil_change"));
        assert_eq!(catalog.services.require("oil_change").unwrap().duration_hours, 1);
    }

    #[test]
    fn test_load_json_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let json = serde_json::to_string(&CatalogSnapshot::sample()).unwrap();
        fs::write(&path, json).unwrap();

        let catalog = load_catalog_file(&path).unwrap();
        assert_eq!(catalog.workshops.len(), 3);
        assert_eq!(catalog.workshops.get("ws_002").unwrap().cost_multiplier, 0.9);
        assert_eq!(catalog.services.require("brake_service").unwrap().base_cost, 200.0);
    }

    #[test]
    fn test_bundled_catalog_matches_sample() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../config/catalog.toml");
        let catalog = load_catalog_file(path).unwrap();
        let sample = CatalogSnapshot::sample();

        assert_eq!(catalog.workshops.len(), sample.workshops.len());
        for workshop in sample.workshops.iter() {
            let loaded = catalog.workshops.get(&workshop.id).unwrap();
            assert_eq!(loaded.services, workshop.services);
            assert_eq!(loaded.availability, workshop.availability);
        }
    }

    #[test]
    fn test_missing_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_catalog_file(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Internal(_))));
    }

    #[test]
    fn test_invalid_catalog_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        fs::write(&path, CATALOG_TOML.replace("rating = 4.4", "rating = 7.0")).unwrap();

        let result = load_catalog_file(&path);
        assert!(matches!(result, Err(Error::Core(_))));
    }
}
