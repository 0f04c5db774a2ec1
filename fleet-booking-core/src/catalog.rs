//! Immutable workshop and maintenance catalogs
//!
//! Catalogs are seeded once by the surrounding application and then shared
//! read-only between every resolver, calculator and planner through an
//! `Arc<CatalogSnapshot>`.

use crate::service::ServiceType;
use crate::workshop::Workshop;
use crate::{Error, Result};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Workshops in catalog order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct WorkshopCatalog {
    workshops: Vec<Workshop>,
}

impl WorkshopCatalog {
    /// Create a catalog, rejecting invalid records and duplicate ids
    pub fn new(workshops: Vec<Workshop>) -> Result<Self> {
        let catalog = Self { workshops };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for workshop in &self.workshops {
            workshop.validate()?;
            if !seen.insert(workshop.id.as_str()) {
                return Err(Error::validation(format!(
                    "Duplicate workshop id: {}",
                    workshop.id
                )));
            }
        }
        Ok(())
    }

    pub fn get(&self, workshop_id: &str) -> Option<&Workshop> {
        self.workshops.iter().find(|w| w.id == workshop_id)
    }

    /// Workshops supporting `service_type`, in catalog order
    pub fn workshops_offering(&self, service_type: &str) -> Vec<&Workshop> {
        self.workshops
            .iter()
            .filter(|w| w.supports(service_type))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Workshop> {
        self.workshops.iter()
    }

    pub fn len(&self) -> usize {
        self.workshops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workshops.is_empty()
    }
}

/// Service types offered across the fleet
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct MaintenanceCatalog {
    services: Vec<ServiceType>,
}

impl MaintenanceCatalog {
    pub fn new(services: Vec<ServiceType>) -> Result<Self> {
        let catalog = Self { services };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for service in &self.services {
            service.validate()?;
            if !seen.insert(service.id.as_str()) {
                return Err(Error::validation(format!(
                    "Duplicate service type id: {}",
                    service.id
                )));
            }
        }
        Ok(())
    }

    pub fn get(&self, service_type: &str) -> Option<&ServiceType> {
        self.services.iter().find(|s| s.id == service_type)
    }

    /// Look up a service type, failing with `UnknownServiceType`
    pub fn require(&self, service_type: &str) -> Result<&ServiceType> {
        self.get(service_type)
            .ok_or_else(|| Error::unknown_service_type(service_type))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceType> {
        self.services.iter()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

/// Both catalogs, validated together
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub workshops: WorkshopCatalog,
    #[serde(default)]
    pub services: MaintenanceCatalog,
}

impl CatalogSnapshot {
    pub fn new(workshops: WorkshopCatalog, services: MaintenanceCatalog) -> Self {
        Self {
            workshops,
            services,
        }
    }

    /// Validate both catalogs; deserialized snapshots must pass this before use
    pub fn validate(&self) -> Result<()> {
        self.workshops.validate()?;
        self.services.validate()?;
        for workshop in self.workshops.iter() {
            for service in &workshop.services {
                if self.services.get(service).is_none() {
                    tracing::debug!(
                        workshop = %workshop.id,
                        service = %service,
                        "Workshop lists a service missing from the maintenance catalog"
                    );
                }
            }
        }
        Ok(())
    }

    /// Parse and validate a snapshot from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: CatalogSnapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Demonstration catalog: three weekday workshops and four service types
    pub fn sample() -> Self {
        let weekdays = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ];

        let workshops = vec![
            Workshop::builder()
                .id("ws_001")
                .name("Premium Auto Service")
                .location("Downtown")
                .rating(4.8)
                .cost_multiplier(1.2)
                .services([
                    "oil_change",
                    "tire_rotation",
                    "battery_replacement",
                    "brake_service",
                ])
                .days(
                    &weekdays,
                    ["09:00", "10:00", "11:00", "14:00", "15:00", "16:00"],
                ),
            Workshop::builder()
                .id("ws_002")
                .name("Quick Fix Garage")
                .location("Suburbs")
                .rating(4.2)
                .cost_multiplier(0.9)
                .services(["oil_change", "tire_rotation", "battery_replacement"])
                .days(
                    &weekdays,
                    ["08:00", "09:00", "10:00", "13:00", "14:00", "15:00"],
                ),
            Workshop::builder()
                .id("ws_003")
                .name("Express Maintenance")
                .location("Airport Area")
                .rating(4.5)
                .cost_multiplier(1.0)
                .services(["oil_change", "tire_rotation"])
                .days(
                    &weekdays,
                    ["07:00", "08:00", "09:00", "12:00", "13:00", "14:00"],
                ),
        ];

        let services = vec![
            ("oil_change", "Oil Change", 1, 50.0),
            ("tire_rotation", "Tire Rotation", 1, 40.0),
            ("battery_replacement", "Battery Replacement", 2, 150.0),
            ("brake_service", "Brake Service", 3, 200.0),
        ];

        // Static fixture data, every record passes validation
        let workshops = workshops
            .into_iter()
            .filter_map(|builder| builder.build().ok())
            .collect();
        let services = services
            .into_iter()
            .filter_map(|(id, name, hours, cost)| ServiceType::new(id, name, hours, cost).ok())
            .collect();

        Self {
            workshops: WorkshopCatalog { workshops },
            services: MaintenanceCatalog { services },
        }
    }
}
