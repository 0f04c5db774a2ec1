//! Slot availability across the workshop catalog
//!
//! # Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fleet_booking_core::availability::AvailabilityResolver;
//! use fleet_booking_core::catalog::CatalogSnapshot;
//!
//! let resolver = AvailabilityResolver::new(CatalogSnapshot::sample().into_shared());
//! let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//!
//! let slots = resolver.available_slots(monday, "brake_service");
//! assert_eq!(slots.first().map(|s| s.as_str()), Some("09:00"));
//! ```

use crate::catalog::CatalogSnapshot;
use crate::slot::{weekday_of, TimeSlot};
use crate::workshop::Workshop;
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

/// One workshop's schedule for a single calendar day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkshopDayAvailability {
    pub workshop_id: String,
    pub workshop_name: String,
    pub date: NaiveDate,
    pub weekday: String,
    pub available_slots: Vec<TimeSlot>,
    pub services: Vec<String>,
    pub rating: f64,
}

/// Resolves bookable slots from an immutable catalog snapshot
#[derive(Debug, Clone)]
pub struct AvailabilityResolver {
    catalog: Arc<CatalogSnapshot>,
}

impl AvailabilityResolver {
    pub fn new(catalog: Arc<CatalogSnapshot>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &CatalogSnapshot {
        &self.catalog
    }

    pub fn shared_catalog(&self) -> Arc<CatalogSnapshot> {
        Arc::clone(&self.catalog)
    }

    /// Union of the slots every supporting workshop opens on the weekday of
    /// `date`, ascending and without duplicates
    ///
    /// A service no workshop supports yields an empty list.
    pub fn available_slots(&self, date: NaiveDate, service_type: &str) -> Vec<TimeSlot> {
        let union: BTreeSet<&TimeSlot> = self
            .workshops_offering(service_type)
            .into_iter()
            .flat_map(|workshop| workshop.slots_on(date))
            .collect();

        debug!(
            %date,
            weekday = weekday_of(date),
            service_type,
            slots = union.len(),
            "Resolved slot availability"
        );

        union.into_iter().cloned().collect()
    }

    /// Whether `slot` is in [`AvailabilityResolver::available_slots`]
    pub fn is_available(&self, date: NaiveDate, service_type: &str, slot: &TimeSlot) -> bool {
        self.workshops_offering(service_type)
            .into_iter()
            .any(|workshop| workshop.slots_on(date).any(|s| s == slot))
    }

    /// Workshops supporting `service_type`, in catalog order
    pub fn workshops_offering(&self, service_type: &str) -> Vec<&Workshop> {
        self.catalog.workshops.workshops_offering(service_type)
    }

    /// Slots a single workshop opens on `date`
    pub fn workshop_availability(
        &self,
        workshop_id: &str,
        date: NaiveDate,
    ) -> Result<WorkshopDayAvailability> {
        let workshop = self
            .catalog
            .workshops
            .get(workshop_id)
            .ok_or_else(|| Error::unknown_workshop(workshop_id))?;

        Ok(WorkshopDayAvailability {
            workshop_id: workshop.id.clone(),
            workshop_name: workshop.name.clone(),
            date,
            weekday: weekday_of(date).to_string(),
            available_slots: workshop.slots_on(date).cloned().collect(),
            services: workshop.services.iter().cloned().collect(),
            rating: workshop.rating,
        })
    }
}
