//! Booking request construction
//!
//! A [`BookingRequest`] is assembled from the caller's selections once every
//! one of them is present. The request is immutable and handed to the caller;
//! nothing here stores it.
//!
//! # Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fleet_booking_core::booking::{BookingRequestBuilder, Urgency};
//! use fleet_booking_core::catalog::CatalogSnapshot;
//!
//! let catalog = CatalogSnapshot::sample().into_shared();
//! let workshop = catalog.workshops.get("ws_002").unwrap().clone();
//!
//! let request = BookingRequestBuilder::new(catalog)
//!     .vehicle("EV001")
//!     .workshop(&workshop)
//!     .service_type("oil_change")
//!     .date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
//!     .time("08:00")
//!     .urgency(Urgency::High)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(request.estimated_cost(), 45.0);
//! ```

use crate::availability::AvailabilityResolver;
use crate::catalog::CatalogSnapshot;
use crate::error::SelectionField;
use crate::pricing::BookingPriceCalculator;
use crate::slot::TimeSlot;
use crate::workshop::Workshop;
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// How soon the maintenance should happen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
            Urgency::Critical => "critical",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Urgency::Low),
            "medium" => Ok(Urgency::Medium),
            "high" => Ok(Urgency::High),
            "critical" => Ok(Urgency::Critical),
            other => Err(Error::validation(format!("Unknown urgency: {:?}", other))),
        }
    }
}

/// A validated, not yet persisted maintenance booking
///
/// Only [`BookingRequestBuilder::build`] creates one, so the type is
/// serialize-only:
///
/// ```compile_fail
/// use fleet_booking_core::booking::BookingRequest;
///
/// let _: BookingRequest = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookingRequest {
    vehicle_id: String,
    workshop_id: String,
    service_type: String,
    date: NaiveDate,
    time: TimeSlot,
    estimated_duration_hours: u32,
    estimated_cost: f64,
    urgency: Urgency,
}

impl BookingRequest {
    pub fn vehicle_id(&self) -> &str {
        &self.vehicle_id
    }

    pub fn workshop_id(&self) -> &str {
        &self.workshop_id
    }

    pub fn service_type(&self) -> &str {
        &self.service_type
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> &TimeSlot {
        &self.time
    }

    pub fn estimated_duration_hours(&self) -> u32 {
        self.estimated_duration_hours
    }

    /// Unrounded cost in the catalog's currency unit
    pub fn estimated_cost(&self) -> f64 {
        self.estimated_cost
    }

    pub fn urgency(&self) -> Urgency {
        self.urgency
    }
}

/// Collects booking selections and validates them against the catalog
#[derive(Debug, Clone)]
pub struct BookingRequestBuilder {
    resolver: AvailabilityResolver,
    pricing: BookingPriceCalculator,
    vehicle_id: Option<String>,
    workshop_id: Option<String>,
    service_type: Option<String>,
    date: Option<NaiveDate>,
    time: Option<String>,
    urgency: Option<Urgency>,
}

impl BookingRequestBuilder {
    pub fn new(catalog: Arc<CatalogSnapshot>) -> Self {
        Self::with_components(
            AvailabilityResolver::new(catalog.clone()),
            BookingPriceCalculator::new(catalog),
        )
    }

    pub fn with_components(resolver: AvailabilityResolver, pricing: BookingPriceCalculator) -> Self {
        Self {
            resolver,
            pricing,
            vehicle_id: None,
            workshop_id: None,
            service_type: None,
            date: None,
            time: None,
            urgency: None,
        }
    }

    pub fn vehicle<S: Into<String>>(mut self, vehicle_id: S) -> Self {
        self.vehicle_id = Some(vehicle_id.into());
        self
    }

    pub fn workshop(mut self, workshop: &Workshop) -> Self {
        self.workshop_id = Some(workshop.id.clone());
        self
    }

    pub fn workshop_id<S: Into<String>>(mut self, workshop_id: S) -> Self {
        self.workshop_id = Some(workshop_id.into());
        self
    }

    pub fn service_type<S: Into<String>>(mut self, service_type: S) -> Self {
        self.service_type = Some(service_type.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn time<S: Into<String>>(mut self, time: S) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Defaults to [`Urgency::Medium`]
    pub fn urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = Some(urgency);
        self
    }

    /// Selections still needed before [`BookingRequestBuilder::build`] can succeed
    ///
    /// Blank text selections count as missing.
    pub fn missing_fields(&self) -> Vec<SelectionField> {
        let mut missing = Vec::new();
        if is_blank(&self.vehicle_id) {
            missing.push(SelectionField::Vehicle);
        }
        if is_blank(&self.workshop_id) {
            missing.push(SelectionField::Workshop);
        }
        if is_blank(&self.service_type) {
            missing.push(SelectionField::ServiceType);
        }
        if self.date.is_none() {
            missing.push(SelectionField::Date);
        }
        if is_blank(&self.time) {
            missing.push(SelectionField::Time);
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn build(self) -> Result<BookingRequest> {
        let missing = self.missing_fields();
        let (Some(vehicle_id), Some(workshop_id), Some(service_type), Some(date), Some(time)) = (
            self.vehicle_id,
            self.workshop_id,
            self.service_type,
            self.date,
            self.time,
        ) else {
            return Err(Error::IncompleteSelection { missing });
        };
        if !missing.is_empty() {
            return Err(Error::IncompleteSelection { missing });
        }

        let catalog = self.resolver.catalog();
        let service = catalog.services.require(&service_type)?;
        let workshop = catalog
            .workshops
            .get(&workshop_id)
            .ok_or_else(|| Error::unknown_workshop(&workshop_id))?;
        if !workshop.supports(&service_type) {
            return Err(Error::UnsupportedService {
                workshop_id,
                service_type,
            });
        }

        let slot = TimeSlot::parse(&time)
            .ok()
            .filter(|slot| self.resolver.is_available(date, &service_type, slot))
            .ok_or_else(|| Error::invalid_time_slot(date, &time, &service_type))?;

        let estimated_cost = self.pricing.estimated_cost(&service_type, workshop)?;
        let request = BookingRequest {
            vehicle_id,
            workshop_id,
            service_type,
            date,
            time: slot,
            estimated_duration_hours: service.duration_hours,
            estimated_cost,
            urgency: self.urgency.unwrap_or_default(),
        };

        debug!(
            vehicle = %request.vehicle_id,
            workshop = %request.workshop_id,
            service = %request.service_type,
            date = %request.date,
            time = %request.time,
            "Built booking request"
        );
        Ok(request)
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}
