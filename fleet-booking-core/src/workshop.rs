//! Workshop domain model
//!
//! A workshop is a service provider offering a subset of maintenance services
//! on a fixed weekly slot schedule.
//!
//! # Examples
//!
//! ```rust
//! use chrono::Weekday;
//! use fleet_booking_core::workshop::Workshop;
//!
//! let workshop = Workshop::builder()
//!     .id("ws_001")
//!     .name("Premium Auto Service")
//!     .location("Downtown")
//!     .rating(4.8)
//!     .cost_multiplier(1.2)
//!     .service("oil_change")
//!     .day(Weekday::Mon, ["09:00", "10:00"])
//!     .build()
//!     .unwrap();
//!
//! assert!(workshop.supports("oil_change"));
//! ```

use crate::slot::{TimeSlot, WeeklySchedule};
use crate::{Error, Result};
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const MAX_RATING: f64 = 5.0;

/// A maintenance provider in the workshop catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workshop {
    pub id: String,
    pub name: String,
    pub location: String,
    pub rating: f64,
    pub cost_multiplier: f64,
    pub services: BTreeSet<String>,
    pub availability: WeeklySchedule,
}

impl Workshop {
    /// Create a builder for constructing a Workshop
    pub fn builder() -> WorkshopBuilder {
        WorkshopBuilder::new()
    }

    /// Check the record's own invariants
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::validation("Workshop id cannot be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(Error::validation(format!(
                "Workshop {} must have a name",
                self.id
            )));
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(Error::validation(format!(
                "Workshop {} rating {} is outside 0-5",
                self.id, self.rating
            )));
        }
        if !self.cost_multiplier.is_finite() || self.cost_multiplier <= 0.0 {
            return Err(Error::validation(format!(
                "Workshop {} cost multiplier must be positive, got {}",
                self.id, self.cost_multiplier
            )));
        }
        if self.services.iter().any(|s| s.trim().is_empty()) {
            return Err(Error::validation(format!(
                "Workshop {} lists an empty service id",
                self.id
            )));
        }
        Ok(())
    }

    pub fn supports(&self, service_type: &str) -> bool {
        self.services.contains(service_type)
    }

    /// Slots this workshop opens on the weekday of `date`
    pub fn slots_on(&self, date: NaiveDate) -> impl Iterator<Item = &TimeSlot> {
        self.availability.slots_for_date(date)
    }

    pub fn is_open_on(&self, weekday: Weekday) -> bool {
        self.availability.slots_on(weekday).next().is_some()
    }
}

/// Builder for constructing Workshop instances with validation
#[derive(Debug, Clone, Default)]
pub struct WorkshopBuilder {
    id: Option<String>,
    name: Option<String>,
    location: Option<String>,
    rating: Option<f64>,
    cost_multiplier: Option<f64>,
    services: BTreeSet<String>,
    days: Vec<(Weekday, Vec<String>)>,
}

impl WorkshopBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn location<S: Into<String>>(mut self, location: S) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Defaults to 1.0 when not set
    pub fn cost_multiplier(mut self, multiplier: f64) -> Self {
        self.cost_multiplier = Some(multiplier);
        self
    }

    pub fn service<S: Into<String>>(mut self, service_type: S) -> Self {
        self.services.insert(service_type.into());
        self
    }

    pub fn services<I, S>(mut self, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.services.extend(services.into_iter().map(Into::into));
        self
    }

    /// Open slots for one weekday
    pub fn day<I, S>(mut self, weekday: Weekday, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.days
            .push((weekday, slots.into_iter().map(Into::into).collect()));
        self
    }

    /// Same slots on every listed weekday
    pub fn days<I, S>(mut self, weekdays: &[Weekday], slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slots: Vec<String> = slots.into_iter().map(Into::into).collect();
        for weekday in weekdays {
            self.days.push((*weekday, slots.clone()));
        }
        self
    }

    pub fn build(self) -> Result<Workshop> {
        let id = self
            .id
            .ok_or_else(|| Error::validation("Workshop id is required"))?;
        let name = self
            .name
            .ok_or_else(|| Error::validation("Workshop name is required"))?;
        let rating = self
            .rating
            .ok_or_else(|| Error::validation("Workshop rating is required"))?;

        let mut availability = WeeklySchedule::new();
        for (weekday, slots) in self.days {
            availability.set_day(weekday, slots)?;
        }

        let workshop = Workshop {
            id,
            name,
            location: self.location.unwrap_or_default(),
            rating,
            cost_multiplier: self.cost_multiplier.unwrap_or(1.0),
            services: self.services,
            availability,
        };
        workshop.validate()?;
        Ok(workshop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_builder() -> WorkshopBuilder {
        Workshop::builder()
            .id("ws_test")
            .name("Test Garage")
            .location("Test Street")
            .rating(4.0)
    }

    #[test]
    fn test_workshop_creation_with_builder() {
        let workshop = base_builder()
            .cost_multiplier(0.9)
            .services(["oil_change", "tire_rotation"])
            .day(Weekday::Mon, ["10:00", "09:00"])
            .build()
            .unwrap();

        assert_eq!(workshop.id, "ws_test");
        assert!(workshop.supports("oil_change"));
        assert!(workshop.supports("tire_rotation"));
        assert!(!workshop.supports("brake_service"));
        assert!(workshop.is_open_on(Weekday::Mon));
        assert!(!workshop.is_open_on(Weekday::Sun));

        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let slots: Vec<&str> = workshop.slots_on(monday).map(TimeSlot::as_str).collect();
        assert_eq!(slots, vec!["09:00", "10:00"]);
    }

    #[test]
    fn test_default_cost_multiplier() {
        let workshop = base_builder().build().unwrap();
        assert_eq!(workshop.cost_multiplier, 1.0);
    }

    #[test]
    fn test_required_fields() {
        assert!(Workshop::builder().name("x").rating(1.0).build().is_err());
        assert!(Workshop::builder().id("x").rating(1.0).build().is_err());
        assert!(Workshop::builder().id("x").name("x").build().is_err());
    }

    #[test]
    fn test_rating_bounds() {
        assert!(base_builder().rating(0.0).build().is_ok());
        assert!(base_builder().rating(5.0).build().is_ok());
        assert!(base_builder().rating(5.1).build().is_err());
        assert!(base_builder().rating(-0.1).build().is_err());
        assert!(base_builder().rating(f64::NAN).build().is_err());
    }

    #[test]
    fn test_cost_multiplier_must_be_positive() {
        assert!(base_builder().cost_multiplier(0.0).build().is_err());
        assert!(base_builder().cost_multiplier(-1.0).build().is_err());
        assert!(base_builder().cost_multiplier(f64::INFINITY).build().is_err());
    }

    #[test]
    fn test_invalid_slots_are_rejected() {
        assert!(base_builder().day(Weekday::Mon, ["9:00"]).build().is_err());
        assert!(base_builder()
            .day(Weekday::Mon, ["09:00", "09:00"])
            .build()
            .is_err());
    }

    #[test]
    fn test_days_applies_same_schedule() {
        let workshop = base_builder()
            .days(&[Weekday::Mon, Weekday::Wed], ["08:00"])
            .build()
            .unwrap();
        assert_eq!(
            workshop.availability.open_days(),
            vec![Weekday::Mon, Weekday::Wed]
        );
    }
}
