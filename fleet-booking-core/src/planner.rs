//! Automatic workshop and slot selection for maintenance tasks
//!
//! The planner scans every workshop offering the requested service over a
//! window of days, scores each open slot and books the best one through
//! [`BookingRequestBuilder`].

use crate::booking::{BookingRequest, BookingRequestBuilder, Urgency};
use crate::catalog::CatalogSnapshot;
use crate::slot::TimeSlot;
use crate::workshop::Workshop;
use crate::{Error, Result};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const DEFAULT_HORIZON_DAYS: u32 = 14;
pub const MAX_HORIZON_DAYS: u32 = 366;

const RATING_WEIGHT: f64 = 10.0;
const COST_WEIGHT: f64 = 20.0;
const MORNING_BONUS: f64 = 10.0;
const AFTERNOON_BONUS: f64 = 5.0;

/// A maintenance job waiting for a workshop slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaintenanceTask {
    pub vehicle_id: String,
    pub service_type: String,
    #[serde(default)]
    pub urgency: Urgency,
}

impl MaintenanceTask {
    pub fn new<S1: Into<String>, S2: Into<String>>(
        vehicle_id: S1,
        service_type: S2,
        urgency: Urgency,
    ) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            service_type: service_type.into(),
            urgency,
        }
    }
}

/// The slot the planner picked for a task
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlannedBooking {
    pub request: BookingRequest,
    pub workshop_name: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannerSettings {
    pub horizon_days: u32,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }
}

impl PlannerSettings {
    /// The horizon must cover between 1 and [`MAX_HORIZON_DAYS`] days
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_HORIZON_DAYS).contains(&self.horizon_days) {
            return Err(Error::validation(format!(
                "Planning horizon must be between 1 and {} days, got {}",
                MAX_HORIZON_DAYS, self.horizon_days
            )));
        }
        Ok(())
    }
}

fn urgency_factor(urgency: Urgency) -> f64 {
    match urgency {
        Urgency::High => 1.5,
        Urgency::Low => 0.8,
        Urgency::Medium | Urgency::Critical => 1.0,
    }
}

/// Score a candidate slot; higher is better
///
/// Well-rated and cheaper workshops score higher, then morning (09-11) and
/// afternoon (14-16) starts get a flat bonus on top of the urgency-scaled
/// base.
pub fn booking_score(workshop: &Workshop, slot: &TimeSlot, urgency: Urgency) -> f64 {
    let base = workshop.rating * RATING_WEIGHT + (1.0 / workshop.cost_multiplier) * COST_WEIGHT;
    let mut score = base * urgency_factor(urgency);

    match slot.hour() {
        9..=11 => score += MORNING_BONUS,
        14..=16 => score += AFTERNOON_BONUS,
        _ => {}
    }
    score
}

#[derive(Debug, Clone)]
pub struct MaintenancePlanner {
    catalog: Arc<CatalogSnapshot>,
    settings: PlannerSettings,
}

impl MaintenancePlanner {
    pub fn new(catalog: Arc<CatalogSnapshot>, settings: PlannerSettings) -> Self {
        Self { catalog, settings }
    }

    pub fn settings(&self) -> &PlannerSettings {
        &self.settings
    }

    /// Pick the best slot for `task` within the horizon starting at `from`
    ///
    /// Returns `Ok(None)` when no supporting workshop is open in the window.
    /// Ties keep the earliest candidate in catalog, date and slot order.
    /// Days past the end of the calendar are skipped.
    pub fn plan(&self, task: &MaintenanceTask, from: NaiveDate) -> Result<Option<PlannedBooking>> {
        self.settings.validate()?;
        self.catalog.services.require(&task.service_type)?;

        let mut best: Option<(&Workshop, NaiveDate, &TimeSlot, f64)> = None;
        for workshop in self.catalog.workshops.workshops_offering(&task.service_type) {
            for offset in 0..self.settings.horizon_days {
                let Some(date) = from.checked_add_days(Days::new(u64::from(offset))) else {
                    break;
                };
                for slot in workshop.slots_on(date) {
                    let score = booking_score(workshop, slot, task.urgency);
                    if best.map_or(true, |(_, _, _, top)| score > top) {
                        best = Some((workshop, date, slot, score));
                    }
                }
            }
        }

        let Some((workshop, date, slot, score)) = best else {
            debug!(
                vehicle = %task.vehicle_id,
                service = %task.service_type,
                horizon_days = self.settings.horizon_days,
                "No open slot in planning horizon"
            );
            return Ok(None);
        };

        let request = BookingRequestBuilder::new(self.catalog.clone())
            .vehicle(task.vehicle_id.as_str())
            .workshop(workshop)
            .service_type(task.service_type.as_str())
            .date(date)
            .time(slot.as_str())
            .urgency(task.urgency)
            .build()?;

        Ok(Some(PlannedBooking {
            request,
            workshop_name: workshop.name.clone(),
            score,
        }))
    }

    /// Plan every task, skipping those that cannot be scheduled
    pub fn plan_all(&self, tasks: &[MaintenanceTask], from: NaiveDate) -> Vec<PlannedBooking> {
        let mut planned = Vec::with_capacity(tasks.len());
        for task in tasks {
            match self.plan(task, from) {
                Ok(Some(booking)) => planned.push(booking),
                Ok(None) => warn!(
                    vehicle = %task.vehicle_id,
                    service = %task.service_type,
                    "No suitable workshop slot found"
                ),
                Err(e) => warn!(
                    vehicle = %task.vehicle_id,
                    service = %task.service_type,
                    category = e.category(),
                    "Failed to plan maintenance: {}",
                    e
                ),
            }
        }
        info!(requested = tasks.len(), planned = planned.len(), "Maintenance planning finished");
        planned
    }
}
