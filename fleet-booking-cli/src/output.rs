//! JSON views printed by the command line
//!
//! Costs are always rendered through [`format_cost`].

use chrono::{DateTime, NaiveDate, Utc};
use fleet_booking_core::booking::{BookingRequest, Urgency};
use fleet_booking_core::lifecycle::{BookingStatus, ScheduledBooking};
use fleet_booking_core::planner::PlannedBooking;
use fleet_booking_core::workshop::Workshop;
use serde::Serialize;
use uuid::Uuid;

/// Render a cost with two decimal places
pub fn format_cost(cost: f64) -> String {
    format!("{:.2}", cost)
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SlotsView {
    pub date: NaiveDate,
    pub service_type: String,
    pub slots: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WorkshopSummary {
    pub id: String,
    pub name: String,
    pub location: String,
    pub rating: f64,
    pub cost_multiplier: f64,
}

impl From<&Workshop> for WorkshopSummary {
    fn from(workshop: &Workshop) -> Self {
        Self {
            id: workshop.id.clone(),
            name: workshop.name.clone(),
            location: workshop.location.clone(),
            rating: workshop.rating,
            cost_multiplier: workshop.cost_multiplier,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WorkshopsView {
    pub service_type: String,
    pub workshops: Vec<WorkshopSummary>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuoteView {
    pub workshop_id: String,
    pub workshop_name: String,
    pub service_type: String,
    pub duration_hours: u32,
    pub estimated_cost: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RequestView {
    pub vehicle_id: String,
    pub workshop_id: String,
    pub service_type: String,
    pub date: NaiveDate,
    pub time: String,
    pub estimated_duration_hours: u32,
    pub estimated_cost: String,
    pub urgency: Urgency,
}

impl From<&BookingRequest> for RequestView {
    fn from(request: &BookingRequest) -> Self {
        Self {
            vehicle_id: request.vehicle_id().to_string(),
            workshop_id: request.workshop_id().to_string(),
            service_type: request.service_type().to_string(),
            date: request.date(),
            time: request.time().to_string(),
            estimated_duration_hours: request.estimated_duration_hours(),
            estimated_cost: format_cost(request.estimated_cost()),
            urgency: request.urgency(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookingView {
    pub id: Uuid,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub request: RequestView,
}

impl From<&ScheduledBooking> for BookingView {
    fn from(booking: &ScheduledBooking) -> Self {
        Self {
            id: booking.id,
            status: booking.status,
            created_at: booking.created_at,
            request: RequestView::from(&booking.request),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlanView {
    pub workshop_name: String,
    pub score: f64,
    pub request: RequestView,
}

impl From<&PlannedBooking> for PlanView {
    fn from(planned: &PlannedBooking) -> Self {
        Self {
            workshop_name: planned.workshop_name.clone(),
            score: planned.score,
            request: RequestView::from(&planned.request),
        }
    }
}
