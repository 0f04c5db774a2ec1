//! Command handlers shared by every subcommand

use crate::output::{
    format_cost, BookingView, PlanView, QuoteView, SlotsView, WorkshopSummary, WorkshopsView,
};
use crate::Result;
use chrono::NaiveDate;
use fleet_booking_core::availability::{AvailabilityResolver, WorkshopDayAvailability};
use fleet_booking_core::booking::{BookingRequestBuilder, Urgency};
use fleet_booking_core::catalog::CatalogSnapshot;
use fleet_booking_core::lifecycle::ScheduledBooking;
use fleet_booking_core::planner::{MaintenancePlanner, MaintenanceTask, PlannerSettings};
use fleet_booking_core::pricing::BookingPriceCalculator;
use fleet_booking_core::Error as CoreError;
use std::sync::Arc;
use tracing::info;

/// A booking selection as entered on the command line
#[derive(Debug, Clone)]
pub struct BookingInput {
    pub vehicle_id: String,
    pub workshop_id: String,
    pub service_type: String,
    pub date: NaiveDate,
    pub time: String,
    pub urgency: Urgency,
}

/// Components built once from the catalog snapshot
#[derive(Debug, Clone)]
pub struct CommandContext {
    catalog: Arc<CatalogSnapshot>,
    resolver: AvailabilityResolver,
    pricing: BookingPriceCalculator,
    planner: MaintenancePlanner,
}

impl CommandContext {
    pub fn new(catalog: Arc<CatalogSnapshot>, settings: PlannerSettings) -> Self {
        Self {
            resolver: AvailabilityResolver::new(catalog.clone()),
            pricing: BookingPriceCalculator::new(catalog.clone()),
            planner: MaintenancePlanner::new(catalog.clone(), settings),
            catalog,
        }
    }

    pub fn slots(&self, date: NaiveDate, service_type: &str) -> Result<SlotsView> {
        self.catalog.services.require(service_type)?;
        let slots = self
            .resolver
            .available_slots(date, service_type)
            .into_iter()
            .map(String::from)
            .collect();

        Ok(SlotsView {
            date,
            service_type: service_type.to_string(),
            slots,
        })
    }

    pub fn workshops(&self, service_type: &str) -> Result<WorkshopsView> {
        self.catalog.services.require(service_type)?;
        let workshops = self
            .resolver
            .workshops_offering(service_type)
            .into_iter()
            .map(WorkshopSummary::from)
            .collect();

        Ok(WorkshopsView {
            service_type: service_type.to_string(),
            workshops,
        })
    }

    pub fn quote(&self, service_type: &str, workshop_id: &str) -> Result<QuoteView> {
        let service = self.catalog.services.require(service_type)?;
        let workshop = self
            .catalog
            .workshops
            .get(workshop_id)
            .ok_or_else(|| CoreError::unknown_workshop(workshop_id))?;
        if !workshop.supports(service_type) {
            return Err(CoreError::UnsupportedService {
                workshop_id: workshop.id.clone(),
                service_type: service.id.clone(),
            }
            .into());
        }
        let cost = self.pricing.estimated_cost(service_type, workshop)?;

        Ok(QuoteView {
            workshop_id: workshop.id.clone(),
            workshop_name: workshop.name.clone(),
            service_type: service.id.clone(),
            duration_hours: service.duration_hours,
            estimated_cost: format_cost(cost),
        })
    }

    pub fn workshop_day(&self, workshop_id: &str, date: NaiveDate) -> Result<WorkshopDayAvailability> {
        Ok(self.resolver.workshop_availability(workshop_id, date)?)
    }

    pub fn book(&self, input: BookingInput) -> Result<BookingView> {
        let request = BookingRequestBuilder::with_components(self.resolver.clone(), self.pricing.clone())
            .vehicle(input.vehicle_id)
            .workshop_id(input.workshop_id)
            .service_type(input.service_type)
            .date(input.date)
            .time(input.time)
            .urgency(input.urgency)
            .build()?;

        let booking = ScheduledBooking::schedule(request);
        info!(
            booking_id = %booking.id,
            vehicle = %booking.request.vehicle_id(),
            workshop = %booking.request.workshop_id(),
            cost = %format_cost(booking.request.estimated_cost()),
            "Booking scheduled"
        );
        Ok(BookingView::from(&booking))
    }

    /// Best slot for the task, or `None` when nothing is open in the horizon
    pub fn plan(&self, task: &MaintenanceTask, from: NaiveDate) -> Result<Option<PlanView>> {
        let planned = self.planner.plan(task, from)?;
        Ok(planned.as_ref().map(PlanView::from))
    }
}
