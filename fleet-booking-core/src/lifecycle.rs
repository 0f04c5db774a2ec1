//! Caller-side booking lifecycle
//!
//! Once a [`BookingRequest`] has been handed over, the booking collaborator
//! tracks it as a [`ScheduledBooking`]. Status changes are validated here so
//! every collaborator applies the same transitions; storing the record is
//! still the collaborator's job.

use crate::availability::AvailabilityResolver;
use crate::booking::{BookingRequest, BookingRequestBuilder};
use crate::slot::TimeSlot;
use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Scheduled,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScheduledBooking {
    pub id: Uuid,
    pub request: BookingRequest,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub cancellation_reason: Option<String>,
}

impl ScheduledBooking {
    /// Take ownership of a freshly built request
    pub fn schedule(request: BookingRequest) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            request,
            status: BookingStatus::Scheduled,
            created_at: now,
            updated_at: now,
            cancellation_reason: None,
        }
    }

    pub fn confirm(&mut self) -> Result<()> {
        if self.status != BookingStatus::Scheduled {
            return Err(Error::state_transition(format!(
                "Cannot confirm a booking that is {:?}",
                self.status
            )));
        }
        self.set_status(BookingStatus::Confirmed);
        Ok(())
    }

    pub fn start(&mut self) -> Result<()> {
        if !matches!(
            self.status,
            BookingStatus::Scheduled | BookingStatus::Confirmed
        ) {
            return Err(Error::state_transition(format!(
                "Cannot start a booking that is {:?}",
                self.status
            )));
        }
        self.set_status(BookingStatus::InProgress);
        Ok(())
    }

    pub fn complete(&mut self) -> Result<()> {
        if self.status != BookingStatus::InProgress {
            return Err(Error::state_transition(
                "Only bookings in progress can be completed",
            ));
        }
        self.set_status(BookingStatus::Completed);
        Ok(())
    }

    pub fn cancel<S: Into<String>>(&mut self, reason: S) -> Result<()> {
        if self.status.is_terminal() {
            return Err(Error::state_transition(format!(
                "Cannot cancel a booking that is {:?}",
                self.status
            )));
        }
        self.cancellation_reason = Some(reason.into());
        self.set_status(BookingStatus::Cancelled);
        Ok(())
    }

    /// Move the booking to another date and time
    ///
    /// The new slot must be available for the booked service on the new
    /// date; the booking returns to `Scheduled`.
    pub fn reschedule(
        &mut self,
        resolver: &AvailabilityResolver,
        date: NaiveDate,
        time: &str,
    ) -> Result<()> {
        if !matches!(
            self.status,
            BookingStatus::Scheduled | BookingStatus::Confirmed
        ) {
            return Err(Error::state_transition(format!(
                "Cannot reschedule a booking that is {:?}",
                self.status
            )));
        }

        let request = BookingRequestBuilder::new(resolver.shared_catalog())
            .vehicle(self.request.vehicle_id())
            .workshop_id(self.request.workshop_id())
            .service_type(self.request.service_type())
            .date(date)
            .time(time)
            .urgency(self.request.urgency())
            .build()?;

        self.request = request;
        self.set_status(BookingStatus::Scheduled);
        Ok(())
    }

    pub fn slot(&self) -> (NaiveDate, &TimeSlot) {
        (self.request.date(), self.request.time())
    }

    fn set_status(&mut self, status: BookingStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}
