//! Error types for the booking domain

use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// A selection the caller must provide before a booking request can be built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SelectionField {
    Vehicle,
    Workshop,
    ServiceType,
    Date,
    Time,
}

impl SelectionField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionField::Vehicle => "vehicle",
            SelectionField::Workshop => "workshop",
            SelectionField::ServiceType => "service_type",
            SelectionField::Date => "date",
            SelectionField::Time => "time",
        }
    }
}

impl fmt::Display for SelectionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core error type for booking operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unknown service type: {service_type}")]
    UnknownServiceType { service_type: String },

    #[error("Incomplete selection: missing {}", join_fields(.missing))]
    IncompleteSelection { missing: Vec<SelectionField> },

    #[error("Invalid time slot: {time} is not available on {date} for {service_type}")]
    InvalidTimeSlot {
        date: NaiveDate,
        time: String,
        service_type: String,
    },

    #[error("Unknown workshop: {workshop_id}")]
    UnknownWorkshop { workshop_id: String },

    #[error("Workshop {workshop_id} does not offer {service_type}")]
    UnsupportedService {
        workshop_id: String,
        service_type: String,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("State transition error: {message}")]
    StateTransition { message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

fn join_fields(fields: &[SelectionField]) -> String {
    fields
        .iter()
        .map(SelectionField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl Error {
    /// Create an unknown service type error
    pub fn unknown_service_type<S: Into<String>>(service_type: S) -> Self {
        Self::UnknownServiceType {
            service_type: service_type.into(),
        }
    }

    /// Create an unknown workshop error
    pub fn unknown_workshop<S: Into<String>>(workshop_id: S) -> Self {
        Self::UnknownWorkshop {
            workshop_id: workshop_id.into(),
        }
    }

    /// Create an invalid time slot error
    pub fn invalid_time_slot<S1: Into<String>, S2: Into<String>>(
        date: NaiveDate,
        time: S1,
        service_type: S2,
    ) -> Self {
        Self::InvalidTimeSlot {
            date,
            time: time.into(),
            service_type: service_type.into(),
        }
    }

    /// Create a validation error with a formatted message
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a state transition error
    pub fn state_transition<S: Into<String>>(message: S) -> Self {
        Self::StateTransition {
            message: message.into(),
        }
    }

    /// Check if this error is an incomplete selection
    pub fn is_incomplete_selection(&self) -> bool {
        matches!(self, Error::IncompleteSelection { .. })
    }

    /// Check if this error is an invalid time slot
    pub fn is_invalid_time_slot(&self) -> bool {
        matches!(self, Error::InvalidTimeSlot { .. })
    }

    /// Check if the caller can recover by prompting again
    ///
    /// Incomplete selections and stale time slots are expected while a user is
    /// still choosing; everything else points at bad input or bad catalog data.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::IncompleteSelection { .. } | Error::InvalidTimeSlot { .. }
        )
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Error::UnknownServiceType { .. } => "unknown_service_type",
            Error::IncompleteSelection { .. } => "incomplete_selection",
            Error::InvalidTimeSlot { .. } => "invalid_time_slot",
            Error::UnknownWorkshop { .. } => "unknown_workshop",
            Error::UnsupportedService { .. } => "unsupported_service",
            Error::Validation { .. } => "validation",
            Error::StateTransition { .. } => "state_transition",
            Error::Serialization(_) => "serialization",
        }
    }
}

/// Convenience result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
