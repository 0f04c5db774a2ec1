//! Maintenance service types

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A categorized maintenance operation with fixed duration and base price
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceType {
    pub id: String,
    pub name: String,
    pub duration_hours: u32,
    pub base_cost: f64,
}

impl ServiceType {
    /// Create a new service type with validation
    pub fn new<S1: Into<String>, S2: Into<String>>(
        id: S1,
        name: S2,
        duration_hours: u32,
        base_cost: f64,
    ) -> Result<Self> {
        let service = Self {
            id: id.into(),
            name: name.into(),
            duration_hours,
            base_cost,
        };
        service.validate()?;
        Ok(service)
    }

    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::validation("Service type id cannot be empty"));
        }
        if self.duration_hours == 0 {
            return Err(Error::validation(format!(
                "Service type {} must take at least one hour",
                self.id
            )));
        }
        if !self.base_cost.is_finite() || self.base_cost <= 0.0 {
            return Err(Error::validation(format!(
                "Service type {} base cost must be positive, got {}",
                self.id, self.base_cost
            )));
        }
        Ok(())
    }
}
