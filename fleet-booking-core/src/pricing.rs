//! Booking cost estimation
//!
//! Costs are returned unrounded in the catalog's currency unit; rounding is a
//! presentation concern.

use crate::catalog::CatalogSnapshot;
use crate::workshop::Workshop;
use crate::Result;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct BookingPriceCalculator {
    catalog: Arc<CatalogSnapshot>,
}

impl BookingPriceCalculator {
    pub fn new(catalog: Arc<CatalogSnapshot>) -> Self {
        Self { catalog }
    }

    /// Base cost of `service_type` scaled by the workshop's cost multiplier
    pub fn estimated_cost(&self, service_type: &str, workshop: &Workshop) -> Result<f64> {
        let service = self.catalog.services.require(service_type)?;
        Ok(service.base_cost * workshop.cost_multiplier)
    }
}
