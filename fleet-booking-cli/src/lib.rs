//! Command line front end for fleet maintenance booking
//!
//! Loads configuration and a catalog snapshot, then answers availability,
//! pricing, booking and planning queries with JSON on stdout.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

#[cfg(test)]
mod config_tests;

pub use error::{Error, Result};

/// Re-export the domain crate for convenience
pub use fleet_booking_core as core;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}
