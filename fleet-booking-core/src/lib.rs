//! Core domain models for fleet maintenance booking
//!
//! This crate resolves which workshop time slots can be booked for a
//! maintenance service on a given date, estimates what a booking costs and
//! assembles validated booking requests. Catalogs are immutable snapshots
//! shared through `Arc`, so every type here can be used from many threads
//! without locking.

pub mod availability;
pub mod booking;
pub mod catalog;
pub mod error;
pub mod lifecycle;
pub mod planner;
pub mod pricing;
pub mod service;
pub mod slot;
pub mod workshop;

pub use error::{Error, Result, SelectionField};

/// Common result type used throughout the core library
pub type CoreResult<T> = std::result::Result<T, Error>;
