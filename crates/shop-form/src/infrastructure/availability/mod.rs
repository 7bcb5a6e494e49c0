//! Availability lookups.
//!
//! The form engine only knows the
//! [`AvailabilityChecker`](crate::application::validate_form::AvailabilityChecker)
//! trait.  This module provides the implementation used by the console
//! driver: an in-memory lookup against the configured list of taken names.
//! A networked implementation would live next to it.

pub mod catalog;

pub use catalog::CatalogAvailabilityChecker;
