//! Domain entities for the shop registration form.
//!
//! This module contains plain value types with no infrastructure
//! dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! The innermost layer of the application is the **domain**.  Domain code
//! holds the vocabulary of the problem (a city, a validation failure) and
//! never imports async runtimes, HTTP clients or UI toolkits.  Outer layers
//! depend on the domain; the domain depends on nothing but `std` and `serde`.

/// City value type and the built-in catalog.
pub mod city;

/// User-facing validation failures.
pub mod error;

/// Literal shown in place of a postal code when none has been chosen.
///
/// The form treats this string as "unset": selecting a new city resets the
/// postal code output to exactly this value.
pub const POSTAL_CODE_PLACEHOLDER: &str = "Postal Code";
