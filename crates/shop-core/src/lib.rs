//! # shop-core
//!
//! Shared library for the shop registration form containing the domain
//! entities and the synchronous validation rules applied to user input.
//!
//! This crate has zero dependencies on async runtimes, UI frameworks, or
//! network clients.  The form engine in `shop-form` builds on top of it.
//!
//! # Architecture overview (for beginners)
//!
//! Registering a shop means filling in four fields: a shop name, a domain
//! name, a city and a postal code.  Every keystroke is validated and some
//! fields derive values from others (the domain name is suggested from the
//! shop name, picking a new city clears the postal code).
//!
//! This crate (`shop-core`) is the pure foundation.  It defines:
//!
//! - **`domain`** – The value types: [`City`], the [`ShopError`] taxonomy of
//!   user-facing validation failures, and the postal-code sentinel.
//!
//! - **`rules`** – The local shop-name rules (empty, emoji, surrounding
//!   whitespace, minimum length) evaluated in a fixed precedence order, plus
//!   the domain-name suggestion.  Anything that needs a remote lookup lives
//!   in `shop-form` behind a trait.

pub mod domain;
pub mod rules;

// Re-export the most-used types at the crate root so callers can write
// `shop_core::City` instead of `shop_core::domain::city::City`.
pub use domain::city::{default_catalog, City, CityId};
pub use domain::error::ShopError;
pub use domain::POSTAL_CODE_PLACEHOLDER;
pub use rules::shop_name::{suggest_domain_name, validate_shop_name, MIN_SHOP_NAME_CHARS};
