//! Application layer of the shop registration form.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (pure rules in `shop-core`) and the infrastructure (config files, lookup
//! services, the console driver).
//!
//! Code in this layer:
//!
//! - **Orchestrates** domain rules to fulfil a user goal (e.g. "tell the
//!   user whether the shop name they just typed can be used").
//! - **Depends on abstractions** such as [`validate_form::AvailabilityChecker`]
//!   rather than concrete lookup services.
//! - **Contains no file system access and no network I/O**.
//!
//! # Sub-modules
//!
//! - **`events`**        – The input and output vocabulary of the form.
//! - **`form_state`**    – The state owned by a single form session.
//! - **`validate_form`** – The engine that turns inputs into events.

pub mod events;
pub mod form_state;
pub mod validate_form;
