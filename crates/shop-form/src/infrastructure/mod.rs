//! Infrastructure layer for the shop registration form.
//!
//! Contains the concrete collaborators the application layer is wired to:
//! the catalog-backed availability lookup, TOML configuration storage, and
//! the line-based console driver used by the `shop-form` binary.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `shop_core`, but MUST NOT be imported by the `application` or domain
//! layers.

pub mod availability;
pub mod console;
pub mod storage;
