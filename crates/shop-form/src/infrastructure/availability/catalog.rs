//! In-memory availability lookup backed by the configured catalog.
//!
//! Rules applied by [`CatalogAvailabilityChecker`]:
//!
//! - A shop name is unavailable when it equals a taken name, ignoring ASCII
//!   case.
//! - A domain name is rejected, in this order, when it is shorter than the
//!   minimum length, contains anything other than ASCII letters, digits and
//!   `-`, or is a taken name (optionally followed by a `-<suffix>`).
//!
//! An optional delay is awaited before every answer to imitate a remote
//! service.

use std::time::Duration;

use async_trait::async_trait;
use shop_core::{ShopError, MIN_SHOP_NAME_CHARS};
use tracing::debug;

use crate::application::validate_form::AvailabilityChecker;
use crate::infrastructure::storage::config::AppConfig;

/// Availability lookup against a fixed list of taken names.
#[derive(Debug, Clone)]
pub struct CatalogAvailabilityChecker {
    /// Taken names, lowercased once at construction.
    taken: Vec<String>,
    min_domain_chars: usize,
    delay: Duration,
}

impl CatalogAvailabilityChecker {
    /// Creates a checker for the given taken names with no artificial delay.
    pub fn new<I, S>(taken_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            taken: taken_names
                .into_iter()
                .map(|name| name.as_ref().to_ascii_lowercase())
                .collect(),
            min_domain_chars: MIN_SHOP_NAME_CHARS,
            delay: Duration::ZERO,
        }
    }

    /// Builds a checker from the `[catalog]`, `[form]` and `[checker]` sections.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.catalog.taken_shop_names)
            .with_min_domain_chars(config.form.min_shop_name_chars)
            .with_delay(config.checker.lookup_delay())
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_min_domain_chars(mut self, min_chars: usize) -> Self {
        self.min_domain_chars = min_chars;
        self
    }

    fn is_taken(&self, name: &str) -> bool {
        let name = name.to_ascii_lowercase();
        self.taken.iter().any(|taken| *taken == name)
    }

    /// A domain collides with `taken` or `taken-<anything>`.
    fn is_taken_domain(&self, domain: &str) -> bool {
        let domain = domain.to_ascii_lowercase();
        self.taken.iter().any(|taken| {
            domain == *taken
                || domain
                    .strip_prefix(taken.as_str())
                    .is_some_and(|rest| rest.starts_with('-'))
        })
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl AvailabilityChecker for CatalogAvailabilityChecker {
    async fn check_shop_name_availability(&self, name: &str) -> bool {
        self.simulate_latency().await;
        let available = !self.is_taken(name);
        debug!(name, available, "shop name lookup");
        available
    }

    async fn check_domain_name_availability(&self, name: &str) -> Option<String> {
        self.simulate_latency().await;
        let verdict = if name.chars().count() < self.min_domain_chars {
            Some(ShopError::TooShort)
        } else if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            Some(ShopError::InvalidDomain)
        } else if self.is_taken_domain(name) {
            Some(ShopError::InvalidDomain)
        } else {
            None
        };
        debug!(name, ?verdict, "domain name lookup");
        verdict.map(ShopError::message)
    }
}
