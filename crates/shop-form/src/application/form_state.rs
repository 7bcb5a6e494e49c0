//! State held by one form session.

use serde::Serialize;
use shop_core::{City, ShopError, POSTAL_CODE_PLACEHOLDER};

/// Everything the engine knows about the form.
///
/// Created empty with the engine and mutated only by engine operations.
/// Callers get a read-only view through
/// [`FormValidationEngine::state`](super::validate_form::FormValidationEngine::state).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormState {
    /// Raw shop-name text, exactly as typed.
    pub shop_name: String,
    /// Current shop-name failure, if any.
    pub shop_name_error: Option<ShopError>,
    /// `true` while the availability lookup for the current name is in flight.
    pub shop_name_check_pending: bool,
    /// Domain name as typed, or as suggested from the shop name.
    pub domain_name: String,
    /// Message from the latest applied domain check.
    pub domain_name_error: Option<String>,
    /// `true` while the lookup for the current domain name is in flight.
    pub domain_name_check_pending: bool,
    /// `true` once a lookup result for the current domain name was applied.
    /// A suggestion from the shop name starts out unchecked.
    pub domain_name_checked: bool,
    /// Last confirmed city.
    pub selected_city: Option<City>,
    /// City failure; only ever [`ShopError::Empty`].
    pub city_error: Option<ShopError>,
    /// Chosen postal code; `None` is displayed as the placeholder.
    pub postal_code: Option<String>,
    /// Whether the postal-code error label is hidden.
    pub postal_error_hidden: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            shop_name: String::new(),
            shop_name_error: None,
            shop_name_check_pending: false,
            domain_name: String::new(),
            domain_name_error: None,
            domain_name_check_pending: false,
            domain_name_checked: false,
            selected_city: None,
            city_error: None,
            postal_code: None,
            postal_error_hidden: true,
        }
    }
}

impl FormState {
    /// Text shown in the postal-code field.
    pub fn postal_code_display(&self) -> &str {
        self.postal_code.as_deref().unwrap_or(POSTAL_CODE_PLACEHOLDER)
    }

    /// Returns `true` when every field holds a usable, settled value.
    ///
    /// This is a query only; submitting the form is not the engine's job.
    pub fn is_complete(&self) -> bool {
        let shop_ok = !self.shop_name.is_empty()
            && self.shop_name_error.is_none()
            && !self.shop_name_check_pending;
        let domain_ok = !self.domain_name.is_empty()
            && self.domain_name_error.is_none()
            && !self.domain_name_check_pending
            && self.domain_name_checked;
        let city_ok = self.selected_city.is_some() && self.city_error.is_none();
        let postal_ok = self.postal_code.is_some();
        shop_ok && domain_ok && city_ok && postal_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_state() -> FormState {
        FormState {
            shop_name: "asdf".to_string(),
            domain_name: "asdf-4".to_string(),
            domain_name_checked: true,
            selected_city: Some(City::jakarta()),
            postal_code: Some("4444".to_string()),
            ..FormState::default()
        }
    }

    #[test]
    fn test_default_state_is_empty_and_incomplete() {
        let state = FormState::default();
        assert!(state.shop_name.is_empty());
        assert!(state.selected_city.is_none());
        assert!(state.postal_error_hidden);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_unset_postal_code_displays_placeholder() {
        let state = FormState::default();
        assert_eq!(state.postal_code_display(), "Postal Code");
    }

    #[test]
    fn test_filled_state_is_complete() {
        assert!(complete_state().is_complete());
    }

    #[test]
    fn test_pending_shop_check_blocks_completion() {
        let state = FormState {
            shop_name_check_pending: true,
            ..complete_state()
        };
        assert!(!state.is_complete());
    }

    #[test]
    fn test_domain_error_blocks_completion() {
        let state = FormState {
            domain_name_error: Some(ShopError::InvalidDomain.message()),
            ..complete_state()
        };
        assert!(!state.is_complete());
    }

    #[test]
    fn test_unchecked_domain_blocks_completion() {
        let state = FormState {
            domain_name_checked: false,
            ..complete_state()
        };
        assert!(!state.is_complete());
    }

    #[test]
    fn test_missing_postal_code_blocks_completion() {
        let state = FormState {
            postal_code: None,
            ..complete_state()
        };
        assert!(!state.is_complete());
    }
}
