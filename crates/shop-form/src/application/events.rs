//! Inputs accepted by the form engine and the events it publishes.
//!
//! The presentation layer pushes a [`FormInput`] for every user action and
//! renders each [`FormEvent`] it receives.  Events arrive on one ordered
//! channel; each variant corresponds to one field property (value, error
//! message, error visibility).

use serde::Serialize;
use shop_core::City;

/// A user action on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormInput {
    /// The shop-name text field changed.
    ShopNameChanged(String),
    /// The domain-name text field changed.
    DomainNameChanged(String),
    /// The city picker closed; `None` means it was cancelled.
    CitySelected(Option<City>),
    /// The user tapped the postal-code field to open its picker.
    PostalCodeRequested,
    /// The postal-code picker closed; `None` means no code was chosen.
    PostalCodeChanged(Option<String>),
}

/// An update for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum FormEvent {
    /// Text to show in the shop-name field.
    ShopNameValue(String),
    /// Message to show under the shop-name field.
    ShopNameError(String),
    /// Whether the shop-name error label is hidden.
    ShopNameErrorHidden(bool),
    /// Text to show in the domain-name field.
    DomainNameValue(String),
    /// Result of the latest domain check; `None` means valid.
    DomainNameError(Option<String>),
    /// Whether the domain-name error label is hidden.
    DomainErrorHidden(bool),
    /// The confirmed city.
    City(City),
    /// Message to show under the city field.
    CityError(String),
    /// Whether the city error label is hidden.
    CityErrorHidden(bool),
    /// Text to show in the postal-code field.
    PostalCode(String),
    /// Whether the postal-code error label is hidden.
    PostalErrorHidden(bool),
}
