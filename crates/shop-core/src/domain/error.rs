//! Validation failures shown next to form fields.
//!
//! These are not Rust errors in the "something went wrong" sense: they are
//! the messages the user sees while typing.  Deriving [`thiserror::Error`]
//! gives every variant its fixed message through `Display`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A user-facing validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShopError {
    /// The text contains at least one emoji scalar.
    #[error("Should not contain emoji")]
    ContainsEmoji,

    /// The text has fewer characters than the configured minimum.
    #[error("Should not less than 3 characters")]
    TooShort,

    /// The availability lookup reported the shop name as taken.
    #[error("Shop name not available")]
    NameUnavailable,

    /// The text starts or ends with a whitespace character.
    #[error("Shop name should not end with whitespace")]
    LeadingOrTrailingWhitespace,

    /// The field is required but empty.
    #[error("This field should not empty")]
    Empty,

    /// The domain name cannot be used.
    #[error("Domain Name is not valid, please change the domain name")]
    InvalidDomain,
}

impl ShopError {
    /// Returns the message displayed under the offending field.
    pub fn message(self) -> String {
        self.to_string()
    }
}
