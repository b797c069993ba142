//! Validators producing branded values.
//!
//! Each validator is the only way to construct its brand. Passing a value
//! that breaks the validator's rule is a caller error, reported as a
//! [`ValidationError`] meant to be propagated with `?`. Expected,
//! recoverable failures use [`Outcome`](crate::outcome::Outcome) instead.
//!
//! ```
//! use tenet_core::validate::{validate_email_address, validate_integer};
//!
//! let address = validate_email_address("abc@example.com").unwrap();
//! assert_eq!(address.as_str(), "abc@example.com");
//!
//! let err = validate_integer(5.5).unwrap_err();
//! assert_eq!(err.to_string(), "The number 5.5 is not an integer");
//! ```

mod email;
mod error;
mod options;

#[cfg(test)]
mod email_test;



pub use error::{EmailRule, ValidationError};
pub use options::EmailOptions;

use crate::brand::Brand;
use crate::{String, ToString};

#[derive(Debug)]
pub enum IntegerTag {}

#[derive(Debug)]
pub enum EmailAddressTag {}

/// A number known to have no fractional part.
pub type ValidInteger = Brand<f64, IntegerTag>;

/// A string known to be an RFC 5321 mailbox.
pub type ValidEmailAddress = Brand<String, EmailAddressTag>;

impl ValidEmailAddress {
    pub fn as_str(&self) -> &str {
        self.get()
    }

    /// Everything before the last `@`.
    pub fn local_part(&self) -> &str {
        self.split_parts().0
    }

    /// Everything after the last `@`: a domain or an address literal.
    pub fn domain(&self) -> &str {
        self.split_parts().1
    }

    // Quoted local parts and general address literals may both contain `@`,
    // but an address literal never contains `[`.
    fn split_parts(&self) -> (&str, &str) {
        let address = self.get().as_str();
        let at = if address.ends_with(']') {
            address.rfind('[').and_then(|open| open.checked_sub(1))
        } else {
            address.rfind('@')
        };
        match at {
            Some(at) => (&address[..at], &address[at + 1..]),
            None => (address, ""),
        }
    }
}

impl ValidInteger {
    /// The value as an `i64`, when it fits.
    pub fn to_i64(&self) -> Option<i64> {
        let value = *self.get();
        if value >= -(I64_BOUND) && value < I64_BOUND {
            Some(value as i64)
        } else {
            None
        }
    }
}

// 2^63: the first magnitude outside `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

// 2^52: every finite f64 at least this large in magnitude is whole.
const WHOLE_BEYOND: f64 = 4_503_599_627_370_496.0;

fn is_integer(value: f64) -> bool {
    if !value.is_finite() {
        return false;
    }
    if value >= WHOLE_BEYOND || value <= -WHOLE_BEYOND {
        return true;
    }
    (value as i64) as f64 == value
}

/// Brand `value` as an integer, or fail when it is fractional or not finite.
pub fn validate_integer(value: f64) -> Result<ValidInteger, ValidationError> {
    if is_integer(value) {
        tracing::trace!(value, "integer accepted");
        return Ok(Brand::new(value));
    }
    tracing::debug!(value, "integer rejected");
    Err(ValidationError::NotAnInteger { value })
}

/// Brand `value` as an email address using the RFC 5321 limits.
pub fn validate_email_address(value: &str) -> Result<ValidEmailAddress, ValidationError> {
    validate_email_address_with(value, &EmailOptions::default())
}

/// Brand `value` as an email address, with custom limits.
pub fn validate_email_address_with(
    value: &str,
    options: &EmailOptions,
) -> Result<ValidEmailAddress, ValidationError> {
    match email::check_mailbox(value, options) {
        Ok(()) => {
            tracing::trace!(address = value, "email address accepted");
            Ok(Brand::new(value.to_string()))
        }
        Err(rule) => {
            tracing::debug!(address = value, %rule, "email address rejected");
            Err(ValidationError::NotAnEmailAddress {
                address: value.to_string(),
                rule,
            })
        }
    }
}
