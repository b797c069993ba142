//! Tagged success/failure values for fallible computations.
//!
//! An [`Outcome`] is returned instead of propagated: callers inspect the tag
//! and branch, so one failing item never interrupts work on the others.
//! Contract violations (see [`crate::validate`]) use `Result` and `?` instead.
//!
//! ## Example
//!
//! ```
//! use tenet_core::outcome::{divide, divide_all};
//!
//! assert_eq!(divide(1.0, 2.0).into_success(), Some(0.5));
//! assert!(divide(1.0, 0.0).is_failure());
//!
//! let batch = divide_all(&[(0.0, 1.0), (1.0, 0.0), (2.0, 4.0)]);
//! assert_eq!(batch.successes().count(), 2);
//! assert!(batch.into_result().is_err());
//! ```

mod batch;
mod failure;


pub use batch::{AggregateFailure, Batch, divide_all};
pub use failure::Failure;

use crate::format;

/// Either the value of a successful computation or a description of why it failed.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Outcome<T> {
    Success(T),
    Failure(Failure),
}

impl<T> Outcome<T> {
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    pub fn failure(message: impl Into<crate::String>) -> Self {
        Outcome::Failure(Failure::new(message))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Narrow to the success value.
    pub fn as_success(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Narrow to the failure.
    pub fn as_failure(&self) -> Option<&Failure> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => Some(failure),
        }
    }

    pub fn into_success(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    pub fn into_failure(self) -> Option<Failure> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => Some(failure),
        }
    }

    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(failure) => Outcome::Failure(failure.clone()),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }

    pub fn map_failure(self, f: impl FnOnce(Failure) -> Failure) -> Outcome<T> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(failure) => Outcome::Failure(f(failure)),
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }

    pub fn or_else(self, f: impl FnOnce(Failure) -> Outcome<T>) -> Outcome<T> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(failure) => f(failure),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    pub fn unwrap_or_else(self, f: impl FnOnce(&Failure) -> T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(failure) => f(&failure),
        }
    }

    /// Leave the tagged world, e.g. to propagate with `?`.
    pub fn into_result(self) -> Result<T, Failure> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(failure) => Err(failure),
        }
    }
}

impl<T> From<Result<T, Failure>> for Outcome<T> {
    fn from(result: Result<T, Failure>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(failure) => Outcome::Failure(failure),
        }
    }
}

pub fn is_success<T>(outcome: &Outcome<T>) -> bool {
    outcome.is_success()
}

pub fn is_failure<T>(outcome: &Outcome<T>) -> bool {
    outcome.is_failure()
}

/// Divide two numbers, failing when the quotient is not a finite number.
///
/// `1 / 0` (infinite) and `0 / 0` (NaN) are both failures.
pub fn divide(dividend: f64, divisor: f64) -> Outcome<f64> {
    let quotient = dividend / divisor;

    if !quotient.is_finite() {
        tracing::debug!(dividend, divisor, "division produced a non-finite quotient");
        return Outcome::failure(format!(
            "The result of {} / {} is not a finite number",
            dividend, divisor
        ));
    }

    Outcome::Success(quotient)
}
