#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, format, string::String, string::ToString, vec, vec::Vec};

pub mod brand;
pub mod matching;
pub mod outcome;
pub mod pick;
pub mod shapes;
pub mod span;
pub mod transform;
pub mod units;
pub mod validate;

pub use brand::Brand;
pub use matching::{Branch, Fallback, Match, Probe, match_first, otherwise, when, when_some};
pub use outcome::{AggregateFailure, Batch, Failure, Outcome, divide, divide_all, is_failure, is_success};
pub use pick::{Keyed, Picked, pick};
pub use span::Span;
pub use validate::{
    EmailOptions, EmailRule, ValidEmailAddress, ValidInteger, ValidationError,
    validate_email_address, validate_email_address_with, validate_integer,
};
