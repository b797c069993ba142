//! Tenet - typed outcomes, branded values and lazy matching
//!
//! # Overview
//!
//! Tenet collects small building blocks for making invalid states hard to
//! represent:
//!
//! - [`Outcome`]: success or failure as a value, inspected by the caller
//! - [`Brand`]: a value tagged at compile time with the check it passed,
//!   e.g. [`ValidInteger`] and [`ValidEmailAddress`]
//! - [`pick`]: a typed projection of selected keys from a keyed record
//! - [`match_first`]: first-match evaluation over lazy branches with a
//!   mandatory default
//!
//! # Quick Start
//!
//! ```
//! use tenet::{Outcome, divide, validate_email_address};
//!
//! match divide(1.0, 4.0) {
//!     Outcome::Success(q) => assert_eq!(q, 0.25),
//!     Outcome::Failure(f) => panic!("{}", f),
//! }
//!
//! let address = validate_email_address("abc@example.com").unwrap();
//! assert_eq!(address.domain(), "example.com");
//! ```
//!
//! # Errors
//!
//! Validators return [`ValidationError`]; [`render_error`] and friends print
//! it with the rejected input and the offending span highlighted.

// Re-export public API from tenet_core
pub use tenet_core::brand::Brand;
pub use tenet_core::matching::{
    Branch, Fallback, Match, Probe, match_first, otherwise, when, when_some,
};
pub use tenet_core::outcome::{
    AggregateFailure, Batch, Failure, Outcome, divide, divide_all, is_failure, is_success,
};
pub use tenet_core::pick::{Keyed, Picked, pick};
pub use tenet_core::shapes::{
    RectangularCuboid, Shape, Sphere, shape_is_cuboid, shape_is_sphere,
};
pub use tenet_core::span::Span;
pub use tenet_core::transform::{Pipeline, apply_transforms};
pub use tenet_core::units::{Centimeters, Inches, centimeters, inches};
pub use tenet_core::validate::{
    EmailOptions, EmailRule, ValidEmailAddress, ValidInteger, ValidationError,
    validate_email_address, validate_email_address_with, validate_integer,
};
pub use tenet_core::keyed_record;

// Modules for advanced usage
pub use tenet_core::{matching, outcome, shapes, transform, units, validate};

mod error_renderer;
pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
