//! Lengths branded with their unit.
//!
//! `Centimeters` and `Inches` are both plain `f64` at runtime, but one
//! cannot stand in for the other.
//!
//! ```compile_fail
//! use tenet_core::units::{inches, Centimeters};
//!
//! let radius: Centimeters = inches(5.0);
//! ```

use crate::brand::Brand;

#[derive(Debug)]
pub enum CentimetersTag {}

#[derive(Debug)]
pub enum InchesTag {}

pub type Centimeters = Brand<f64, CentimetersTag>;
pub type Inches = Brand<f64, InchesTag>;

const CENTIMETERS_PER_INCH: f64 = 2.54;

/// Brand a unitless number as centimeters. Any number is accepted.
pub fn centimeters(unitless: f64) -> Centimeters {
    Brand::new(unitless)
}

/// Brand a unitless number as inches. Any number is accepted.
pub fn inches(unitless: f64) -> Inches {
    Brand::new(unitless)
}

pub fn inches_to_centimeters(length: Inches) -> Centimeters {
    centimeters(*length * CENTIMETERS_PER_INCH)
}

pub fn centimeters_to_inches(length: Centimeters) -> Inches {
    inches(*length / CENTIMETERS_PER_INCH)
}

/// A sphere whose radius is known to be in centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereInCentimeters {
    pub radius: Centimeters,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_round_trip() {
        let five = inches(5.0);
        let cm = inches_to_centimeters(five);
        assert!((*cm - 12.7).abs() < 1e-12);
        assert!((*centimeters_to_inches(cm) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn brands_are_plain_numbers_at_runtime() {
        assert_eq!(core::mem::size_of::<Centimeters>(), core::mem::size_of::<f64>());
        let sphere = SphereInCentimeters {
            radius: centimeters(100.0),
        };
        assert_eq!(sphere.radius.into_inner(), 100.0);
    }
}
