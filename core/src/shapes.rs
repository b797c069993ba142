//! Solids described by their dimensions.

use crate::matching::{match_first, otherwise, when_some};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangularCuboid {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    RectangularCuboid(RectangularCuboid),
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<RectangularCuboid> for Shape {
    fn from(cuboid: RectangularCuboid) -> Self {
        Shape::RectangularCuboid(cuboid)
    }
}

impl Shape {
    pub fn sphere(radius: f64) -> Self {
        Shape::Sphere(Sphere { radius })
    }

    pub fn cuboid(length: f64, width: f64, height: f64) -> Self {
        Shape::RectangularCuboid(RectangularCuboid {
            length,
            width,
            height,
        })
    }

    pub fn as_sphere(&self) -> Option<&Sphere> {
        match self {
            Shape::Sphere(sphere) => Some(sphere),
            Shape::RectangularCuboid(_) => None,
        }
    }

    pub fn as_cuboid(&self) -> Option<&RectangularCuboid> {
        match self {
            Shape::RectangularCuboid(cuboid) => Some(cuboid),
            Shape::Sphere(_) => None,
        }
    }

    /// Extent across: the diameter of a sphere, the width of a cuboid.
    pub fn width(&self) -> f64 {
        match self {
            Shape::Sphere(sphere) => sphere.radius * 2.0,
            Shape::RectangularCuboid(cuboid) => cuboid.width,
        }
    }

    /// Largest extent along any axis, or `-1.0` when no case applies.
    pub fn max_dimension(&self) -> f64 {
        match_first(
            [
                when_some(self, Shape::as_sphere, |sphere| sphere.radius * 2.0),
                when_some(self, Shape::as_cuboid, |cuboid| {
                    cuboid.length.max(cuboid.width).max(cuboid.height)
                }),
            ],
            otherwise(self, |_| -1.0),
        )
    }

    /// The same shape with every dimension scaled by two.
    pub fn doubled(&self) -> Shape {
        match *self {
            Shape::Sphere(Sphere { radius }) => Shape::sphere(radius * 2.0),
            Shape::RectangularCuboid(RectangularCuboid {
                length,
                width,
                height,
            }) => Shape::cuboid(length * 2.0, width * 2.0, height * 2.0),
        }
    }
}

pub fn shape_is_sphere(shape: &Shape) -> bool {
    shape.as_sphere().is_some()
}

pub fn shape_is_cuboid(shape: &Shape) -> bool {
    shape.as_cuboid().is_some()
}
