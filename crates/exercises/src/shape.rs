//! A sum type with functions defined by pattern matching.
use std::f32::consts::PI;

/// A closed set of plane shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle(f32),
    Rect(f32, f32),
    Square(f32),
}

impl Shape {
    pub fn area(&self) -> f32 {
        match *self {
            Shape::Circle(r) => PI * r * r,
            Shape::Rect(w, h) => w * h,
            Shape::Square(s) => s * s,
        }
    }

    /// Circumference.
    pub fn circ(&self) -> f32 {
        match *self {
            Shape::Circle(r) => 2.0 * PI * r,
            Shape::Rect(w, h) => 2.0 * (w + h),
            Shape::Square(s) => 4.0 * s,
        }
    }
}
